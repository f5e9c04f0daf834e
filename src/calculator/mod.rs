use crate::types::input::ScoreInput;
use crate::types::policy::Policy;
use crate::types::result::ScoreResult;

/// Computes the entry score for an already-validated submission.
///
/// Component scores outside `[0, policy.component_max]` are clamped before
/// averaging; valid input passes through unchanged.
pub fn compute(input: &ScoreInput, policy: &Policy) -> ScoreResult {
    let (colloquium_average, colloquium_weighted) = colloquium(&input.colloquium_scores, policy);
    let (seminar_average, seminar_weighted) = seminar(&input.seminar_scores, policy);
    let attendance_score = attendance(input.course_hours, input.absences, policy);
    let independent_score = clamp_component("independent_work", input.independent_work, policy);

    let total_score = (colloquium_weighted + seminar_weighted + attendance_score + independent_score)
        .min(policy.max_total);
    let display_score = input.result_scale.convert(total_score);

    tracing::debug!(
        colloquium_weighted,
        seminar_weighted,
        attendance_score,
        independent_score,
        total_score,
        "computed entry score"
    );

    ScoreResult {
        colloquium_average,
        colloquium_weighted,
        seminar_average,
        seminar_weighted,
        attendance_score,
        independent_score,
        total_score,
        display_score,
        result_scale: input.result_scale,
    }
}

/// Returns `(average, weighted)` for the colloquium scores.
pub fn colloquium(scores: &[f64], policy: &Policy) -> (f64, f64) {
    let average = mean("colloquium", scores, policy);
    (average, average * policy.colloquium_weight)
}

/// Returns `(average, weighted)` for the seminar scores. No seminars averages to 0.
pub fn seminar(scores: &[f64], policy: &Policy) -> (f64, f64) {
    let average = mean("seminar", scores, policy);
    (average, average * policy.seminar_weight)
}

pub fn penalty_per_absence(course_hours: u32, policy: &Policy) -> f64 {
    if course_hours >= policy.hours_threshold {
        policy.penalty_high_hours
    } else {
        policy.penalty_low_hours
    }
}

pub fn attendance(course_hours: u32, absences: u32, policy: &Policy) -> f64 {
    let penalty = penalty_per_absence(course_hours, policy);
    let score = policy.max_attendance - f64::from(absences) * penalty;
    score.clamp(0.0, policy.max_attendance)
}

fn mean(component: &str, scores: &[f64], policy: &Policy) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: f64 = scores
        .iter()
        .map(|score| clamp_component(component, *score, policy))
        .sum();
    sum / scores.len() as f64
}

fn clamp_component(component: &str, value: f64, policy: &Policy) -> f64 {
    // NaN collapses to 0.
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, policy.component_max)
    };
    if clamped != value {
        tracing::warn!(component, value, clamped, "score outside valid range was clamped");
    }
    clamped
}
