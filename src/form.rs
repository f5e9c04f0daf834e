use crate::error::{FieldError, ScoreError};
use crate::types::input::{ResultScale, ScoreInput};
use crate::types::policy::{Policy, COLLOQUIUM_COUNT};

/// Raw, unvalidated submission as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub course_hours: Option<String>,
    pub colloquium: Vec<String>,
    pub seminars: Vec<String>,
    pub independent_work: Option<String>,
    pub absences: Option<String>,
    pub result_scale: Option<String>,
}

impl FormFields {
    /// Validates every field and reports all offending fields together.
    pub fn validate(&self, policy: &Policy) -> Result<ScoreInput, ScoreError> {
        let mut errors = Vec::new();

        let course_hours = match non_blank(self.course_hours.as_deref()) {
            None => {
                errors.push(FieldError::new("course_hours", "is required"));
                None
            }
            Some(raw) => match parse_count(raw, u32::MAX) {
                Ok(hours) if policy.is_valid_hours(hours) => Some(hours),
                Ok(hours) => {
                    errors.push(FieldError::new(
                        "course_hours",
                        format!("{hours} is not one of {}", list_hours(policy)),
                    ));
                    None
                }
                Err(message) => {
                    errors.push(FieldError::new("course_hours", message));
                    None
                }
            },
        };

        let mut colloquium_scores = [0.0; COLLOQUIUM_COUNT];
        if self.colloquium.len() != COLLOQUIUM_COUNT {
            errors.push(FieldError::new(
                "colloquium",
                format!(
                    "expected {COLLOQUIUM_COUNT} scores, got {}",
                    self.colloquium.len()
                ),
            ));
        } else {
            for (index, raw) in self.colloquium.iter().enumerate() {
                match parse_score(raw, policy.component_max) {
                    Ok(score) => colloquium_scores[index] = score,
                    Err(message) => {
                        errors.push(FieldError::new(format!("colloquium[{}]", index + 1), message))
                    }
                }
            }
        }

        let mut seminar_scores = Vec::with_capacity(self.seminars.len());
        if self.seminars.is_empty() || self.seminars.len() > policy.max_seminars {
            errors.push(FieldError::new(
                "seminar",
                format!(
                    "expected between 1 and {} scores, got {}",
                    policy.max_seminars,
                    self.seminars.len()
                ),
            ));
        } else {
            for (index, raw) in self.seminars.iter().enumerate() {
                match parse_score(raw, policy.component_max) {
                    Ok(score) => seminar_scores.push(score),
                    Err(message) => {
                        errors.push(FieldError::new(format!("seminar[{}]", index + 1), message))
                    }
                }
            }
        }

        let independent_work = match non_blank(self.independent_work.as_deref()) {
            None => {
                errors.push(FieldError::new("independent_work", "is required"));
                None
            }
            Some(raw) => match parse_score(raw, policy.component_max) {
                Ok(score) => Some(score),
                Err(message) => {
                    errors.push(FieldError::new("independent_work", message));
                    None
                }
            },
        };

        let absences = match non_blank(self.absences.as_deref()) {
            None => Some(0),
            Some(raw) => match parse_count(raw, policy.max_absences) {
                Ok(count) => Some(count),
                Err(message) => {
                    errors.push(FieldError::new("absences", message));
                    None
                }
            },
        };

        let result_scale = match non_blank(self.result_scale.as_deref()) {
            None => Some(ResultScale::default()),
            Some(raw) => match parse_scale(raw) {
                Ok(scale) => Some(scale),
                Err(message) => {
                    errors.push(FieldError::new("result_scale", message));
                    None
                }
            },
        };

        match (course_hours, independent_work, absences, result_scale) {
            (Some(course_hours), Some(independent_work), Some(absences), Some(result_scale))
                if errors.is_empty() =>
            {
                Ok(ScoreInput {
                    course_hours,
                    colloquium_scores,
                    seminar_scores,
                    independent_work,
                    absences,
                    result_scale,
                })
            }
            _ => Err(ScoreError::InvalidForm(errors)),
        }
    }
}

/// Parses a score in `[0, max]`.
pub fn parse_score(raw: &str, max: f64) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("is required".to_string());
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a number"))?;
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(format!("must be between 0 and {max}"));
    }
    Ok(value)
}

/// Parses a non-negative integer no greater than `max`.
pub fn parse_count(raw: &str, max: u32) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("is required".to_string());
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not a non-negative whole number"))?;
    if value > max {
        return Err(format!("must be at most {max}"));
    }
    Ok(value)
}

pub fn parse_scale(raw: &str) -> Result<ResultScale, String> {
    let trimmed = raw.trim();
    let points: u32 = trimmed
        .parse()
        .map_err(|_| format!("'{trimmed}' is not 50 or 10"))?;
    ResultScale::try_from(points)
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn list_hours(policy: &Policy) -> String {
    policy
        .valid_hours
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
