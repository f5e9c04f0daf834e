use crate::types::result::ScoreResult;

pub fn to_text(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "colloquium:   {:5.2} (average {:.2})\n",
        result.colloquium_weighted, result.colloquium_average
    ));
    output.push_str(&format!(
        "seminar:      {:5.2} (average {:.2})\n",
        result.seminar_weighted, result.seminar_average
    ));
    output.push_str(&format!("attendance:   {:5.2}\n", result.attendance_score));
    output.push_str(&format!("independent:  {:5.2}\n", result.independent_score));
    output.push_str(&format!("{}\n", "-".repeat(32)));
    output.push_str(&format!(
        "entry score:  {:5.2} / {}",
        result.display_score, result.result_scale
    ));
    output
}
