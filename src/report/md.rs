use crate::types::result::ScoreResult;

pub fn to_markdown(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str("# Exam Entry Score\n\n");
    output.push_str("| Component | Average | Score |\n");
    output.push_str("|---|---|---|\n");
    output.push_str(&format!(
        "| Colloquium | {:.2} | {:.2} |\n",
        result.colloquium_average, result.colloquium_weighted
    ));
    output.push_str(&format!(
        "| Seminar | {:.2} | {:.2} |\n",
        result.seminar_average, result.seminar_weighted
    ));
    output.push_str(&format!(
        "| Attendance | - | {:.2} |\n",
        result.attendance_score
    ));
    output.push_str(&format!(
        "| Independent work | - | {:.2} |\n\n",
        result.independent_score
    ));
    output.push_str(&format!(
        "**Entry score:** {:.2} / {}\n",
        result.display_score, result.result_scale
    ));
    output
}
