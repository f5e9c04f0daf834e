use crate::types::input::ResultScale;
use serde::Serialize;

/// Computed once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub colloquium_average: f64,
    pub colloquium_weighted: f64,
    pub seminar_average: f64,
    pub seminar_weighted: f64,
    pub attendance_score: f64,
    pub independent_score: f64,
    /// Total on the internal 50-point scale.
    pub total_score: f64,
    pub display_score: f64,
    pub result_scale: ResultScale,
}
