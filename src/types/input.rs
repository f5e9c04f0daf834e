use crate::types::policy::COLLOQUIUM_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ResultScale {
    #[default]
    Fifty,
    Ten,
}

impl ResultScale {
    pub fn points(self) -> u32 {
        match self {
            ResultScale::Fifty => 50,
            ResultScale::Ten => 10,
        }
    }

    /// Converts a total on the 50-point scale to this scale.
    pub fn convert(self, total: f64) -> f64 {
        match self {
            ResultScale::Fifty => total,
            ResultScale::Ten => total / 5.0,
        }
    }
}

impl TryFrom<u32> for ResultScale {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(ResultScale::Fifty),
            10 => Ok(ResultScale::Ten),
            other => Err(format!("unsupported result scale: {other} (expected 50 or 10)")),
        }
    }
}

impl From<ResultScale> for u32 {
    fn from(scale: ResultScale) -> Self {
        scale.points()
    }
}

impl fmt::Display for ResultScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// A submission that has already passed form validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInput {
    pub course_hours: u32,
    pub colloquium_scores: [f64; COLLOQUIUM_COUNT],
    pub seminar_scores: Vec<f64>,
    pub independent_work: f64,
    pub absences: u32,
    pub result_scale: ResultScale,
}
