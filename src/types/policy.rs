use serde::Serialize;

pub const COLLOQUIUM_COUNT: usize = 3;
pub const DEFAULT_VALID_HOURS: [u32; 6] = [15, 30, 45, 60, 75, 90];

/// Institutional constants behind the entry-score formula and its input bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Policy {
    pub colloquium_weight: f64,
    pub seminar_weight: f64,
    pub penalty_high_hours: f64,
    pub penalty_low_hours: f64,
    pub hours_threshold: u32,
    pub max_attendance: f64,
    pub max_total: f64,
    pub component_max: f64,
    pub valid_hours: Vec<u32>,
    pub max_seminars: usize,
    pub max_absences: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            colloquium_weight: 0.6,
            seminar_weight: 0.4,
            penalty_high_hours: 0.33,
            penalty_low_hours: 0.5,
            hours_threshold: 60,
            max_attendance: 10.0,
            max_total: 50.0,
            component_max: 10.0,
            valid_hours: DEFAULT_VALID_HOURS.to_vec(),
            max_seminars: 10,
            max_absences: 100,
        }
    }
}

impl Policy {
    pub fn is_valid_hours(&self, hours: u32) -> bool {
        self.valid_hours.contains(&hours)
    }
}
