use crate::error::ScoreError;
use crate::types::input::ResultScale;
use crate::types::policy::Policy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub policy: Option<PolicyConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    pub colloquium_weight: Option<f64>,
    pub seminar_weight: Option<f64>,
    pub penalty_high_hours: Option<f64>,
    pub penalty_low_hours: Option<f64>,
    pub hours_threshold: Option<u32>,
    pub valid_hours: Option<Vec<u32>>,
    pub max_seminars: Option<usize>,
    pub max_absences: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub scale: Option<u32>,
}

const ALLOWED_FORMATS: [&str; 3] = ["text", "md", "json"];

impl ScoreConfig {
    pub fn policy(&self) -> Policy {
        let defaults = Policy::default();
        match &self.policy {
            Some(policy) => Policy {
                colloquium_weight: policy
                    .colloquium_weight
                    .unwrap_or(defaults.colloquium_weight),
                seminar_weight: policy.seminar_weight.unwrap_or(defaults.seminar_weight),
                penalty_high_hours: policy
                    .penalty_high_hours
                    .unwrap_or(defaults.penalty_high_hours),
                penalty_low_hours: policy
                    .penalty_low_hours
                    .unwrap_or(defaults.penalty_low_hours),
                hours_threshold: policy.hours_threshold.unwrap_or(defaults.hours_threshold),
                valid_hours: policy
                    .valid_hours
                    .clone()
                    .unwrap_or_else(|| defaults.valid_hours.clone()),
                max_seminars: policy.max_seminars.unwrap_or(defaults.max_seminars),
                max_absences: policy.max_absences.unwrap_or(defaults.max_absences),
                ..defaults
            },
            None => defaults,
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    /// Scale from `[output]`. Call after `validate`; an unsupported value maps to `None`.
    pub fn default_scale(&self) -> Option<ResultScale> {
        self.output
            .as_ref()
            .and_then(|output| output.scale)
            .and_then(|scale| ResultScale::try_from(scale).ok())
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        let policy = self.policy();

        for (name, weight) in [
            ("colloquium_weight", policy.colloquium_weight),
            ("seminar_weight", policy.seminar_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ScoreError::ConfigParse(format!(
                    "policy.{name} must be between 0.0 and 1.0"
                )));
            }
        }
        let weight_sum = policy.colloquium_weight + policy.seminar_weight;
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(ScoreError::ConfigParse(format!(
                "policy weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        for (name, penalty) in [
            ("penalty_high_hours", policy.penalty_high_hours),
            ("penalty_low_hours", policy.penalty_low_hours),
        ] {
            if !penalty.is_finite() || penalty < 0.0 {
                return Err(ScoreError::ConfigParse(format!(
                    "policy.{name} must be a non-negative number"
                )));
            }
        }

        if policy.valid_hours.is_empty() {
            return Err(ScoreError::ConfigParse(
                "policy.valid_hours cannot be empty".to_string(),
            ));
        }
        if policy.valid_hours.contains(&0) {
            return Err(ScoreError::ConfigParse(
                "policy.valid_hours entries must be greater than 0".to_string(),
            ));
        }
        if policy.max_seminars == 0 {
            return Err(ScoreError::ConfigParse(
                "policy.max_seminars must be greater than 0".to_string(),
            ));
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                if !ALLOWED_FORMATS.contains(&format.as_str()) {
                    return Err(ScoreError::ConfigParse(format!(
                        "unsupported output.format: {format}"
                    )));
                }
            }
            if let Some(scale) = output.scale {
                ResultScale::try_from(scale)
                    .map_err(|e| ScoreError::ConfigParse(format!("output.scale: {e}")))?;
            }
        }

        Ok(())
    }
}
