use std::fmt;
use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid input: {}", join_fields(.0))]
    InvalidForm(Vec<FieldError>),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input closed before the session finished")]
    InputClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_lists_every_field() {
        let err = ScoreError::InvalidForm(vec![
            FieldError::new("colloquium[1]", "must be between 0 and 10"),
            FieldError::new("course_hours", "is required"),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("colloquium[1]: must be between 0 and 10"));
        assert!(rendered.contains("course_hours: is required"));
    }
}
