pub mod json;
pub mod md;
pub mod text;

use crate::error::ScoreError;
use crate::types::result::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "md" => Some(OutputFormat::Md),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub fn render(result: &ScoreResult, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(result)),
        OutputFormat::Md => Ok(md::to_markdown(result)),
        OutputFormat::Json => json::to_json(result).map_err(ScoreError::Json),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_resolve() {
        assert_eq!(OutputFormat::from_name("md"), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::from_name("sarif"), None);
    }
}
