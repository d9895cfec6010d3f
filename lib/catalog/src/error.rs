//! Error types for the catalog crate.

use std::fmt;

/// Errors from template application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No template with the given id exists.
    UnknownTemplate { id: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTemplate { id } => write!(f, "unknown template: {id}"),
        }
    }
}

impl std::error::Error for TemplateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_display() {
        let err = TemplateError::UnknownTemplate {
            id: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "unknown template: missing");
    }
}
