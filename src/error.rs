//! User-facing failures of the translator form.
//!
//! Every variant ends up in an error dialog; none of them stop the process.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The client could not provide its language list at startup
    #[error("Failed to fetch supported languages: {0}")]
    LanguageList(String),

    /// A selected display name has no code in the language list
    #[error("Invalid language selection")]
    InvalidSelection,

    /// The client failed while translating
    #[error("Translation error: {0}")]
    Translation(String),

    /// A translate request is still in flight
    #[error("A translation is already in progress")]
    Busy,
}

impl FormError {
    /// Dialog title shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            FormError::Translation(_) => "Translation Error",
            _ => "Error",
        }
    }

    /// Build from a client error, keeping its context chain
    pub fn translation(error: &anyhow::Error) -> Self {
        FormError::Translation(format!("{:#}", error))
    }

    pub fn language_list(error: &anyhow::Error) -> Self {
        FormError::LanguageList(format!("{:#}", error))
    }
}

/// A blocking error message waiting to be dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

impl From<&FormError> for ErrorDialog {
    fn from(error: &FormError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_translation_error_dialog() {
        let error = FormError::Translation("connection reset".to_string());
        let dialog = ErrorDialog::from(&error);

        assert_eq!(dialog.title, "Translation Error");
        assert_eq!(dialog.message, "Translation error: connection reset");
    }

    #[test]
    fn test_invalid_selection_dialog() {
        let dialog = ErrorDialog::from(&FormError::InvalidSelection);

        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, "Invalid language selection");
    }

    #[test]
    fn test_language_list_keeps_context_chain() {
        let cause: anyhow::Result<()> = Err(anyhow::anyhow!("dns lookup failed"));
        let error = cause.context("Failed to reach service").unwrap_err();

        let form_error = FormError::language_list(&error);

        assert_eq!(form_error.title(), "Error");
        assert_eq!(
            form_error.to_string(),
            "Failed to fetch supported languages: Failed to reach service: dns lookup failed"
        );
    }
}
