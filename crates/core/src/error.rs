//! Domain error kinds shared across the workspace.

/// Errors produced by validation and plan construction.
///
/// These are tagged kinds rather than bare strings so callers (in
/// particular the HTTP layer) can branch on the variant instead of
/// matching message text.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request field failed validation. `field` names the offending
    /// form field.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A static asset the selected layout requires is absent.
    #[error("Missing asset: {0}")]
    AssetMissing(String),
}

impl CoreError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }
}
