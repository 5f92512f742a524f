/// Convenience result type used across sigflow.
pub type SigflowResult<T> = Result<T, SigflowError>;

/// Errors surfaced at the crate's fallible edges.
///
/// The geometric core never fails; these cover configuration, page
/// descriptions and rasterization.
#[derive(thiserror::Error, Debug)]
pub enum SigflowError {
    /// Invalid user-provided configuration or page data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while serializing or rasterizing the overlay.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with preserved source context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SigflowError {
    /// Build a [`SigflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SigflowError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SigflowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SigflowError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
