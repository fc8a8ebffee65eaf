//! Error types for content shape validation.

use thiserror::Error;

/// Errors raised when content does not satisfy the shape renderers expect.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field holds a value outside its allowed range or format.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Two entries in the same collection share an id.
    #[error("Duplicate {entity_type} id: {id}")]
    DuplicateId { entity_type: String, id: u32 },

    /// No schema is registered under the requested name.
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
