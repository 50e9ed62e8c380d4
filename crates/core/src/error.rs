//! Action error model.

use thiserror::Error;

/// Result type used when constructing entity actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Construction-time failure of an entity action.
///
/// These are the only failures in the core contract: once an action exists it is
/// valid, and filtering never fails because of an action's own shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No usable entity name was supplied (missing, empty or blank).
    #[error("entity action requires a non-empty entity name")]
    InvalidEntityName,

    /// No recognized operation tag was supplied.
    #[error("entity action requires an operation: {0}")]
    MissingOperation(String),

    /// A deserialized action carried a `type` label that disagrees with its fields.
    #[error("action type label mismatch: expected `{expected}`, found `{found}`")]
    InvalidLabel { expected: String, found: String },
}

impl ActionError {
    pub fn missing_operation(msg: impl Into<String>) -> Self {
        Self::MissingOperation(msg.into())
    }

    pub fn invalid_label(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidLabel {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
