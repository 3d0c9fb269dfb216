use thiserror::Error;

use crate::kind::EntityKind;

/// Errors parsing entity type tags.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag does not follow `namespace:extension/Type`.
    #[error("invalid extension tag: {0}")]
    InvalidExtensionTag(String),
}

/// A body failed validation for the kind its `type` field named.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} entity: {message}")]
pub struct ValidationError {
    /// Kind the body was validated against.
    pub kind: EntityKind,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `kind`.
    pub fn new(kind: EntityKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Errors while dispatching a request body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Body has no usable `type` field.
    #[error("missing type field in body")]
    MissingType,
    /// Validator rejected the body.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Validator produced an entity of a different kind than requested.
    #[error("validator returned a {found} entity for a {expected} body")]
    KindMismatch {
        /// Kind named by the body.
        expected: EntityKind,
        /// Kind the validator produced.
        found: EntityKind,
    },
}
