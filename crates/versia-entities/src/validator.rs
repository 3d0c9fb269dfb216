use async_trait::async_trait;
use serde_json::Value;

use crate::entities::Entity;
use crate::error::ValidationError;
use crate::kind::EntityKind;

/// Validates a raw body against the schema of one entity kind.
///
/// Implementations return the typed entity for `kind`; returning a
/// different kind is reported by the dispatcher as a mismatch.
#[async_trait]
pub trait EntityValidator: Send + Sync {
    /// Validates `data` as an entity of `kind`.
    async fn validate(&self, kind: EntityKind, data: &Value) -> Result<Entity, ValidationError>;
}

/// Structural validator backed by the serde shapes in [`crate::entities`].
///
/// Checks that `type` equals the kind's tag, then deserializes the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

#[async_trait]
impl EntityValidator for SchemaValidator {
    async fn validate(&self, kind: EntityKind, data: &Value) -> Result<Entity, ValidationError> {
        match data.get("type").and_then(Value::as_str) {
            Some(tag) if tag == kind.tag() => {}
            _ => {
                return Err(ValidationError::new(
                    kind,
                    format!("type must be \"{}\"", kind.tag()),
                ))
            }
        }
        Entity::from_value(kind, data.clone()).map_err(|e| ValidationError::new(kind, e.to_string()))
    }
}
