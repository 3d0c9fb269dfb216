use serde_json::Value;
use tracing::debug;

use crate::error::DispatchError;
use crate::handlers::Handlers;
use crate::kind::EntityKind;
use crate::validator::EntityValidator;

/// A request body prepared for type-directed dispatch.
#[derive(Debug, Clone)]
pub struct RequestParser {
    body: Value,
    kind: Option<EntityKind>,
}

impl RequestParser {
    /// Wraps a parsed JSON body.
    ///
    /// Fails with [`DispatchError::MissingType`] when `type` is absent,
    /// null or an empty string, or when the body is not an object. A
    /// `type` of any other value that names no known kind is accepted and
    /// later routed to the unknown handler.
    pub fn new(body: Value) -> Result<Self, DispatchError> {
        let kind = match body.get("type") {
            None | Some(Value::Null) => return Err(DispatchError::MissingType),
            Some(Value::String(tag)) if tag.is_empty() => return Err(DispatchError::MissingType),
            Some(Value::String(tag)) => EntityKind::from_tag(tag),
            Some(_) => None,
        };
        Ok(Self { body, kind })
    }

    /// Known kind named by the body, if any.
    pub fn kind(&self) -> Option<EntityKind> {
        self.kind
    }

    /// Raw body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Validates the body and runs the matching handler.
    ///
    /// Returns `Ok(None)` when no handler is registered for the kind.
    /// Unknown kinds skip validation and go to the unknown handler with
    /// the raw body. A validation failure is returned before any handler
    /// runs.
    pub async fn parse_body<V, R>(
        self,
        validator: &V,
        handlers: Handlers<'_, R>,
    ) -> Result<Option<R>, DispatchError>
    where
        V: EntityValidator + ?Sized,
    {
        let Some(kind) = self.kind else {
            debug!(type_tag = ?self.body.get("type"), "dispatching unknown entity type");
            return match handlers.route_unknown(self.body) {
                Some(future) => Ok(Some(future.await)),
                None => Ok(None),
            };
        };

        let entity = validator.validate(kind, &self.body).await?;
        if entity.kind() != kind {
            return Err(DispatchError::KindMismatch {
                expected: kind,
                found: entity.kind(),
            });
        }

        match handlers.route(entity) {
            Some(future) => Ok(Some(future.await)),
            None => {
                debug!(%kind, "no handler registered");
                Ok(None)
            }
        }
    }
}

/// Builds a [`RequestParser`] for `body` and dispatches it.
pub async fn parse_body<V, R>(
    body: Value,
    validator: &V,
    handlers: Handlers<'_, R>,
) -> Result<Option<R>, DispatchError>
where
    V: EntityValidator + ?Sized,
{
    RequestParser::new(body)?
        .parse_body(validator, handlers)
        .await
}
