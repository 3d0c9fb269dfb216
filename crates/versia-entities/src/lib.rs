//! Versia federation entities and type-directed dispatch.
//!
//! An inbound body's `type` field selects a kind. The body is checked by
//! an [`EntityValidator`] for that kind and handed, typed, to the handler
//! registered for it in a [`Handlers`] table.
//!
//! ```
//! use serde_json::json;
//! use versia_entities::{parse_body, Handlers, SchemaValidator};
//!
//! # futures::executor::block_on(async {
//! let body = json!({
//!     "type": "pub.versia:likes/Like",
//!     "id": "3e7e4750-afd4-4d99-a256-02f0710a0520",
//!     "uri": "https://example.com/likes/3e7e4750",
//!     "created_at": "2024-04-09T01:38:51.743Z",
//!     "author": "https://example.com/users/alice",
//!     "liked": "https://example.com/notes/1",
//! });
//!
//! let handlers = Handlers::new().on_like(|like| async move { like.liked });
//! let liked = parse_body(body, &SchemaValidator, handlers).await.unwrap();
//! assert_eq!(liked.as_deref(), Some("https://example.com/notes/1"));
//! # });
//! ```

#![deny(missing_docs)]

mod dispatcher;
pub mod entities;
mod error;
mod handlers;
mod kind;
mod validator;

pub use dispatcher::{parse_body, RequestParser};
pub use entities::Entity;
pub use error::{DispatchError, TagError, ValidationError};
pub use handlers::Handlers;
pub use kind::{EntityKind, ExtensionKind, ExtensionTag};
pub use validator::{EntityValidator, SchemaValidator};
