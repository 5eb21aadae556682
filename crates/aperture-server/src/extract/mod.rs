//! Request extractors and response wrappers with `{ERR}` error bodies.
//!
//! - [`Path`] rejects malformed path parameters with a handler [`Error`]
//!   instead of axum's plain-text rejection.
//! - [`Json`] serializes response bodies and documents them for OpenAPI.
//!
//! [`Error`]: crate::handler::Error

mod enhanced_json;
mod enhanced_path;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
