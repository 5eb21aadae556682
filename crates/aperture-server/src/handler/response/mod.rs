//! Response types for HTTP handlers.
//!
//! Field names follow the wire format consumed by the gallery front-end
//! (`Key`, `halfurl`, `URL`, ..) rather than Rust conventions.

mod catalog;
mod errors;
mod monitors;

pub use catalog::*;
pub use errors::*;
pub use monitors::*;
