//! Application state and dependency injection.

mod config;
mod error;
mod state;

pub use crate::service::config::ServiceConfig;
pub use crate::service::error::{Result, ServiceError};
pub use crate::service::state::ServiceState;

/// Tracing target for service construction.
pub(crate) const TRACING_TARGET: &str = "aperture_server::service";
