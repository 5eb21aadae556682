//! Reqwest client module.
//!
//! This module wraps the `reqwest` crate for sidecar document retrieval.

mod client;
mod config;

pub use client::{ReqwestClient, TRACING_TARGET};
pub use config::ReqwestConfig;
