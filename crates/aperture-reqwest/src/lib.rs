//! Reqwest-based HTTP client for collection description sidecars.
//!
//! # Example
//!
//! ```rust,ignore
//! use aperture_core::DescriptionService;
//! use aperture_reqwest::{ReqwestClient, ReqwestConfig};
//!
//! let client = ReqwestClient::new(ReqwestConfig::default())?;
//! let service: DescriptionService = client.into_service();
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connect;
mod error;

pub use crate::connect::{ReqwestClient, ReqwestConfig, TRACING_TARGET};
pub use crate::error::{Error, Result};
