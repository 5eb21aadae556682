#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod catalog;
mod description;
mod error;
mod listing;
pub mod namespace;
mod public_url;
mod record;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

#[doc(hidden)]
pub mod prelude;

pub use catalog::{Catalog, Collection, Photo, Stats};
pub use description::{BoxedDescriptionProvider, DescriptionProvider, DescriptionService};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use listing::{BoxedObjectListing, ListingService, ObjectListing};
pub use public_url::PublicUrl;
pub use record::ObjectRecord;
