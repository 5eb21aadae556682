//! Convenient re-exports for common use.

pub use crate::catalog::{Catalog, Collection, Photo, Stats};
pub use crate::description::{DescriptionProvider, DescriptionService};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::listing::{ListingService, ObjectListing};
pub use crate::public_url::PublicUrl;
pub use crate::record::ObjectRecord;
