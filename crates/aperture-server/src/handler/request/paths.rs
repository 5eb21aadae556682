//! Path parameter types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters of collection-scoped routes.
///
/// The key is passed to the catalog as extracted; the catalog removes at
/// most one trailing slash.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CollectionPathParams {
    /// Collection name, optionally with one trailing slash.
    pub key: String,
}
