//! Splash image resolution.

use crate::catalog::TRACING_TARGET;
use crate::namespace::SPLASH_PREFIX;
use crate::{Error, ObjectRecord, PublicUrl, Result};

/// Resolves the splash image URL from the listing under `background/_`.
///
/// Exactly one record is expected. An empty listing breaks the operator
/// guarantee and is an [`ErrorKind::InvariantViolation`]; extra records
/// are tolerated and the first one wins.
///
/// [`ErrorKind::InvariantViolation`]: crate::ErrorKind::InvariantViolation
pub fn splash_url(records: &[ObjectRecord], urls: &PublicUrl) -> Result<String> {
    let Some(first) = records.first() else {
        tracing::error!(
            target: TRACING_TARGET,
            prefix = SPLASH_PREFIX,
            "Splash folder is empty",
        );
        return Err(Error::invariant_violation()
            .with_message(format!("no splash image found under {SPLASH_PREFIX}")));
    };

    if records.len() > 1 {
        tracing::warn!(
            target: TRACING_TARGET,
            prefix = SPLASH_PREFIX,
            count = records.len(),
            selected = %first.key,
            "Multiple splash images found, using the first",
        );
    }

    Ok(urls.to_public_url(&first.key))
}
