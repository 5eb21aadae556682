//! Bucket-wide statistics.

use serde::{Deserialize, Serialize};

use crate::ObjectRecord;
use crate::namespace::{is_collection, is_image_file};

const BYTES_PER_KIB: f64 = 1024.0;

/// Aggregate counts and storage totals of the bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of `.JPG` objects.
    pub image_count: usize,
    /// Total image size in MiB, two decimals.
    pub storage_mib: String,
    /// Total image size in GiB, two decimals.
    pub storage_gib: String,
    /// Number of visible collections.
    pub collection_count: usize,
}

/// Rounds half away from zero to two decimals and formats the result.
fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Computes statistics from a complete, unscoped listing.
pub fn compute_stats(records: &[ObjectRecord]) -> Stats {
    let collection_count = records
        .iter()
        .filter(|record| is_collection(&record.key))
        .count();

    let (image_count, storage_bytes) = records
        .iter()
        .filter(|record| is_image_file(&record.key))
        .fold((0usize, 0u64), |(count, bytes), record| {
            (count + 1, bytes.saturating_add(record.size))
        });

    let kib = storage_bytes as f64 / BYTES_PER_KIB;
    let mib = kib / BYTES_PER_KIB;
    let gib = mib / BYTES_PER_KIB;

    Stats {
        image_count,
        storage_mib: format_two_decimals(mib),
        storage_gib: format_two_decimals(gib),
        collection_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_listing() {
        let records = vec![
            ObjectRecord::new("a/", 0),
            ObjectRecord::new("b.JPG", 2048),
            ObjectRecord::new("background/", 0),
        ];

        assert_eq!(
            compute_stats(&records),
            Stats {
                image_count: 1,
                storage_mib: "0.00".into(),
                storage_gib: "0.00".into(),
                collection_count: 1,
            }
        );
    }

    #[test]
    fn sums_only_images() {
        let records = vec![
            ObjectRecord::new("x/", 0),
            ObjectRecord::new("x/_1.JPG", 3 * 1024 * 1024),
            ObjectRecord::new("x/_1-compressed.JPG", 512 * 1024),
            ObjectRecord::new("x/desc.json", 10 * 1024 * 1024),
            ObjectRecord::new("x/_2.jpg", 10 * 1024 * 1024),
        ];

        let stats = compute_stats(&records);
        assert_eq!(stats.image_count, 2);
        assert_eq!(stats.storage_mib, "3.50");
        assert_eq!(stats.storage_gib, "0.00");
        assert_eq!(stats.collection_count, 1);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_two_decimals(1.0), "1.00");
        assert_eq!(format_two_decimals(2.344), "2.34");
        assert_eq!(format_two_decimals(2.346), "2.35");
        assert_eq!(format_two_decimals(0.0), "0.00");
    }

    #[test]
    fn empty_bucket() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.image_count, 0);
        assert_eq!(stats.storage_mib, "0.00");
        assert_eq!(stats.collection_count, 0);
    }
}
