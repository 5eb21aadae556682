//! Collection derivation from a root-level listing.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ObjectRecord;
use crate::namespace::{is_collection, strip_trailing_slash};

/// Display format of a collection's modification date, e.g. `October 19, 2026`.
const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// A visible collection, derived from one folder-marker record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Folder name without its trailing slash.
    pub name: String,
    /// Human readable modification date in UTC.
    pub last_modified: Option<String>,
}

/// Formats a timestamp as `<Month> <day>, <year>` in UTC.
pub fn format_display_date(timestamp: Timestamp) -> String {
    timestamp.strftime(DISPLAY_DATE_FORMAT).to_string()
}

/// Derives the visible collections from `records`, preserving listing order.
///
/// The reserved `background/` folder is never a collection.
pub fn list_collections(records: &[ObjectRecord]) -> Vec<Collection> {
    records
        .iter()
        .filter(|record| is_collection(&record.key))
        .map(|record| Collection {
            name: strip_trailing_slash(&record.key).to_owned(),
            last_modified: record.last_modified.map(format_display_date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn display_date_is_month_day_year() {
        assert_eq!(
            format_display_date(timestamp("2026-10-19T08:30:00Z")),
            "October 19, 2026"
        );
        assert_eq!(
            format_display_date(timestamp("2021-03-05T23:59:59Z")),
            "March 5, 2021"
        );
    }

    #[test]
    fn keeps_only_visible_folder_markers_in_order() {
        let records = vec![
            ObjectRecord::new("zebra/", 0).with_last_modified(timestamp("2024-01-02T00:00:00Z")),
            ObjectRecord::new("background/", 0),
            ObjectRecord::new("zebra/_1.JPG", 100),
            ObjectRecord::new("alpine/", 0),
        ];

        let collections = list_collections(&records);
        assert_eq!(
            collections,
            vec![
                Collection {
                    name: "zebra".into(),
                    last_modified: Some("January 2, 2024".into()),
                },
                Collection {
                    name: "alpine".into(),
                    last_modified: None,
                },
            ]
        );
    }

    #[test]
    fn never_includes_reserved_folder() {
        let records = vec![ObjectRecord::new("background/", 0)];
        assert!(list_collections(&records).is_empty());
    }
}
