//! Bucket statistics handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use aperture_core::Catalog;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, Stats};
use crate::service::ServiceState;

/// Returns image, storage and collection counts of the whole bucket.
#[tracing::instrument(skip_all)]
async fn read_stats(State(catalog): State<Catalog>) -> Result<(StatusCode, Json<Stats>)> {
    let stats = catalog.stats().await?;
    Ok((StatusCode::OK, Json(Stats::from(stats))))
}

fn read_stats_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get storage statistics")
        .description(
            "Counts `.JPG` objects and visible collections and sums image sizes \
             over a complete listing of the bucket. Sizes are strings with two \
             decimals.",
        )
        .response::<200, Json<Stats>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for bucket statistics.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/S3-server-stats", get_with(read_stats, read_stats_docs))
        .with_path_items(|item| item.tag("Statistics"))
}

#[cfg(test)]
mod tests {
    use aperture_core::ObjectRecord;
    use aperture_core::mock::{MockDescription, MockListing};
    use serde_json::json;

    use super::*;
    use crate::handler::test::{create_test_server, create_test_server_with};

    #[tokio::test]
    async fn stats() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/S3-server-stats").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "imageCount": 6,
            "storageMiB": "0.01",
            "storageGiB": "0.00",
            "collectionCount": 2,
        }));

        Ok(())
    }

    #[tokio::test]
    async fn stats_small_listing() -> anyhow::Result<()> {
        let listing = MockListing::new(vec![
            ObjectRecord::new("a/", 0),
            ObjectRecord::new("b.JPG", 2048),
            ObjectRecord::new("background/", 0),
        ]);
        let server = create_test_server_with(listing, MockDescription::default())?;

        let response = server.get("/S3-server-stats").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "imageCount": 1,
            "storageMiB": "0.00",
            "storageGiB": "0.00",
            "collectionCount": 1,
        }));

        Ok(())
    }

    #[tokio::test]
    async fn stats_empty_bucket_is_not_an_error() -> anyhow::Result<()> {
        let server = create_test_server_with(MockListing::default(), MockDescription::default())?;

        let response = server.get("/S3-server-stats").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "imageCount": 0,
            "storageMiB": "0.00",
            "storageGiB": "0.00",
            "collectionCount": 0,
        }));

        Ok(())
    }

    #[tokio::test]
    async fn stats_listing_failure() -> anyhow::Result<()> {
        let server = create_test_server_with(
            MockListing::failing("SlowDown"),
            MockDescription::default(),
        )?;

        let response = server.get("/S3-server-stats").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "ERR": "SlowDown" }));

        Ok(())
    }
}
