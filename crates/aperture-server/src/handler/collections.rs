//! Collection handlers.
//!
//! Collection-scoped routes are registered with and without a trailing
//! slash after `{key}`; both address the same collection.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use aperture_core::Catalog;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

use crate::extract::{Json, Path};
use crate::handler::Result;
use crate::handler::request::CollectionPathParams;
use crate::handler::response::{Collection, Collections, ErrorResponse, ImageUrl, Photo, Photos};
use crate::service::ServiceState;

/// Tracing target for collection operations.
const TRACING_TARGET: &str = "aperture_server::handler::collections";

/// Lists visible collections.
#[tracing::instrument(skip_all)]
async fn list_collections(
    State(catalog): State<Catalog>,
) -> Result<(StatusCode, Json<Collections>)> {
    let collections: Collections = catalog
        .collections()
        .await?
        .into_iter()
        .map(Collection::from)
        .collect();

    tracing::debug!(
        target: TRACING_TARGET,
        collection_count = collections.len(),
        "Collections listed",
    );

    Ok((StatusCode::OK, Json(collections)))
}

fn list_collections_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List collections")
        .description(
            "Returns every top-level folder of the bucket except the reserved \
             `background/` folder, in listing order.",
        )
        .response::<200, Json<Collections>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the `desc.json` sidecar of a collection unchanged.
#[tracing::instrument(skip_all, fields(collection = %path_params.key))]
async fn read_description(
    State(catalog): State<Catalog>,
    Path(path_params): Path<CollectionPathParams>,
) -> Result<(StatusCode, Json<Value>)> {
    let description = catalog.description(&path_params.key).await?;

    tracing::debug!(target: TRACING_TARGET, "Description fetched");

    Ok((StatusCode::OK, Json(description)))
}

fn read_description_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get collection description")
        .description("Returns the collection's `desc.json` document as stored.")
        .response::<200, Json<Value>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Lists the half and full resolution URL pairs of a collection.
#[tracing::instrument(skip_all, fields(collection = %path_params.key))]
async fn list_photos(
    State(catalog): State<Catalog>,
    Path(path_params): Path<CollectionPathParams>,
) -> Result<(StatusCode, Json<Photos>)> {
    let photos: Photos = catalog
        .photos(&path_params.key)
        .await?
        .into_iter()
        .map(Photo::from)
        .collect();

    tracing::debug!(
        target: TRACING_TARGET,
        photo_count = photos.len(),
        "Photos listed",
    );

    Ok((StatusCode::OK, Json(photos)))
}

fn list_photos_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List collection photos")
        .description(
            "Returns one entry per compressed image of the collection, pairing \
             its URL with the URL of the original. A collection without any \
             object answers 404.",
        )
        .response::<200, Json<Photos>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the preview image URL of a collection.
#[tracing::instrument(skip_all, fields(collection = %path_params.key))]
async fn read_preview(
    State(catalog): State<Catalog>,
    Path(path_params): Path<CollectionPathParams>,
) -> Result<(StatusCode, Json<ImageUrl>)> {
    let url = catalog.preview(&path_params.key).await?;

    tracing::debug!(target: TRACING_TARGET, url = %url, "Preview resolved");

    Ok((StatusCode::OK, Json(ImageUrl::from(url))))
}

fn read_preview_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get collection preview")
        .description(
            "Returns the URL of the first object tagged `preview` in the \
             collection. Answers 404 when the collection is empty or has no \
             preview image.",
        )
        .response::<200, Json<ImageUrl>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for collection browsing.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/collection-names",
            get_with(list_collections, list_collections_docs),
        )
        .api_route(
            "/collection-description/{key}",
            get_with(read_description, read_description_docs),
        )
        .api_route(
            "/collection-description/{key}/",
            get_with(read_description, read_description_docs),
        )
        .api_route(
            "/collection-contents/{key}",
            get_with(list_photos, list_photos_docs),
        )
        .api_route(
            "/collection-contents/{key}/",
            get_with(list_photos, list_photos_docs),
        )
        .api_route(
            "/collection-preview/{key}",
            get_with(read_preview, read_preview_docs),
        )
        .api_route(
            "/collection-preview/{key}/",
            get_with(read_preview, read_preview_docs),
        )
        .with_path_items(|item| item.tag("Collections"))
}

#[cfg(test)]
mod tests {
    use aperture_core::ObjectRecord;
    use aperture_core::mock::{MockDescription, MockListing};
    use jiff::Timestamp;
    use serde_json::json;

    use super::*;
    use crate::handler::test::{BASE, bucket, create_test_server, create_test_server_with};

    #[tokio::test]
    async fn collection_names() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collection-names").await;
        response.assert_status_ok();
        response.assert_json(&json!([
            { "Key": "landscapes", "LastModified": "October 19, 2026" },
            { "Key": "portraits", "LastModified": null },
        ]));

        Ok(())
    }

    #[tokio::test]
    async fn collection_names_empty_bucket() -> anyhow::Result<()> {
        let server = create_test_server_with(MockListing::default(), MockDescription::default())?;

        let response = server.get("/collection-names").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn collection_names_listing_failure() -> anyhow::Result<()> {
        let server = create_test_server_with(
            MockListing::failing("AccessDenied"),
            MockDescription::default(),
        )?;

        let response = server.get("/collection-names").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "ERR": "AccessDenied" }));

        Ok(())
    }

    #[tokio::test]
    async fn collection_contents() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collection-contents/landscapes").await;
        response.assert_status_ok();
        response.assert_json(&json!([
            {
                "halfurl": format!("{BASE}/landscapes/_1-compressed.JPG"),
                "fullurl": format!("{BASE}/landscapes/_1.JPG"),
            },
            {
                "halfurl": format!("{BASE}/landscapes/_2-preview-compressed.JPG"),
                "fullurl": format!("{BASE}/landscapes/_2-preview.JPG"),
            },
        ]));

        Ok(())
    }

    #[tokio::test]
    async fn collection_contents_trailing_slash() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let plain = server.get("/collection-contents/landscapes").await;
        let slashed = server.get("/collection-contents/landscapes/").await;
        let encoded = server.get("/collection-contents/landscapes%2F").await;

        slashed.assert_status_ok();
        encoded.assert_status_ok();
        assert_eq!(plain.text(), slashed.text());
        assert_eq!(plain.text(), encoded.text());

        Ok(())
    }

    #[tokio::test]
    async fn only_one_trailing_slash_is_stripped() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collection-contents/landscapes%2F%2F").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "ERR": "404: landscapes/ returned 0 results" }));

        server
            .get("/collection-preview/landscapes%2F%2F")
            .await
            .assert_status_not_found();

        Ok(())
    }

    #[tokio::test]
    async fn collection_contents_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collection-contents/missing").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "ERR": "404: missing returned 0 results" }));

        Ok(())
    }

    #[tokio::test]
    async fn collection_contents_without_variants() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collection-contents/portraits").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn collection_preview() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collection-preview/landscapes/").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "URL": format!("{BASE}/landscapes/_2-preview-compressed.JPG"),
        }));

        Ok(())
    }

    #[tokio::test]
    async fn collection_preview_missing_tag() -> anyhow::Result<()> {
        let server = create_test_server()?;

        server
            .get("/collection-preview/portraits")
            .await
            .assert_status_not_found();
        server
            .get("/collection-preview/missing")
            .await
            .assert_status_not_found();

        Ok(())
    }

    #[tokio::test]
    async fn collection_description() -> anyhow::Result<()> {
        let description = MockDescription::default().with_document(
            format!("{BASE}/landscapes/desc.json"),
            json!({ "title": "Landscapes", "year": 2026 }),
        );
        let server = create_test_server_with(bucket(), description)?;

        let response = server.get("/collection-description/landscapes/").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "title": "Landscapes", "year": 2026 }));

        let response = server.get("/collection-description/portraits").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "ERR": "404: portraits/desc.json returned 0 results" }));

        Ok(())
    }

    #[tokio::test]
    async fn collection_description_upstream_failure() -> anyhow::Result<()> {
        let server = create_test_server_with(bucket(), MockDescription::failing("connection reset"))?;

        let response = server.get("/collection-description/landscapes").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "ERR": "connection reset" }));

        Ok(())
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() -> anyhow::Result<()> {
        let listing = MockListing::new(vec![
            ObjectRecord::new("a/", 0).with_last_modified(Timestamp::UNIX_EPOCH),
            ObjectRecord::new("a/_1-compressed.JPG", 10),
        ]);
        let server = create_test_server_with(listing, MockDescription::default())?;

        let first = server.get("/collection-contents/a").await.text();
        let second = server.get("/collection-contents/a").await.text();
        assert_eq!(first, second);

        Ok(())
    }
}
