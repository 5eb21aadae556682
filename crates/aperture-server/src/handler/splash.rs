//! Splash image handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use aperture_core::Catalog;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, ImageUrl};
use crate::service::ServiceState;

/// Returns the home page splash image URL.
#[tracing::instrument(skip_all)]
async fn read_splash(State(catalog): State<Catalog>) -> Result<(StatusCode, Json<ImageUrl>)> {
    let url = catalog.splash().await?;
    Ok((StatusCode::OK, Json(ImageUrl::from(url))))
}

fn read_splash_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get splash image")
        .description(
            "Returns the URL of the single image stored under `background/_`. \
             An empty background folder answers 500.",
        )
        .response::<200, Json<ImageUrl>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for the splash image.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/splash-image", get_with(read_splash, read_splash_docs))
        .with_path_items(|item| item.tag("Splash"))
}
