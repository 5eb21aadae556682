//! Liveness handler.
//!
//! Answers without touching the object store, so a store outage does not
//! take the process out of rotation.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::MonitorStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "aperture_server::handler::monitors";

#[tracing::instrument(skip_all)]
async fn health_status() -> Result<(StatusCode, Json<MonitorStatus>)> {
    tracing::trace!(target: TRACING_TARGET, "Health status requested");
    Ok((StatusCode::OK, Json(MonitorStatus::default())))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get health status")
        .description("Reports that the process is up, with its version.")
        .response::<200, Json<MonitorStatus>>()
}

/// Returns routes for health monitoring.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitors"))
}
