//! Enhanced path parameter extractor.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Tracing target for path extraction.
const TRACING_TARGET: &str = "aperture_server::extract::path";

/// Path parameter extractor with `{ERR}` rejections.
///
/// Drop-in replacement for [`axum::extract::Path`].
#[must_use]
#[derive(Debug, Clone, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            rejection = %rejection,
            "Path parameters rejected",
        );

        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => ErrorKind::BadRequest
                .with_message(format!("Invalid path parameter: {}", first_line(&err.body_text())))
                .with_context(err.to_string()),
            PathRejection::MissingPathParams(err) => {
                ErrorKind::MissingPathParam.with_context(err.to_string())
            }
            other => ErrorKind::InternalServerError.with_context(other.to_string()),
        }
    }
}

/// Keeps rejection messages to a single short line.
fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().chars().take(150).collect()
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn first_line_is_bounded() {
        assert_eq!(first_line("a\nb"), "a");
        assert_eq!(first_line(&"x".repeat(300)).len(), 150);
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn missing_params_kind() {
        assert_eq!(
            ErrorKind::MissingPathParam.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
