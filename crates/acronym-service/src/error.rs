//! Request pipeline errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use acronym_search::SearchError;
use acronym_source::SourceError;

/// Failure anywhere between fetching the glossary and searching it.
///
/// A query with no hits is not an error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Failures surface as a bare 500; Slack shows its own generic failure notice.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!(error = %self, "Slash command failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
