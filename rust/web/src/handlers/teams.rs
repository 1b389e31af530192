use crate::convocations::ConvocationSource;
use crate::errors::{ErrorResponse, IntoErrorResponse};
use crate::teams::{resolve_teams, TeamsError};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::{Method, StatusCode};
use warp::reply::{self, Response};
use warp::{Rejection, Reply};

/// Splits the confirmed roster of a convocation into two teams.
///
/// # HTTP Method and Path
/// - **Method**: GET
/// - **Path**: `/api/convocations/{convocation_id}/teams`
///
/// # Response Format
/// - **Success (200 OK)**:
/// ```json
/// {
///   "convocationId": "conv-123",
///   "teamName": "Quinta FC",
///   "scheduledAt": "2025-03-06T21:00:00Z",
///   "teams": { "shirts": [{"id": "e", "name": "E"}], "coletes": [] }
/// }
/// ```
/// - **Error (404 Not Found)**: `convocation_not_found`
/// - **Error (500 Internal Server Error)**: `configuration_missing`, no source configured
/// - **Error (503 Service Unavailable)**: `source_unavailable`
///
/// The split is seeded by the convocation id, so repeated requests return the
/// same teams as long as the roster is unchanged.
pub async fn get_teams(
    source: Option<Arc<dyn ConvocationSource>>,
    convocation_id: String,
) -> Response {
    match resolve_teams(source.as_deref(), &convocation_id) {
        Ok(body) => reply::with_status(reply::json(&body), StatusCode::OK).into_response(),
        Err(err) => err.into_http_response(),
    }
}

/// Any non-GET request on the teams resource.
pub async fn method_not_allowed(method: Method) -> Response {
    TeamsError::MethodNotAllowed(method.to_string()).into_http_response()
}

/// Turns unmatched routes and filter rejections into JSON error bodies.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, body) = if err.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("route_not_found", "No such route"),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorResponse::new("method_not_allowed", "Method not allowed"),
        )
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("internal_error", "Unhandled request error"),
        )
    };
    Ok(body.into_response(status))
}
