use std::time::Instant;
use uuid::Uuid;
use warp::http::{Method, StatusCode};
use warp::reject::Rejection;
use warp::reply::{Reply, Response};
use warp::Filter;

/// Request line captured before the inner filter runs
#[derive(Debug, Clone)]
pub struct RequestStart {
    pub request_id: Uuid,
    pub path: String,
    pub method: Method,
    started: Instant,
}

/// Logs each request on entry and its status and duration on completion.
pub fn with_request_logging<F, T>(
    filter: F,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone
where
    F: Filter<Extract = (T,), Error = Rejection> + Clone + Send + Sync + 'static,
    T: Reply,
{
    warp::any()
        .and(warp::path::full())
        .and(warp::method())
        .map(|path: warp::path::FullPath, method: Method| {
            let start = RequestStart {
                request_id: Uuid::new_v4(),
                path: path.as_str().to_string(),
                method,
                started: Instant::now(),
            };
            tracing::info!(
                request_id = %start.request_id,
                path = %start.path,
                method = %start.method,
                "incoming request"
            );
            start
        })
        .and(filter)
        .map(|start: RequestStart, reply: T| {
            let response = reply.into_response();
            log_response(
                response.status(),
                &start,
                start.started.elapsed().as_millis(),
            );
            response
        })
}

/// Log response with status code
pub fn log_response(status: StatusCode, start: &RequestStart, duration_ms: u128) {
    let request_id = start.request_id.to_string();
    if status.is_server_error() {
        tracing::error!(
            request_id = %request_id,
            status = status.as_u16(),
            path = %start.path,
            method = %start.method,
            duration_ms = duration_ms as u64,
            "request completed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            request_id = %request_id,
            status = status.as_u16(),
            path = %start.path,
            method = %start.method,
            duration_ms = duration_ms as u64,
            "request completed"
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            status = status.as_u16(),
            path = %start.path,
            method = %start.method,
            duration_ms = duration_ms as u64,
            "request completed"
        );
    }
}
