//! Per-request correlation IDs.
//!
//! Each request is tagged with an `x-request-id`. A non-empty value sent by a
//! proxy in front of the shop is reused; otherwise a UUID v4 is minted. The
//! ID lands on the `request_id` field of the `TraceLayer` span, so every log
//! line of the request carries it, and on the Sentry scope. The response
//! echoes it back so a visitor's report can be matched to the logs.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag the request with an ID and echo it on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id =
        forwarded_request_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// The request ID supplied upstream, if it is usable.
fn forwarded_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
}
