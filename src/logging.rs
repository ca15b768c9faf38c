//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::response,
    middleware::Next,
    response::Response,
};

/// The number of characters of a response body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The request line is logged at the `info` level, including the query
/// string since it carries the chapter and season selection.
/// If the response body is longer than [LOG_BODY_LENGTH_LIMIT] characters,
/// it is truncated at the `info` level and logged in full at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    log_request(&request);

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => {
            tracing::error!("Could not read the response body for logging: {error}");
            return Response::from_parts(parts, Body::empty());
        }
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

fn log_request(request: &Request) {
    tracing::info!(
        "Received request: {} {} (query: {:?})",
        request.method(),
        request.uri().path(),
        request.uri().query().unwrap_or_default()
    );
    tracing::debug!("Request headers: {:#?}", request.headers());
}

fn log_response(parts: &response::Parts, body: &str) {
    match truncate(body, LOG_BODY_LENGTH_LIMIT) {
        Some(preview) => {
            tracing::info!(
                "Sending response: {} ({} bytes)\nbody: {preview}...",
                parts.status,
                body.len()
            );
            tracing::debug!("Full response body: {body:?}");
        }
        None => {
            tracing::info!(
                "Sending response: {} ({} bytes)\nbody: {body:?}",
                parts.status,
                body.len()
            );
        }
    }
}

/// The first `limit` characters of `text`, or `None` if `text` is not longer than that.
fn truncate(text: &str, limit: usize) -> Option<&str> {
    text.char_indices()
        .nth(limit)
        .map(|(byte_index, _)| &text[..byte_index])
}
