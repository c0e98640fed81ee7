//! Request correlation, timing and access logging.

use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use log::info;
use uuid::Uuid;

pub const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
pub const PROCESS_TIME: HeaderName = HeaderName::from_static("x-process-time");

/// The caller's request id, or a new UUID v4.
fn request_id(request: &Request) -> HeaderValue {
    request
        .headers()
        .get(&REQUEST_ID)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

/// Tag every response with `X-Request-ID` and `X-Process-Time` and log one
/// access line.
pub async fn request_context(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let id = request_id(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let elapsed = started.elapsed().as_secs_f64();
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.4}")) {
        headers.insert(PROCESS_TIME, value);
    }
    info!(
        "{method} {path} {} id={} {elapsed:.4}s",
        response.status().as_u16(),
        id.to_str().unwrap_or("-")
    );
    response.headers_mut().insert(REQUEST_ID, id);
    response
}
