//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::colored_id;

/// Middleware that tags incoming requests with unique colored IDs
///
/// Generates a short nanoid per request, logs the request line with the
/// colored ID, and stores the ID plus the start time in request extensions so
/// the asset handler can report per-request latency.
pub async fn track_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let method = req.method().clone();
    let uri = req.uri().clone();

    req.extensions_mut().insert(id.clone());
    req.extensions_mut().insert(Instant::now());

    info!("{} → {} {}", colored_id(&id), method, uri.path());
    next.run(req).await
}
