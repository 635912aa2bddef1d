use axum::Router;
use axum::http::Uri;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, header};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::utils::AppError;

pub mod middleware;

/// Cache directive set on every response
pub const NO_CACHE: &str = "private, max-age=0, no-cache, no-store";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Any request no route matched
async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

/// Build a router with all routes registered under `prefix` (no middleware, no state)
pub fn build_router(prefix: &str) -> Router<ServerState> {
    let routes = Router::new().merge(api::employees::router());

    let prefix = prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    };

    router.fallback(fallback)
}

/// Build the fully configured application
///
/// Used by the HTTP server and by in-process tests alike.
pub fn build_app(state: ServerState) -> Router {
    build_router(&state.config.api_prefix)
        .with_state(state)
        // Request logging - sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - request spans
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - generate a unique id for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Outermost, so every response carries it
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE),
        ))
}
