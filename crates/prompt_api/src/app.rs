use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Request, State},
    http::{header, HeaderMap, Method, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use prompt_api_core::routing::parse_route;

use crate::{
    handlers::{
        handle_prompt_request, health::livez, prompts::is_create_only, ApiError, PromptRequest,
        PromptResponse,
    },
    state::AppState,
};

/// Headroom the outer timeout keeps above the storage deadline.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.storage_timeout + REQUEST_TIMEOUT_MARGIN;

    Router::new()
        .route("/livez", get(livez))
        .route("/prompt", any(prompt_proxy))
        .route("/prompt/{*path}", any(prompt_proxy))
        .fallback(not_found)
        // Prompt content is unconstrained; size limits are the backend's call.
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn_with_state(request_timeout, request_deadline))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bounds the whole request, body read included, and answers like any
/// other server fault when the bound is hit.
async fn request_deadline(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::Timeout(deadline).into_response(),
    }
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {method} {}", uri.path()))
}

/// ANY /prompt/{*path} - Dispatches every prompt request on method and path.
async fn prompt_proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<PromptResponse, ApiError> {
    let route = parse_route(method.as_str(), uri.path())?;
    let body = body.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let create_only = is_create_only(
        headers
            .get(header::IF_NONE_MATCH)
            .and_then(|value| value.to_str().ok()),
    );

    let request = PromptRequest::new(route, body.to_vec()).create_only(create_only);
    handle_prompt_request(state.repository.as_ref(), request, state.storage_timeout).await
}
