//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page
//! GET  /health            - Health check
//!
//! # Melons
//! GET  /melons            - Catalog listing
//! GET  /melon/{id}        - Melon detail
//!
//! # Cart
//! GET  /cart              - Cart with totals
//! GET  /add_to_cart/{id}  - Add one melon, redirect to /cart
//! GET  /checkout          - Placeholder, redirect to /melons
//!
//! # Auth
//! GET  /login             - Login page
//! POST /login             - Login action
//! GET  /logout            - Logout action
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod melons;

use axum::{
    Router,
    body::Body,
    http::{Request, Uri},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::MemoryStore;

use crate::error::AppError;
use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
    session_lock_middleware,
};
use crate::state::AppState;

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/melons", get(melons::index))
        .route("/melon/{id}", get(melons::show))
        .route("/cart", get(cart::show))
        .route("/add_to_cart/{id}", get(cart::add))
        .route("/checkout", get(cart::checkout))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Build the complete application router with its middleware stack and a
/// fresh session store.
///
/// Sentry layers are left to the binary.
pub fn app(state: AppState) -> Router {
    app_with_session_store(state, MemoryStore::default())
}

/// Build the application router over an existing session store.
pub fn app_with_session_store(state: AppState, store: MemoryStore) -> Router {
    let session_layer = create_session_layer(state.config(), store);
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .layer(session_layer)
        .layer(from_fn_with_state(state.clone(), session_lock_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
