//! Session middleware configuration.
//!
//! Sets up in-process sessions using tower-sessions' `MemoryStore`. Sessions
//! (and the carts in them) last as long as the process.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "um_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over `store`.
///
/// `MemoryStore` clones share their sessions, so two routers built over
/// clones of one store see the same visitors.
#[must_use]
pub fn create_session_layer(
    config: &StorefrontConfig,
    store: MemoryStore,
) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
