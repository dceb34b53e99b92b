//! Per-session request serialization.
//!
//! Handlers read the cart from the session, change it, and write it back.
//! Two overlapping requests from the same visitor would each start from the
//! same cart and the later save would drop the earlier increment. This
//! middleware holds a per-session mutex for the whole request, from before
//! the session is loaded until after it is saved, so at most one request per
//! session is in flight at a time.
//!
//! Requests without a session cookie are not serialized: they cannot share
//! state with anything yet.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use moka::future::Cache;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::middleware::session::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// Locks for sessions idle longer than this are dropped.
const LOCK_IDLE_SECONDS: u64 = 15 * 60;

/// Upper bound on tracked sessions.
const MAX_TRACKED_SESSIONS: u64 = 100_000;

/// Async mutexes keyed by session ID.
#[derive(Clone)]
pub struct SessionLocks {
    locks: Cache<String, Arc<Mutex<()>>>,
}

impl SessionLocks {
    #[must_use]
    pub fn new() -> Self {
        let locks = Cache::builder()
            .max_capacity(MAX_TRACKED_SESSIONS)
            .time_to_idle(Duration::from_secs(LOCK_IDLE_SECONDS))
            .build();
        Self { locks }
    }

    /// Wait for exclusive access to `session_id`.
    pub async fn lock(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .get_with(session_id.to_string(), async { Arc::new(Mutex::new(())) })
            .await;
        lock.lock_owned().await
    }
}

impl Default for SessionLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize requests that carry the same session cookie.
///
/// Must be layered outside the session manager so the lock covers both the
/// session load and the session save.
pub async fn session_lock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let _guard = match session_cookie(request.headers()) {
        Some(session_id) => Some(state.session_locks().lock(&session_id).await),
        None => None,
    };

    next.run(request).await
}

/// Extract the session cookie value from `Cookie` headers.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.to_string())
}
