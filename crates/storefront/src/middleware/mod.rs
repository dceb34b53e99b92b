//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only; capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Session lock (one in-flight request per session)
//! 6. Session layer (tower-sessions with `MemoryStore`)
//!
//! Handlers then read session state through the [`Visitor`] extractor.

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod session_lock;
pub mod visitor;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use session_lock::{SessionLocks, session_lock_middleware};
pub use visitor::Visitor;
