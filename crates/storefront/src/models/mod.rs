//! Domain models for the storefront.
//!
//! Melons, customers and carts live in `ubermelon-core`; this module only
//! holds what the storefront keeps in a visitor's session.

pub mod session;

pub use session::{FlashLevel, FlashMessage, PageContext, keys as session_keys};
