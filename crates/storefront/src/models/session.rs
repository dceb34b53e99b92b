//! Session-related types.
//!
//! Types stored in the session for a visitor: cart, login, and flash
//! messages waiting to be shown.

use serde::{Deserialize, Serialize};

/// Severity of a flash message, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl FlashLevel {
    /// CSS class suffix for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A one-shot notice shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    #[must_use]
    pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, text)
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, text)
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, text)
    }
}

/// Data every page template needs from the session.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Flash messages drained from the session for this render.
    pub flashes: Vec<FlashMessage>,
    /// Email of the logged-in customer, if any.
    pub user_email: Option<String>,
}

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the logged-in customer's email.
    pub const USER_EMAIL: &str = "user";

    /// Key for pending flash messages.
    pub const FLASHES: &str = "_flashes";
}
