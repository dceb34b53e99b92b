//! Visitor session extractor.
//!
//! Handlers never poke at raw session keys. They take a [`Visitor`], which
//! loads the cart and login from the session with defaults (empty cart, no
//! user) and writes changes back through typed methods.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use ubermelon_core::{Cart, MelonId};

use crate::error::AppError;
use crate::models::{FlashMessage, PageContext, session_keys};

/// The current visitor's session state.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut visitor: Visitor) -> Result<Redirect> {
///     visitor.add_to_cart(&MelonId::new("cren")).await?;
///     visitor.flash(FlashMessage::success("Added!")).await?;
///     Ok(Redirect::to("/cart"))
/// }
/// ```
pub struct Visitor {
    session: Session,
    cart: Cart,
    user_email: Option<String>,
}

impl Visitor {
    /// Load visitor state from a session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn from_session(session: Session) -> Result<Self, AppError> {
        let cart = session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default();
        let user_email = session.get::<String>(session_keys::USER_EMAIL).await?;

        Ok(Self {
            session,
            cart,
            user_email,
        })
    }

    /// The visitor's cart (empty if nothing was ever added).
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Email of the logged-in customer.
    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// Add one melon to the cart and persist it. Returns the new quantity.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn add_to_cart(&mut self, melon_id: &MelonId) -> Result<u32, AppError> {
        let quantity = self.cart.add_item(melon_id);
        self.session.insert(session_keys::CART, &self.cart).await?;
        Ok(quantity)
    }

    /// Record `email` as the logged-in customer.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn log_in(&mut self, email: &str) -> Result<(), AppError> {
        self.session.insert(session_keys::USER_EMAIL, email).await?;
        self.user_email = Some(email.to_string());
        Ok(())
    }

    /// Forget the logged-in customer. Returns the email that was logged in.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn log_out(&mut self) -> Result<Option<String>, AppError> {
        self.session
            .remove::<String>(session_keys::USER_EMAIL)
            .await?;
        Ok(self.user_email.take())
    }

    /// Queue a flash message for the next rendered page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn flash(&self, message: FlashMessage) -> Result<(), AppError> {
        let mut flashes = self
            .session
            .get::<Vec<FlashMessage>>(session_keys::FLASHES)
            .await?
            .unwrap_or_default();
        flashes.push(message);
        self.session.insert(session_keys::FLASHES, flashes).await?;
        Ok(())
    }

    /// Drain pending flash messages into the context for a page render.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store fails.
    pub async fn page(&self) -> Result<PageContext, AppError> {
        let flashes = self
            .session
            .remove::<Vec<FlashMessage>>(session_keys::FLASHES)
            .await?
            .unwrap_or_default();

        Ok(PageContext {
            flashes,
            user_email: self.user_email.clone(),
        })
    }
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        Self::from_session(session).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn new_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_defaults_for_fresh_session() {
        let visitor = Visitor::from_session(new_session()).await.unwrap();
        assert!(visitor.cart().is_empty());
        assert_eq!(visitor.user_email(), None);
    }

    #[tokio::test]
    async fn test_cart_persists_in_session() {
        let session = new_session();
        let mut visitor = Visitor::from_session(session.clone()).await.unwrap();
        let cren = MelonId::new("cren");

        visitor.add_to_cart(&cren).await.unwrap();
        assert_eq!(visitor.add_to_cart(&cren).await.unwrap(), 2);

        let reloaded = Visitor::from_session(session).await.unwrap();
        assert_eq!(reloaded.cart().quantity(&cren), 2);
    }

    #[tokio::test]
    async fn test_flashes_are_one_shot() {
        let visitor = Visitor::from_session(new_session()).await.unwrap();
        visitor.flash(FlashMessage::info("first")).await.unwrap();
        visitor.flash(FlashMessage::error("second")).await.unwrap();

        let page = visitor.page().await.unwrap();
        let texts: Vec<&str> = page.flashes.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);

        let again = visitor.page().await.unwrap();
        assert!(again.flashes.is_empty());
    }

    #[tokio::test]
    async fn test_log_in_and_out() {
        let session = new_session();
        let mut visitor = Visitor::from_session(session.clone()).await.unwrap();

        visitor.log_in("mel@ubermelon.com").await.unwrap();
        assert_eq!(visitor.page().await.unwrap().user_email.as_deref(), Some("mel@ubermelon.com"));

        let reloaded = Visitor::from_session(session.clone()).await.unwrap();
        assert_eq!(reloaded.user_email(), Some("mel@ubermelon.com"));

        assert_eq!(visitor.log_out().await.unwrap().as_deref(), Some("mel@ubermelon.com"));
        let reloaded = Visitor::from_session(session).await.unwrap();
        assert_eq!(reloaded.user_email(), None);
    }
}
