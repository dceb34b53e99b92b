//! Authentication service.
//!
//! Checks an email/password pair against the customer store.
//!
//! Passwords are compared in plaintext because that is how the customer file
//! stores them. Swap in hashed credentials before exposing this anywhere real.

mod error;

pub use error::AuthError;

use ubermelon_core::Customer;

use crate::stores::CustomerStore;

/// Authentication service.
pub struct AuthService<'a> {
    customers: &'a CustomerStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(customers: &'a CustomerStore) -> Self {
        Self { customers }
    }

    /// Check a login attempt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnknownAccount` if no customer has `email` and
    /// `AuthError::InvalidCredentials` if the password does not match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&'a Customer, AuthError> {
        let customer = self
            .customers
            .get_by_email(email)
            .map_err(|_| AuthError::UnknownAccount)?;

        if customer.password_matches(password) {
            Ok(customer)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
