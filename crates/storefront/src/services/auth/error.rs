//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during a login check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No customer has the given email.
    #[error("no account with that email")]
    UnknownAccount,

    /// The customer exists but the password does not match.
    #[error("invalid credentials")]
    InvalidCredentials,
}
