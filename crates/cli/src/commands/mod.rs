//! Subcommand implementations.
//!
//! Each command returns the text it wants printed so it can be tested
//! without capturing stdout.

pub mod cart;
pub mod customers;
pub mod melons;

use thiserror::Error;
use ubermelon_core::CartError;
use ubermelon_storefront::stores::StoreError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Loading or querying a data file failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The requested cart could not be priced.
    #[error(transparent)]
    Cart(#[from] CartError),
}
