//! Core types for Ubermelon.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the two flat-file record types.

pub mod customer;
pub mod id;
pub mod melon;
pub mod price;
pub mod record;

pub use customer::Customer;
pub use id::MelonId;
pub use melon::Melon;
pub use price::{CurrencyCode, Price, PriceError};
pub use record::RecordError;
