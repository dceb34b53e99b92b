//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Customer login check against the customer store

pub mod auth;
