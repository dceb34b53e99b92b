//! Ubermelon Core - Shared domain types and the cart engine.
//!
//! This crate provides the types used across all Ubermelon components:
//! - `storefront` - Public-facing melon shop
//! - `cli` - Command-line tools for checking data files
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no file access, no
//! HTTP, no sessions. Record parsing works on single lines of text; reading
//! the files they come from is the storefront's job.
//!
//! # Modules
//!
//! - [`types`] - Newtypes for melon IDs and prices, plus the `Melon` and
//!   `Customer` records
//! - [`cart`] - Cart quantities and cart-total computation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartError, CartLine, CartView, CatalogLookup, compute_cart_view};
pub use types::*;
