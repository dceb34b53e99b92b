//! Ubermelon storefront library.
//!
//! Serves the melon catalog, a per-visitor cart kept in the session, and a
//! login against a flat customer file. The binary in `main.rs` only wires
//! configuration, logging and Sentry around [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
