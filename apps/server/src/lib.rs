//! Pulpito server library.
//!
//! Turns Paddles test-run records into grid views: column definitions,
//! derived values, display formatting and URL-bound paging and filtering,
//! served over a small JSON API.

pub mod api;
pub mod binder;
pub mod config;
pub mod error;
pub mod grid;
pub mod middleware;
pub mod models;
pub mod services;
