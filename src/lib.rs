/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/2/26
******************************************************************************/

//! # InULearning Client
//!
//! Rust client SDK for the InULearning platform services (auth, learning,
//! content). See the [`prelude`] for the most commonly used types and traits.

/// Service facades, interfaces, and their implementations
pub mod application;
/// Typed client configuration and service endpoint tables
pub mod config;
/// Global constants
pub mod constants;
/// Library error type
pub mod error;
/// Typed request and response models
pub mod model;
/// Formatting and markup helpers
pub mod presentation;
/// Session state for authenticated requests
pub mod session;
/// Durable token storage
pub mod storage;
/// HTTP gateway transport
pub mod transport;
/// Ambient utilities (config parsing, logging)
pub mod utils;

/// Convenient re-exports of the most commonly used items
pub mod prelude;

/// The crate version, taken from `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
