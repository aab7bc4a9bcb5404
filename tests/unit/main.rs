//! Unit test harness
//!
//! Mirrors the crate layout: one module per area, HTTP behavior exercised
//! against a local mock server.


mod application;
mod model;
mod session;
mod test_error;
mod transport;
mod utils;
