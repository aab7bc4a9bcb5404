/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the service facade implementations
pub mod services;

pub use interfaces::*;
pub use services::*;
