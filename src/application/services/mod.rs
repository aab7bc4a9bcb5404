/// Module containing the auth facade implementation
pub mod auth_service;
/// Module containing the content facade implementation
pub mod content_service;
/// Module containing the learning facade implementation
pub mod learning_service;

pub use auth_service::*;
pub use content_service::*;
pub use learning_service::*;
