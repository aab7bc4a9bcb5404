/// Interface for the auth facade
pub mod auth;
/// Interface for the content facade
pub mod content;
/// Interface for the learning facade
pub mod learning;

pub use auth::*;
pub use content::*;
pub use learning::*;
