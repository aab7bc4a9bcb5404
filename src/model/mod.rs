/// Module containing request models sent to the platform services
pub mod requests;
/// Module containing response models returned by the platform services
pub mod responses;

pub use requests::*;
pub use responses::*;
