/// Module containing the durable token store
pub mod token_store;

pub use token_store::*;
