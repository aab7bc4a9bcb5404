/// Module containing the HTTP gateway client
pub mod http_client;

pub use http_client::*;
