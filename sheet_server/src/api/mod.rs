//! HTTP API

mod error;
mod http;

pub use error::ApiError;
pub use http::{router, routes};
