//! HTTP wire types

pub mod error;
pub mod json;

pub use error::{ApiError, INTERNAL_SERVER_ERROR};
pub use json::JsonLine;
