//! Infrastructure layer - Collaborator implementations

pub mod auth;
pub mod logging;
pub mod user;
