//! Newline-terminated JSON responses

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use super::error::ApiError;

/// JSON response body followed by a single `\n`
#[derive(Debug, Clone)]
pub struct JsonLine<T> {
    status: StatusCode,
    body: T,
}

impl<T> JsonLine<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl<T> IntoResponse for JsonLine<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(mut bytes) => {
                bytes.push(b'\n');
                (
                    self.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    bytes,
                )
                    .into_response()
            }
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                ApiError::internal().into_response()
            }
        }
    }
}
