//! Users endpoint
//!
//! `GET /users` lists users; any other method registers one.

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use chrono::Utc;

use crate::api::state::AppState;
use crate::api::types::{ApiError, JsonLine};
use crate::domain::{RegisteredUser, UserRecord};

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new().route("/users", any(users_endpoint))
}

/// Dispatch on method alone
pub async fn users_endpoint(
    method: Method,
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    if method == Method::GET {
        list_users(&state).await.into_response()
    } else {
        register_user(&state, &body).await.into_response()
    }
}

async fn list_users(state: &AppState) -> Result<JsonLine<Vec<UserRecord>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(JsonLine::ok(users))
}

async fn register_user(
    state: &AppState,
    body: &[u8],
) -> Result<JsonLine<RegisteredUser>, ApiError> {
    let registered = state.user_service.register(body, Utc::now()).await?;
    Ok(JsonLine::created(registered))
}
