use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::create_users_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::auth::{JwtConfig, JwtSigner};
    use crate::infrastructure::user::{
        BcryptHasher, InMemoryUserStore, RegistrationSettings, UserService,
    };

    fn test_router() -> Router {
        let service = UserService::new(
            Arc::new(BcryptHasher::new()),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(JwtSigner::new(JwtConfig::new("any secret key"))),
            RegistrationSettings {
                hash_cost: 4,
                ..RegistrationSettings::default()
            },
        );
        create_router(AppState::new(service))
    }

    async fn call(router: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let router = test_router();

        let (status, body) = call(&router, "GET", "/users", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]\n");
    }

    #[tokio::test]
    async fn test_register_then_list() {
        let router = test_router();
        let bodies = [
            r#"{"name":"first","email":"first@mail.com","password":"p","passwordConfirm":"p"}"#,
            r#"{"name":"second","email":"second@mail.com","password":"q","passwordConfirm":"q"}"#,
        ];

        for body in bodies {
            let (status, response) = call(&router, "POST", "/users", body).await;
            assert_eq!(status, StatusCode::CREATED);

            let json: serde_json::Value = serde_json::from_str(&response).unwrap();
            assert!(json["Token"].as_str().is_some_and(|t| !t.is_empty()));
            assert!(json["User"].get("Password").is_none());
        }

        let (status, body) = call(&router, "GET", "/users", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "[{\"Name\":\"first\",\"Email\":\"first@mail.com\"},{\"Name\":\"second\",\"Email\":\"second@mail.com\"}]\n"
        );
    }

    #[tokio::test]
    async fn test_rejected_registration_is_not_stored() {
        let router = test_router();

        let (status, _) = call(
            &router,
            "POST",
            "/users",
            r#"{"name":"n","email":"e","password":"p1","passwordConfirm":"p2"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = call(&router, "GET", "/users", "").await;
        assert_eq!(body, "[]\n");
    }

    #[tokio::test]
    async fn test_health_route() {
        let router = test_router();

        let (status, _) = call(&router, "GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
    }
}
