//! HTTP API - axum router over the employee service.
//!
//! | Method | Path              | Success | Failure            |
//! |--------|-------------------|---------|--------------------|
//! | GET    | `/employees`      | 200     |                    |
//! | GET    | `/employees/{id}` | 200     | 404                |
//! | POST   | `/employees`      | 201     | 400                |
//! | PUT    | `/employees/{id}` | 200     | 400, 404           |
//! | DELETE | `/employees/{id}` | 202     | 401, 403, 404      |

/// Basic authentication extractor
pub mod auth;
/// Error to response mapping
pub mod error;
/// Route handlers
pub mod handlers;

use crate::{
    config::UserStore,
    errors::{Error, Result},
};
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all store operations
    pub db: DatabaseConnection,
    /// Users allowed to call protected endpoints
    pub users: Arc<UserStore>,
}

impl AppState {
    /// Wraps the connection and user store for sharing across handlers.
    #[must_use]
    pub fn new(db: DatabaseConnection, users: UserStore) -> Self {
        Self {
            db,
            users: Arc::new(users),
        }
    }
}

/// Builds the employee router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(handlers::list).post(handlers::create))
        .route(
            "/employees/{id}",
            get(handlers::get_by_id)
                .put(handlers::update)
                .delete(handlers::delete),
        )
        .with_state(state)
}

/// Binds `bind_address` and serves until Ctrl-C.
pub async fn serve(bind_address: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|e| Error::Serve {
            message: format!("Failed to bind {bind_address}: {e}"),
        })?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Serve {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::store,
        entities::{EmployeeModel, EmployeeStatus},
        test_utils::*,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn basic(username: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        router(state.clone()).oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, basic(TEST_USERNAME, TEST_PASSWORD))
            .body(Body::empty())
            .unwrap()
    }

    /// Two active employees and one inactive, saved in that order.
    async fn seeded_state() -> Result<(AppState, Vec<EmployeeModel>)> {
        let state = setup_test_state().await?;
        let saved = crate::core::employee::save_many(
            &state.db,
            vec![
                test_record("First"),
                test_record("Second"),
                test_record("Inactive").with_status(EmployeeStatus::Inactive),
            ],
        )
        .await?;
        Ok((state, saved))
    }

    fn update_body() -> Value {
        json!({
            "firstName": "Renamed",
            "middleInitial": "Q",
            "lastName": "Changed",
            "dateOfBirth": "1990-03-04",
            "dateOfEmployment": "2020-05-06"
        })
    }

    #[tokio::test]
    async fn test_list_returns_only_active_in_save_order() -> Result<()> {
        let (state, saved) = seeded_state().await?;

        let response = send(&state, empty_request("GET", "/employees")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, [saved[0].id, saved[1].id]);
        assert_eq!(body[0]["status"], "ACTIVE");
        assert_eq!(body[0]["firstName"], "First");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_active_and_inactive() -> Result<()> {
        let (state, saved) = seeded_state().await?;

        let response = send(&state, empty_request("GET", &format!("/employees/{}", saved[0].id))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], saved[0].id);
        assert_eq!(body["dateOfBirth"], "1985-01-02");

        let response = send(&state, empty_request("GET", &format!("/employees/{}", saved[2].id))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"response": "Resource not found"}));

        let response = send(&state, empty_request("GET", "/employees/9999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_with_non_numeric_id_is_bad_request() -> Result<()> {
        let (state, _) = seeded_state().await?;

        let response = send(&state, empty_request("GET", "/employees/abc")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = body_json(response).await;
        assert!(body["response"].as_str().unwrap().contains("abc"));

        let response = send(&state, json_request("PUT", "/employees/abc", &update_body())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["response"].is_string());

        let response = send(&state, delete("/employees/abc")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["response"].is_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_forces_active_and_assigns_id() -> Result<()> {
        let state = setup_test_state().await?;

        let mut payload = update_body();
        payload["id"] = json!(500);
        payload["status"] = json!("INACTIVE");

        let response = send(&state, json_request("POST", "/employees", &payload)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ACTIVE");
        assert_ne!(body["id"], 500);
        assert_eq!(body["firstName"], "Renamed");
        assert_eq!(body["middleInitial"], "Q");

        let id = body["id"].as_i64().unwrap();
        let stored = store::find_by_id(&state.db, id).await?.unwrap();
        assert_eq!(stored.status, EmployeeStatus::Active);
        assert!(store::find_by_id(&state.db, 500).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_bad_request() -> Result<()> {
        let state = setup_test_state().await?;

        let payload = json!({"firstName": "Missing", "dateOfBirth": "not-a-date"});
        let response = send(&state, json_request("POST", "/employees", &payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields_only() -> Result<()> {
        let (state, saved) = seeded_state().await?;
        let uri = format!("/employees/{}", saved[0].id);

        let mut payload = update_body();
        payload["id"] = json!(saved[1].id);
        payload["status"] = json!("INACTIVE");

        let response = send(&state, json_request("PUT", &uri, &payload)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], saved[0].id);
        assert_eq!(body["status"], "ACTIVE");

        let response = send(&state, empty_request("GET", &uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], saved[0].id);
        assert_eq!(body["firstName"], "Renamed");
        assert_eq!(body["middleInitial"], "Q");
        assert_eq!(body["lastName"], "Changed");
        assert_eq!(body["dateOfBirth"], "1990-03-04");
        assert_eq!(body["dateOfEmployment"], "2020-05-06");
        assert_eq!(body["status"], "ACTIVE");

        let untouched = store::find_by_id(&state.db, saved[1].id).await?.unwrap();
        assert_eq!(untouched, saved[1]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_inactive_is_not_found() -> Result<()> {
        let (state, saved) = seeded_state().await?;
        let uri = format!("/employees/{}", saved[2].id);

        let response = send(&state, json_request("PUT", &uri, &update_body())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let stored = store::find_by_id(&state.db, saved[2].id).await?.unwrap();
        assert_eq!(stored, saved[2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_requires_credentials() -> Result<()> {
        let (state, saved) = seeded_state().await?;
        let uri = format!("/employees/{}", saved[0].id);

        let response = send(&state, empty_request("DELETE", &uri)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));

        let request = Request::builder()
            .method("DELETE")
            .uri(&uri)
            .header(header::AUTHORIZATION, basic(TEST_USERNAME, "wrong"))
            .body(Body::empty())
            .unwrap();
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(&state, empty_request("DELETE", "/employees/9999")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        assert!(crate::core::employee::get_active(&state.db, saved[0].id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_role_is_forbidden() -> Result<()> {
        let (mut state, saved) = seeded_state().await?;
        let mut users = crate::config::UserStore::new();
        users
            .add_user(&test_credentials("guest", "guest"), &[])
            .unwrap();
        state.users = Arc::new(users);

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/employees/{}", saved[0].id))
            .header(header::AUTHORIZATION, basic("guest", "guest"))
            .body(Body::empty())
            .unwrap();
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_soft_deletes() -> Result<()> {
        let (state, saved) = seeded_state().await?;
        let uri = format!("/employees/{}", saved[0].id);

        let response = send(&state, delete(&uri)).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(
            body_json(response).await,
            json!({"response": "Resource deleted successfully"})
        );

        let response = send(&state, empty_request("GET", &uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let stored = store::find_by_id(&state.db, saved[0].id).await?.unwrap();
        assert_eq!(stored.status, EmployeeStatus::Inactive);
        assert_eq!(stored.first_name, saved[0].first_name);

        let response = send(&state, delete(&uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&state, delete(&format!("/employees/{}", saved[2].id))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
