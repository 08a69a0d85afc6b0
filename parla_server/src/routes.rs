//! Router assembly and request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, header};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use parla_core::{Intent, Payload};
use parla_session::{Session, SessionStore};

use crate::error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Response of `POST /api/chat`: the dispatch result plus the session id the
/// turn ran under, so first-time callers can keep it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Payload>,
    pub intent: Intent,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Build the API router. CORS is restricted to `frontend_url` when
/// configured (GET and POST, as the original deployment allows), permissive
/// otherwise.
pub fn router(state: AppState, frontend_url: Option<&str>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/session/:session_id", get(get_session))
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(frontend_url)),
        )
        .with_state(state)
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    frontend_url
        .and_then(|url| url.parse::<HeaderValue>().ok())
        .map_or_else(
            || {
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            },
            |origin| {
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
            },
        )
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request
        .message
        .filter(|message| !message.trim().is_empty())
        .ok_or(ApiError::MissingMessage)?;

    let session_id = state.sessions.get_or_create(request.session_id).await;
    let result = state
        .sessions
        .process_message(session_id, &message)
        .await
        .ok_or(ApiError::SessionNotFound)?;

    Ok(Json(ChatResponse {
        session_id,
        response: result.response,
        additional_data: result.additional_data,
        intent: result.intent,
    }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    state
        .sessions
        .get(session_id)
        .await
        .map(Json)
        .ok_or(ApiError::SessionNotFound)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use parla_content::ContentStore;
    use tower::ServiceExt;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn app() -> Router {
        let content = Arc::new(ContentStore::load_default().expect("embedded tables should load"));
        let state = AppState {
            sessions: Arc::new(SessionStore::new(content)),
        };
        router(state, None)
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build")
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("handler should respond");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn chat_without_message_is_bad_request() {
        let response = app()
            .oneshot(chat_request("{}"))
            .await
            .expect("handler should respond");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Message not found.");
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn chat_creates_a_session_and_dispatches() {
        let app = app();

        let response = app
            .oneshot(chat_request(r#"{"message": "vocabulary family"}"#))
            .await
            .expect("handler should respond");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["intent"], "vocabulary");
        assert_eq!(json["additionalData"]["type"], "vocabulary");
        assert_eq!(json["additionalData"]["data"]["category"], "La Famiglia");
        assert!(json["sessionId"].is_string());
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn session_snapshot_round_trip() {
        let content = Arc::new(ContentStore::load_default().expect("embedded tables should load"));
        let sessions = Arc::new(SessionStore::new(content));
        let state = AppState {
            sessions: Arc::clone(&sessions),
        };

        let response = router(state.clone(), None)
            .oneshot(chat_request(r#"{"message": "hello"}"#))
            .await
            .expect("handler should respond");
        let json = body_json(response).await;
        let session_id = json["sessionId"].as_str().expect("session id").to_string();

        let response = router(state, None)
            .oneshot(
                Request::builder()
                    .uri(format!("/api/session/{session_id}"))
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("handler should respond");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["messages"].as_array().map(Vec::len),
            Some(2),
            "one user and one bot message"
        );
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn unknown_session_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/session/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("handler should respond");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
