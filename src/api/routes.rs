//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::routing::{get, post};
use axum::{Router, middleware};

use crate::api::handlers::{health, notify};
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `POST /` and `POST /notify` - dispatch a notification with the raw
///   request body as message text
/// - `GET /health` - health check
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first), so request IDs exist before the logging middleware runs.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(notify::dispatch_notification))
        .route("/notify", post(notify::dispatch_notification))
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DispatchSettings, MessageOptions, Profile};
    use crate::error::{AppError, AppResult};
    use crate::services::DispatchService;
    use crate::services::pushover::{Message, ProviderResponse, PushProvider};
    use async_trait::async_trait;
    use axum::body::{Body, Bytes};
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tower::ServiceExt;

    struct MockProvider {
        send_count: AtomicU64,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl PushProvider for MockProvider {
        async fn send(
            &self,
            _app_token: &str,
            _recipient_token: &str,
            _message: &Message,
        ) -> AppResult<ProviderResponse> {
            self.send_count.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = &self.fail_with {
                return Err(AppError::Send {
                    source: anyhow::anyhow!("{}", error),
                });
            }
            Ok(ProviderResponse {
                status: 1,
                request_id: "req-1".to_string(),
                receipt: None,
            })
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    fn test_state(
        settings: DispatchSettings,
        fail_with: Option<&str>,
    ) -> (AppState, Arc<MockProvider>) {
        let provider = Arc::new(MockProvider {
            send_count: AtomicU64::new(0),
            fail_with: fail_with.map(String::from),
        });
        let state = AppState::new(DispatchService::new(settings, provider.clone()));
        (state, provider)
    }

    fn credentials(profile: Profile) -> DispatchSettings {
        DispatchSettings {
            profile,
            app_token: "app-token".to_string(),
            recipient_token: "recipient-key".to_string(),
            options: MessageOptions::default(),
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_success() {
        let (state, provider) = test_state(credentials(Profile::Full), None);
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::post("/")
                    .body(Body::from("Server down"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("request id: req-1"));
        assert_eq!(provider.send_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_missing_credentials() {
        let (state, provider) = test_state(DispatchSettings::default(), None);
        let router = create_router(state);

        let response = router
            .oneshot(Request::post("/notify").body(Body::from("hello")).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "PUSHOVER_APP_TOKEN and PUSHOVER_RECIPIENT_TOKEN environment variables must be set"
        );
        assert_eq!(provider.send_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dispatch_body_read_failure() {
        let (state, provider) = test_state(credentials(Profile::Full), None);
        let router = create_router(state);

        let stream = futures::stream::iter(vec![Err::<Bytes, std::io::Error>(
            std::io::Error::other("simulated read failure"),
        )]);

        let response = router
            .oneshot(
                Request::post("/")
                    .body(Body::from_stream(stream))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_text(response).await;
        assert!(text.starts_with("Error reading input:"));
        assert!(text.contains("simulated read failure"));
        assert_eq!(provider.send_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dispatch_provider_failure() {
        let (state, provider) = test_state(
            credentials(Profile::Full),
            Some("user identifier is invalid"),
        );
        let router = create_router(state);

        let response = router
            .oneshot(Request::post("/").body(Body::from("hello")).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "Error sending message: user identifier is invalid"
        );
        assert_eq!(provider.send_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_response_carries_request_id_header() {
        let (state, _provider) = test_state(credentials(Profile::Full), None);
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::post("/")
                    .header("x-request-id", "trace-me")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "trace-me"
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (state, _provider) = test_state(DispatchSettings::default(), None);
        let router = create_router(state);

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("\"status\":\"ok\""));
    }
}
