pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/ats/evaluate", post(handlers::handle_evaluate))
        .route("/api/v1/ats/improve", post(handlers::handle_improve))
        .route("/api/v1/ats/match", post(handlers::handle_match))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::fake::FakeGenerator;

    fn router_with(llm: Arc<FakeGenerator>) -> Router {
        build_router(AppState { llm })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = router_with(Arc::new(FakeGenerator::replying("unused")));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_each_endpoint_uses_its_output_key() {
        for (uri, key) in [
            ("/api/v1/ats/evaluate", "analysis"),
            ("/api/v1/ats/improve", "suggestions"),
            ("/api/v1/ats/match", "result"),
        ] {
            let llm = Arc::new(FakeGenerator::replying("model text"));
            let app = router_with(llm.clone());

            let response = app
                .oneshot(post_json(
                    uri,
                    json!({"userId": "abc-123", "name": "Jane Doe", "jobDescription": "Backend role"}),
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let body = read_json(response).await;
            assert_eq!(body, json!({"userId": "abc-123", key: "model text"}), "{uri}");
            assert_eq!(llm.calls().len(), 1, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_absent_user_id_is_null() {
        let app = router_with(Arc::new(FakeGenerator::replying("72%")));
        let response = app
            .oneshot(post_json("/api/v1/ats/match", json!({"jobDescription": "Backend role"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body, json!({"userId": null, "result": "72%"}));
    }

    #[tokio::test]
    async fn test_missing_job_description_is_client_error_without_model_call() {
        for uri in ["/api/v1/ats/evaluate", "/api/v1/ats/improve", "/api/v1/ats/match"] {
            let llm = Arc::new(FakeGenerator::replying("unused"));
            let app = router_with(llm.clone());

            let response = app
                .oneshot(post_json(uri, json!({"name": "Jane Doe"})))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            let body = read_json(response).await;
            assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
            assert!(llm.calls().is_empty(), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let llm = Arc::new(FakeGenerator::replying("unused"));
        let app = router_with(llm.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ats/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let llm = Arc::new(FakeGenerator::replying("unused"));
        let app = router_with(llm.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ats/improve")
            .body(Body::from(r#"{"jobDescription": "x"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_is_server_error_with_detail() {
        let app = router_with(Arc::new(FakeGenerator::failing("model overloaded")));
        let response = app
            .oneshot(post_json(
                "/api/v1/ats/evaluate",
                json!({"userId": "u-1", "jobDescription": "Backend role"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Gemini error: "));
        assert!(message.contains("model overloaded"));
        assert!(body.get("analysis").is_none());
    }

    #[tokio::test]
    async fn test_rendered_resume_reaches_the_model() {
        let llm = Arc::new(FakeGenerator::replying("ok"));
        let app = router_with(llm.clone());

        app.oneshot(post_json(
            "/api/v1/ats/improve",
            json!({
                "name": "Jane Doe",
                "experience": [{}],
                "jobDescription": "Backend role"
            }),
        ))
        .await
        .unwrap();

        let calls = llm.calls();
        assert_eq!(calls[0][1], "\n[RESUME]\nName: Jane Doe\nExperience:\n - Experience");
        assert_eq!(calls[0][2], "\n[JOB_DESCRIPTION]\nBackend role");
    }
}
