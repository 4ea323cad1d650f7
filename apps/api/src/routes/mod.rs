pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::engine::handlers as engine_handlers;
use crate::history::handlers as history_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route("/api/v1/careers", get(engine_handlers::handle_list_careers))
        .route("/api/v1/recommend", post(engine_handlers::handle_recommend))
        // Resume API
        .route(
            "/api/v1/resume/upload",
            post(resume_handlers::handle_resume_upload)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        // History API
        .route("/api/v1/history", get(history_handlers::handle_list_history))
        .route(
            "/api/v1/history/:id",
            delete(history_handlers::handle_delete_history),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::auth::tests::{token_for, valid_token};

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn ml_request() -> Value {
        json!({
            "skills": ["python", "math", "machine learning"],
            "interests": ["ai", "technology"],
            "career_mode": "growth",
            "risk_preference": "high"
        })
    }

    fn bearer(request: Request<Body>, token: &str) -> Request<Body> {
        let (mut parts, body) = request.into_parts();
        parts.headers.insert(
            "authorization",
            format!("Bearer {token}").parse().unwrap(),
        );
        Request::from_parts(parts, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_catalog_size() {
        let router = build_router(AppState::for_tests());
        let request = get("/health");
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["careers"], 8);
    }

    #[tokio::test]
    async fn test_recommend_returns_primary_and_backup() {
        let router = build_router(AppState::for_tests());
        let (status, body) = send(router, post_json("/api/v1/recommend", ml_request())).await;

        assert_eq!(status, StatusCode::OK);
        let primary = &body["primary_recommendation"];
        assert_eq!(primary["career"], "Machine Learning Engineer");
        assert_eq!(primary["score_breakdown"]["skill_score"], 35.0);
        assert_eq!(primary["average_salary_lpa"], 15.0);
        assert!(primary["career_roadmap"]["Phase 4 (9-12 Months)"].is_array());
        assert!(body["backup_recommendation"]["career"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_enum_is_bad_request() {
        let router = build_router(AppState::for_tests());
        let mut request = ml_request();
        request["risk_preference"] = json!("reckless");

        let (status, body) = send(router, post_json("/api/v1/recommend", request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let router = build_router(AppState::for_tests());
        let request = json!({ "skills": ["python"], "career_mode": "growth", "risk_preference": "low" });

        let (status, body) = send(router, post_json("/api/v1/recommend", request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("interests"));
    }

    #[tokio::test]
    async fn test_wrongly_typed_field_is_json_bad_request() {
        let router = build_router(AppState::for_tests());
        let mut request = ml_request();
        request["skills"] = json!("python");

        let (status, body) = send(router, post_json("/api/v1/recommend", request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("skills"));
    }

    #[tokio::test]
    async fn test_recommendation_history_round_trip() {
        let state = AppState::for_tests();
        let user_id = Uuid::new_v4();
        let token = valid_token(user_id);

        let (status, _) = send(
            build_router(state.clone()),
            bearer(post_json("/api/v1/recommend", ml_request()), &token),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            build_router(state.clone()),
            bearer(get("/api/v1/history"), &token),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let history = body["history"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["user_id"], user_id.to_string());
        assert_eq!(history[0]["primary_career"], "Machine Learning Engineer");
        assert_eq!(history[0]["skills"], "machine learning, math, python");

        let id = history[0]["id"].as_str().unwrap().to_string();
        let remove = |id: &str| {
            let request = Request::delete(format!("/api/v1/history/{id}"))
                .body(Body::empty())
                .unwrap();
            bearer(request, &token)
        };
        let (status, _) = send(build_router(state.clone()), remove(&id)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(build_router(state), remove(&id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_anonymous_recommendation_is_not_stored() {
        let state = AppState::for_tests();
        let (status, _) = send(
            build_router(state.clone()),
            post_json("/api/v1/recommend", ml_request()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(state.history.list(Uuid::nil()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_requires_token() {
        let router = build_router(AppState::for_tests());
        let (status, body) = send(router, get("/api/v1/history")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_forged_token_rejected_everywhere() {
        let state = AppState::for_tests();
        let user_id = Uuid::new_v4();
        let forged = token_for(user_id, "guessed-secret", u64::MAX / 2);

        let (status, _) = send(
            build_router(state.clone()),
            bearer(get("/api/v1/history"), &forged),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            build_router(state.clone()),
            bearer(post_json("/api/v1/recommend", ml_request()), &forged),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(state.history.list(user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_rejected() {
        let router = build_router(AppState::for_tests());
        let request = Request::get("/api/v1/history")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_cannot_delete_another_users_record() {
        let state = AppState::for_tests();
        let owner = valid_token(Uuid::new_v4());
        let intruder = valid_token(Uuid::new_v4());

        send(
            build_router(state.clone()),
            bearer(post_json("/api/v1/recommend", ml_request()), &owner),
        )
        .await;
        let (_, body) = send(
            build_router(state.clone()),
            bearer(get("/api/v1/history"), &owner),
        )
        .await;
        let id = body["history"][0]["id"].as_str().unwrap().to_string();

        let (_, listed) = send(
            build_router(state.clone()),
            bearer(get("/api/v1/history"), &intruder),
        )
        .await;
        assert!(listed["history"].as_array().unwrap().is_empty());

        let request = Request::delete(format!("/api/v1/history/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(build_router(state.clone()), bearer(request, &intruder)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(build_router(state), bearer(get("/api/v1/history"), &owner)).await;
        assert_eq!(body["history"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_history_id_is_json_bad_request() {
        let router = build_router(AppState::for_tests());
        let request = Request::delete("/api/v1/history/not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, bearer(request, &valid_token(Uuid::new_v4()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_careers_listing_in_catalog_order() {
        let router = build_router(AppState::for_tests());
        let request = get("/api/v1/careers");
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Machine Learning Engineer");
        assert_eq!(body.as_array().unwrap().len(), 8);
    }

    fn multipart_upload(field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        let boundary = "careermatrix-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::post("/api/v1/resume/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let router = build_router(AppState::for_tests());
        let request = multipart_upload("file", "resume.txt", b"Python, SQL, Docker");
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Uploaded file is not a PDF");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_rejected() {
        let router = build_router(AppState::for_tests());
        let request = multipart_upload("attachment", "resume.pdf", b"%PDF-1.4");
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("'file'"));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_payload_too_large() {
        let state = AppState::for_tests();
        let mut content = b"%PDF-1.4\n".to_vec();
        content.resize(state.config.max_upload_bytes + 1024, b'a');

        let router = build_router(state);
        let (status, body) = send(router, multipart_upload("file", "resume.pdf", &content)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }
}
