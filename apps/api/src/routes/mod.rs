pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profiles::handlers as profiles;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill analysis
        .route("/api/v1/skills/analyze", post(skills::handle_analyze))
        .route("/api/v1/skills/career-paths", get(skills::handle_career_paths))
        // Skill profiles
        .route(
            "/api/v1/profiles/skills",
            get(profiles::handle_get_skill_profile).put(profiles::handle_save_skill_profile),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::{Config, DEFAULT_MAX_SKILLS};
    use crate::profiles::store::memory::InMemoryProfileStore;

    fn test_router() -> Router {
        let state = AppState {
            config: Config {
                database_url: "postgres://unused".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                max_skills: DEFAULT_MAX_SKILLS,
            },
            profiles: Arc::new(InMemoryProfileStore::default()),
        };
        build_router(state)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let router = test_router();
        let req = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_result() {
        let router = test_router();
        let req = json_request(
            Method::POST,
            "/api/v1/skills/analyze",
            json!({
                "skills": ["JavaScript", "Python"],
                "proficiency": {"JavaScript": 3, "python": 2}
            }),
        );
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["weaknesses"], json!(["javascript", "python"]));
        assert_eq!(body["strengths"], json!([]));
    }

    #[tokio::test]
    async fn test_analyze_without_proficiency_uses_defaults() {
        let router = test_router();
        let req = json_request(
            Method::POST,
            "/api/v1/skills/analyze",
            json!({"skills": ["knitting"]}),
        );
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 30);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_rejects_bad_proficiency() {
        let router = test_router();
        let req = json_request(
            Method::POST,
            "/api/v1/skills/analyze",
            json!({"skills": ["python"], "proficiency": {"python": 42}}),
        );
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_profile_save_rejects_case_duplicate_proficiency() {
        let router = test_router();
        let user_id = Uuid::new_v4();
        let req = json_request(
            Method::PUT,
            "/api/v1/profiles/skills",
            json!({
                "user_id": user_id,
                "skills": ["python"],
                "proficiency": {"Python": 2, "python": 9}
            }),
        );
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let uri = format!("/api/v1/profiles/skills?user_id={user_id}");
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let (status, _) = send(&router, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_career_paths_listed_in_registry_order() {
        let router = test_router();
        let req = Request::get("/api/v1/skills/career-paths")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Frontend Developer");
        assert_eq!(body[0]["primary_skills"][0], "javascript");
    }

    #[tokio::test]
    async fn test_profile_missing_is_404() {
        let router = test_router();
        let uri = format!("/api/v1/profiles/skills?user_id={}", Uuid::new_v4());
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_profile_save_then_get() {
        let router = test_router();
        let user_id = Uuid::new_v4();

        let save = json_request(
            Method::PUT,
            "/api/v1/profiles/skills",
            json!({
                "user_id": user_id,
                "skills": ["javascript", "python", "react"],
                "proficiency": {"javascript": 8, "python": 9, "react": 7}
            }),
        );
        let (status, saved) = send(&router, save).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["skill_score"], 89);
        assert_eq!(saved["analysis"]["score"], 89);

        let uri = format!("/api/v1/profiles/skills?user_id={user_id}");
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let (status, fetched) = send(&router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["skills"], json!(["javascript", "python", "react"]));
        assert_eq!(fetched["proficiency"]["python"], 9);
    }
}
