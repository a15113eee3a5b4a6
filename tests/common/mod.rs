use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use diabetes_api::api::router::create_router;
use diabetes_api::config::AppConfig;
use diabetes_api::inference::{load_classifier, SharedClassifier};
use diabetes_api::AppState;

/// Path of the artifact shipped at the crate root.
#[allow(dead_code)]
pub fn shipped_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("diabetes_model.json")
}

#[allow(dead_code)]
pub fn shipped_model() -> SharedClassifier {
    load_classifier(shipped_model_path()).expect("Failed to load shipped model")
}

/// Router backed by the given model, or in the unavailable state for `None`.
#[allow(dead_code)]
pub fn build_test_app(model: Option<SharedClassifier>) -> Router {
    let config = AppConfig {
        port: 0,
        model_path: shipped_model_path(),
        ..AppConfig::default()
    };
    create_router(AppState::new(config, model))
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, req).await
}

#[allow(dead_code)]
async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
