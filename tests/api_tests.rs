mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use diabetes_api::inference::{Classifier, FeatureMatrix, ModelError, SharedClassifier};

const SAMPLE: &str = r#"{"features":[6,148,72,35,0,33.6,0.627,50]}"#;

/// Fails every call, standing in for a classifier that breaks at runtime.
#[derive(Debug)]
struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn kind(&self) -> &'static str {
        "broken"
    }

    fn n_features(&self) -> usize {
        8
    }

    fn classify_probability(&self, _batch: &FeatureMatrix) -> Result<Vec<[f64; 2]>, ModelError> {
        Err(ModelError::InvalidOutput)
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let (status, json) = common::get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["model_loaded"], true);
}

#[tokio::test]
async fn test_root() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let (status, json) = common::get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Diabetes Prediction API");
    assert_eq!(json["status"], "running");
    assert_eq!(json["model_loaded"], true);
}

#[tokio::test]
async fn test_status_endpoints_without_model() {
    let (status, json) = common::get(common::build_test_app(None), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["model_loaded"], false);

    let (status, json) = common::get(common::build_test_app(None), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model_loaded"], false);
}

#[tokio::test]
async fn test_predict_sample_patient() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let (status, json) = common::post_json(app, "/predict", SAMPLE).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"], 1);
    assert_eq!(json["probability"], 0.723);
    assert_eq!(json["risk_level"], "High");
}

#[tokio::test]
async fn test_predict_low_and_medium_risk() {
    let model = common::shipped_model();

    let (status, json) = common::post_json(
        common::build_test_app(Some(model.clone())),
        "/predict",
        r#"{"features":[1,85,66,29,0,26.6,0.351,31]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"], 0);
    assert_eq!(json["probability"], 0.049);
    assert_eq!(json["risk_level"], "Low");

    let (status, json) = common::post_json(
        common::build_test_app(Some(model)),
        "/predict",
        r#"{"features":[4,125,70,30,0,35,0.5,40]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"], 0);
    assert_eq!(json["probability"], 0.446);
    assert_eq!(json["risk_level"], "Medium");
}

#[tokio::test]
async fn test_predict_wrong_feature_count() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let (status, json) = common::post_json(app, "/predict", r#"{"features":[1,2,3]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Expected 8 features, got 3");
}

#[tokio::test]
async fn test_predict_empty_features() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let (status, json) = common::post_json(app, "/predict", r#"{"features":[]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Expected 8 features, got 0");
}

#[tokio::test]
async fn test_predict_without_model() {
    for body in [SAMPLE, r#"{"features":[1,2,3]}"#] {
        let app = common::build_test_app(None);
        let (status, json) = common::post_json(app, "/predict", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Model not loaded");
    }
}

#[tokio::test]
async fn test_predict_classifier_failure() {
    let model: SharedClassifier = std::sync::Arc::new(BrokenClassifier);
    let app = common::build_test_app(Some(model));
    let (status, json) = common::post_json(app, "/predict", SAMPLE).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json["detail"],
        "Prediction error: classifier produced an invalid probability"
    );
}

#[tokio::test]
async fn test_predict_malformed_body() {
    let model = common::shipped_model();
    for body in [
        r#"{"features":["six",148,72,35,0,33.6,0.627,50]}"#,
        r#"{"values":[1,2,3]}"#,
        "not json",
    ] {
        let (status, json) =
            common::post_json(common::build_test_app(Some(model.clone())), "/predict", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        assert!(json["detail"].is_string());
    }
}

#[tokio::test]
async fn test_predict_is_idempotent() {
    let model = common::shipped_model();
    let mut bodies = Vec::new();

    for _ in 0..2 {
        let req = Request::builder()
            .method("POST")
            .uri("/predict")
            .header("content-type", "application/json")
            .body(Body::from(SAMPLE))
            .unwrap();
        let resp = common::build_test_app(Some(model.clone()))
            .oneshot(req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        bodies.push(axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap());
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let app = common::build_test_app(None);
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/predict")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let headers = resp.headers();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:5173");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(headers["access-control-allow-headers"], "content-type");
}

#[tokio::test]
async fn test_predict_coerces_numeric_strings() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let body = r#"{"features":["6","148","72","35","0","33.6","0.627","50"]}"#;
    let (status, json) = common::post_json(app, "/predict", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"], 1);
    assert_eq!(json["probability"], 0.723);
    assert_eq!(json["risk_level"], "High");
}

#[tokio::test]
async fn test_predict_coerces_booleans() {
    let app = common::build_test_app(Some(common::shipped_model()));
    // `true` counts as one pregnancy.
    let body = r#"{"features":[true,148,72,35,0,33.6,0.627,50]}"#;
    let (status, json) = common::post_json(app, "/predict", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"], 1);
    assert_eq!(json["probability"], 0.585);
    assert_eq!(json["risk_level"], "Medium");
}

#[tokio::test]
async fn test_predict_out_of_range_number_is_rejected() {
    let app = common::build_test_app(Some(common::shipped_model()));
    let body = r#"{"features":[6,148,72,35,0,33.6,0.627,1e400]}"#;
    let (status, json) = common::post_json(app, "/predict", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].as_str().unwrap().contains("number out of range"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = common::build_test_app(None);
    let (status, json) = common::get(app, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["openapi"], "3.0.3");
    assert_eq!(json["info"]["title"], "Diabetes Prediction API");
    for path in ["/", "/health", "/predict"] {
        assert!(json["paths"][path].is_object(), "missing path {path}");
    }

    let predict = &json["paths"]["/predict"]["post"];
    let example = &predict["requestBody"]["content"]["application/json"]["example"];
    assert_eq!(example["features"].as_array().unwrap().len(), 8);
    assert_eq!(example["features"][1], 148.0);
    for code in ["200", "400", "422", "500"] {
        assert!(predict["responses"][code].is_object(), "missing response {code}");
    }
    assert!(json["components"]["schemas"]["PredictionResult"].is_object());
}

#[tokio::test]
async fn test_docs_page_loads_schema() {
    let app = common::build_test_app(None);
    let req = Request::builder().uri("/docs").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"url: "/openapi.json""#));
}
