//! Router tests against the shipped demo artifacts

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use wine_quality::{create_router, model::artifacts, model::ArtifactPaths, AppState};

fn artifact_paths() -> ArtifactPaths {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("artifacts");
    ArtifactPaths {
        classifier: root.join("classifier.json"),
        scaler: root.join("scaler.json"),
    }
}

fn app() -> Router {
    let predictor = artifacts::load(&artifact_paths()).expect("demo artifacts load");
    create_router(AppState { predictor: Arc::new(predictor) })
}

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_index_shows_default_form() {
    let (status, page) = send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Wine Quality Prediction App"));
    assert!(page.contains(r#"name="density""#));
    assert!(page.contains(r#"value="0.9968""#));
    assert!(!page.contains("Predicted Wine Quality"));
}

#[tokio::test]
async fn test_submit_defaults_is_average() {
    let (status, page) = send(form("")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<strong>Predicted Wine Quality:</strong> 5"));
    assert!(page.contains("Average quality wine"));
    assert!(!page.contains("🎈"));
}

#[tokio::test]
async fn test_submit_high_quality_celebrates() {
    let (status, page) = send(form("alcohol=13.00&volatile_acidity=0.30&sulphates=0.80")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<strong>Predicted Wine Quality:</strong> 7"));
    assert!(page.contains("High quality wine!"));
    assert!(page.contains("🎈"));
    assert!(page.contains(r#"value="13.00""#));
}

#[tokio::test]
async fn test_submit_low_quality() {
    let (status, page) = send(form("alcohol=9.00&volatile_acidity=1.50&sulphates=0.40")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<strong>Predicted Wine Quality:</strong> 4"));
    assert!(page.contains("Low quality wine"));
}

#[tokio::test]
async fn test_submit_out_of_range_shows_error() {
    let (status, page) = send(form("alcohol=20.00&pH=3.31")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains("Prediction failed: Alcohol must be between 5.00 and 15.00"));
    assert!(!page.contains("Predicted Wine Quality"));
}

#[tokio::test]
async fn test_submit_nan_is_out_of_range() {
    let (status, page) = send(form("alcohol=NaN")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains("Prediction failed: Alcohol must be between 5.00 and 15.00"));
    assert!(!page.contains("Predicted Wine Quality"));

    let (status, page) = send(form("density=NaN")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains("Prediction failed: Density must be between 0.9900 and 1.0100"));
}

#[tokio::test]
async fn test_submit_nan_log_field_is_bounds_error() {
    let (status, page) = send(form("chlorides=NaN")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains("Chlorides must be between 0.00 and 1.00"));
}

#[tokio::test]
async fn test_submit_blank_field_keeps_page() {
    let (status, page) = send(form("alcohol=")).await;
    assert!(status.is_client_error());
    assert!(page.contains("Wine Quality Prediction App"));
    assert!(page.contains("Prediction failed:"));
    assert!(page.contains(r#"value="10.50""#));
}

#[tokio::test]
async fn test_api_predict_defaults() {
    let (status, body) = send(json("{}")).await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["score"], 5);
    assert_eq!(value["band"], "average");
    assert_eq!(value["message"], "Average quality wine");
    assert_eq!(value["celebrate"], false);
}

#[tokio::test]
async fn test_api_predict_is_deterministic() {
    let body = r#"{"fixed_acidity": 7.4, "volatile_acidity": 0.7, "citric_acid": 0.0,
        "residual_sugar": 2.0, "chlorides": 0.08, "free_sulfur_dioxide": 15.0,
        "total_sulfur_dioxide": 46.0, "density": 0.9968, "pH": 3.31,
        "sulphates": 0.66, "alcohol": 10.5}"#;

    let (_, first) = send(json(body)).await;
    for _ in 0..5 {
        let (_, again) = send(json(body)).await;
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn test_api_predict_high_band() {
    let (_, body) = send(json(r#"{"alcohol": 13.0, "volatile_acidity": 0.3, "sulphates": 0.8}"#)).await;
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["score"], 7);
    assert_eq!(value["band"], "high");
    assert_eq!(value["celebrate"], true);
}

#[tokio::test]
async fn test_api_predict_rejects_out_of_range() {
    let (status, body) = send(json(r#"{"density": 1.2}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], 400);
    assert_eq!(value["error"], "Density must be between 0.9900 and 1.0100");
}

#[tokio::test]
async fn test_fields_table() {
    let (status, body) = send(get("/api/v1/fields")).await;
    assert_eq!(status, StatusCode::OK);

    let fields: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(fields.len(), 11);
    assert_eq!(fields[0]["key"], "fixed_acidity");
    assert_eq!(fields[7]["format"], "%.4f");
    assert_eq!(fields[8]["label"], "pH");
    assert_eq!(fields[10]["default"], 10.5);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["classes"], serde_json::json!([3, 4, 5, 6, 7, 8]));
}
