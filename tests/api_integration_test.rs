use realty_predict::web::{self, AppState};
use realty_predict::{Dispatcher, LinearModel, FEATURE_COLUMNS};
use serde_json::json;

fn intercept_only_model(intercept: f64) -> LinearModel {
    LinearModel {
        feature_names: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
        coefficients: vec![0.0; 5],
        intercept,
    }
}

async fn spawn_server(model: LinearModel) -> String {
    let state = AppState::new(Dispatcher::new(model));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        web::serve(listener, state).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_index_serves_the_form() {
    let base = spawn_server(intercept_only_model(42.0)).await;

    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();

    assert!(body.contains("Real Estate Price Prediction"));
    for id in [
        "house_age",
        "distance_to_mrt",
        "num_convenience_stores",
        "latitude",
        "longitude",
        "predict_button",
        "prediction_output",
    ] {
        assert!(body.contains(&format!("id=\"{}\"", id)), "missing id {}", id);
    }
}

#[tokio::test]
async fn test_predict_endpoint_full_input() {
    let base = spawn_server(intercept_only_model(123.456)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/predict", base))
        .json(&json!({
            "clicks": 1,
            "house_age": 8.5,
            "distance_to_mrt": 104.81,
            "num_convenience_stores": 5,
            "latitude": 24.96674,
            "longitude": 121.54067
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Predicted House Price of Unit Area: 123.46"
    );
}

#[tokio::test]
async fn test_predict_endpoint_missing_field() {
    let base = spawn_server(intercept_only_model(123.456)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/predict", base))
        .json(&json!({
            "clicks": 2,
            "house_age": 8.5,
            "distance_to_mrt": null,
            "num_convenience_stores": 5,
            "latitude": 24.96674,
            "longitude": 121.54067
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Please enter all values to get a prediction");
}

#[tokio::test]
async fn test_predict_endpoint_before_first_click() {
    let base = spawn_server(intercept_only_model(123.456)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/predict", base))
        .json(&json!({ "clicks": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "");
}

#[tokio::test]
async fn test_predict_endpoint_model_failure_is_a_display_string() {
    let mut model = intercept_only_model(1.0);
    model.feature_names[2] = "Number of schools".to_string();
    let base = spawn_server(model).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/predict", base))
        .json(&json!({
            "clicks": 1,
            "house_age": 8.5,
            "distance_to_mrt": 104.81,
            "num_convenience_stores": 5,
            "latitude": 24.96674,
            "longitude": 121.54067
        }))
        .send()
        .await
        .unwrap();

    // contract: failures come back as 200 with a display string
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error during prediction: "));
    assert!(message.contains("Number of schools"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let base = spawn_server(intercept_only_model(42.0)).await;

    let live: serde_json::Value = reqwest::get(format!("{}/health/live", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(live["status"], "alive");

    let ready: serde_json::Value = reqwest::get(format!("{}/health/ready", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["status"], "ready");
    assert!(ready["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_readiness_degrades_with_broken_model() {
    let mut model = intercept_only_model(42.0);
    model.feature_names[0] = "Lot size".to_string();
    let base = spawn_server(model).await;

    let ready: serde_json::Value = reqwest::get(format!("{}/health/ready", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["status"], "degraded");
}
