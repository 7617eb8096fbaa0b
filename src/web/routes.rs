use crate::core::{FeatureInput, FeatureVector, Predictor};
use crate::web::AppState;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

/// One submit action from the page: the client-side click counter plus the
/// five form values, each of which may still be empty.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub clicks: u64,
    #[serde(flatten)]
    pub features: FeatureInput,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub message: String,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

/// Always answers 200 with a display string; failures never escape to the
/// caller as HTTP errors.
pub async fn predict<P: Predictor + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let message = state
        .dispatcher()
        .handle(request.clicks, &request.features)
        .await;

    Json(PredictResponse { message })
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the loaded model answer a prediction?
pub async fn readiness<P: Predictor + 'static>(
    State(state): State<AppState<P>>,
) -> Json<serde_json::Value> {
    let probe = FeatureVector {
        house_age: 10.0,
        distance_to_mrt: 250.0,
        num_convenience_stores: 5,
        latitude: 24.98,
        longitude: 121.54,
    };

    let status = match state.dispatcher().predictor().predict(&probe).await {
        Ok(_) => "ready",
        Err(e) => {
            tracing::warn!("Readiness probe prediction failed: {}", e);
            "degraded"
        }
    };

    Json(serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at().to_rfc3339(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
