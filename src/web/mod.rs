pub mod routes;

use crate::core::dispatcher::Dispatcher;
use crate::core::Predictor;
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers. The dispatcher (and the model
/// behind it) is read-only for the life of the process.
pub struct AppState<P: Predictor> {
    dispatcher: Arc<Dispatcher<P>>,
    started_at: DateTime<Utc>,
}

impl<P: Predictor> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            started_at: self.started_at,
        }
    }
}

impl<P: Predictor> AppState<P> {
    pub fn new(dispatcher: Dispatcher<P>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            started_at: Utc::now(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<P> {
        &self.dispatcher
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

pub fn build_router<P: Predictor + 'static>(state: AppState<P>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::liveness))
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness::<P>))
        .route("/api/v1/predict", post(routes::predict::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve<P: Predictor + 'static>(listener: TcpListener, state: AppState<P>) -> Result<()> {
    let app = build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
