use crate::server::{handlers, types::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

pub fn create_router(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    let metrics: Router = Router::new()
        .route("/metrics", get(handlers::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health_check))
        .with_state(Arc::new(state))
        .merge(metrics)
}
