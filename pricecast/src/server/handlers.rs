use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::PredictionError;
use crate::preprocessing::form::PredictionRequest;
use crate::server::page;
use crate::server::types::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render_index(&state.catalog))
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<String, PredictionError> {
    // An unreadable body counts as a form with every field missing.
    let request = match form {
        Ok(Form(pairs)) => PredictionRequest::from_pairs(pairs),
        Err(rejection) => {
            warn!(%rejection, "unreadable prediction form, treating all fields as missing");
            PredictionRequest::default()
        }
    };

    let start = Instant::now();
    let result = state.predictor.estimate(&request);
    histogram!("pricecast_prediction_seconds").record(start.elapsed().as_secs_f64());

    match result {
        Ok(estimate) => {
            counter!("pricecast_predictions_total", "outcome" => "ok").increment(1);
            info!(row = ?estimate.row, price = estimate.price, "prediction served");
            Ok(estimate.to_string())
        }
        Err(err) => {
            let outcome = match err {
                PredictionError::PipelineUnavailable => "unavailable",
                PredictionError::InferenceFailed(_) => "failed",
            };
            counter!("pricecast_predictions_total", "outcome" => outcome).increment(1);
            warn!(error = %err, "prediction failed");
            Err(err)
        }
    }
}

pub async fn metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
