use crate::catalog::Catalog;
use crate::model::Predictor;
use std::sync::Arc;

/// Shared Application State
///
/// Everything here is loaded once before the server starts and only read
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub predictor: Predictor,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, predictor: Predictor) -> Self {
        Self { catalog, predictor }
    }
}
