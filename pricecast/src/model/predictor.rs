use crate::catalog::{Catalog, FeatureRow};
use crate::error::PredictionError;
use crate::model::pipeline::Pipeline;
use crate::preprocessing::form::{assemble_row, PredictionRequest};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A successful price estimate together with the row that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub row: FeatureRow,
    pub price: f64,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price: INR {:?}", self.price)
    }
}

/// Turns raw form input into a price estimate.
///
/// Holds the catalog and the pipeline loaded at startup. `pipeline` is
/// `None` when loading failed; every estimate then reports the pipeline as
/// unavailable.
#[derive(Clone)]
pub struct Predictor {
    catalog: Arc<Catalog>,
    pipeline: Option<Arc<dyn Pipeline>>,
}

impl Predictor {
    pub fn new(catalog: Arc<Catalog>, pipeline: Option<Arc<dyn Pipeline>>) -> Self {
        Self { catalog, pipeline }
    }

    pub fn is_ready(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn estimate(&self, request: &PredictionRequest) -> Result<Estimate, PredictionError> {
        let pipeline = self
            .pipeline
            .as_ref()
            .ok_or(PredictionError::PipelineUnavailable)?;

        debug!(?request, "raw input");
        let row = assemble_row(request, &self.catalog);
        debug!(?row, "assembled input");

        if !row.is_finite() {
            return Err(PredictionError::InferenceFailed(format!(
                "input contains non-finite values: {:?}",
                row.to_array()
            )));
        }

        let price = pipeline.predict(&row)?;
        Ok(Estimate { row, price })
    }
}
