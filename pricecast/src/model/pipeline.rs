use crate::catalog::FeatureRow;
use crate::error::PipelineError;

/// A pre-trained regression pipeline: four features in, one price out.
pub trait Pipeline: Send + Sync {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PipelineError>;

    /// Short backend name used in logs.
    fn kind(&self) -> &'static str;
}
