use crate::error::PipelineError;
use crate::model::linear::LinearPipeline;
use crate::model::onnx::OnnxPipeline;
use crate::model::pipeline::Pipeline;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Loads a serialized pipeline from disk, choosing the backend from the
/// file extension.
///
/// # Arguments
/// * `model_path` - Path to a `.onnx` graph or a `.json` linear model
pub fn load_pipeline(model_path: impl AsRef<Path>) -> Result<Arc<dyn Pipeline>, PipelineError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(PipelineError::ModelNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let pipeline: Arc<dyn Pipeline> = match extension.as_deref() {
        Some("onnx") => Arc::new(OnnxPipeline::load(path)?),
        Some("json") => Arc::new(LinearPipeline::load(path)?),
        _ => return Err(PipelineError::UnsupportedFormat(path.display().to_string())),
    };

    info!(path = %path.display(), kind = pipeline.kind(), "pipeline ready");
    Ok(pipeline)
}
