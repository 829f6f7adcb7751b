use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const PIPELINE_UNAVAILABLE_MESSAGE: &str =
    "Model pipeline not loaded properly. Please check the model file.";
pub const INFERENCE_FAILED_MESSAGE: &str =
    "An error occurred during prediction. Please check your input values.";

/// Failures while loading the reference dataset. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset contains no rows")]
    Empty,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Model not found at path: {0}")]
    ModelNotFound(String),

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Invalid model definition: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unsupported model inputs: {0:?}")]
    UnsupportedInputs(Vec<String>),

    #[error("Model produced no output")]
    EmptyOutput,

    #[error("Model session lock poisoned")]
    Poisoned,
}

/// Outcome of a failed prediction request.
///
/// The variants carry diagnostics for the logs; callers only ever see the
/// fixed message of the variant.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Pipeline was not loaded at startup")]
    PipelineUnavailable,

    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

impl PredictionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PredictionError::PipelineUnavailable => PIPELINE_UNAVAILABLE_MESSAGE,
            PredictionError::InferenceFailed(_) => INFERENCE_FAILED_MESSAGE,
        }
    }
}

impl From<PipelineError> for PredictionError {
    fn from(err: PipelineError) -> Self {
        PredictionError::InferenceFailed(err.to_string())
    }
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.user_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_error() {
        let error = PipelineError::ModelNotFound("test_path".to_string());
        assert_eq!(error.to_string(), "Model not found at path: test_path");
    }

    #[test]
    fn test_catalog_empty_error() {
        assert_eq!(CatalogError::Empty.to_string(), "Dataset contains no rows");
    }

    #[test]
    fn test_ort_error_conversion() {
        let ort_error = ort::Error::new("test error");
        let pipeline_error = PipelineError::from(ort_error);
        match pipeline_error {
            PipelineError::OrtError(_) => {}
            _ => panic!("Expected OrtError"),
        }
    }

    #[test]
    fn test_pipeline_error_becomes_inference_failure() {
        let error = PredictionError::from(PipelineError::EmptyOutput);
        match &error {
            PredictionError::InferenceFailed(reason) => {
                assert_eq!(reason, "Model produced no output")
            }
            _ => panic!("Expected InferenceFailed"),
        }
        assert_eq!(error.user_message(), INFERENCE_FAILED_MESSAGE);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            PredictionError::PipelineUnavailable.user_message(),
            "Model pipeline not loaded properly. Please check the model file."
        );
        assert_eq!(
            PredictionError::InferenceFailed("boom".into()).user_message(),
            "An error occurred during prediction. Please check your input values."
        );
    }

    #[tokio::test]
    async fn test_into_response_is_plain_text_ok() {
        let response = PredictionError::InferenceFailed("shape".into()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[axum::http::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], INFERENCE_FAILED_MESSAGE.as_bytes());
    }
}
