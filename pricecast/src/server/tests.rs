#[cfg(test)]
mod handler_tests {
    use crate::catalog::{Catalog, FeatureRow};
    use crate::error::{PipelineError, INFERENCE_FAILED_MESSAGE, PIPELINE_UNAVAILABLE_MESSAGE};
    use crate::model::{Pipeline, Predictor};
    use crate::server::{handlers, types::AppState};
    use axum::extract::State;
    use axum::response::IntoResponse;
    use axum::Form;
    use std::sync::Arc;

    struct FixedPipeline(f64);

    impl Pipeline for FixedPipeline {
        fn predict(&self, _row: &FeatureRow) -> Result<f64, PipelineError> {
            Ok(self.0)
        }

        fn kind(&self) -> &'static str {
            "fixed"
        }
    }

    struct BrokenPipeline;

    impl Pipeline for BrokenPipeline {
        fn predict(&self, _row: &FeatureRow) -> Result<f64, PipelineError> {
            Err(PipelineError::UnsupportedInputs(vec!["input".to_string()]))
        }

        fn kind(&self) -> &'static str {
            "broken"
        }
    }

    fn state(pipeline: Option<Arc<dyn Pipeline>>) -> Arc<AppState> {
        let csv = "beds,baths,size,zip_code,price\n3,2,1200,560001,5000000\n2,1,900,560002,3000000\n4,3,1800,560003,8000000\n";
        let catalog = Arc::new(Catalog::from_reader(csv.as_bytes()).unwrap());
        let predictor = Predictor::new(catalog.clone(), pipeline);
        Arc::new(AppState::new(catalog, predictor))
    }

    fn form(beds: &str) -> Form<Vec<(String, String)>> {
        Form(
            [("beds", beds), ("baths", "2"), ("size", "1200"), ("zip_code", "560001")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_handler() {
        let response = handlers::health_check().await;
        assert_eq!(response, "OK");
    }

    #[tokio::test]
    async fn test_index_handler_renders_options() {
        let html = handlers::index(State(state(None))).await;
        assert!(html.0.contains("<option value=\"900\">900</option>"));
        assert!(html.0.contains("name=\"zip_code\""));
    }

    #[tokio::test]
    async fn test_predict_handler_success() {
        let state = state(Some(Arc::new(FixedPipeline(6125000.25))));
        let result = handlers::predict(State(state), Ok(form("3"))).await;
        assert_eq!(result.unwrap(), "Price: INR 6125000.25");
    }

    #[tokio::test]
    async fn test_predict_handler_without_pipeline() {
        for beds in ["3", "", "abc"] {
            let result = handlers::predict(State(state(None)), Ok(form(beds))).await;
            let response = result.into_response();
            assert_eq!(body_text(response).await, PIPELINE_UNAVAILABLE_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_predict_handler_inference_error() {
        let state = state(Some(Arc::new(BrokenPipeline)));
        let result = handlers::predict(State(state), Ok(form("3"))).await;
        assert!(result.is_err());

        let response = result.into_response();
        assert!(response.status().is_success());
        assert_eq!(body_text(response).await, INFERENCE_FAILED_MESSAGE);
    }
}
