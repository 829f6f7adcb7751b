use crate::catalog::{Feature, FeatureRow, FEATURE_COUNT};
use crate::error::PipelineError;
use crate::model::pipeline::Pipeline;
use ndarray::Array1;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk form of a standardized linear model (scaler followed by a ridge
/// or ordinary least squares regressor).
#[derive(Deserialize, Debug, Clone)]
pub struct LinearModelSpec {
    pub features: Vec<String>,
    pub center: Vec<f64>,
    pub scale: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// `price = ((x - center) / scale) . coefficients + intercept`
#[derive(Debug, Clone)]
pub struct LinearPipeline {
    center: Array1<f64>,
    scale: Array1<f64>,
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearPipeline {
    pub fn from_spec(spec: LinearModelSpec) -> Result<Self, PipelineError> {
        let expected: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        if spec.features != expected {
            return Err(PipelineError::InvalidModel(format!(
                "expected features {:?}, got {:?}",
                expected, spec.features
            )));
        }

        for (name, values) in [
            ("center", &spec.center),
            ("scale", &spec.scale),
            ("coefficients", &spec.coefficients),
        ] {
            if values.len() != FEATURE_COUNT {
                return Err(PipelineError::InvalidModel(format!(
                    "{} has {} values, expected {}",
                    name,
                    values.len(),
                    FEATURE_COUNT
                )));
            }
        }

        if spec.scale.iter().any(|&s| s == 0.0 || !s.is_finite()) {
            return Err(PipelineError::InvalidModel(
                "scale values must be finite and non-zero".to_string(),
            ));
        }

        Ok(Self {
            center: Array1::from(spec.center),
            scale: Array1::from(spec.scale),
            coefficients: Array1::from(spec.coefficients),
            intercept: spec.intercept,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, PipelineError> {
        Self::from_spec(serde_json::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| PipelineError::InvalidModel(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }
}

impl Pipeline for LinearPipeline {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PipelineError> {
        let x = Array1::from(row.to_array().to_vec());
        let scaled = (x - &self.center) / &self.scale;
        Ok(scaled.dot(&self.coefficients) + self.intercept)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_JSON: &str = r#"{
        "features": ["beds", "baths", "size", "zip_code"],
        "center": [3.0, 2.0, 1200.0, 560000.0],
        "scale": [1.0, 1.0, 100.0, 1.0],
        "coefficients": [100000.0, 50000.0, 20000.0, 0.0],
        "intercept": 5000000.0
    }"#;

    fn row(beds: f64, baths: f64, size: f64, zip_code: f64) -> FeatureRow {
        FeatureRow {
            beds,
            baths,
            size,
            zip_code,
        }
    }

    #[test]
    fn test_prediction_at_center_is_intercept() {
        let pipeline = LinearPipeline::from_json(MODEL_JSON).unwrap();
        let price = pipeline.predict(&row(3.0, 2.0, 1200.0, 560000.0)).unwrap();
        assert_eq!(price, 5000000.0);
    }

    #[test]
    fn test_prediction_applies_scaling() {
        let pipeline = LinearPipeline::from_json(MODEL_JSON).unwrap();
        // +1 bed, +1 bath, +200 sqft (2 scaled units)
        let price = pipeline.predict(&row(4.0, 3.0, 1400.0, 560001.0)).unwrap();
        assert_eq!(price, 5000000.0 + 100000.0 + 50000.0 + 40000.0);
    }

    #[test]
    fn test_rejects_wrong_feature_order() {
        let json = MODEL_JSON.replace(
            r#"["beds", "baths", "size", "zip_code"]"#,
            r#"["baths", "beds", "size", "zip_code"]"#,
        );
        let result = LinearPipeline::from_json(&json);
        assert!(matches!(result, Err(PipelineError::InvalidModel(_))));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let json = MODEL_JSON.replace(
            "[100000.0, 50000.0, 20000.0, 0.0]",
            "[100000.0, 50000.0, 20000.0]",
        );
        let result = LinearPipeline::from_json(&json);
        assert!(matches!(result, Err(PipelineError::InvalidModel(_))));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let json = MODEL_JSON.replace("[1.0, 1.0, 100.0, 1.0]", "[1.0, 0.0, 100.0, 1.0]");
        let result = LinearPipeline::from_json(&json);
        assert!(matches!(result, Err(PipelineError::InvalidModel(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = LinearPipeline::from_json("{ not json");
        assert!(matches!(result, Err(PipelineError::JsonError(_))));
    }
}
