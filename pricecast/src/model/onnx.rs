use crate::catalog::{Feature, FeatureRow, FEATURE_COUNT};
use crate::error::PipelineError;
use crate::model::pipeline::Pipeline;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{DynValue, Tensor};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// How the exported graph expects its features.
#[derive(Debug, Clone, PartialEq)]
pub enum InputLayout {
    /// A single `[1, 4]` float tensor.
    Packed(String),
    /// One `[1, 1]` float tensor per feature, in `Feature::ALL` order.
    PerColumn(Vec<String>),
}

impl InputLayout {
    /// Picks the layout from the graph's input names.
    pub fn detect(names: &[String]) -> Result<Self, PipelineError> {
        let per_column: Option<Vec<String>> = Feature::ALL
            .iter()
            .map(|f| names.iter().find(|n| n.as_str() == f.name()).cloned())
            .collect();

        match (per_column, names) {
            (Some(columns), _) => Ok(InputLayout::PerColumn(columns)),
            (None, [single]) => Ok(InputLayout::Packed(single.clone())),
            (None, _) => Err(PipelineError::UnsupportedInputs(names.to_vec())),
        }
    }
}

/// Regression pipeline exported to ONNX.
pub struct OnnxPipeline {
    // Running a session needs exclusive access.
    session: Mutex<Session>,
    layout: InputLayout,
}

impl OnnxPipeline {
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = model_path.as_ref();
        if !path.exists() {
            return Err(PipelineError::ModelNotFound(path.display().to_string()));
        }

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(1)?
            .commit_from_file(path)?;

        let names: Vec<String> = session.inputs.iter().map(|i| i.name.clone()).collect();
        let layout = InputLayout::detect(&names)?;
        info!(path = %path.display(), ?layout, "loaded onnx pipeline");

        Ok(Self {
            session: Mutex::new(session),
            layout,
        })
    }

    fn inputs(&self, row: &FeatureRow) -> Result<Vec<(String, DynValue)>, PipelineError> {
        match &self.layout {
            InputLayout::Packed(name) => {
                let data: Vec<f32> = row.to_array().iter().map(|&v| v as f32).collect();
                let tensor = Tensor::from_array((vec![1, FEATURE_COUNT], data.into_boxed_slice()))?;
                Ok(vec![(name.clone(), tensor.into_dyn())])
            }
            InputLayout::PerColumn(names) => names
                .iter()
                .zip(row.to_array())
                .map(|(name, value)| {
                    let tensor =
                        Tensor::from_array((vec![1usize, 1], vec![value as f32].into_boxed_slice()))?;
                    Ok((name.clone(), tensor.into_dyn()))
                })
                .collect(),
        }
    }
}

impl Pipeline for OnnxPipeline {
    fn predict(&self, row: &FeatureRow) -> Result<f64, PipelineError> {
        let inputs = self.inputs(row)?;
        let mut session = self.session.lock().map_err(|_| PipelineError::Poisoned)?;
        let outputs = session.run(inputs)?;

        let output = &outputs[0];
        let value = match output.try_extract_tensor::<f32>() {
            Ok((_, data)) => data.first().map(|&v| f64::from(v)),
            Err(_) => {
                let (_, data) = output.try_extract_tensor::<f64>()?;
                data.first().copied()
            }
        };
        value.ok_or(PipelineError::EmptyOutput)
    }

    fn kind(&self) -> &'static str {
        "onnx"
    }
}
