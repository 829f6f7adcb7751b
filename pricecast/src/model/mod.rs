pub mod linear;
pub mod loader;
pub mod onnx;
pub mod pipeline;
pub mod predictor;

pub use pipeline::Pipeline;
pub use predictor::{Estimate, Predictor};
