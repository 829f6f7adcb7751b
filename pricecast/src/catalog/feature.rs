use serde::Serialize;
use std::fmt;

/// Number of inputs the pipeline expects.
pub const FEATURE_COUNT: usize = 4;

/// A model input column, in the order the pipeline was trained on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Beds,
    Baths,
    Size,
    ZipCode,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] =
        [Feature::Beds, Feature::Baths, Feature::Size, Feature::ZipCode];

    /// Column name in the dataset, form field name and ONNX input name.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Beds => "beds",
            Feature::Baths => "baths",
            Feature::Size => "size",
            Feature::ZipCode => "zip_code",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Feature::Beds => 0,
            Feature::Baths => 1,
            Feature::Size => 2,
            Feature::ZipCode => 3,
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One fully numeric input row for the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeatureRow {
    pub beds: f64,
    pub baths: f64,
    pub size: f64,
    pub zip_code: f64,
}

impl FeatureRow {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [self.beds, self.baths, self.size, self.zip_code]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}
