use crate::catalog::{Catalog, Feature, FeatureRow};
use tracing::debug;

/// Raw fields of a prediction form. Any of them may be absent or non-numeric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionRequest {
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub size: Option<String>,
    pub zip_code: Option<String>,
}

impl PredictionRequest {
    /// Builds a request from decoded form pairs. The first occurrence of a
    /// field wins; unknown fields are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            let slot = match Feature::from_name(key.as_ref()) {
                Some(Feature::Beds) => &mut request.beds,
                Some(Feature::Baths) => &mut request.baths,
                Some(Feature::Size) => &mut request.size,
                Some(Feature::ZipCode) => &mut request.zip_code,
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        request
    }

    pub fn raw(&self, feature: Feature) -> Option<&str> {
        match feature {
            Feature::Beds => self.beds.as_deref(),
            Feature::Baths => self.baths.as_deref(),
            Feature::Size => self.size.as_deref(),
            Feature::ZipCode => self.zip_code.as_deref(),
        }
    }
}

/// Coerces a raw field to a number. `None` marks the field as missing.
pub fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Builds the model input row, filling every missing field with the
/// catalog median of its column. A column without any values yields NaN,
/// which inference rejects.
pub fn assemble_row(request: &PredictionRequest, catalog: &Catalog) -> FeatureRow {
    let mut values = [0.0; 4];
    for feature in Feature::ALL {
        let raw = request.raw(feature);
        values[feature.index()] = match parse_numeric(raw) {
            Some(value) => value,
            None => {
                let median = catalog.median(feature).unwrap_or(f64::NAN);
                debug!(%feature, ?raw, median, "filling missing value with median");
                median
            }
        };
    }

    let [beds, baths, size, zip_code] = values;
    FeatureRow {
        beds,
        baths,
        size,
        zip_code,
    }
}
