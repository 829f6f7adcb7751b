//! Reference dataset of historical listings.
//!
//! Loaded once at startup and shared read-only. It backs the option lists of
//! the form and the median values used to fill missing inputs.

pub mod feature;

pub use feature::{Feature, FeatureRow, FEATURE_COUNT};

use crate::error::CatalogError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

/// One historical listing. Empty cells load as `None` and are skipped by
/// option lists and medians.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CatalogRow {
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub size: Option<f64>,
    pub zip_code: Option<f64>,
    pub price: Option<f64>,
}

impl CatalogRow {
    pub fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Beds => self.beds,
            Feature::Baths => self.baths,
            Feature::Size => self.size,
            Feature::ZipCode => self.zip_code,
        }
    }
}

pub struct Catalog {
    rows: Vec<CatalogRow>,
    // Distinct sorted values per feature, filled on first request.
    options: [OnceLock<Vec<f64>>; FEATURE_COUNT],
}

impl Catalog {
    /// Loads the dataset from a CSV file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let catalog = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), rows = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let rows = csv_reader
            .deserialize()
            .collect::<Result<Vec<CatalogRow>, csv::Error>>()?;
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<CatalogRow>) -> Result<Self, CatalogError> {
        if rows.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            rows,
            options: Default::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Distinct values of a column, ascending.
    pub fn options(&self, feature: Feature) -> &[f64] {
        self.options[feature.index()].get_or_init(|| {
            let mut values = self.column(feature);
            values.sort_by(f64::total_cmp);
            values.dedup();
            values
        })
    }

    /// Median of a column over the whole dataset, `None` when the column
    /// has no values at all.
    ///
    /// Recomputed on every call; the dataset never changes after load, so
    /// the result is stable.
    pub fn median(&self, feature: Feature) -> Option<f64> {
        let mut values = self.column(feature);
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Some((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Some(values[mid])
        }
    }

    fn column(&self, feature: Feature) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(feature))
            .filter(|v| !v.is_nan())
            .collect()
    }
}
