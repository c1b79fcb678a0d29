use std::collections::BTreeMap;

use super::normalizers::{ChicagoNormalizer, DallasNormalizer, MetricsNormalizer, SourceNormalizer};
use crate::constants::{CHICAGO_SOURCE, DALLAS_SOURCE};
use crate::error::{InspectionError, Result};
use crate::table::Table;
use crate::types::RunMetadata;

/// Registry for source-specific normalization strategies
pub struct NormalizationRegistry {
    normalizers: BTreeMap<String, Box<dyn SourceNormalizer>>,
}

impl NormalizationRegistry {
    /// Create a registry holding the Chicago and Dallas normalizers
    pub fn new() -> Self {
        let mut normalizers: BTreeMap<String, Box<dyn SourceNormalizer>> = BTreeMap::new();

        normalizers.insert(
            CHICAGO_SOURCE.to_string(),
            Box::new(MetricsNormalizer::new(ChicagoNormalizer::new())),
        );
        normalizers.insert(
            DALLAS_SOURCE.to_string(),
            Box::new(MetricsNormalizer::new(DallasNormalizer::new())),
        );

        Self { normalizers }
    }

    /// Get the appropriate normalizer for a source
    pub fn get_normalizer(&self, source_id: &str) -> Option<&dyn SourceNormalizer> {
        self.normalizers.get(source_id).map(|n| n.as_ref())
    }

    /// Normalize a raw export using the normalizer registered for `source_id`
    pub fn normalize(&self, source_id: &str, source: &Table, run: &RunMetadata) -> Result<Table> {
        self.get_normalizer(source_id)
            .ok_or_else(|| InspectionError::UnknownSource(source_id.to_string()))?
            .normalize(source, run)
    }

    /// List all registered source IDs, sorted
    pub fn list_sources(&self) -> Vec<&str> {
        self.normalizers.keys().map(|k| k.as_str()).collect()
    }
}

impl Default for NormalizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
