use std::time::Instant;
use tracing::{debug, warn};

use crate::constants::{DI_CURRENT_DATE, DI_PROCESS_ID, DI_WORKFLOW_FILE_NAME};
use crate::error::Result;
use crate::metrics;
use crate::table::Table;
use crate::types::RunMetadata;

/// Base trait for source-specific normalizers
pub trait SourceNormalizer: Send + Sync {
    /// Expand a raw export into one row per violation, stamping run metadata on every row
    fn normalize(&self, source: &Table, run: &RunMetadata) -> Result<Table>;

    /// Get the source ID this normalizer handles
    fn source_id(&self) -> &str;

    /// Get a human-readable name for this normalizer
    fn name(&self) -> &str;
}

/// A wrapper that adds metrics to any normalizer implementation
pub struct MetricsNormalizer<N: SourceNormalizer> {
    inner: N,
}

impl<N: SourceNormalizer> MetricsNormalizer<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: SourceNormalizer> SourceNormalizer for MetricsNormalizer<N> {
    fn normalize(&self, source: &Table, run: &RunMetadata) -> Result<Table> {
        let start_time = Instant::now();

        match self.inner.normalize(source, run) {
            Ok(expanded) => {
                metrics::normalize::source_normalized(
                    self.inner.source_id(),
                    source.len(),
                    expanded.len(),
                    start_time.elapsed().as_secs_f64(),
                );
                debug!(
                    "{} expanded {} rows into {}",
                    self.inner.name(),
                    source.len(),
                    expanded.len()
                );
                Ok(expanded)
            }
            Err(e) => {
                warn!("{} failed: {}", self.inner.name(), e);
                Err(e)
            }
        }
    }

    fn source_id(&self) -> &str {
        self.inner.source_id()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Shared utilities for normalizers
pub struct NormalizerUtils;

impl NormalizerUtils {
    /// Run metadata column names, in the order they are appended
    pub fn metadata_headers() -> [&'static str; 3] {
        [DI_PROCESS_ID, DI_CURRENT_DATE, DI_WORKFLOW_FILE_NAME]
    }

    /// Run metadata cell values for the source row at `position` (0-based)
    pub fn metadata_values(position: usize, run: &RunMetadata, workflow: &str) -> [String; 3] {
        [
            (position + 1).to_string(),
            run.run_date_string(),
            workflow.to_string(),
        ]
    }

    pub fn cell(value: Option<&str>) -> String {
        value.map(str::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Passthrough;

    impl SourceNormalizer for Passthrough {
        fn normalize(&self, source: &Table, _run: &RunMetadata) -> Result<Table> {
            Ok(source.clone())
        }

        fn source_id(&self) -> &str {
            "passthrough"
        }

        fn name(&self) -> &str {
            "Passthrough Normalizer"
        }
    }

    #[test]
    fn test_metrics_wrapper_delegates() {
        let mut table = Table::new(["a"]);
        table.push_row(vec!["1".into()]);
        let run = RunMetadata::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let wrapped = MetricsNormalizer::new(Passthrough);
        assert_eq!(wrapped.source_id(), "passthrough");
        assert_eq!(wrapped.name(), "Passthrough Normalizer");
        assert_eq!(wrapped.normalize(&table, &run).unwrap(), table);
    }

    #[test]
    fn test_metadata_values_are_one_based() {
        let run = RunMetadata::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(
            NormalizerUtils::metadata_values(0, &run, "wf"),
            ["1".to_string(), "2024-01-02".to_string(), "wf".to_string()]
        );
    }
}
