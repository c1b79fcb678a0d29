//! Batch orchestration: stage (raw export -> row-per-violation CSV) and
//! merge (intermediate CSVs -> master CSV).

pub mod processing;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::{CHICAGO_SOURCE, DALLAS_SOURCE};
use crate::csv_io::{self, TableReader};
use crate::error::{InspectionError, Result};
use crate::types::RunMetadata;
use processing::enrich::{MasterRecord, MASTER_HEADERS};
use processing::merge::build_master_table;
use processing::normalize::NormalizationRegistry;
use processing::standardize::{ChicagoStandardizer, DallasStandardizer, Standardizer};
use processing::summary::MasterSummary;

/// Result of staging one source
#[derive(Debug, Clone, Serialize)]
pub struct StageResult {
    pub source_id: String,
    pub input_rows: usize,
    pub output_rows: usize,
    pub output_file: PathBuf,
}

/// Result of building the master table
#[derive(Debug, Clone, Serialize)]
pub struct MergeResult {
    pub chicago_rows: usize,
    pub dallas_rows: usize,
    pub output_file: PathBuf,
    pub summary: MasterSummary,
}

/// Result of a complete stage + merge run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub stages: Vec<StageResult>,
    pub merge: MergeResult,
}

pub struct Pipeline {
    config: Config,
    registry: NormalizationRegistry,
    raw_reader: TableReader,
    intermediate_reader: TableReader,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        let raw_reader = TableReader::from_config(&config.input)?;
        let intermediate_reader = TableReader::new().with_null_tokens(config.input.null_tokens.clone());
        Ok(Self {
            config,
            registry: NormalizationRegistry::new(),
            raw_reader,
            intermediate_reader,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &NormalizationRegistry {
        &self.registry
    }

    fn source_paths(&self, source_id: &str) -> Result<(&Path, &Path)> {
        let paths = &self.config.paths;
        match source_id {
            CHICAGO_SOURCE => Ok((paths.chicago_input.as_path(), paths.chicago_cleaned.as_path())),
            DALLAS_SOURCE => Ok((paths.dallas_input.as_path(), paths.dallas_cleaned.as_path())),
            other => Err(InspectionError::UnknownSource(other.to_string())),
        }
    }

    /// Normalize one raw export and write its intermediate CSV
    #[instrument(skip(self, run))]
    pub fn stage_source(&self, source_id: &str, run: &RunMetadata) -> Result<StageResult> {
        let (input, output) = self.source_paths(source_id)?;
        info!("Staging {} from {}", source_id, input.display());

        let source = self.raw_reader.read_path(input)?;
        let expanded = self.registry.normalize(source_id, &source, run)?;
        csv_io::write_table_path(output, &expanded)?;

        info!(
            "Staged {}: {} inspections -> {} violation rows",
            source_id,
            source.len(),
            expanded.len()
        );
        Ok(StageResult {
            source_id: source_id.to_string(),
            input_rows: source.len(),
            output_rows: expanded.len(),
            output_file: output.to_path_buf(),
        })
    }

    /// Stage each named source in order. Any failure aborts the run.
    pub fn stage(&self, source_ids: &[String], run: &RunMetadata) -> Result<Vec<StageResult>> {
        source_ids
            .iter()
            .map(|id| self.stage_source(id, run))
            .collect()
    }

    /// Standardize both intermediate tables and build the master table in memory
    #[instrument(skip(self))]
    pub fn build_master(&self) -> Result<(Vec<MasterRecord>, usize, usize)> {
        let paths = &self.config.paths;
        let chicago = self.intermediate_reader.read_path(&paths.chicago_cleaned)?;
        let dallas = self.intermediate_reader.read_path(&paths.dallas_cleaned)?;

        let chicago_std = ChicagoStandardizer.standardize(&chicago);
        info!("Standardized {} Chicago records", chicago_std.len());
        let dallas_std = DallasStandardizer.standardize(&dallas);
        info!("Standardized {} Dallas records", dallas_std.len());

        let (chicago_rows, dallas_rows) = (chicago_std.len(), dallas_std.len());
        Ok((build_master_table(chicago_std, dallas_std), chicago_rows, dallas_rows))
    }

    /// Build the master table and write it to the configured output
    pub fn merge(&self) -> Result<MergeResult> {
        let (master, chicago_rows, dallas_rows) = self.build_master()?;
        let output = &self.config.paths.master_output;
        csv_io::write_records_path(output, &MASTER_HEADERS, &master)?;

        let summary = MasterSummary::from_records(&master);
        info!(
            rows = summary.total_rows,
            with_violations = summary.rows_with_violations,
            pass_rate = summary.pass_rate_percent,
            "Master table written to {}",
            output.display()
        );
        Ok(MergeResult {
            chicago_rows,
            dallas_rows,
            output_file: output.clone(),
            summary,
        })
    }

    /// Stage both cities, then merge
    pub fn run(&self, run: &RunMetadata) -> Result<PipelineResult> {
        let sources = self
            .registry
            .list_sources()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let stages = self.stage(&sources, run)?;
        let merge = self.merge()?;
        Ok(PipelineResult { stages, merge })
    }
}
