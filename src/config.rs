use crate::error::{InspectionError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub chicago_input: PathBuf,
    pub dallas_input: PathBuf,
    pub chicago_cleaned: PathBuf,
    pub dallas_cleaned: PathBuf,
    pub master_output: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            chicago_input: PathBuf::from("data/Chicago.tsv"),
            dallas_input: PathBuf::from("data/Dallas.tsv"),
            chicago_cleaned: PathBuf::from("output/chicago_cleaned.csv"),
            dallas_cleaned: PathBuf::from("output/dallas_cleaned.csv"),
            master_output: PathBuf::from("output/Food_Inspections_Master.csv"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Field delimiter of the raw city exports
    pub delimiter: char,
    /// Cell values treated as missing, matched exactly after trimming
    pub null_tokens: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            null_tokens: [
                "", "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "-NaN", "None", "#N/A",
                "<NA>",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl InputConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                InspectionError::Config(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    self.delimiter
                ))
            })
    }
}

impl Config {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            InspectionError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `INSPECTION_*` environment overrides on top of the file values
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = lookup("INSPECTION_CHICAGO_INPUT") {
            self.paths.chicago_input = PathBuf::from(path);
        }
        if let Some(path) = lookup("INSPECTION_DALLAS_INPUT") {
            self.paths.dallas_input = PathBuf::from(path);
        }
        if let Some(dir) = lookup("INSPECTION_OUTPUT_DIR") {
            let dir = PathBuf::from(dir);
            for output in [
                &mut self.paths.chicago_cleaned,
                &mut self.paths.dallas_cleaned,
                &mut self.paths.master_output,
            ] {
                if let Some(name) = output.file_name() {
                    *output = dir.join(name);
                }
            }
        }
        self
    }
}
