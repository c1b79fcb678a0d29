use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectionError {
    #[error("Input file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No normalizer registered for source: {0}")]
    UnknownSource(String),

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, InspectionError>;
