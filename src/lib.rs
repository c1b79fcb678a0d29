//! Chicago and Dallas food-inspection exports, normalized to one row per
//! violation and merged into a single master table.

pub mod config;
pub mod constants;
pub mod csv_io;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use error::{InspectionError, Result};
pub use pipeline::processing::enrich::MasterRecord;
pub use pipeline::processing::standardize::StandardizedRecord;
pub use pipeline::Pipeline;
pub use table::Table;
pub use types::{City, RunMetadata};
