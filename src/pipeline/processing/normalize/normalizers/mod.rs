// Base trait and utilities for source-specific normalizers
pub mod base;

// Individual normalizer implementations
pub mod chicago;
pub mod dallas;

// Re-export the main components
pub use base::{MetricsNormalizer, SourceNormalizer};
pub use chicago::ChicagoNormalizer;
pub use dallas::{DallasNormalizer, DallasViolationCollector};
