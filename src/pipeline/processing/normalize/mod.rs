//! Row-per-violation normalization.
//!
//! Each city export encodes violations differently; a [`SourceNormalizer`]
//! turns one export into a table with exactly one row per cited violation
//! (or one placeholder row for an inspection with none). The standardize
//! stage is written once against that shape.

pub mod normalizers;
pub mod registry;

pub use normalizers::{ChicagoNormalizer, DallasNormalizer, MetricsNormalizer, SourceNormalizer};
pub use registry::NormalizationRegistry;
