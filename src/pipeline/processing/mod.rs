// Pipeline processing: parsing, normalization, standardization and merge

pub mod coerce;
pub mod enrich;
pub mod merge;
pub mod normalize;
pub mod parser;
pub mod standardize;
pub mod summary;
