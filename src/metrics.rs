//! Phase-organized metrics for the inspection pipeline.
//!
//! Everything goes through the `metrics` facade. Without an installed
//! recorder the calls are no-ops, which keeps batch runs and tests quiet.

/// Builds a metric name following `inspection_{phase}_{name}[_total]`
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("inspection_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("inspection_", $phase, "_", $name)
    };
}

/// Reading and writing delimited files
pub mod io {
    pub fn rows_read(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "io", "rows_read")).increment(count as u64);
    }

    pub fn rows_skipped(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "io", "rows_skipped")).increment(count as u64);
    }
}

/// Row-per-violation expansion
pub mod normalize {
    pub fn source_normalized(source: &str, input_rows: usize, output_rows: usize, duration_secs: f64) {
        let source = source.to_string();
        ::metrics::counter!(phase_metric!(counter, "normalize", "input_rows"), "source" => source.clone())
            .increment(input_rows as u64);
        ::metrics::counter!(phase_metric!(counter, "normalize", "output_rows"), "source" => source.clone())
            .increment(output_rows as u64);
        ::metrics::histogram!(phase_metric!(histogram, "normalize", "duration_seconds"), "source" => source)
            .record(duration_secs);
    }
}

/// Mapping intermediate tables to the unified schema
pub mod standardize {
    pub fn records_standardized(city: &str, count: usize) {
        ::metrics::counter!(phase_metric!(counter, "standardize", "records"), "city" => city.to_string())
            .increment(count as u64);
    }

    pub fn unparseable_dates(city: &str, count: usize) {
        ::metrics::counter!(phase_metric!(counter, "standardize", "unparseable_dates"), "city" => city.to_string())
            .increment(count as u64);
    }
}

/// Concatenation, derived fields and ordering
pub mod merge {
    pub fn master_built(rows: usize, duration_secs: f64) {
        ::metrics::counter!(phase_metric!(counter, "merge", "rows")).increment(rows as u64);
        ::metrics::histogram!(phase_metric!(histogram, "merge", "duration_seconds")).record(duration_secs);
    }
}
