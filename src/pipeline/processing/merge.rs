//! Builds the master table from the two standardized city tables.

use std::time::Instant;
use tracing::info;

use super::enrich::{add_calculated_fields, MasterRecord};
use super::standardize::StandardizedRecord;
use crate::metrics;

/// Stack Chicago rows over Dallas rows, derive calculated fields, and order
/// by inspection date then city.
///
/// The sort is stable, so rows sharing a date and city keep their source
/// order. Rows with no date sort last. Identifiers are left as-is; the two
/// cities' id spaces may overlap.
pub fn build_master_table(
    chicago: Vec<StandardizedRecord>,
    dallas: Vec<StandardizedRecord>,
) -> Vec<MasterRecord> {
    let start = Instant::now();
    let (chicago_rows, dallas_rows) = (chicago.len(), dallas.len());

    let mut master: Vec<MasterRecord> = chicago
        .into_iter()
        .chain(dallas)
        .map(add_calculated_fields)
        .collect();
    sort_master(&mut master);

    info!(
        "Combined {} Chicago and {} Dallas rows into {} master rows",
        chicago_rows,
        dallas_rows,
        master.len()
    );
    metrics::merge::master_built(master.len(), start.elapsed().as_secs_f64());
    master
}

pub fn sort_master(records: &mut [MasterRecord]) {
    records.sort_by_key(|r| (r.inspection_date.is_none(), r.inspection_date, r.city));
}
