//! Period coverage of a record set.

use std::collections::HashSet;

use spendlens_domain::{Granularity, Record};

use crate::period;
use crate::trend::cmp_period_ids;

/// Distinct period identifiers observed in `records` at the given
/// granularity, newest first. Backs data-driven period pickers; what a
/// picker offers when no data exists at all is its own concern.
pub fn observed_periods(records: &[Record], granularity: Granularity) -> Vec<String> {
    let mut seen = HashSet::new();
    for record in records {
        seen.insert(period::period_key(record.date, granularity));
    }
    let mut keys: Vec<String> = seen.into_iter().collect();
    keys.sort_by(|a, b| cmp_period_ids(b, a));
    keys
}
