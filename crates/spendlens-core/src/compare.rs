//! Period-over-period comparison.

use spendlens_domain::{FilterState, Granularity, PeriodComparison, Record};

use crate::errors::{EngineError, Result};
use crate::filter;
use crate::period;
use crate::stats;

/// Compares the selected period against the one immediately before it.
///
/// Both periods are taken from the full record set, not the display-filtered
/// one: the table multi-selects never apply here. The single-category
/// selector, when present, restricts both sides identically so the
/// comparison stays apples-to-apples. Month periods resolve billing-anchored,
/// like the period filter itself.
pub fn compare_periods(records: &[Record], state: &FilterState) -> Result<PeriodComparison> {
    if state.granularity == Granularity::All {
        return Err(EngineError::InvalidPeriod(
            "period-over-period comparison is undefined for the unbounded granularity".into(),
        ));
    }
    let current_period = state
        .period
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| EngineError::InvalidPeriod("no period selected for comparison".into()))?;
    let previous_period = period::previous_period_id(state.granularity, current_period)?;

    let current_range = period::resolve_range(state.granularity, current_period, state.billing_day)?;
    let previous_range =
        period::resolve_range(state.granularity, &previous_period, state.billing_day)?;

    let scoped = filter::category_scoped(records, state);
    let current: Vec<Record> = scoped
        .iter()
        .filter(|record| current_range.contains(record.date))
        .cloned()
        .collect();
    let previous: Vec<Record> = scoped
        .iter()
        .filter(|record| previous_range.contains(record.date))
        .cloned()
        .collect();

    Ok(PeriodComparison {
        current_period: current_period.to_string(),
        previous_period,
        current: stats::aggregate(&current),
        previous: stats::aggregate(&previous),
    })
}
