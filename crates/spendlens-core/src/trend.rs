//! Whole-dataset trend bucketing and display windowing.

use std::cmp::Ordering;
use std::collections::HashMap;

use spendlens_domain::{FilterState, Granularity, PeriodTotals, Record, TransactionKind};

use crate::filter;
use crate::period;

/// Buckets shown on either side of the selected period.
const WINDOW_RADIUS: usize = 4;

/// Groups records into per-period expense/income totals across the entire
/// input, regardless of any active range filter: the trend view shows
/// context around the selection, not just the selection.
///
/// Refunds are excluded; trends track expense and income flow only. Keys are
/// calendar periods — the billing anchor shifts the selected-period filter,
/// never trend buckets.
pub fn bucket_by_period(
    records: &[Record],
    granularity: Granularity,
) -> HashMap<String, PeriodTotals> {
    let mut buckets: HashMap<String, PeriodTotals> = HashMap::new();
    for record in records {
        let totals = buckets
            .entry(period::period_key(record.date, granularity))
            .or_default();
        match record.kind {
            Some(TransactionKind::Expense) => totals.expense += record.amount.abs(),
            Some(TransactionKind::Income) => totals.income += record.amount,
            _ => {}
        }
    }
    buckets
}

/// Trend buckets honoring the filter state's category drill-down while
/// ignoring its period restriction.
pub fn trend_for_state(records: &[Record], state: &FilterState) -> HashMap<String, PeriodTotals> {
    let scoped = filter::category_scoped(records, state);
    bucket_by_period(&scoped, state.granularity)
}

/// Picks the contiguous run of at most `2 * WINDOW_RADIUS + 1` buckets
/// centered on `selected`, clamped to the available keys, in chronological
/// order.
///
/// Absent an exact match the window centers on the first key ordered at or
/// after the selection, or the newest key when every key orders before it.
/// `None` (or the `all` sentinel) also centers on the newest bucket.
pub fn select_window(
    buckets: &HashMap<String, PeriodTotals>,
    selected: Option<&str>,
) -> Vec<(String, PeriodTotals)> {
    let mut keys: Vec<&String> = buckets.keys().collect();
    keys.sort_by(|a, b| cmp_period_ids(a, b));
    if keys.is_empty() {
        return Vec::new();
    }

    let selected_index = match selected.filter(|s| !s.is_empty() && *s != "all") {
        Some(sel) => keys
            .iter()
            .position(|key| key.as_str() == sel)
            .or_else(|| {
                keys.iter()
                    .position(|key| cmp_period_ids(key, sel) != Ordering::Less)
            })
            .unwrap_or(keys.len() - 1),
        None => keys.len() - 1,
    };

    let start = selected_index.saturating_sub(WINDOW_RADIUS);
    let end = (selected_index + WINDOW_RADIUS).min(keys.len() - 1);
    keys[start..=end]
        .iter()
        .map(|key| ((*key).clone(), buckets[*key]))
        .collect()
}

/// Orders period identifiers of one granularity chronologically.
///
/// Quarter and week numbers are not zero-padded, so plain string order would
/// put `W10` before `W9`; this compares the year, then the numeric suffix.
pub fn cmp_period_ids(a: &str, b: &str) -> Ordering {
    let (year_a, number_a) = split_id(a);
    let (year_b, number_b) = split_id(b);
    year_a.cmp(year_b).then(number_a.cmp(&number_b))
}

fn split_id(id: &str) -> (&str, u32) {
    match id.split_once('-') {
        Some((year, suffix)) => {
            let digits = suffix.trim_start_matches(['Q', 'W']);
            (year, digits.parse().unwrap_or(0))
        }
        None => (id, 0),
    }
}
