//! The multi-stage record filter pipeline.

use spendlens_domain::{FilterState, Granularity, Record};

use crate::period;

/// Applies the filter stages in fixed order: period range, single-category
/// selector, kind multi-select, category multi-select, subcategory
/// multi-select. Stages compose as AND; an empty selection restricts
/// nothing.
///
/// Never fails: a selected period that does not resolve for the active
/// granularity restricts nothing (the strict contract lives in
/// [`period::resolve_range`]). Kind filtering treats records without an
/// explicit kind as expenses; the aggregator deliberately does not.
pub fn apply_filters(records: &[Record], state: &FilterState) -> Vec<Record> {
    let mut filtered: Vec<Record> = records.to_vec();

    if state.granularity != Granularity::All {
        if let Some(period_id) = selected_period(state) {
            match period::resolve_range(state.granularity, period_id, state.billing_day) {
                Ok(range) => filtered.retain(|record| range.contains(record.date)),
                Err(err) => {
                    tracing::warn!(%err, period_id, "skipping unresolvable period filter");
                }
            }
        }
    }

    if let Some(category) = selected_category(state) {
        filtered.retain(|record| record.category == category);
    }

    if !state.table.kinds.is_empty() {
        filtered.retain(|record| state.table.kinds.contains(&record.kind_or_default()));
    }
    if !state.table.categories.is_empty() {
        filtered.retain(|record| state.table.categories.contains(&record.category));
    }
    if !state.table.subcategories.is_empty() {
        filtered.retain(|record| state.table.subcategories.contains(&record.subcategory));
    }

    filtered
}

/// Restricts records by the single-category selector alone. Trend and
/// period-over-period queries use this: both ignore the period restriction
/// and the table multi-selects.
pub fn category_scoped(records: &[Record], state: &FilterState) -> Vec<Record> {
    match selected_category(state) {
        Some(category) => records
            .iter()
            .filter(|record| record.category == category)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

fn selected_period(state: &FilterState) -> Option<&str> {
    state.period.as_deref().filter(|p| !p.is_empty())
}

fn selected_category(state: &FilterState) -> Option<&str> {
    state.category.as_deref().filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use spendlens_domain::{TableFilters, TransactionKind};

    use super::*;

    fn record(date: (i32, u32, u32), amount: f64, kind: TransactionKind, category: &str) -> Record {
        Record::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount,
            kind,
            category,
        )
    }

    fn sample_records() -> Vec<Record> {
        vec![
            record((2026, 1, 10), -50.0, TransactionKind::Expense, "Dining"),
            record((2026, 1, 20), -30.0, TransactionKind::Expense, "Transport")
                .with_subcategory("Taxi"),
            record((2026, 1, 15), 20.0, TransactionKind::Refund, "Dining"),
            record((2026, 2, 3), -80.0, TransactionKind::Expense, "Dining"),
            record((2026, 2, 28), 2500.0, TransactionKind::Income, "Salary"),
        ]
    }

    #[test]
    fn empty_state_returns_input_unchanged() {
        let records = sample_records();
        let filtered = apply_filters(&records, &FilterState::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn period_stage_keeps_only_dates_in_range() {
        let records = sample_records();
        let state = FilterState::for_period(Granularity::Month, "2026-01");
        let filtered = apply_filters(&records, &state);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.date.format("%Y-%m").to_string() == "2026-01"));
    }

    #[test]
    fn billing_anchor_shifts_the_period_stage() {
        let records = sample_records();
        let state = FilterState::for_period(Granularity::Month, "2026-01").with_billing_day(15);
        // Jan 15 .. Feb 14: drops Jan 10, keeps Jan 15, Jan 20, Feb 3.
        let filtered = apply_filters(&records, &state);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn unresolvable_period_restricts_nothing() {
        let records = sample_records();
        let state = FilterState::for_period(Granularity::Week, "2026-01");
        let filtered = apply_filters(&records, &state);
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn unbounded_granularity_skips_the_period_stage() {
        let records = sample_records();
        let state = FilterState::for_period(Granularity::All, "all");
        assert_eq!(apply_filters(&records, &state).len(), records.len());
    }

    #[test]
    fn category_selector_is_exact() {
        let records = sample_records();
        let state = FilterState::default().with_category("Dining");
        let filtered = apply_filters(&records, &state);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.category == "Dining"));

        // An empty selector means "all categories", not "no category".
        let state = FilterState::default().with_category("");
        assert_eq!(apply_filters(&records, &state).len(), records.len());
    }

    #[test]
    fn kind_stage_defaults_missing_kinds_to_expense() {
        let mut records = sample_records();
        records[0].kind = None;
        let state = FilterState {
            table: TableFilters {
                kinds: vec![TransactionKind::Expense],
                ..TableFilters::default()
            },
            ..FilterState::default()
        };
        let filtered = apply_filters(&records, &state);
        // The untyped record passes as an expense.
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn stages_compose_as_and() {
        let records = sample_records();
        let mut state =
            FilterState::for_period(Granularity::Month, "2026-01").with_category("Dining");
        state.table.kinds = vec![TransactionKind::Refund];
        let filtered = apply_filters(&records, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, Some(TransactionKind::Refund));
    }

    #[test]
    fn subcategory_stage_matches_the_stored_label() {
        let records = sample_records();
        let state = FilterState {
            table: TableFilters {
                subcategories: vec!["Taxi".to_string()],
                ..TableFilters::default()
            },
            ..FilterState::default()
        };
        let filtered = apply_filters(&records, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "Transport");
    }

    #[test]
    fn category_scoped_ignores_period_and_table_filters() {
        let records = sample_records();
        let mut state = FilterState::for_period(Granularity::Month, "2026-01").with_category("Dining");
        state.table.kinds = vec![TransactionKind::Refund];
        let scoped = category_scoped(&records, &state);
        // All three Dining records survive, across both months and kinds.
        assert_eq!(scoped.len(), 3);
    }
}
