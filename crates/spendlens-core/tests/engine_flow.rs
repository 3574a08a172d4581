//! End-to-end flows: filter, aggregate, compare, trend, and drill down over
//! one shared dataset, the way a reporting frontend drives the engine.

mod common;

use common::{expense, income, refund};
use spendlens_core::{
    aggregate, apply_filters, bucket_by_period, by_category, by_subcategory, compare_periods,
    observed_periods, ranked, select_window, trend_for_state,
};
use spendlens_domain::{
    CategoryCatalog, FilterState, Granularity, Record, TableFilters, TransactionKind,
    UNCATEGORIZED_LABEL,
};

fn household_records() -> Vec<Record> {
    vec![
        expense((2025, 11, 8), 95.0, "Dining", "Dinner"),
        expense((2025, 12, 12), 210.0, "Shopping", "Clothing"),
        expense((2025, 12, 28), 45.0, "Dining", "Takeout"),
        expense((2026, 1, 10), 50.0, "Dining", "Lunch"),
        expense((2026, 1, 20), 30.0, "Dining", ""),
        refund((2026, 1, 15), 20.0, "Dining"),
        expense((2026, 1, 25), 60.0, "Transport", "Fuel"),
        income((2026, 1, 31), 2800.0),
        expense((2026, 2, 5), 75.0, "Dining", "Dinner"),
        expense((2026, 3, 14), 130.0, "Shopping", "Electronics"),
        income((2026, 3, 31), 2800.0),
    ]
}

#[test]
fn monthly_report_flow() {
    let records = household_records();
    let state = FilterState::for_period(Granularity::Month, "2026-01");

    let filtered = apply_filters(&records, &state);
    let stats = aggregate(&filtered);
    assert_eq!(stats.count, 5);
    assert_eq!(stats.expense_total, 140.0);
    assert_eq!(stats.refund_total, 20.0);
    assert_eq!(stats.income_total, 2800.0);
    assert_eq!(stats.net_expense, 120.0);

    let comparison = compare_periods(&records, &state).expect("previous month resolves");
    assert_eq!(comparison.previous_period, "2025-12");
    assert_eq!(comparison.previous.expense_total, 255.0);

    let trend = trend_for_state(&records, &state);
    let window = select_window(&trend, state.period.as_deref());
    let keys: Vec<&str> = window.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["2025-11", "2025-12", "2026-01", "2026-02", "2026-03"]);
    assert_eq!(window[2].1.expense, 140.0);
    assert_eq!(window[2].1.income, 2800.0);
}

#[test]
fn category_drill_down_flow() {
    let records = household_records();
    let state = FilterState::for_period(Granularity::Month, "2026-01");
    let filtered = apply_filters(&records, &state);

    let top_level = by_category(&filtered);
    let entries = ranked(&top_level);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "Dining");
    assert_eq!(entries[0].1, 80.0);
    assert_eq!(entries[1].0, "Transport");

    let dining = by_subcategory(&filtered, "Dining");
    assert_eq!(dining["Lunch"], 50.0);
    assert_eq!(dining[UNCATEGORIZED_LABEL], 30.0);

    // Drilling down narrows the trend too, without a period restriction.
    let drilled = state.with_category("Dining");
    let trend = trend_for_state(&records, &drilled);
    assert_eq!(trend.len(), 4);
    assert_eq!(trend["2025-11"].expense, 95.0);
}

#[test]
fn table_filters_only_narrow_the_table() {
    let records = household_records();
    let mut state = FilterState::for_period(Granularity::Month, "2026-01");
    state.table = TableFilters {
        kinds: vec![TransactionKind::Expense],
        categories: vec!["Dining".to_string(), "Transport".to_string()],
        subcategories: Vec::new(),
    };

    let filtered = apply_filters(&records, &state);
    assert_eq!(filtered.len(), 3);

    // The comparison ignores the table selections entirely.
    let comparison = compare_periods(&records, &state).expect("comparison resolves");
    assert_eq!(comparison.current.count, 5);
}

#[test]
fn billing_anchor_reshapes_the_same_question() {
    let records = household_records();
    let calendar = FilterState::for_period(Granularity::Month, "2026-01");
    let anchored = calendar.clone().with_billing_day(15);

    let calendar_stats = aggregate(&apply_filters(&records, &calendar));
    let anchored_stats = aggregate(&apply_filters(&records, &anchored));

    // Jan 15 - Feb 14 trades the Jan 10 lunch for the Feb 5 dinner.
    assert_eq!(calendar_stats.expense_total, 140.0);
    assert_eq!(anchored_stats.expense_total, 165.0);
    assert_eq!(anchored_stats.refund_total, 20.0);
}

#[test]
fn catalog_discovers_labels_the_data_introduced() {
    let records = household_records();
    let mut catalog = CategoryCatalog::with_defaults();
    catalog.merge_from_records(&records);

    assert!(catalog.contains("Transport"));
    assert!(catalog
        .second_level("Dining")
        .contains(&"Takeout".to_string()));
    // Salary arrived from data, not the default tree.
    assert!(catalog.contains("Salary"));

    let months = observed_periods(&records, Granularity::Month);
    assert_eq!(months.first().map(String::as_str), Some("2026-03"));
    assert_eq!(months.last().map(String::as_str), Some("2025-11"));
}
