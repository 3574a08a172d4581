//! Category roll-ups for expense breakdowns.

use std::cmp::Ordering;
use std::collections::HashMap;

use spendlens_domain::{Record, TransactionKind, UNCATEGORIZED_LABEL};

/// Sums absolute expense amounts per top-level category.
///
/// Only records explicitly marked as expenses contribute; refunds and income
/// are skipped even when they share a category label.
pub fn by_category(records: &[Record]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records {
        if record.kind != Some(TransactionKind::Expense) {
            continue;
        }
        *totals.entry(record.category.clone()).or_insert(0.0) += record.amount.abs();
    }
    totals
}

/// Drill-down totals per second-level label within one top-level category.
/// Records without a subcategory land under [`UNCATEGORIZED_LABEL`].
pub fn by_subcategory(records: &[Record], category: &str) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records {
        if record.kind != Some(TransactionKind::Expense) || record.category != category {
            continue;
        }
        let label = if record.subcategory.is_empty() {
            UNCATEGORIZED_LABEL
        } else {
            record.subcategory.as_str()
        };
        *totals.entry(label.to_string()).or_insert(0.0) += record.amount.abs();
    }
    totals
}

/// Orders a bucket map for presentation: positive totals only, largest
/// first. Empty buckets carry no information and are dropped, not errors.
pub fn ranked(totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = totals
        .iter()
        .filter(|(_, total)| **total > 0.0)
        .map(|(label, total)| (label.clone(), *total))
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries
}
