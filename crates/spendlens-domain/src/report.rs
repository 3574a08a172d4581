//! Value outputs of aggregation, comparison, and trend queries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Summary totals for a filtered record set.
///
/// Expense and refund totals sum absolute amounts; the income total keeps
/// the signed sum. Recomputed from scratch on every query, never cached.
pub struct Statistics {
    pub expense_total: f64,
    pub refund_total: f64,
    pub income_total: f64,
    /// Expenses net of refunds.
    pub net_expense: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
/// Per-period expense/income totals used by trend reporting.
pub struct PeriodTotals {
    pub expense: f64,
    pub income: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Current vs previous period statistics, labeled with their period
/// identifiers so callers need not re-derive them.
pub struct PeriodComparison {
    pub current_period: String,
    pub previous_period: String,
    pub current: Statistics,
    pub previous: Statistics,
}
