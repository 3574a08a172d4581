//! Summary statistics over filtered records.

use spendlens_domain::{Record, Statistics, TransactionKind};

/// Computes summary totals for a record collection in a single pass.
///
/// Summation is commutative, so the result is independent of record order,
/// and no rounding happens here (display formatting owns that). Records
/// without an explicit kind count toward `count` but contribute to no typed
/// total; the filter pipeline's expense defaulting is deliberately not
/// repeated here.
pub fn aggregate(records: &[Record]) -> Statistics {
    let mut expense_total = 0.0;
    let mut refund_total = 0.0;
    let mut income_total = 0.0;

    for record in records {
        match record.kind {
            Some(TransactionKind::Expense) => expense_total += record.amount.abs(),
            Some(TransactionKind::Refund) => refund_total += record.amount.abs(),
            Some(TransactionKind::Income) => income_total += record.amount,
            None => {}
        }
    }

    Statistics {
        expense_total,
        refund_total,
        income_total,
        net_expense: expense_total - refund_total,
        count: records.len(),
    }
}
