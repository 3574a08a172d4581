use chrono::NaiveDate;
use spendlens_domain::{Record, TransactionKind};

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn expense(date: (i32, u32, u32), amount: f64, category: &str, subcategory: &str) -> Record {
    Record::new(
        sample_date(date.0, date.1, date.2),
        -amount.abs(),
        TransactionKind::Expense,
        category,
    )
    .with_subcategory(subcategory)
}

pub fn refund(date: (i32, u32, u32), amount: f64, category: &str) -> Record {
    Record::new(
        sample_date(date.0, date.1, date.2),
        amount.abs(),
        TransactionKind::Refund,
        category,
    )
}

pub fn income(date: (i32, u32, u32), amount: f64) -> Record {
    Record::new(
        sample_date(date.0, date.1, date.2),
        amount,
        TransactionKind::Income,
        "Salary",
    )
}
