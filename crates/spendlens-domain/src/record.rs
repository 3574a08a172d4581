//! Domain models for money-movement records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Enumerates the direction of a money movement.
pub enum TransactionKind {
    Expense,
    Refund,
    Income,
}

impl TransactionKind {
    /// Infers a kind from the amount sign, for records predating the kind
    /// field: positive amounts are income, everything else an expense.
    pub fn from_amount(amount: f64) -> TransactionKind {
        if amount > 0.0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Refund => "Refund",
            TransactionKind::Income => "Income",
        };
        f.write_str(label)
    }
}

/// A single dated money movement.
///
/// The amount carries the sign convention (negative = money leaving) and its
/// magnitude is the absolute value of the movement. Kind and sign are kept
/// consistent by the caller; the engine never re-derives one from the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            kind: Some(kind),
            category: category.into(),
            subcategory: String::new(),
            note: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The kind as seen by table filtering, which treats records without an
    /// explicit kind as expenses.
    pub fn kind_or_default(&self) -> TransactionKind {
        self.kind.unwrap_or(TransactionKind::Expense)
    }

    /// Backfills a missing kind from the amount sign (legacy data loaded
    /// before the kind field existed).
    pub fn infer_kind(&mut self) {
        if self.kind.is_none() {
            self.kind = Some(TransactionKind::from_amount(self.amount));
        }
    }
}
