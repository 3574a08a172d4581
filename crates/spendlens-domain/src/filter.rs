//! Immutable query state for the filter pipeline.

use serde::{Deserialize, Serialize};

use crate::period::Granularity;
use crate::record::TransactionKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Table-level multi-select filters. An empty selection restricts nothing,
/// which is distinct from a selection that happens to match no record.
pub struct TableFilters {
    #[serde(default)]
    pub kinds: Vec<TransactionKind>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl TableFilters {
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.categories.is_empty() && self.subcategories.is_empty()
    }
}

/// A snapshot of everything a query filters on. Constructed fresh per query
/// and only ever read by the engine; callers replace rather than mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub granularity: Granularity,
    /// Billing cycle anchor day, 1-28.
    pub billing_day: u32,
    /// Selected period identifier (`2026-03`, `2026-Q1`, ...). `None` means
    /// no period restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Single top-level category selector (drill-down).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub table: TableFilters,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            granularity: Granularity::Month,
            billing_day: 1,
            period: None,
            category: None,
            table: TableFilters::default(),
        }
    }
}

impl FilterState {
    pub fn for_period(granularity: Granularity, period: impl Into<String>) -> Self {
        Self {
            granularity,
            period: Some(period.into()),
            ..Self::default()
        }
    }

    pub fn with_billing_day(mut self, billing_day: u32) -> Self {
        self.billing_day = billing_day;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
