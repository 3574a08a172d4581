#![doc(test(attr(deny(warnings))))]

//! Spendlens Core answers period, aggregation, and trend queries over dated
//! money-movement records: what falls inside a billing-anchored period, how
//! a filtered subset totals up by transaction kind and category, and how the
//! selected period compares to the one immediately before it.
//!
//! Every operation is a synchronous pure function over caller-owned
//! collections; the engine keeps no state and caches nothing.

pub mod category;
pub mod compare;
pub mod errors;
pub mod filter;
pub mod period;
pub mod stats;
pub mod timeline;
pub mod trend;
pub mod utils;

use std::sync::Once;

pub use category::{by_category, by_subcategory, ranked};
pub use compare::compare_periods;
pub use errors::{EngineError, Result};
pub use filter::{apply_filters, category_scoped};
pub use period::{
    current_billing_cycle, period_key, previous_period_id, resolve_range, week_date_range,
    week_number, weeks_in_year,
};
pub use stats::aggregate;
pub use timeline::observed_periods;
pub use trend::{bucket_by_period, cmp_period_ids, select_window, trend_for_state};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendlens Core tracing initialized.");
    });
}
