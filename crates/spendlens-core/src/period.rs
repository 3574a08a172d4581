//! Period resolution: identifier parsing, concrete date ranges per
//! granularity, week numbering, and previous-period derivation.

use chrono::{Datelike, Duration, NaiveDate};
use spendlens_domain::{DateRange, Granularity};

use crate::errors::{EngineError, Result};

/// Highest accepted billing anchor day. Days 29-31 would skip cycles in
/// short months, so callers restrict the domain to 1-28.
pub const MAX_BILLING_DAY: u32 = 28;

/// Resolves a (granularity, period identifier, billing anchor day) triple to
/// an inclusive date range.
///
/// Year, quarter, and week ranges are calendar-anchored. Month ranges follow
/// the billing cycle: they open on the anchor day and close the day before
/// the next month's anchor day, so anchor day 1 reproduces the calendar
/// month. The unbounded granularity has no concrete range; callers treat it
/// as "no range filter" instead of resolving it.
pub fn resolve_range(
    granularity: Granularity,
    period_id: &str,
    billing_day: u32,
) -> Result<DateRange> {
    check_billing_day(billing_day)?;
    match granularity {
        Granularity::Year => {
            let year = parse_year(period_id)?;
            range(ymd(year, 1, 1), ymd(year, 12, 31))
        }
        Granularity::Quarter => {
            let (year, quarter) = parse_quarter(period_id)?;
            let start_month = (quarter - 1) * 3 + 1;
            range(ymd(year, start_month, 1), month_end(year, start_month + 2))
        }
        Granularity::Month => {
            let (year, month) = parse_month(period_id)?;
            let (next_year, next) = next_month(year, month);
            let start = ymd(year, month, billing_day);
            let end = ymd(next_year, next, billing_day) - Duration::days(1);
            range(start, end)
        }
        Granularity::Week => {
            let (year, week) = parse_week(period_id)?;
            week_date_range(year, week)
        }
        Granularity::All => Err(EngineError::InvalidPeriod(
            "the unbounded granularity has no concrete range".into(),
        )),
    }
}

/// Derives the period identifier containing `date`.
///
/// Month, quarter, and year keys are calendar periods; the billing anchor
/// shifts resolved month ranges, never bucket keys. The week key pairs the
/// date's calendar year with its ISO week number. The unbounded granularity
/// has no key of its own and falls back to month keys.
pub fn period_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Year => format!("{:04}", date.year()),
        Granularity::Quarter => {
            format!("{:04}-Q{}", date.year(), (date.month() - 1) / 3 + 1)
        }
        Granularity::Week => format!("{:04}-W{}", date.year(), week_number(date)),
        Granularity::Month | Granularity::All => {
            format!("{:04}-{:02}", date.year(), date.month())
        }
    }
}

/// Identifier of the period immediately before `period_id` at the same
/// granularity. Week 1 rolls into the final week of the prior year, mirroring
/// the year rollover that months and quarters already have.
pub fn previous_period_id(granularity: Granularity, period_id: &str) -> Result<String> {
    match granularity {
        Granularity::Year => {
            let year = parse_year(period_id)?;
            Ok(format!("{:04}", year - 1))
        }
        Granularity::Quarter => {
            let (year, quarter) = parse_quarter(period_id)?;
            Ok(if quarter == 1 {
                format!("{:04}-Q4", year - 1)
            } else {
                format!("{:04}-Q{}", year, quarter - 1)
            })
        }
        Granularity::Month => {
            let (year, month) = parse_month(period_id)?;
            let (prev_year, prev) = prev_month(year, month);
            Ok(format!("{:04}-{:02}", prev_year, prev))
        }
        Granularity::Week => {
            let (year, week) = parse_week(period_id)?;
            Ok(if week == 1 {
                format!("{:04}-W{}", year - 1, weeks_in_year(year - 1))
            } else {
                format!("{:04}-W{}", year, week - 1)
            })
        }
        Granularity::All => Err(EngineError::InvalidPeriod(
            "period-over-period comparison is undefined for the unbounded granularity".into(),
        )),
    }
}

/// ISO week number of `date`: Monday-start weeks, week 1 is the week
/// containing the year's first Thursday.
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Number of ISO weeks in `year` (52 or 53). December 28 always falls in the
/// year's final week.
pub fn weeks_in_year(year: i32) -> u32 {
    week_number(ymd(year, 12, 28))
}

/// Monday-to-Sunday range for the given week of `year`.
///
/// Locates the approximate day `Jan 1 + (week - 1) * 7`, then snaps to the
/// Monday of the ISO week that day belongs to: backward when the day falls
/// Sunday through Thursday, forward past a Friday/Saturday tail.
pub fn week_date_range(year: i32, week: u32) -> Result<DateRange> {
    if !(1..=53).contains(&week) {
        return Err(EngineError::InvalidPeriod(format!(
            "week {week} outside 1-53"
        )));
    }
    let approx = ymd(year, 1, 1) + Duration::days((i64::from(week) - 1) * 7);
    let weekday = i64::from(approx.weekday().num_days_from_sunday());
    let start = if weekday <= 4 {
        approx - Duration::days(weekday - 1)
    } else {
        approx + Duration::days(8 - weekday)
    };
    range(start, start + Duration::days(6))
}

/// Billing-anchored month range containing `reference`: opens on the anchor
/// day at or before the reference, closes the day before the next anchor.
pub fn current_billing_cycle(billing_day: u32, reference: NaiveDate) -> Result<DateRange> {
    check_billing_day(billing_day)?;
    let (year, month) = if reference.day() >= billing_day {
        (reference.year(), reference.month())
    } else {
        prev_month(reference.year(), reference.month())
    };
    resolve_range(
        Granularity::Month,
        &format!("{year:04}-{month:02}"),
        billing_day,
    )
}

fn check_billing_day(billing_day: u32) -> Result<()> {
    if (1..=MAX_BILLING_DAY).contains(&billing_day) {
        Ok(())
    } else {
        Err(EngineError::InvalidPeriod(format!(
            "billing anchor day {billing_day} outside 1-{MAX_BILLING_DAY}"
        )))
    }
}

fn parse_year(id: &str) -> Result<i32> {
    id.parse::<i32>().map_err(|_| invalid(id, "year"))
}

fn parse_quarter(id: &str) -> Result<(i32, u32)> {
    let (year, quarter) = id.split_once("-Q").ok_or_else(|| invalid(id, "quarter"))?;
    let year = year.parse::<i32>().map_err(|_| invalid(id, "quarter"))?;
    let quarter = quarter.parse::<u32>().map_err(|_| invalid(id, "quarter"))?;
    if !(1..=4).contains(&quarter) {
        return Err(invalid(id, "quarter"));
    }
    Ok((year, quarter))
}

fn parse_month(id: &str) -> Result<(i32, u32)> {
    let (year, month) = id.split_once('-').ok_or_else(|| invalid(id, "month"))?;
    let year = year.parse::<i32>().map_err(|_| invalid(id, "month"))?;
    let month = month.parse::<u32>().map_err(|_| invalid(id, "month"))?;
    if !(1..=12).contains(&month) {
        return Err(invalid(id, "month"));
    }
    Ok((year, month))
}

fn parse_week(id: &str) -> Result<(i32, u32)> {
    let (year, week) = id.split_once("-W").ok_or_else(|| invalid(id, "week"))?;
    let year = year.parse::<i32>().map_err(|_| invalid(id, "week"))?;
    let week = week.parse::<u32>().map_err(|_| invalid(id, "week"))?;
    Ok((year, week))
}

fn invalid(id: &str, expected: &str) -> EngineError {
    EngineError::InvalidPeriod(format!("'{id}' is not a valid {expected} identifier"))
}

fn range(start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
    Ok(DateRange::new(start, end)?)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next) = next_month(year, month);
    ymd(next_year, next, 1) - Duration::days(1)
}
