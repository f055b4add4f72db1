// ============================================================================
// Time Module
// Granularity-aware date comparisons over chrono
// ============================================================================

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "async")]
mod delay;
mod relative;

#[cfg(feature = "async")]
pub use delay::delay;
pub use relative::{time_from, time_from_now, time_to, time_to_now};

/// Precision at which two instants are compared: everything finer than the
/// granularity is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Granularity {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

// Calendar fields in UTC, zeroed below the granularity. Tuples compare
// lexicographically, which is exactly the order of instants truncated to
// that granularity.
fn truncation_key<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    granularity: Granularity,
) -> (i32, u32, u32, u32, u32, u32, u32) {
    let utc = datetime.with_timezone(&Utc);
    let mut key = (utc.year(), 0, 0, 0, 0, 0, 0);

    if granularity == Granularity::Year {
        return key;
    }
    key.1 = utc.month();
    if granularity == Granularity::Month {
        return key;
    }
    key.2 = utc.day();
    if granularity == Granularity::Day {
        return key;
    }
    key.3 = utc.hour();
    if granularity == Granularity::Hour {
        return key;
    }
    key.4 = utc.minute();
    if granularity == Granularity::Minute {
        return key;
    }
    key.5 = utc.second();
    if granularity == Granularity::Second {
        return key;
    }
    key.6 = utc.timestamp_subsec_millis();

    key
}

/// True when both instants fall in the same granularity bucket (UTC).
pub fn is_same<A: TimeZone, B: TimeZone>(
    first: &DateTime<A>,
    second: &DateTime<B>,
    granularity: Granularity,
) -> bool {
    truncation_key(first, granularity) == truncation_key(second, granularity)
}

/// True when `first` falls in an earlier bucket than `second`.
pub fn is_before<A: TimeZone, B: TimeZone>(
    first: &DateTime<A>,
    second: &DateTime<B>,
    granularity: Granularity,
) -> bool {
    truncation_key(first, granularity) < truncation_key(second, granularity)
}

/// True when `first` falls in a later bucket than `second`.
pub fn is_after<A: TimeZone, B: TimeZone>(
    first: &DateTime<A>,
    second: &DateTime<B>,
    granularity: Granularity,
) -> bool {
    truncation_key(first, granularity) > truncation_key(second, granularity)
}

pub fn is_same_or_before<A: TimeZone, B: TimeZone>(
    first: &DateTime<A>,
    second: &DateTime<B>,
    granularity: Granularity,
) -> bool {
    truncation_key(first, granularity) <= truncation_key(second, granularity)
}

pub fn is_same_or_after<A: TimeZone, B: TimeZone>(
    first: &DateTime<A>,
    second: &DateTime<B>,
    granularity: Granularity,
) -> bool {
    truncation_key(first, granularity) >= truncation_key(second, granularity)
}

/// True when `datetime` falls between `start` and `end`, bounds included.
pub fn is_between<A: TimeZone, B: TimeZone, C: TimeZone>(
    datetime: &DateTime<A>,
    start: &DateTime<B>,
    end: &DateTime<C>,
    granularity: Granularity,
) -> bool {
    let key = truncation_key(datetime, granularity);

    truncation_key(start, granularity) <= key && key <= truncation_key(end, granularity)
}

/// True when the instant falls on the current UTC day.
pub fn is_today<Tz: TimeZone>(datetime: &DateTime<Tz>) -> bool {
    is_same(datetime, &Utc::now(), Granularity::Day)
}

/// True when the instant falls on the previous UTC day.
pub fn is_yesterday<Tz: TimeZone>(datetime: &DateTime<Tz>) -> bool {
    is_same(datetime, &(Utc::now() - Duration::days(1)), Granularity::Day)
}

/// True when the instant falls on the next UTC day.
pub fn is_tomorrow<Tz: TimeZone>(datetime: &DateTime<Tz>) -> bool {
    is_same(datetime, &(Utc::now() + Duration::days(1)), Granularity::Day)
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a calendar year.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Express an instant in a fixed UTC offset, preserving the instant.
///
/// An offset outside ±24 hours logs a diagnostic and keeps UTC.
pub fn with_fixed_offset(datetime: DateTime<Utc>, offset_seconds: i32) -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(offset_seconds) {
        Some(offset) => datetime.with_timezone(&offset),
        None => {
            tracing::error!("with_fixed_offset: invalid offset {offset_seconds} seconds");
            datetime.fixed_offset()
        },
    }
}

/// Express an instant in a named IANA timezone, preserving the instant.
///
/// With `keep_local_time` the clock fields are kept as-is and reinterpreted
/// in the target zone instead. An unknown zone name logs a diagnostic and
/// keeps UTC.
pub fn with_named_timezone(
    datetime: DateTime<Utc>,
    zone: &str,
    keep_local_time: bool,
) -> DateTime<chrono_tz::Tz> {
    let zone_id = match zone.parse::<chrono_tz::Tz>() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::error!("with_named_timezone: unknown timezone {zone}");
            chrono_tz::Tz::UTC
        },
    };

    if keep_local_time {
        match zone_id.from_local_datetime(&datetime.naive_utc()).earliest() {
            Some(shifted) => shifted,
            // the clock time does not exist in the target zone (DST gap)
            None => datetime.with_timezone(&zone_id),
        }
    } else {
        datetime.with_timezone(&zone_id)
    }
}

/// Days elapsed since the start of the instant's UTC year: 0 on January 1.
pub fn days_since_start_of_year<Tz: TimeZone>(datetime: &DateTime<Tz>) -> u32 {
    datetime.with_timezone(&Utc).ordinal0()
}

// Extra days beyond 365 per year are exactly the February 29ths crossed.
fn leap_days_before(initial: NaiveDate, years: u32) -> i64 {
    let target_year = initial.year() - years as i32;
    let start = NaiveDate::from_ymd_opt(target_year, initial.month(), initial.day())
        // February 29 has no counterpart in a common year
        .or_else(|| NaiveDate::from_ymd_opt(target_year, 2, 28));

    match start {
        Some(start) => (initial - start).num_days() % 365,
        None => 0,
    }
}

/// Number of leap days (February 29ths) in the last `years` calendar years,
/// counted back from now or, with `from_today` unset, from the start of the
/// current year. Zero years is rejected with a diagnostic.
pub fn leap_days_in_last_years(years: u32, from_today: bool) -> i64 {
    if years < 1 {
        tracing::error!("leap_days_in_last_years: years must be at least 1");
        return 0;
    }

    let today = Utc::now().date_naive();
    let initial = if from_today {
        today
    } else {
        NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
    };

    leap_days_before(initial, years)
}
