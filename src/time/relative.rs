// ============================================================================
// Relative Time
// Humanized time differences in English and French
// ============================================================================

use crate::locale::Lang;
use chrono::{DateTime, TimeZone, Utc};

#[derive(Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

fn div_round(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

// Bucket boundaries follow the conventional humanization ladder: 45 seconds
// before "a minute", 45 minutes before "an hour", 22 hours before "a day",
// 26 days before "a month", 11 months before "a year".
fn bucket(seconds: i64) -> (i64, Unit) {
    let minutes = div_round(seconds, 60);
    let hours = div_round(seconds, 3_600);
    let days = div_round(seconds, 86_400);
    let months = div_round(days, 30);
    let years = div_round(days, 365);

    if seconds < 45 {
        (0, Unit::Second)
    } else if seconds < 90 {
        (1, Unit::Minute)
    } else if minutes < 45 {
        (minutes, Unit::Minute)
    } else if seconds < 90 * 60 {
        (1, Unit::Hour)
    } else if hours < 22 {
        (hours, Unit::Hour)
    } else if seconds < 36 * 3_600 {
        (1, Unit::Day)
    } else if days < 26 {
        (days, Unit::Day)
    } else if days < 46 {
        (1, Unit::Month)
    } else if months < 11 {
        (months, Unit::Month)
    } else if months < 18 {
        (1, Unit::Year)
    } else {
        (years, Unit::Year)
    }
}

fn phrase(seconds: i64, lang: Lang) -> String {
    let (count, unit) = bucket(seconds);

    match lang {
        Lang::En => match (count, unit) {
            (_, Unit::Second) => "a few seconds".to_string(),
            (1, Unit::Minute) => "a minute".to_string(),
            (n, Unit::Minute) => format!("{n} minutes"),
            (1, Unit::Hour) => "an hour".to_string(),
            (n, Unit::Hour) => format!("{n} hours"),
            (1, Unit::Day) => "a day".to_string(),
            (n, Unit::Day) => format!("{n} days"),
            (1, Unit::Month) => "a month".to_string(),
            (n, Unit::Month) => format!("{n} months"),
            (1, Unit::Year) => "a year".to_string(),
            (n, Unit::Year) => format!("{n} years"),
        },
        Lang::Fr => match (count, unit) {
            (_, Unit::Second) => "quelques secondes".to_string(),
            (1, Unit::Minute) => "une minute".to_string(),
            (n, Unit::Minute) => format!("{n} minutes"),
            (1, Unit::Hour) => "une heure".to_string(),
            (n, Unit::Hour) => format!("{n} heures"),
            (1, Unit::Day) => "un jour".to_string(),
            (n, Unit::Day) => format!("{n} jours"),
            (1, Unit::Month) => "un mois".to_string(),
            (n, Unit::Month) => format!("{n} mois"),
            (1, Unit::Year) => "un an".to_string(),
            (n, Unit::Year) => format!("{n} ans"),
        },
    }
}

fn with_direction(phrase: String, lang: Lang, future: bool, without_suffix: bool) -> String {
    if without_suffix {
        return phrase;
    }

    match (lang, future) {
        (Lang::En, false) => format!("{phrase} ago"),
        (Lang::En, true) => format!("in {phrase}"),
        (Lang::Fr, false) => format!("il y a {phrase}"),
        (Lang::Fr, true) => format!("dans {phrase}"),
    }
}

/// Describe `datetime` as seen from `base`: `"3 days ago"` when it lies in
/// the past, `"in 3 days"` when it lies in the future, localized per `lang`.
/// With `without_suffix` only the bare distance is returned.
pub fn time_from<A: TimeZone, B: TimeZone>(
    datetime: &DateTime<A>,
    base: &DateTime<B>,
    lang: Lang,
    without_suffix: bool,
) -> String {
    let seconds = (base.with_timezone(&Utc) - datetime.with_timezone(&Utc)).num_seconds();

    with_direction(phrase(seconds.abs(), lang), lang, seconds < 0, without_suffix)
}

/// Describe `base` as seen from `datetime`: the opposite direction of
/// [`time_from`].
pub fn time_to<A: TimeZone, B: TimeZone>(
    datetime: &DateTime<A>,
    base: &DateTime<B>,
    lang: Lang,
    without_suffix: bool,
) -> String {
    time_from(base, datetime, lang, without_suffix)
}

/// [`time_from`] against the current instant.
pub fn time_from_now<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    lang: Lang,
    without_suffix: bool,
) -> String {
    time_from(datetime, &Utc::now(), lang, without_suffix)
}

/// [`time_to`] against the current instant.
pub fn time_to_now<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    lang: Lang,
    without_suffix: bool,
) -> String {
    time_to(datetime, &Utc::now(), lang, without_suffix)
}
