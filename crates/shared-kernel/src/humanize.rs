//! Coarse, human-readable renderings of byte counts and time deltas.
//!
//! Sizes use SI units (base 1000): `210 B`, `1.2 kB`, `83 MB`.
//! Time deltas are bucketed: `now`, `5 minutes ago`, `1 week ago`, `3 days from now`.

use chrono::{DateTime, TimeZone};

const SIZE_BASE: u64 = 1000;
const SIZE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Formats `bytes` with one significant decimal below 10 units, none above.
pub fn bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{bytes} B");
    }

    let mut exp = 0;
    let mut scale = 1u64;
    while exp < SIZE_UNITS.len() - 1 && bytes / scale >= SIZE_BASE {
        scale *= SIZE_BASE;
        exp += 1;
    }

    let value = (bytes as f64 / scale as f64 * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{value:.1} {}", SIZE_UNITS[exp])
    } else {
        format!("{value:.0} {}", SIZE_UNITS[exp])
    }
}

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

#[derive(Debug, Clone, Copy)]
enum Phrase {
    Now,
    Fixed(&'static str),
    Count { unit: i64, noun: &'static str },
}

/// Upper bounds (exclusive, milliseconds) and how to phrase a delta below them.
const BUCKETS: [(i64, Phrase); 17] = [
    (SECOND, Phrase::Now),
    (2 * SECOND, Phrase::Fixed("1 second")),
    (MINUTE, Phrase::Count { unit: SECOND, noun: "seconds" }),
    (2 * MINUTE, Phrase::Fixed("1 minute")),
    (HOUR, Phrase::Count { unit: MINUTE, noun: "minutes" }),
    (2 * HOUR, Phrase::Fixed("1 hour")),
    (DAY, Phrase::Count { unit: HOUR, noun: "hours" }),
    (2 * DAY, Phrase::Fixed("1 day")),
    (WEEK, Phrase::Count { unit: DAY, noun: "days" }),
    (2 * WEEK, Phrase::Fixed("1 week")),
    (MONTH, Phrase::Count { unit: WEEK, noun: "weeks" }),
    (2 * MONTH, Phrase::Fixed("1 month")),
    (YEAR, Phrase::Count { unit: MONTH, noun: "months" }),
    (18 * MONTH, Phrase::Fixed("1 year")),
    (2 * YEAR, Phrase::Fixed("2 years")),
    (LONG_TIME, Phrase::Count { unit: YEAR, noun: "years" }),
    (i64::MAX, Phrase::Fixed("a long while")),
];

/// Describes `then` relative to `now`, e.g. `3 days ago` or `2 hours from now`.
pub fn relative_time<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let (delta, label) = if then > now {
        (then.clone().signed_duration_since(now.clone()), "from now")
    } else {
        (now.clone().signed_duration_since(then.clone()), "ago")
    };
    let millis = delta.num_milliseconds();

    let phrase = BUCKETS
        .iter()
        .find(|(limit, _)| millis < *limit)
        .map_or(Phrase::Fixed("a long while"), |(_, phrase)| *phrase);

    match phrase {
        Phrase::Now => "now".to_string(),
        Phrase::Fixed(text) => format!("{text} {label}"),
        Phrase::Count { unit, noun } => format!("{} {noun} {label}", millis / unit),
    }
}
