//! Date display helpers.

use chrono::{DateTime, Duration, Utc};

/// Default human-readable date format, e.g. "April 1, 2031".
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Formats a timestamp with a chrono format string.
#[must_use]
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    date.format(format).to_string()
}

/// Formats a timestamp with [`DISPLAY_DATE_FORMAT`].
#[must_use]
pub fn display_date(date: &DateTime<Utc>) -> String {
    format_date(date, DISPLAY_DATE_FORMAT)
}

/// Describes a timestamp relative to now, e.g. "5 minutes ago" or
/// "in 2 days".
#[must_use]
pub fn relative_time(date: &DateTime<Utc>) -> String {
    relative_to(date, &Utc::now())
}

/// Describes a timestamp relative to a reference instant.
#[must_use]
pub fn relative_to(date: &DateTime<Utc>, reference: &DateTime<Utc>) -> String {
    let delta = *reference - *date;
    let future = delta < Duration::zero();
    let delta = if future { -delta } else { delta };

    if delta.num_seconds() < 60 {
        return if future {
            "shortly".to_string()
        } else {
            "just now".to_string()
        };
    }

    let text = if delta.num_minutes() < 60 {
        plural(delta.num_minutes(), "minute")
    } else if delta.num_hours() < 24 {
        plural(delta.num_hours(), "hour")
    } else if delta.num_days() < 30 {
        plural(delta.num_days(), "day")
    } else if delta.num_days() < 365 {
        plural(delta.num_days() / 30, "month")
    } else {
        plural(delta.num_days() / 365, "year")
    };

    if future {
        format!("in {text}")
    } else {
        format!("{text} ago")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Whether the timestamp lies after now.
#[must_use]
pub fn is_future_date(date: &DateTime<Utc>) -> bool {
    *date > Utc::now()
}

/// Whether the timestamp lies before now.
#[must_use]
pub fn is_past_date(date: &DateTime<Utc>) -> bool {
    *date < Utc::now()
}

/// Adds whole days to a timestamp, `None` on overflow.
#[must_use]
pub fn add_days(date: &DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Adds whole hours to a timestamp, `None` on overflow.
#[must_use]
pub fn add_hours(date: &DateTime<Utc>, hours: i64) -> Option<DateTime<Utc>> {
    Duration::try_hours(hours).and_then(|delta| date.checked_add_signed(delta))
}
