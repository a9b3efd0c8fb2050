//! Free-text start date parsing for activity creation.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

use super::error::ActivityError;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parse a user supplied start date into a timezone-aware timestamp.
///
/// Accepts RFC 3339, common `date time` layouts, bare dates (midnight), bare
/// times (today), the keywords `now`, `today` and `yesterday`, and relative
/// phrases such as `2 hours ago`. Inputs without an offset are interpreted in
/// the timezone of `now`.
pub fn parse_start_date<Tz: TimeZone>(
    input: &str,
    now: &DateTime<Tz>,
) -> Result<DateTime<FixedOffset>, ActivityError> {
    let trimmed = input.trim();
    let invalid = || ActivityError::InvalidStartDate(input.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date);
    }

    let lowered = trimmed.to_lowercase();
    let ago = match lowered.as_str() {
        "now" | "today" => Some(TimeDelta::zero()),
        "yesterday" => Some(TimeDelta::days(1)),
        _ => match parse_relative(&lowered) {
            Some(delta) => Some(delta.ok_or_else(invalid)?),
            None => None,
        },
    };

    if let Some(ago) = ago {
        return now
            .clone()
            .checked_sub_signed(ago)
            .map(|date| date.fixed_offset())
            .ok_or_else(invalid);
    }

    let naive = parse_naive(trimmed, now).ok_or_else(invalid)?;
    now.timezone()
        .from_local_datetime(&naive)
        .earliest()
        .map(|date| date.fixed_offset())
        .ok_or_else(invalid)
}

fn parse_naive<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Option<NaiveDateTime> {
    let date_time = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok());
    if date_time.is_some() {
        return date_time;
    }

    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok());
    if let Some(date) = date {
        return Some(date.and_time(NaiveTime::MIN));
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
        .map(|time| now.date_naive().and_time(time))
}

/// Parse `<n> <unit>[s] ago`, e.g. `90 minutes ago` or `1 day ago`.
///
/// Returns `None` when the input is not a relative phrase and `Some(None)`
/// when it is one but the amount does not fit in a `TimeDelta`.
fn parse_relative(input: &str) -> Option<Option<TimeDelta>> {
    let mut parts = input.split_whitespace();
    let amount: i64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;
    if parts.next()? != "ago" || parts.next().is_some() {
        return None;
    }

    match unit.trim_end_matches('s') {
        "minute" | "min" => Some(TimeDelta::try_minutes(amount)),
        "hour" => Some(TimeDelta::try_hours(amount)),
        "day" => Some(TimeDelta::try_days(amount)),
        "week" => Some(TimeDelta::try_weeks(amount)),
        _ => None,
    }
}
