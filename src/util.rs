//! Parsing of the time formats MyRadio uses.
//!
//! MyRadio is inconsistent about times. Depending on the endpoint they come
//! as Unix timestamps (handled with `serde_with::TimestampSeconds` where they
//! occur), or as one of these strings:
//!
//! * `dd/mm/yyyy HH:MM` for seasons, timeslots and photos
//! * `dd/mm/yyyy HH:MM:SS` for tracklists
//! * `yyyy-mm-dd` for officerships
//! * `[-]H:MM:SS` for durations and track lengths
//! * `Mon 02 Jan 15:04` for training sessions, without a year
//!
//! Date-times are local to the station and carry no offset, so they are
//! returned as [`PrimitiveDateTime`].

use serde::{de, Deserialize, Deserializer};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, Duration,
    OffsetDateTime, PrimitiveDateTime,
};

use crate::error::{Error, Result};

const SHORT_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");

const LONG_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

const DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Training times with the weekday dropped and the year prepended.
const DEMO_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year] [day] [month repr:short] [hour]:[minute]");

/// Placeholder MyRadio sends instead of the first time of unscheduled seasons.
pub const NOT_SCHEDULED: &str = "Not Scheduled";

/// Parses a `dd/mm/yyyy HH:MM` local time.
///
/// # Errors
///
/// Will return `Err` if `value` is not in that format.
pub fn parse_short_time(value: &str) -> Result<PrimitiveDateTime> {
    Ok(PrimitiveDateTime::parse(value, SHORT_TIME)?)
}

/// Parses a `dd/mm/yyyy HH:MM:SS` local time.
///
/// # Errors
///
/// Will return `Err` if `value` is not in that format.
pub fn parse_long_time(value: &str) -> Result<PrimitiveDateTime> {
    Ok(PrimitiveDateTime::parse(value, LONG_TIME)?)
}

/// Parses a `yyyy-mm-dd` date.
///
/// # Errors
///
/// Will return `Err` if `value` is not in that format.
pub fn parse_date(value: &str) -> Result<Date> {
    Ok(Date::parse(value, DATE)?)
}

/// Parses a training session time like `Mon 02 Jan 15:04` in `year`.
///
/// The weekday is ignored: MyRadio derives it from the date anyway.
///
/// # Errors
///
/// Will return `Err` if `value` is not in that format, or names a date that
/// does not exist in `year`.
pub fn parse_demo_time_in(value: &str, year: i32) -> Result<PrimitiveDateTime> {
    let (_weekday, rest) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| Error::InvalidArgument(format!("invalid training time: {value:?}")))?;
    Ok(PrimitiveDateTime::parse(&format!("{year} {rest}"), DEMO_TIME)?)
}

/// Parses a training session time like `Mon 02 Jan 15:04` in the current
/// year.
///
/// # Errors
///
/// As [`parse_demo_time_in`].
pub fn parse_demo_time(value: &str) -> Result<PrimitiveDateTime> {
    parse_demo_time_in(value, OffsetDateTime::now_utc().year())
}

/// Parses a `[-]H:MM:SS` duration.
///
/// Hours may have any number of digits; minutes and seconds must be below
/// 60.
///
/// # Errors
///
/// Will return [`Error::InvalidArgument`] if `value` is not in that format
/// or does not fit a [`Duration`].
pub fn parse_duration(value: &str) -> Result<Duration> {
    let invalid = || Error::InvalidArgument(format!("invalid duration: {value:?}"));

    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let mut parts = unsigned.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let number = |part: &str| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse::<i64>().ok()
    };

    let hours = number(hours).ok_or_else(invalid)?;
    let minutes = number(minutes).filter(|m| *m < 60).ok_or_else(invalid)?;
    let seconds = number(seconds).filter(|s| *s < 60).ok_or_else(invalid)?;

    let total = hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or_else(invalid)?;

    let duration = Duration::seconds(total);
    Ok(if negative { -duration } else { duration })
}

pub(crate) fn short_time<'de, D>(deserializer: D) -> std::result::Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_short_time(&s).map_err(de::Error::custom)
}

/// Empty or `null` is `None`.
pub(crate) fn optional_short_time<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PrimitiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() => parse_short_time(&s).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Like [`optional_short_time`], but [`NOT_SCHEDULED`] is `None` too.
pub(crate) fn scheduled_time<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PrimitiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() && s != NOT_SCHEDULED => {
            parse_short_time(&s).map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

pub(crate) fn long_time<'de, D>(deserializer: D) -> std::result::Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_long_time(&s).map_err(de::Error::custom)
}

pub(crate) fn duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(de::Error::custom)
}

/// Empty or `null` is `None`.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> std::result::Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() => parse_date(&s).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("02:00:00").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("00:30:00").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("-0:00:05").unwrap(), Duration::seconds(-5));
        assert_eq!(
            parse_duration("100:01:01").unwrap(),
            Duration::seconds(100 * 3600 + 61)
        );
    }

    #[test]
    fn malformed_durations() {
        for value in [
            "a:b:c",
            "",
            "1:00",
            "1:00:00:00",
            "1:60:00",
            "1:00:60",
            "+1:00:00",
            "1: 0:00",
        ] {
            assert!(
                matches!(parse_duration(value), Err(Error::InvalidArgument(_))),
                "{value:?} should not parse"
            );
        }
    }

    #[test]
    fn short_and_long_times() {
        assert_eq!(
            parse_short_time("02/01/2006 15:04").unwrap(),
            datetime!(2006-01-02 15:04)
        );
        assert_eq!(
            parse_long_time("02/01/2006 15:04:05").unwrap(),
            datetime!(2006-01-02 15:04:05)
        );
        assert!(parse_short_time(NOT_SCHEDULED).is_err());
        assert!(parse_long_time("02/01/2006 15:04").is_err());
    }

    #[test]
    fn dates() {
        assert_eq!(parse_date("2016-11-14").unwrap(), date!(2016 - 11 - 14));
        assert!(parse_date("14/11/2016").is_err());
    }

    #[test]
    fn demo_times_take_the_given_year() {
        assert_eq!(
            parse_demo_time_in("Mon 02 Jan 15:04", 2006).unwrap(),
            datetime!(2006-01-02 15:04)
        );
        assert!(parse_demo_time_in("Mon", 2006).is_err());
        assert!(parse_demo_time_in("Mon 30 Feb 15:04", 2006).is_err());
    }

    #[derive(Deserialize)]
    struct Times {
        #[serde(default, deserialize_with = "scheduled_time")]
        first: Option<PrimitiveDateTime>,

        #[serde(default, deserialize_with = "optional_date")]
        till: Option<Date>,
    }

    #[test]
    fn placeholders_deserialize_as_none() {
        let times: Times =
            serde_json::from_str(r#"{"first":"Not Scheduled","till":""}"#).unwrap();
        assert_eq!(times.first, None);
        assert_eq!(times.till, None);

        let times: Times = serde_json::from_str("{}").unwrap();
        assert_eq!(times.first, None);
        assert_eq!(times.till, None);

        let times: Times =
            serde_json::from_str(r#"{"first":"14/11/2016 09:00","till":"2017-06-30"}"#).unwrap();
        assert_eq!(times.first, Some(datetime!(2016-11-14 09:00)));
        assert_eq!(times.till, Some(date!(2017 - 06 - 30)));
    }
}
