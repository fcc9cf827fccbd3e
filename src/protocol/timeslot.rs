use std::{collections::BTreeMap, time::SystemTime};

use serde::Deserialize;
use serde_with::{formats::Flexible, serde_as, TimestampSeconds};
use time::{Duration, PrimitiveDateTime};

use super::{Album, Link, Season, Track};
use crate::{
    api::{Request, Requester},
    error::{Error, Result},
    util, Session,
};

/// The shows on air now and next.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentAndNext {
    pub current: Show,
    pub next: Show,
}

/// Summary of a scheduled show, as returned by
/// [`Session::get_current_and_next`].
///
/// Sustainer programming between shows has no end time.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Show {
    pub title: String,

    #[serde(rename = "desc")]
    pub description: String,

    pub photo: String,

    #[serde_as(as = "Option<TimestampSeconds<i64, Flexible>>")]
    pub start_time: Option<SystemTime>,

    #[serde_as(as = "Option<TimestampSeconds<i64, Flexible>>")]
    pub end_time: Option<SystemTime>,

    pub presenters: String,
    pub url: String,
    pub id: u64,
}

impl Show {
    /// Whether the show has an end time.
    #[must_use]
    pub fn ends(&self) -> bool {
        self.end_time.is_some()
    }
}

/// A single slice of airtime in the schedule, typically one hour long.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Timeslot {
    #[serde(flatten)]
    pub season: Season,

    pub timeslot_id: u64,

    #[serde(default)]
    pub timeslot_num: u64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde_as(as = "Option<TimestampSeconds<i64, Flexible>>")]
    #[serde(default)]
    pub time: Option<SystemTime>,

    #[serde(deserialize_with = "util::short_time")]
    pub start_time: PrimitiveDateTime,

    #[serde(deserialize_with = "util::duration")]
    pub duration: Duration,

    #[serde(default)]
    pub mixcloud_status: String,
}

impl Timeslot {
    /// When the timeslot is over.
    #[must_use]
    pub fn end_time(&self) -> PrimitiveDateTime {
        self.start_time.saturating_add(self.duration)
    }
}

/// One played track in a timeslot tracklist.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TracklistItem {
    #[serde(flatten)]
    pub track: Track,

    #[serde(default)]
    pub album: Album,

    #[serde(default, rename = "editlink")]
    pub edit_link: Link,

    #[serde(default, rename = "deletelink")]
    pub delete_link: Link,

    #[serde_as(as = "Option<TimestampSeconds<i64, Flexible>>")]
    #[serde(default)]
    pub time: Option<SystemTime>,

    #[serde(rename = "starttime", deserialize_with = "util::long_time")]
    pub start_time: PrimitiveDateTime,

    #[serde(default, rename = "audiologid")]
    pub audio_log_id: u64,
}

/// Timeslots by ISO 8601 weekday: 1 is Monday, 7 is Sunday.
///
/// Each day runs chronologically from the start of the station day.
pub type WeekSchedule = BTreeMap<u8, Vec<Timeslot>>;

/// Last possible ISO 8601 week number.
const MAX_WEEK: u32 = 53;

impl<R: Requester> Session<R> {
    /// Retrieves the show on air and the one after it.
    pub async fn get_current_and_next(&self) -> Result<CurrentAndNext> {
        self.get("/timeslot/currentandnext")
            .await
            .decode_or_default()
    }

    /// Retrieves the schedule for ISO 8601 week `week` of `year`.
    ///
    /// A week without a schedule yields all seven days with no timeslots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`], without making a request, if
    /// `year` is negative or `week` is outside `1..=53`.
    pub async fn get_week_schedule(&self, year: i32, week: u32) -> Result<WeekSchedule> {
        if year < 0 {
            return Err(Error::InvalidArgument(format!("year {year} is too low")));
        }
        if !(1..=MAX_WEEK).contains(&week) {
            return Err(Error::InvalidArgument(format!(
                "week {week} is not within the ISO range 1..={MAX_WEEK}"
            )));
        }

        let request = Request::formatted(format_args!("/timeslot/weekschedule/{week}"))
            .with_param("year", [year.to_string()]);
        let response = self.execute(request).await;

        // An empty schedule comes back as either `[]` or `{}`.
        if response.is_empty() {
            return Ok((1..=7).map(|day| (day, Vec::new())).collect());
        }

        response.decode_or_default()
    }

    pub async fn get_timeslot(&self, id: u64) -> Result<Timeslot> {
        self.get(format!("/timeslot/{id}"))
            .await
            .decode_required("no such timeslot")
    }

    /// Retrieves the tracks played in the timeslot with the given ID.
    pub async fn get_track_list_for_timeslot(&self, id: u64) -> Result<Vec<TracklistItem>> {
        self.get(format!("/tracklistItem/tracklistfortimeslot/{id}"))
            .await
            .decode_or_default()
    }
}
