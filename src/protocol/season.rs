use serde::Deserialize;
use time::PrimitiveDateTime;

use super::{Link, ShowMeta, Timeslot};
use crate::{api::Requester, error::Result, util, Session};

/// A season of a show: a run of timeslots within one term.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Season {
    #[serde(flatten)]
    pub show: ShowMeta,

    #[serde(default)]
    pub season_id: u64,

    #[serde(default)]
    pub season_num: u64,

    #[serde(default, deserialize_with = "util::optional_short_time")]
    pub submitted: Option<PrimitiveDateTime>,

    /// Human-readable description of the requested times.
    #[serde(default)]
    pub requested_time: String,

    /// `None` until the season is scheduled.
    #[serde(default, deserialize_with = "util::scheduled_time")]
    pub first_time: Option<PrimitiveDateTime>,

    #[serde(default)]
    pub num_episodes: Link,

    #[serde(default, rename = "allocatelink")]
    pub allocate_link: Link,

    #[serde(default, rename = "rejectlink")]
    pub reject_link: Link,
}

impl Season {
    /// Whether the season has been given a slot in the schedule.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.first_time.is_some()
    }
}

impl<R: Requester> Session<R> {
    pub async fn get_season(&self, id: u64) -> Result<Season> {
        self.get(format!("/season/{id}/"))
            .await
            .decode_required("no such season")
    }

    pub async fn get_timeslots_for_season(&self, id: u64) -> Result<Vec<Timeslot>> {
        self.get(format!("/season/{id}/alltimeslots/"))
            .await
            .decode_or_default()
    }

    /// Retrieves all seasons in the most recent term.
    pub async fn get_all_seasons_in_latest_term(&self) -> Result<Vec<Season>> {
        self.get("/season/allseasonsinlatestterm/")
            .await
            .decode_or_default()
    }
}
