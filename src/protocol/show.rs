use serde::Deserialize;

use super::{escape, Link, Season, User};
use crate::{api::Requester, error::Result, Session};

/// A credit of a member on a show, such as presenter or producer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Credit {
    /// Credit type, as a MyRadio credit type ID.
    #[serde(rename = "type")]
    pub kind: u64,

    #[serde(rename = "memberid")]
    pub member_id: u64,

    #[serde(alias = "User")]
    pub user: User,
}

/// Summary of a show, common to shows, seasons and timeslots.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowMeta {
    pub show_id: u64,
    pub title: String,
    pub credits_string: String,
    pub credits: Vec<Credit>,
    pub description: String,
    pub show_type_id: u64,

    /// Link to the seasons of this show.
    pub seasons: Link,

    #[serde(rename = "editlink")]
    pub edit_link: Link,

    #[serde(rename = "applylink")]
    pub apply_link: Link,

    #[serde(rename = "micrositelink")]
    pub microsite_link: Link,

    pub photo: String,
}

impl<R: Requester> Session<R> {
    /// Searches shows by title.
    pub async fn get_search_meta(&self, term: &str) -> Result<Vec<ShowMeta>> {
        self.get(format!("/show/searchmeta/{}", escape(term)))
            .await
            .decode_or_default()
    }

    pub async fn get_show(&self, id: u64) -> Result<ShowMeta> {
        self.get(format!("/show/{id}"))
            .await
            .decode_required("no such show")
    }

    /// Retrieves all seasons of the show with the given ID.
    pub async fn get_seasons(&self, show_id: u64) -> Result<Vec<Season>> {
        self.get(format!("/show/{show_id}/allseasons"))
            .await
            .decode_or_default()
    }
}
