use std::time::SystemTime;

use serde::Deserialize;
use serde_with::{formats::Flexible, serde_as, TimestampSeconds};

use super::{escape, Link};
use crate::{api::Requester, error::Result, Session};

/// A published podcast.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Podcast {
    #[serde(rename = "podcast_id")]
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Publication status, such as `Published`.
    #[serde(default)]
    pub status: String,

    /// When the podcast was published.
    #[serde_as(as = "Option<TimestampSeconds<i64, Flexible>>")]
    #[serde(default)]
    pub time: Option<SystemTime>,

    /// URL of the audio file.
    #[serde(default, rename = "uri")]
    pub file: String,

    #[serde(default)]
    pub photo: String,

    #[serde(default, rename = "editlink")]
    pub edit_link: Link,

    #[serde(default, rename = "micrositelink")]
    pub microsite_link: Link,
}

impl<R: Requester> Session<R> {
    /// Retrieves the latest podcasts.
    pub async fn get_all_podcasts(&self) -> Result<Vec<Podcast>> {
        self.get("/podcast/allpodcasts").await.decode_or_default()
    }

    /// Searches podcasts by title.
    pub async fn get_podcast_search_meta(&self, term: &str) -> Result<Vec<Podcast>> {
        self.get(format!("/podcast/searchmeta/{}", escape(term)))
            .await
            .decode_or_default()
    }
}
