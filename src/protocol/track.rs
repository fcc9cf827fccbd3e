use std::{collections::BTreeMap, time::Duration};

use serde::Deserialize;

use crate::{
    api::{Request, Requester},
    error::{Error, Result},
    util, Session,
};

/// An album in the music library.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Album {
    #[serde(rename = "recordid")]
    pub id: u64,

    pub title: String,

    /// Primary credited artist.
    pub artist: String,

    pub date_added: String,
    pub date_released: String,
    pub last_modified: String,

    /// ID of the CD, if the album comes from one.
    #[serde(rename = "cdid")]
    pub cd_id: String,

    /// Location of the physical copy, if any.
    pub location: String,
    pub shelf_letter: String,
    pub shelf_number: u64,

    /// Single-character physical format code.
    pub format: String,

    /// Single-character physical medium code.
    #[serde(rename = "media")]
    pub medium: String,

    /// Member ID of whoever added the album.
    #[serde(rename = "member_add")]
    pub adding_member: u64,

    /// Member ID of whoever last changed the album.
    #[serde(rename = "member_edit")]
    pub editing_member: u64,

    pub record_label: String,

    /// Digitisation status code.
    pub status: String,
}

/// A track in the music library.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Track {
    #[serde(rename = "trackid")]
    pub id: u64,

    pub title: String,
    pub artist: String,

    /// Library the track belongs to, such as `central`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Length as `H:MM:SS`; see [`Track::length`].
    #[serde(rename = "length")]
    pub length_raw: String,

    /// Intro length in seconds; see [`Track::intro`].
    #[serde(rename = "intro")]
    pub intro_secs: u64,

    /// Free of expletives.
    pub clean: bool,

    /// Available to the playout system.
    pub digitised: bool,
}

impl Track {
    /// Length of the track.
    ///
    /// # Errors
    ///
    /// Will return [`Error::InvalidArgument`] if the length MyRadio sent is
    /// malformed or negative.
    pub fn length(&self) -> Result<Duration> {
        let length = util::parse_duration(&self.length_raw)?;
        Duration::try_from(length).map_err(|_| {
            Error::InvalidArgument(format!("negative track length: {}", self.length_raw))
        })
    }

    #[must_use]
    pub fn intro(&self) -> Duration {
        Duration::from_secs(self.intro_secs)
    }
}

/// Filters for [`Session::search_tracks`].
///
/// Only the filters that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackSearchParams {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub record_id: Option<u64>,
    pub digitised: Option<bool>,

    /// `y`, `n` or `u` for unknown.
    pub clean: Option<String>,

    pub precise: Option<bool>,
    pub limit: Option<u64>,

    /// `id` (the default), `title` or `random`.
    pub sort: Option<String>,

    pub itones_playlist_id: Option<String>,
}

impl TrackSearchParams {
    fn into_params(self) -> BTreeMap<String, Vec<String>> {
        let params = [
            ("title", self.title),
            ("artist", self.artist),
            ("recordid", self.record_id.map(|id| id.to_string())),
            ("digitised", self.digitised.map(|b| b.to_string())),
            ("clean", self.clean),
            ("precise", self.precise.map(|b| b.to_string())),
            ("limit", self.limit.map(|n| n.to_string())),
            ("sort", self.sort),
            ("itonesplaylistid", self.itones_playlist_id),
        ];

        params
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key.to_string(), vec![value])))
            .collect()
    }
}

impl<R: Requester> Session<R> {
    pub async fn get_track(&self, id: u64) -> Result<Track> {
        self.get(format!("/track/{id}"))
            .await
            .decode_required("no such track")
    }

    pub async fn get_track_title(&self, id: u64) -> Result<String> {
        self.get(format!("/track/{id}/title"))
            .await
            .decode_required("no such track")
    }

    pub async fn get_track_album(&self, id: u64) -> Result<Album> {
        self.get(format!("/track/{id}/album"))
            .await
            .decode_required("no such track")
    }

    /// Searches the music library.
    pub async fn search_tracks(&self, params: TrackSearchParams) -> Result<Vec<Track>> {
        let mut request = Request::new("/track/search");
        request.params = params.into_params();
        self.execute(request).await.decode_or_default()
    }
}
