use serde::Deserialize;

use crate::{api::Requester, error::Result, Session};

/// A website banner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Banner {
    #[serde(rename = "banner_id")]
    pub id: u64,

    /// Alternative text.
    pub alt: String,

    /// Where the banner links to.
    pub target: String,

    /// Image URL.
    pub url: String,
}

impl<R: Requester> Session<R> {
    /// Retrieves the banners currently shown.
    pub async fn get_live_banners(&self) -> Result<Vec<Banner>> {
        self.get("/banner/livebanners/").await.decode_or_default()
    }
}
