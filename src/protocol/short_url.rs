use serde::Deserialize;

use crate::{api::Requester, error::Result, Session};

/// A short URL redirecting to somewhere on or off the website.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShortUrl {
    #[serde(rename = "short_url_id")]
    pub id: u64,

    pub slug: String,
    pub redirect_to: String,
}

impl<R: Requester> Session<R> {
    pub async fn get_all_short_urls(&self) -> Result<Vec<ShortUrl>> {
        self.get("/shortUrl/all").await.decode_or_default()
    }

    /// Records a click on the short URL with the given ID.
    pub async fn log_short_url_click(
        &self,
        id: u64,
        user_agent: &str,
        ip_address: &str,
    ) -> Result<()> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("ipAddress", ip_address)
            .append_pair("userAgent", user_agent)
            .finish();

        self.put(format!("/shortUrl/{id}/logclick"), body)
            .await
            .into_json()
            .map(drop)
    }
}
