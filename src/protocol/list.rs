use serde::Deserialize;

use super::User;
use crate::{
    api::{Request, Requester},
    error::Result,
    Session,
};

/// A mailing list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct List {
    #[serde(rename = "listid")]
    pub list_id: u64,

    pub name: String,
    pub address: String,

    #[serde(rename = "recipient_count")]
    pub recipients: u64,
}

impl<R: Requester> Session<R> {
    pub async fn get_all_lists(&self) -> Result<Vec<List>> {
        self.get("/list/alllists").await.decode_or_default()
    }

    /// Retrieves the subscribers of `list`, with personal data.
    pub async fn get_list_members(&self, list: &List) -> Result<Vec<User>> {
        let request = Request::formatted(format_args!("/list/{}/members", list.list_id))
            .with_mixins(["personal_data"]);
        self.execute(request).await.decode_or_default()
    }
}
