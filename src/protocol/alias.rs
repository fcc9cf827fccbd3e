use serde::Deserialize;

use crate::{
    api::{Request, Requester},
    error::Result,
    Session,
};

/// A mail alias.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alias {
    #[serde(rename = "alias_id")]
    pub id: u64,

    pub source: String,
    pub destinations: Vec<AliasDestination>,
}

/// Where an alias forwards to.
///
/// `value` depends on `kind`: a text address, a member, an officer position
/// or another alias, in whatever detail the mixins asked for.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AliasDestination {
    #[serde(rename = "type")]
    pub kind: String,

    pub value: serde_json::Value,
}

impl<R: Requester> Session<R> {
    /// Retrieves all mail aliases in use.
    pub async fn get_all_aliases<I, S>(&self, mixins: I) -> Result<Vec<Alias>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = Request::new("/alias/allaliases").with_mixins(mixins);
        self.execute(request).await.decode_or_default()
    }
}
