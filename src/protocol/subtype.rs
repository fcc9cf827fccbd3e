use serde::Deserialize;

use crate::{api::Requester, error::Result, Session};

/// A show subtype, such as news or speech.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShowSubtype {
    /// MyRadio sends this as a string.
    #[serde(rename = "id")]
    pub subtype_id: String,

    pub name: String,

    /// CSS class name, unique per subtype.
    pub class: String,

    pub description: String,
}

impl<R: Requester> Session<R> {
    pub async fn get_all_show_subtypes(&self) -> Result<Vec<ShowSubtype>> {
        self.get("/showSubtype/all").await.decode_or_default()
    }

    /// Retrieves the subtype with CSS class `class`, if there is one.
    pub async fn get_show_subtype_by_class(&self, class: &str) -> Result<Option<ShowSubtype>> {
        let subtypes = self.get_all_show_subtypes().await?;
        Ok(subtypes.into_iter().find(|subtype| subtype.class == class))
    }
}
