use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};
use time::{Date, PrimitiveDateTime};

use super::ShowMeta;
use crate::{
    api::{Request, Requester},
    error::Result,
    util, Session,
};

/// A MyRadio member.
///
/// Most fields are only sent with the `personal_data` mixin or to officers.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "memberid")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub member_id: u64,

    #[serde(rename = "fname")]
    pub first_name: String,

    #[serde(rename = "sname")]
    pub surname: String,

    pub sex: String,

    #[serde(rename = "public_email")]
    pub email: String,

    pub receive_email: bool,

    /// Profile page.
    pub url: String,

    #[serde_as(as = "DefaultOnNull")]
    pub photo: String,

    #[serde_as(as = "DefaultOnNull")]
    pub bio: String,
}

/// An officership a member holds or held.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Officership {
    #[serde(rename = "officerid")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub officer_id: u64,

    pub officer_name: String,

    #[serde(rename = "teamid")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub team_id: u64,

    #[serde(default, deserialize_with = "util::optional_date")]
    pub from_date: Option<Date>,

    /// `None` while the officership is held.
    #[serde(default, deserialize_with = "util::optional_date")]
    pub till_date: Option<Date>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Photo {
    #[serde(rename = "photoid")]
    pub photo_id: u64,

    #[serde(deserialize_with = "util::short_time")]
    pub date_added: PrimitiveDateTime,

    #[serde(default)]
    pub format: String,

    /// Member ID of the uploader.
    #[serde(default)]
    pub owner: u64,

    #[serde(default)]
    pub url: String,
}

/// A mail alias forwarding `source` to `destination`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserAlias {
    pub source: String,
    pub destination: String,
}

impl From<(String, String)> for UserAlias {
    fn from((source, destination): (String, String)) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl<R: Requester> Session<R> {
    /// Retrieves the member with the given ID, with personal data.
    pub async fn get_user(&self, id: u64) -> Result<User> {
        let request = Request::formatted(format_args!("/user/{id}")).with_mixins(["personal_data"]);
        self.execute(request).await.decode_required("no such user")
    }

    /// Retrieves the biography of the member with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`](crate::Error::NoData) if the member has no
    /// biography.
    pub async fn get_user_bio(&self, id: u64) -> Result<String> {
        self.get(format!("/user/{id}/bio/"))
            .await
            .decode_required("no bio set")
    }

    pub async fn get_user_name(&self, id: u64) -> Result<String> {
        self.get(format!("/user/{id}/name/"))
            .await
            .decode_required("no name set")
    }

    /// Retrieves the profile photo of the member with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`](crate::Error::NoData) if the member has no
    /// profile photo.
    pub async fn get_user_profile_photo(&self, id: u64) -> Result<Photo> {
        self.get(format!("/user/{id}/profilephoto/"))
            .await
            .decode_required("no profile picture set")
    }

    /// Retrieves all officerships, past and present, of the member with the
    /// given ID.
    pub async fn get_user_officerships(&self, id: u64) -> Result<Vec<Officership>> {
        self.get(format!("/user/{id}/officerships/"))
            .await
            .decode_or_default()
    }

    /// Retrieves all shows the member with the given ID is credited on.
    pub async fn get_user_show_credits(&self, id: u64) -> Result<Vec<ShowMeta>> {
        self.get(format!("/user/{id}/shows/"))
            .await
            .decode_or_default()
    }

    /// Retrieves all member mail aliases.
    pub async fn get_user_aliases(&self) -> Result<Vec<UserAlias>> {
        let pairs: Vec<(String, String)> = self
            .get("/user/allaliases/")
            .await
            .decode_or_default()?;
        Ok(pairs.into_iter().map(UserAlias::from).collect())
    }
}
