use std::time::SystemTime;

use serde::Deserialize;
use serde_with::{formats::Flexible, serde_as, TimestampSeconds};

use super::User;
use crate::{
    api::{Request, Requester},
    error::Result,
    Session,
};

/// A station committee team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "teamid")]
    pub team_id: u64,

    pub name: String,
    pub alias: String,
    pub ordering: u64,
    pub description: String,
    pub status: String,

    /// Only sent with the `officers` mixin.
    pub officers: Vec<Officer>,
}

/// A member holding an officer position.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Officer {
    #[serde(alias = "User")]
    pub user: User,

    #[serde_as(as = "TimestampSeconds<i64, Flexible>")]
    pub from: SystemTime,

    #[serde(default, rename = "memberofficerid")]
    pub member_officer_id: u64,

    #[serde(default)]
    pub position: OfficerPosition,
}

/// A position on the station committee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfficerPosition {
    #[serde(rename = "officerid")]
    pub officer_id: u64,

    pub name: String,
    pub alias: String,
    pub team: Team,
    pub ordering: u64,
    pub description: String,
    pub status: String,

    #[serde(rename = "type")]
    pub kind: String,

    /// Current holders, with the `current` mixin.
    pub current: Vec<User>,

    /// Past holders, with the `history` mixin.
    pub history: Vec<OfficerHistory>,
}

/// A past or present holder of an officer position.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OfficerHistory {
    #[serde(alias = "User")]
    pub user: User,

    #[serde_as(as = "TimestampSeconds<i64, Flexible>")]
    pub from: SystemTime,

    /// `None` while the position is held.
    #[serde_as(as = "Option<TimestampSeconds<i64, Flexible>>")]
    #[serde(default)]
    pub to: Option<SystemTime>,

    #[serde(default, rename = "memberofficerid")]
    pub member_officer_id: u64,
}

impl<R: Requester> Session<R> {
    /// Retrieves all teams on the station committee.
    pub async fn get_current_teams(&self) -> Result<Vec<Team>> {
        self.get("/team/currentteams/").await.decode_or_default()
    }

    /// Retrieves the team with the given alias, with its officers.
    pub async fn get_team_with_officers(&self, alias: &str) -> Result<Team> {
        let request =
            Request::formatted(format_args!("/team/byalias/{alias}")).with_mixins(["officers"]);
        self.execute(request).await.decode_required("no such team")
    }

    /// Retrieves the heads of the team with the given ID.
    pub async fn get_team_head_positions<I, S>(&self, id: u64, mixins: I) -> Result<Vec<Officer>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            Request::formatted(format_args!("/team/{id}/headpositions")).with_mixins(mixins);
        self.execute(request).await.decode_or_default()
    }

    /// Retrieves the assistant heads of the team with the given ID.
    pub async fn get_team_assistant_head_positions<I, S>(
        &self,
        id: u64,
        mixins: I,
    ) -> Result<Vec<Officer>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = Request::formatted(format_args!("/team/{id}/assistantheadpositions"))
            .with_mixins(mixins);
        self.execute(request).await.decode_or_default()
    }

    /// Retrieves all officer positions, past and present.
    pub async fn get_all_officer_positions<I, S>(&self, mixins: I) -> Result<Vec<OfficerPosition>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = Request::new("/officer/allofficerpositions").with_mixins(mixins);
        self.execute(request).await.decode_or_default()
    }
}
