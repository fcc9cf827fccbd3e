//! Domain types of the MyRadio API and the endpoints that return them.
//!
//! Each submodule holds the types for one area of MyRadio together with the
//! [`Session`](crate::Session) methods that fetch them:
//!
//! * [`show`], [`season`] and [`timeslot`] - the schedule, from shows down
//!   to single hours of airtime and their tracklists
//! * [`podcast`] - published podcasts
//! * [`user`] - members, their officerships, photos and credits
//! * [`team`] - station committee teams and officer positions
//! * [`track`] - the music library
//! * [`event`], [`list`], [`alias`], [`banner`], [`selector`],
//!   [`short_url`], [`subtype`], [`term`] and [`training`] - everything else
//!
//! # Number Handling
//!
//! MyRadio is written in PHP and not always consistent about sending numbers
//! as numbers. Identifiers that have been seen as strings accept both forms.
//!
//! # Missing Fields
//!
//! Which fields are present depends on the endpoint and on the mixins asked
//! for. Fields that can be missing fall back to their defaults.

pub mod alias;
pub mod banner;
pub mod event;
pub mod list;
pub mod podcast;
pub mod season;
pub mod selector;
pub mod short_url;
pub mod show;
pub mod subtype;
pub mod team;
pub mod term;
pub mod timeslot;
pub mod track;
pub mod training;
pub mod user;

pub use alias::{Alias, AliasDestination};
pub use banner::Banner;
pub use event::Event;
pub use list::List;
pub use podcast::Podcast;
pub use season::Season;
pub use selector::{Lock, Power, SelectorInfo};
pub use short_url::ShortUrl;
pub use show::{Credit, ShowMeta};
pub use subtype::ShowSubtype;
pub use team::{Officer, OfficerHistory, OfficerPosition, Team};
pub use term::Term;
pub use timeslot::{CurrentAndNext, Show, Timeslot, TracklistItem, WeekSchedule};
pub use track::{Album, Track, TrackSearchParams};
pub use training::{TrainingSession, TrainingSessionForSignup};
pub use user::{Officership, Photo, User, UserAlias};

use serde::Deserialize;

/// A link as MyRadio renders it in its own interface.
///
/// `value` is whatever the link carries: usually a URL or an icon name, but
/// MyRadio does not promise a type.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub display: String,

    #[serde(default)]
    pub value: serde_json::Value,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,
}

/// Escapes a search term for use as a path segment.
fn escape(term: &str) -> String {
    url::form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_are_escaped() {
        assert_eq!(escape("tutone"), "tutone");
        assert_eq!(escape("jenny & tommy/1"), "jenny+%26+tommy%2F1");
    }

    #[test]
    fn link_title_is_optional() {
        let link: Link =
            serde_json::from_str(r#"{"display":"icon","value":"pencil","url":"/edit"}"#).unwrap();
        assert_eq!(link.display, "icon");
        assert_eq!(link.value, "pencil");
        assert_eq!(link.title, "");
        assert_eq!(link.url, "/edit");
    }
}
