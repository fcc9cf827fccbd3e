use serde::Deserialize;

use super::User;
use crate::{
    api::{Request, Requester},
    error::Result,
    Session,
};

/// An event on the station calendar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,

    /// Start, as MyRadio formats it.
    pub start: String,

    /// End, as MyRadio formats it.
    pub end: String,

    pub host: User,
}

impl<R: Requester> Session<R> {
    /// Retrieves the next `n` events.
    pub async fn get_events_next(&self, n: u32) -> Result<Vec<Event>> {
        let request = Request::new("/event/next").with_param("n", [n.to_string()]);
        self.execute(request).await.decode_or_default()
    }

    /// Retrieves the events between `start` and `end`, in any format MyRadio
    /// understands.
    pub async fn get_events_in_range(&self, start: &str, end: &str) -> Result<Vec<Event>> {
        let request = Request::new("/event/inrange")
            .with_param("start", [start])
            .with_param("end", [end]);
        self.execute(request).await.decode_or_default()
    }
}
