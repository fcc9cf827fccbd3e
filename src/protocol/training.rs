use std::collections::BTreeMap;

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use time::PrimitiveDateTime;

use crate::{api::Requester, error::Result, util, Session};

/// A training session ("demo") for prospective presenters.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrainingSession {
    #[serde(rename = "demo_id")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u64,

    /// The presenter status the session trains for.
    #[serde(rename = "presenterstatusid")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub presenter_status_id: u64,

    /// Start, like `Mon 02 Jan 15:04`; see [`TrainingSession::start_time`].
    #[serde(rename = "demo_time")]
    pub start_time_raw: String,

    /// Name of the trainer.
    #[serde(rename = "member")]
    pub host: String,

    #[serde(rename = "memberid")]
    pub host_member_id: u64,
}

impl TrainingSession {
    /// When the session starts.
    ///
    /// MyRadio leaves out the year, so the current year is assumed.
    ///
    /// # Errors
    ///
    /// Will return `Err` if MyRadio sent a malformed time.
    pub fn start_time(&self) -> Result<PrimitiveDateTime> {
        util::parse_demo_time(&self.start_time_raw)
    }
}

/// A training session with signup details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TrainingSessionForSignup {
    #[serde(flatten)]
    pub session: TrainingSession,

    #[serde(default)]
    pub signup_cutoff_hours: u32,

    #[serde(default)]
    pub max_participants: u32,

    #[serde(default)]
    pub attendee_count: u32,
}

impl<R: Requester> Session<R> {
    pub async fn get_future_training_sessions(&self) -> Result<Vec<TrainingSession>> {
        self.get("/demo/listdemos").await.decode_or_default()
    }

    pub async fn get_future_training_sessions_for_signup(
        &self,
    ) -> Result<Vec<TrainingSessionForSignup>> {
        self.get("/demo/listdemosforsignup")
            .await
            .decode_or_default()
    }

    /// Signs the member with ID `user_id` up to the training session with ID
    /// `demo_id`, returning MyRadio's result code.
    pub async fn add_attendee_to_demo(&self, demo_id: u64, user_id: u64) -> Result<i64> {
        let form = BTreeMap::from([("userid".to_string(), vec![user_id.to_string()])]);
        self.post(format!("/demo/{demo_id}/addattendee"), form)
            .await
            .decode_required("no result")
    }
}

#[cfg(test)]
mod tests {
    use http::Method;
    use time::{macros::datetime, OffsetDateTime};

    use super::*;

    #[tokio::test]
    async fn sessions_for_signup() {
        let session = Session::mock(
            r#"[{"demo_id": "12", "presenterstatusid": "1", "demo_time": "Mon 02 Jan 15:04",
                 "member": "John Smith", "memberid": 10, "signup_cutoff_hours": 24,
                 "max_participants": 4, "attendee_count": 1}]"#,
        )
        .unwrap();

        let sessions = session
            .get_future_training_sessions_for_signup()
            .await
            .unwrap();
        assert_eq!(sessions.len(), 1);

        let demo = &sessions[0];
        assert_eq!(demo.session.id, 12);
        assert_eq!(demo.session.host, "John Smith");
        assert_eq!(demo.max_participants, 4);

        let year = OffsetDateTime::now_utc().year();
        let start = demo.session.start_time().unwrap();
        assert_eq!(start.year(), year);
        assert_eq!(
            start.replace_year(2006).unwrap(),
            datetime!(2006-01-02 15:04)
        );
    }

    #[tokio::test]
    async fn attendee_is_posted() {
        let session = Session::mock_with(|request| {
            assert_eq!(request.endpoint, "/demo/12/addattendee");
            assert_eq!(request.method, Method::POST);
            assert_eq!(request.params["userid"], ["7449"]);
            b"0".to_vec()
        });

        assert_eq!(session.add_attendee_to_demo(12, 7449).await.unwrap(), 0);
    }
}
