use std::time::SystemTime;

use serde::Deserialize;
use serde_with::{formats::Flexible, serde_as, TimestampSeconds};

use crate::{api::Requester, error::Result, Session};

/// A scheduling term.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Term {
    #[serde(rename = "term_id")]
    pub id: u64,

    #[serde_as(as = "TimestampSeconds<i64, Flexible>")]
    pub start: SystemTime,

    #[serde(default, rename = "descr")]
    pub description: String,

    #[serde(default)]
    pub num_weeks: u32,

    /// Names of the weeks, such as `Week 1`.
    #[serde(default)]
    pub week_names: Vec<String>,
}

impl<R: Requester> Session<R> {
    /// Retrieves all terms, past and future.
    pub async fn get_all_terms(&self) -> Result<Vec<Term>> {
        self.get("/term/allterms/").await.decode_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    #[tokio::test]
    async fn all_terms() {
        let session = Session::mock(
            r#"[{"term_id": 20, "start": 1475449200, "descr": "Autumn 2016", "num_weeks": 10,
                 "week_names": ["Week 1", "Week 2"]}]"#,
        )
        .unwrap();

        let terms = session.get_all_terms().await.unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].start, UNIX_EPOCH + Duration::from_secs(1_475_449_200));
        assert_eq!(terms[0].description, "Autumn 2016");
        assert_eq!(terms[0].week_names, ["Week 1", "Week 2"]);
    }

    #[tokio::test]
    async fn null_payload_is_no_terms() {
        let session = Session::mock("null").unwrap();
        assert!(session.get_all_terms().await.unwrap().is_empty());
    }
}
