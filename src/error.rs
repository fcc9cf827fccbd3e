//! Error handling for the MyRadio client.
//!
//! Every failure is returned as data. The transport classifies outcomes into
//! the following categories:
//!
//! * [`Error::Method`]: the request used an HTTP method MyRadio does not take
//! * [`Error::HttpClient`]: DNS, connection, TLS or I/O failure
//! * [`Error::Status`]: MyRadio answered with a non-2xx status
//! * [`Error::Envelope`]: a 2xx body that is not a `{status, payload}` object
//! * [`Error::Api`]: a well-formed envelope whose status is not `"OK"`
//!
//! Decoding a payload into a caller type can additionally fail with
//! [`Error::JsonParse`], and the typed endpoint wrappers add a few
//! categories of their own.
//!
//! Nothing in this crate retries: a failed call is reported once.

use thiserror::Error;

use crate::key;

/// Standard result type for MyRadio operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported HTTP method: {0}")]
    Method(http::Method),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Non-2xx HTTP response; `payload` is the raw response body.
    #[error("{endpoint} not ok: HTTP {code}: {payload}")]
    Status {
        endpoint: String,
        code: u16,
        payload: String,
    },

    #[error("{endpoint} returned a malformed envelope: {source}")]
    Envelope {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope status other than `"OK"`; `payload` is the whole envelope.
    #[error("{endpoint} response not ok: {status}: {payload}")]
    Api {
        endpoint: String,
        status: String,
        payload: String,
    },

    #[error("parsing JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("parsing URL failed: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("parsing time failed: {0}")]
    TimeParse(#[from] time::error::Parse),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no data: {0}")]
    NoData(&'static str),

    #[error(transparent)]
    Key(#[from] key::Error),
}

impl Error {
    /// The HTTP status code MyRadio answered with.
    ///
    /// Returns `0` for failures that did not come with a status, including
    /// envelopes whose status is not `"OK"`.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Status { code, .. } => *code,
            Self::HttpClient(e) => e.status().map_or(0, |status| status.as_u16()),
            _ => 0,
        }
    }

    /// The endpoint that was being called, for failures detected by the
    /// transport after the request was sent.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Status { endpoint, .. }
            | Self::Envelope { endpoint, .. }
            | Self::Api { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    /// The raw error body or message attached by MyRadio, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Status { payload, .. } | Self::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code_and_endpoint() {
        let err = Error::Status {
            endpoint: "/show/1".to_string(),
            code: 404,
            payload: "not here".to_string(),
        };

        assert_eq!(err.code(), 404);
        assert_eq!(err.endpoint(), Some("/show/1"));
        assert_eq!(err.payload(), Some("not here"));
        assert_eq!(err.to_string(), "/show/1 not ok: HTTP 404: not here");
    }

    #[test]
    fn api_error_has_no_code() {
        let err = Error::Api {
            endpoint: "/timeslot/1".to_string(),
            status: "FAIL".to_string(),
            payload: r#"{"status":"FAIL"}"#.to_string(),
        };

        assert_eq!(err.code(), 0);
        assert_eq!(err.endpoint(), Some("/timeslot/1"));
    }

    #[test]
    fn argument_errors_have_no_endpoint() {
        let err = Error::InvalidArgument("week 54".to_string());
        assert_eq!(err.code(), 0);
        assert!(err.endpoint().is_none());
        assert!(err.payload().is_none());
    }
}
