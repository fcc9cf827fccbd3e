use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::error::{Error, Result};

/// The outcome of executing one [`Request`](super::Request).
///
/// Holds either the raw JSON payload of a successful call, which MyRadio may
/// leave out, or the error that ended the call.
#[derive(Debug)]
pub struct Response {
    result: Result<Option<Box<RawValue>>>,
}

impl Response {
    #[must_use]
    pub fn ok(raw: Option<Box<RawValue>>) -> Self {
        Self { result: Ok(raw) }
    }

    #[must_use]
    pub fn err(error: impl Into<Error>) -> Self {
        Self {
            result: Err(error.into()),
        }
    }

    #[must_use]
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// Whether the call succeeded without a meaningful payload.
    ///
    /// MyRadio reports "nothing here" as either `[]` or `{}` depending on the
    /// endpoint (PHP does not tell empty arrays and empty maps apart), so
    /// both count as empty, as does a missing payload. A failed call is never
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.result {
            Ok(None) => true,
            Ok(Some(raw)) => matches!(raw.get(), "[]" | "{}"),
            Err(_) => false,
        }
    }

    /// The raw payload or the error, unmodified.
    ///
    /// # Errors
    ///
    /// Returns the stored error if the call failed.
    pub fn json(&self) -> std::result::Result<Option<&RawValue>, &Error> {
        self.result.as_ref().map(Option::as_deref)
    }

    /// Consumes the response, returning the raw payload or the error.
    ///
    /// # Errors
    ///
    /// Returns the stored error if the call failed.
    pub fn into_json(self) -> Result<Option<Box<RawValue>>> {
        self.result
    }

    /// Decodes the payload into `T`, parsing the raw bytes afresh.
    ///
    /// Returns `Ok(None)` when the call succeeded without a payload or with
    /// a `null` one.
    ///
    /// # Errors
    ///
    /// Returns the stored error if the call failed, without decoding, or
    /// a JSON error if the payload does not fit `T`.
    pub fn decode<T>(self) -> Result<Option<T>>
    where
        T: DeserializeOwned + Debug,
    {
        match self.payload()? {
            Some(raw) => json(raw.get()).map(Some),
            None => Ok(None),
        }
    }

    /// Decodes the payload into `T`, or `T::default()` when the payload is
    /// missing or `null`.
    ///
    /// # Errors
    ///
    /// As [`Response::decode`].
    pub fn decode_or_default<T>(self) -> Result<T>
    where
        T: DeserializeOwned + Debug + Default,
    {
        match self.payload()? {
            Some(raw) => json(raw.get()),
            None => Ok(T::default()),
        }
    }

    /// Decodes the payload into `T`, treating a missing payload as an error.
    ///
    /// # Errors
    ///
    /// As [`Response::decode`], plus [`Error::NoData`] with `what` when the
    /// call succeeded without a payload.
    pub fn decode_required<T>(self, what: &'static str) -> Result<T>
    where
        T: DeserializeOwned + Debug,
    {
        match self.payload()? {
            Some(raw) => json(raw.get()),
            None => Err(Error::NoData(what)),
        }
    }

    /// The payload to decode, with a literal `null` counted as absent.
    fn payload(self) -> Result<Option<Box<RawValue>>> {
        Ok(self.result?.filter(|raw| raw.get() != "null"))
    }
}

impl From<Result<Option<Box<RawValue>>>> for Response {
    fn from(result: Result<Option<Box<RawValue>>>) -> Self {
        Self { result }
    }
}

/// Parses and logs a JSON payload.
///
/// # Logging
///
/// * Success: logs the parsed structure at TRACE level
/// * Failure: logs the error at ERROR level and the raw payload at TRACE
///   level, so that field mismatches can be diagnosed
fn json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned + Debug,
{
    let target = std::any::type_name::<T>();
    match serde_json::from_str(body) {
        Ok(result) => {
            trace!("{target}: {result:#?}");
            Ok(result)
        }
        Err(e) => {
            error!("{target}: failed parsing payload ({e})");
            trace!("{body}");
            Err(e.into())
        }
    }
}
