use std::fmt;

use serde_json::value::RawValue;

use super::{Request, Requester, Response};
use crate::error::Result;

/// Function answering mocked requests with raw JSON bytes.
pub type Handler = Box<dyn Fn(&Request) -> Vec<u8> + Send + Sync>;

enum Payload {
    Fixed(Box<RawValue>),
    Handler(Handler),
}

/// Requester that answers from memory, for tests.
///
/// Never performs I/O and never fails for network reasons.
pub struct MockRequester {
    payload: Payload,
}

impl MockRequester {
    /// A requester that answers every request with `message`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `message` is not valid JSON.
    pub fn fixed(message: impl AsRef<[u8]>) -> Result<Self> {
        let raw = serde_json::from_slice::<Box<RawValue>>(message.as_ref())?;
        Ok(Self {
            payload: Payload::Fixed(raw),
        })
    }

    /// A requester that answers with whatever `handler` returns for each
    /// request.
    ///
    /// Bytes that are not valid JSON are not reported as an error: the
    /// response simply carries no payload.
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Vec<u8> + Send + Sync + 'static,
    {
        Self {
            payload: Payload::Handler(Box::new(handler)),
        }
    }
}

impl Requester for MockRequester {
    async fn execute(&self, request: Request) -> Response {
        match &self.payload {
            Payload::Fixed(raw) => Response::ok(Some(raw.clone())),
            Payload::Handler(handler) => {
                let bytes = handler(&request);
                match serde_json::from_slice::<Box<RawValue>>(&bytes) {
                    Ok(raw) => Response::ok(Some(raw)),
                    Err(e) => {
                        debug!("{}: mock payload is not JSON ({e})", request.endpoint);
                        Response::ok(None)
                    }
                }
            }
        }
    }
}

impl fmt::Debug for MockRequester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Fixed(raw) => f.debug_tuple("MockRequester::Fixed").field(raw).finish(),
            Payload::Handler(_) => f.write_str("MockRequester::Handler"),
        }
    }
}
