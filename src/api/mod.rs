//! Low-level interface to the MyRadio API.
//!
//! A [`Request`] describes one call: an endpoint, optional mixins and
//! parameters, a method and a body. A [`Requester`] turns it into a
//! [`Response`]:
//!
//! * [`HttpRequester`] makes an authenticated HTTP call
//! * [`MockRequester`] answers from memory, for tests
//!
//! # Example
//!
//! ```rust
//! use myradio::api::{HttpRequester, Request, Requester};
//!
//! let requester = HttpRequester::new(&Config::default(), key)?;
//! let request = Request::new("/team/byalias/computing").with_mixins(["officers"]);
//! let team: Team = requester.execute(request).await.decode_required("team")?;
//! ```

pub mod http;
pub mod mock;
pub mod request;
pub mod response;

pub use http::HttpRequester;
pub use mock::MockRequester;
pub use request::Request;
pub use response::Response;

use std::future::Future;

/// Anything that can fulfil an API request.
pub trait Requester {
    /// Fulfils `request` with exactly one call.
    ///
    /// Failures are carried by the returned [`Response`], never retried.
    fn execute(&self, request: Request) -> impl Future<Output = Response> + Send;
}
