//! Sessions against a MyRadio server.
//!
//! A [`Session`] owns one [`Requester`] and exposes the typed endpoint
//! wrappers, which live with their domain types in [`protocol`](crate::protocol).
//! Each wrapper consumes exactly one API request.
//!
//! # Example
//!
//! ```rust
//! use myradio::Session;
//!
//! let session = Session::from_key_file()?;
//! let now = session.get_current_and_next().await?;
//! println!("on air: {}", now.current.title);
//! ```
//!
//! For tests, [`Session::mock`] and [`Session::mock_with`] answer from memory.

use std::collections::BTreeMap;

use http::Method;

use crate::{
    api::{HttpRequester, MockRequester, Request, Requester, Response},
    config::Config,
    error::Result,
    key::{self, ApiKey},
};

/// An open API session.
#[derive(Debug)]
pub struct Session<R = HttpRequester> {
    requester: R,
}

impl Session<HttpRequester> {
    /// Opens a session against the production API.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client cannot be built.
    pub fn new(api_key: ApiKey) -> Result<Self> {
        Self::with_config(&Config::default(), api_key)
    }

    /// Opens a session against the API rooted at `server`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `server` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn for_server(api_key: ApiKey, server: &str) -> Result<Self> {
        Self::with_config(&Config::for_server(server)?, api_key)
    }

    /// Opens a session as described by `config`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client cannot be built.
    pub fn with_config(config: &Config, api_key: ApiKey) -> Result<Self> {
        HttpRequester::new(config, api_key).map(Self::with_requester)
    }

    /// Opens a session against the production API, with the key from the
    /// first key file found.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no key file can be read, or the HTTP client
    /// cannot be built.
    pub fn from_key_file() -> Result<Self> {
        Self::new(key::locate()?)
    }

    /// Opens a session against the API rooted at `server`, with the key from
    /// the first key file found.
    ///
    /// # Errors
    ///
    /// As [`Session::from_key_file`] and [`Session::for_server`].
    pub fn from_key_file_for_server(server: &str) -> Result<Self> {
        Self::for_server(key::locate()?, server)
    }
}

impl Session<MockRequester> {
    /// A session answering every request with `message`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `message` is not valid JSON.
    pub fn mock(message: impl AsRef<[u8]>) -> Result<Self> {
        MockRequester::fixed(message).map(Self::with_requester)
    }

    /// A session answering each request with what `handler` returns for it.
    pub fn mock_with<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Vec<u8> + Send + Sync + 'static,
    {
        Self::with_requester(MockRequester::with_handler(handler))
    }
}

impl<R: Requester> Session<R> {
    #[must_use]
    pub fn with_requester(requester: R) -> Self {
        Self { requester }
    }

    #[must_use]
    pub fn requester(&self) -> &R {
        &self.requester
    }

    /// Fulfils `request`.
    pub async fn execute(&self, request: Request) -> Response {
        self.requester.execute(request).await
    }

    /// Fulfils a plain GET request for `endpoint`.
    pub async fn get(&self, endpoint: impl Into<String>) -> Response {
        self.execute(Request::new(endpoint)).await
    }

    /// Fulfils a GET request for `endpoint` with query parameters.
    pub async fn get_with_params(
        &self,
        endpoint: impl Into<String>,
        params: BTreeMap<String, Vec<String>>,
    ) -> Response {
        let mut request = Request::new(endpoint);
        request.params = params;
        self.execute(request).await
    }

    /// Fulfils a POST request for `endpoint` with form parameters.
    pub async fn post(
        &self,
        endpoint: impl Into<String>,
        form: BTreeMap<String, Vec<String>>,
    ) -> Response {
        let mut request = Request::new(endpoint).with_method(Method::POST);
        request.params = form;
        self.execute(request).await
    }

    /// Fulfils a PUT request for `endpoint` with `body`.
    pub async fn put(&self, endpoint: impl Into<String>, body: impl Into<Vec<u8>>) -> Response {
        let request = Request::new(endpoint)
            .with_method(Method::PUT)
            .with_body(body);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::Error;

    /// A mock session that records every request it sees.
    fn recording() -> (Session<MockRequester>, Arc<Mutex<Vec<Request>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let session = Session::mock_with(move |request| {
            log.lock().unwrap().push(request.clone());
            b"{}".to_vec()
        });
        (session, seen)
    }

    #[test]
    fn mock_rejects_invalid_json() {
        assert!(matches!(
            Session::mock(b"{".as_slice()),
            Err(Error::JsonParse(_))
        ));
    }

    #[test]
    fn for_server_rejects_invalid_urls() {
        let key: ApiKey = "KEY".parse().unwrap();
        assert!(matches!(
            Session::for_server(key, "not a url"),
            Err(Error::UrlParse(_))
        ));
    }

    #[tokio::test]
    async fn helpers_build_the_expected_requests() {
        let (session, seen) = recording();
        let form = BTreeMap::from([("userid".to_string(), vec!["7449".to_string()])]);

        session.get("/term/allterms/").await;
        session.post("/demo/1/addattendee", form.clone()).await;
        session.put("/shortUrl/1/logclick", "userAgent=curl").await;
        session.get_with_params("/event/next", form.clone()).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);

        assert_eq!(seen[0], Request::new("/term/allterms/"));

        assert_eq!(seen[1].method, Method::POST);
        assert_eq!(seen[1].params, form);

        assert_eq!(seen[2].method, Method::PUT);
        assert_eq!(seen[2].body, b"userAgent=curl");

        assert_eq!(seen[3].method, Method::GET);
        assert_eq!(seen[3].params, form);
    }
}
