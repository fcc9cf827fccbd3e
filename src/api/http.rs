//! Authenticated HTTP transport for the MyRadio API.
//!
//! [`HttpRequester`] wraps a `reqwest::Client` and turns each
//! [`Request`] into exactly one HTTP call:
//!
//! * The API key is always sent as `api_key`
//! * Mixins are comma-joined into `mixins`, when there are any
//! * GET and PUT carry the parameters in the query string
//! * POST carries them form-encoded in the body
//!
//! The JSON envelope of the reply is then unwrapped:
//!
//! ```json
//! {
//!     "status": "OK",
//!     "payload": ...
//! }
//! ```
//!
//! There is no rate limiting and no retrying. Timeouts and redirects are
//! left at the `reqwest` defaults.

use std::time::Duration;

use reqwest::{
    self,
    header::{HeaderValue, CONTENT_TYPE},
    Method, Url,
};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::{Request, Requester, Response};
use crate::{
    config::Config,
    error::{Error, Result},
    key::ApiKey,
};

/// Wire format of every MyRadio reply.
#[derive(Debug, Deserialize, Serialize)]
struct Envelope {
    status: String,

    #[serde(default)]
    payload: Option<Box<RawValue>>,
}

/// Requester that makes authenticated calls against a MyRadio server.
///
/// Holds no per-call state, so one requester can serve concurrent calls.
#[derive(Debug)]
pub struct HttpRequester {
    client: reqwest::Client,
    api_key: ApiKey,
    base_url: Url,
}

impl HttpRequester {
    /// Name of the API key parameter.
    pub const API_KEY_PARAM: &'static str = "api_key";

    /// Name of the mixins parameter.
    pub const MIXINS_PARAM: &'static str = "mixins";

    /// `Content-Type` of POST bodies.
    const FORM_CONTENT: HeaderValue =
        HeaderValue::from_static("application/x-www-form-urlencoded");

    /// Duration to keep idle connections alive.
    ///
    /// Prevents frequent reconnection overhead for subsequent requests.
    const KEEPALIVE_TIMEOUT: Duration = Duration::from_secs(60);

    /// Creates a requester for the server in `config`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client cannot be built, for example
    /// because the `User-Agent` in `config` is not a valid header value.
    pub fn new(config: &Config, api_key: ApiKey) -> Result<Self> {
        let client = reqwest::Client::builder()
            .tcp_keepalive(Self::KEEPALIVE_TIMEOUT)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The full parameter list for `request`.
    ///
    /// `api_key` comes first, then `mixins`, then the caller's parameters.
    /// Caller parameters that reuse either reserved name are dropped so that
    /// they can never shadow the key or the mixins.
    fn params<'a>(&'a self, request: &'a Request) -> Vec<(&'a str, String)> {
        let mut params = vec![(Self::API_KEY_PARAM, self.api_key.as_str().to_owned())];
        if let Some(mixins) = request.encoded_mixins() {
            params.push((Self::MIXINS_PARAM, mixins));
        }

        for (key, values) in &request.params {
            if key == Self::API_KEY_PARAM || key == Self::MIXINS_PARAM {
                warn!(
                    "{}: ignoring reserved parameter `{key}`",
                    request.endpoint
                );
                continue;
            }

            params.extend(values.iter().map(|value| (key.as_str(), value.clone())));
        }

        params
    }

    /// The endpoint URL: the base URL with the endpoint appended to its path.
    ///
    /// A trailing slash on the base path is dropped first, so that
    /// `https://host/` and `https://host` behave the same.
    fn url(&self, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{endpoint}", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }

    /// Builds the HTTP request for `request`.
    ///
    /// # Errors
    ///
    /// Will return [`Error::Method`] for anything but GET, POST and PUT.
    fn build(&self, request: Request) -> Result<reqwest::Request> {
        if ![Method::GET, Method::POST, Method::PUT].contains(&request.method) {
            return Err(Error::Method(request.method));
        }

        let mut url = self.url(&request.endpoint);
        let params = self.params(&request);

        let body = if request.method == Method::POST {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params)
                .finish();

            // A caller-supplied POST body precedes the form parameters.
            let mut body = request.body.clone();
            if !body.is_empty() {
                body.push(b'&');
            }
            body.extend_from_slice(encoded.as_bytes());
            body
        } else {
            url.query_pairs_mut().extend_pairs(params);
            request.body.clone()
        };

        let mut http_request = reqwest::Request::new(request.method.clone(), url);
        if request.method == Method::POST {
            http_request
                .headers_mut()
                .insert(CONTENT_TYPE, Self::FORM_CONTENT);
        }
        if !body.is_empty() {
            *http_request.body_mut() = Some(body.into());
        }

        Ok(http_request)
    }

    async fn send(&self, request: Request) -> Result<Option<Box<RawValue>>> {
        let endpoint = request.endpoint.clone();
        let http_request = self.build(request)?;
        debug!("{} {endpoint}", http_request.method());

        // The URL carries the API key and must not reach error messages.
        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            return Err(Error::Status {
                endpoint,
                code: status.as_u16(),
                payload: body,
            });
        }

        let envelope = match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => envelope,
            Err(source) => {
                error!("{endpoint}: failed parsing envelope ({source})");
                trace!("{body}");
                return Err(Error::Envelope { endpoint, source });
            }
        };

        if envelope.status != "OK" {
            let payload = serde_json::to_string(&envelope).unwrap_or(body);
            return Err(Error::Api {
                endpoint,
                status: envelope.status,
                payload,
            });
        }

        Ok(envelope.payload)
    }
}

impl Requester for HttpRequester {
    async fn execute(&self, request: Request) -> Response {
        self.send(request).await.into()
    }
}
