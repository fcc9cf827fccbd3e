use std::{collections::BTreeMap, fmt};

use http::Method;

/// An API request being built.
///
/// Nothing is validated while building; an unsupported [`Method`] is only
/// reported when the request is executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// The endpoint, as a suffix of the API root URL.
    pub endpoint: String,

    /// Mixins, in the order they were added. Duplicates are kept.
    pub mixins: Vec<String>,

    /// Query or form parameters.
    pub params: BTreeMap<String, Vec<String>>,

    pub method: Method,

    pub body: Vec<u8>,
}

impl Request {
    /// Creates a GET request for `endpoint` without mixins, params or body.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            mixins: Vec::new(),
            params: BTreeMap::new(),
            method: Method::GET,
            body: Vec::new(),
        }
    }

    /// Creates a GET request for an interpolated endpoint.
    ///
    /// ```rust
    /// let request = Request::formatted(format_args!("/show/{}", 8_675_309));
    /// assert_eq!(request.endpoint, "/show/8675309");
    /// ```
    #[must_use]
    pub fn formatted(args: fmt::Arguments<'_>) -> Self {
        Self::new(fmt::format(args))
    }

    /// Appends `names` to the mixin list.
    pub fn add_mixins<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mixins.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the values of parameter `key`, replacing any earlier values.
    pub fn set_param<K, I, V>(&mut self, key: K, values: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.params
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn set_method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_mixins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_mixins(names);
        self
    }

    #[must_use]
    pub fn with_param<K, I, V>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.set_param(key, values);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// The comma-joined mixins parameter, or `None` without mixins.
    #[must_use]
    pub fn encoded_mixins(&self) -> Option<String> {
        if self.mixins.is_empty() {
            None
        } else {
            Some(self.mixins.join(","))
        }
    }
}
