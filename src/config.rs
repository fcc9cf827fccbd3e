use url::Url;

use crate::error::Result;

/// Production MyRadio API root.
pub const DEFAULT_BASE_URL: &str = "https://ury.org.uk/api/v2";

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,

    /// API root; endpoint paths are appended to its path verbatim.
    pub base_url: Url,

    pub user_agent: String,
}

impl Config {
    /// Configuration for a non-standard MyRadio server.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `server` is not a valid absolute URL.
    pub fn for_server(server: &str) -> Result<Self> {
        let base_url = server.parse::<Url>()?;
        Ok(Self::with_base_url(base_url))
    }

    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        let app_name = env!("CARGO_PKG_NAME").to_owned();
        let app_version = env!("CARGO_PKG_VERSION").to_owned();

        let os_name = std::env::consts::OS;
        let os_version = sysinfo::System::os_version()
            .filter(|version| !version.is_empty() && !version.contains(illegal_chars))
            .unwrap_or_else(|| String::from("0"));

        let user_agent = format!("{app_name}/{app_version} (Rust; {os_name}/{os_version})");
        trace!("user agent: {user_agent}");

        Self {
            app_name,
            app_version,
            base_url,
            user_agent,
        }
    }
}

/// Characters that would break the `User-Agent` product tokens.
fn illegal_chars(chr: char) -> bool {
    chr == '/' || chr == ';' || chr == '(' || chr == ')'
}

impl Default for Config {
    /// Configuration for the production MyRadio server.
    ///
    /// # Panics
    ///
    /// Will panic if [`DEFAULT_BASE_URL`] is invalid.
    fn default() -> Self {
        Self::with_base_url(Url::parse(DEFAULT_BASE_URL).expect("invalid default base url"))
    }
}
