//! Application configuration.

/// Default feed endpoint.
pub const DEFAULT_URL: &str =
    "https://wwwlab.iit.his.se/brom/kurser/mobilprog/dbservice/admin/getdataasjson.php?type=brom";

/// Default user agent sent with the fetch.
pub const DEFAULT_USER_AGENT: &str = concat!("mountains/", env!("CARGO_PKG_VERSION"));

/// Settings for fetching the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Feed URL. Must be an absolute HTTP(S) URL.
    pub url: String,

    /// User agent header value.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Config pointing at a different feed.
    pub fn with_url<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the feed URL.
    pub fn set_url<S: Into<String>>(&mut self, url: S) {
        self.url = url.into();
    }

    /// Set the user agent.
    pub fn set_user_agent<S: Into<String>>(&mut self, user_agent: S) {
        self.user_agent = user_agent.into();
    }
}
