use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Meal-plan generation is slow, so the default is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where the nutrition service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Resolve the base URL.
    ///
    /// An explicit API URL wins. Otherwise a deployed origin serves the API
    /// under `/api` on the same host. Otherwise the local backend is used.
    pub fn resolve(api_url: Option<&str>, origin: Option<&str>) -> Result<Self> {
        match (api_url, origin) {
            (Some(url), _) => Self::new(url),
            (None, Some(origin)) => {
                Self::new(&format!("{}/api", origin.trim_end_matches('/')))
            }
            (None, None) => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of an endpoint under the base, e.g. `calculate-carbs`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// Parse a base URL and give it exactly one trailing slash so that
/// `Url::join` appends instead of replacing the last segment.
fn normalize_base(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    Ok(Url::parse(&format!("{trimmed}/"))?)
}
