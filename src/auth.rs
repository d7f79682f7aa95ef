use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use std::time::Duration;

use crate::error::ConfigError;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("issues/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Option<String>,
}

impl Credentials {
    /// A blank key is the same as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    #[cfg(test)]
    fn is_anonymous(&self) -> bool {
        self.api_key.is_none()
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Builds the HTTP transport. With a key, every request carries
/// `Authorization: Bearer <key>`; without one, requests are anonymous.
/// The key itself is not checked here; GitHub rejects bad keys per request.
pub fn authenticate(
    credentials: &Credentials,
    timeout: Duration,
) -> Result<reqwest::Client, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        "X-GitHub-Api-Version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    match &credentials.api_key {
        Some(key) => {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", key.trim()))
                .map_err(|_| ConfigError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            tracing::debug!("using authenticated GitHub access");
        }
        None => tracing::debug!("no API key set, using anonymous GitHub access"),
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(ConfigError::Client)
}
