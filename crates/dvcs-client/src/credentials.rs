//! API credentials and request settings
//!
//! The token and the base request headers are bundled in an [`ApiConfig`]
//! built once at start-up and handed to the client.

use http::header::{HeaderName, ACCEPT};
use log::debug;
use std::fmt;

/// Environment variables checked for a token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

pub const DEFAULT_ACCEPT: &str = "application/vnd.github+json";
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: &str = "x-github-api-version";

/// Resolves the API token from the environment
///
/// Tries `GH_TOKEN`, then `GITHUB_TOKEN`. Empty values are ignored.
#[derive(Clone, Default)]
pub struct TokenResolver {
    token: Option<String>,
}

impl TokenResolver {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary lookup (e.g. a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = TOKEN_ENV_VARS.iter().find_map(|key| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .inspect(|_| debug!("Using token from {}", key))
        });

        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for TokenResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResolver")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Authentication and base headers for every host API call
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub token: String,
    pub accept: String,
    pub api_version: String,
    /// Base URI for GitHub Enterprise; `None` means api.github.com
    pub base_uri: Option<String>,
}

impl ApiConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            accept: DEFAULT_ACCEPT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_uri: None,
        }
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_base_uri(mut self, base_uri: Option<String>) -> Self {
        self.base_uri = base_uri;
        self
    }

    /// Headers sent with every request, besides authorization
    pub fn headers(&self) -> Vec<(HeaderName, String)> {
        vec![
            (ACCEPT, self.accept.clone()),
            (
                HeaderName::from_static(API_VERSION_HEADER),
                self.api_version.clone(),
            ),
        ]
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &"<redacted>")
            .field("accept", &self.accept)
            .field("api_version", &self.api_version)
            .field("base_uri", &self.base_uri)
            .finish()
    }
}
