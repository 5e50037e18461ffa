//! Run inputs handed over by the CI workflow

use crate::error::CheckError;
use dvcs_client::{PullRequestEvent, TokenResolver};

/// Environment variable carrying the pull request JSON
pub const PULL_REQUEST_ENV: &str = "PULL_REQUEST";

/// The pull request under check, with the links every call needs
#[derive(Debug, Clone)]
pub struct PullRequestTarget {
    pub event: PullRequestEvent,
    pub comments_url: String,
    pub commits_url: String,
}

/// Everything read from the environment before any network call
#[derive(Debug, Clone)]
pub struct Inputs {
    pub pull_request: PullRequestTarget,
    pub token: String,
}

impl Inputs {
    /// Read `PULL_REQUEST` and the API token from the process environment
    pub fn from_env() -> Result<Self, CheckError> {
        let pull_request = std::env::var(PULL_REQUEST_ENV).ok();
        Self::parse(pull_request.as_deref(), &TokenResolver::from_env())
    }

    /// Validate raw inputs
    ///
    /// The payload is checked first, then the token, then the links.
    pub fn parse(pull_request: Option<&str>, tokens: &TokenResolver) -> Result<Self, CheckError> {
        let event: PullRequestEvent = serde_json::from_str(pull_request.unwrap_or_default())?;

        let token = tokens.token().ok_or(CheckError::MissingToken)?.to_string();

        let comments_url = event
            .comments_url()
            .ok_or(CheckError::MissingLink("comments"))?
            .to_string();
        let commits_url = event
            .commits_url()
            .ok_or(CheckError::MissingLink("commits"))?
            .to_string();

        Ok(Self {
            pull_request: PullRequestTarget {
                event,
                comments_url,
                commits_url,
            },
            token,
        })
    }
}
