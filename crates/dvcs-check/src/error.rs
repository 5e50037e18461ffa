use dvcs_client::ClientError;
use dvcs_ticket::PatternError;
use thiserror::Error;

/// Exit status for every kind of failure, including failed checks
pub const FAILURE_EXIT_CODE: u8 = 255;

/// Fatal conditions that stop a check run
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Failed to load json from string: {0}")]
    InvalidPullRequest(#[from] serde_json::Error),

    #[error("Pull request payload has no {0} link")]
    MissingLink(&'static str),

    #[error("Did not get a github token, failing!")]
    MissingToken,

    #[error("Failed to load configuration: {0:#}")]
    Config(#[source] anyhow::Error),

    #[error("Invalid ticket grammar: {0}")]
    Pattern(#[from] PatternError),

    #[error("Failed to create the GitHub client: {0}")]
    Client(#[source] ClientError),

    #[error("Failed to delete one or more comments:\n{0}")]
    CommentCleanup(#[source] ClientError),

    #[error("Failed to get commits: {0}")]
    CommitFetch(#[source] ClientError),
}

impl CheckError {
    /// Process exit status for this error
    ///
    /// All failure classes share one code; the printed message tells them apart.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}
