//! Host API trait
//!
//! Defines the calls the check makes against the pull request's hosting
//! service. All URLs are absolute and come from the PR payload's `_links`.

use crate::error::ClientError;
use crate::types::{DeleteStatus, IssueComment, PullCommit};
use async_trait::async_trait;

/// Host API used by the check
///
/// Implementations can hit the real API (`OctocrabHost`) or serve canned data
/// in tests. Every call is attempted exactly once; there is no retry logic.
#[async_trait]
pub trait HostApi: Send + Sync {
    /// Fetch the comments on the PR conversation thread
    ///
    /// Anything but HTTP 200 is an error.
    async fn fetch_comments(&self, comments_url: &str) -> Result<Vec<IssueComment>, ClientError>;

    /// Delete a single comment by its API URL
    ///
    /// Non-success statuses are returned as [`DeleteStatus::Rejected`], not as
    /// errors, so callers can aggregate them.
    async fn delete_comment(&self, comment_url: &str) -> Result<DeleteStatus, ClientError>;

    /// Fetch the commits of the PR
    ///
    /// Anything but HTTP 200 is an error.
    async fn fetch_commits(&self, commits_url: &str) -> Result<Vec<PullCommit>, ClientError>;

    /// Post a new comment on the PR conversation thread
    ///
    /// Anything but HTTP 201 is an error.
    async fn create_comment(&self, comments_url: &str, body: &str) -> Result<(), ClientError>;
}
