//! GitHub API data transfer objects
//!
//! Only the fields the check reads are modelled. Everything is optional on
//! the wire so a sparse payload still deserializes.

use serde::Deserialize;
use std::fmt;

/// The pull request payload handed over by the CI workflow
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    /// PR title
    #[serde(default)]
    pub title: Option<String>,

    /// Source branch of the PR
    #[serde(default)]
    pub head: Option<HeadRef>,

    /// Hypermedia links to the PR's sub-resources
    #[serde(rename = "_links", default)]
    pub links: PullRequestLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadRef {
    /// Branch name (e.g., "AAP-12-fix-widget")
    #[serde(rename = "ref", default)]
    pub ref_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestLinks {
    #[serde(default)]
    pub comments: Option<Link>,

    #[serde(default)]
    pub commits: Option<Link>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub href: String,
}

impl PullRequestEvent {
    /// Title, or an empty string when absent
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Source branch name, or an empty string when absent
    pub fn head_ref(&self) -> &str {
        self.head.as_ref().map(|h| h.ref_name.as_str()).unwrap_or_default()
    }

    pub fn comments_url(&self) -> Option<&str> {
        self.links.comments.as_ref().map(|l| l.href.as_str())
    }

    pub fn commits_url(&self) -> Option<&str> {
        self.links.commits.as_ref().map(|l| l.href.as_str())
    }
}

/// A comment on the PR conversation thread
#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    /// API URL of the comment, used to delete it
    pub url: String,

    #[serde(default)]
    pub body: Option<String>,
}

/// A commit listed on the PR
#[derive(Debug, Clone, Deserialize)]
pub struct PullCommit {
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    #[serde(default)]
    pub message: String,
}

/// Opaque reference to a comment (its API URL)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentHandle(String);

impl CommentHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a single comment deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    /// 204: the comment was removed
    Deleted,
    /// 404: nothing left to remove
    AlreadyGone,
    /// Any other HTTP status
    Rejected(u16),
}

impl DeleteStatus {
    pub fn from_status(status: u16) -> Self {
        match status {
            204 => DeleteStatus::Deleted,
            404 => DeleteStatus::AlreadyGone,
            other => DeleteStatus::Rejected(other),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, DeleteStatus::Rejected(_))
    }
}
