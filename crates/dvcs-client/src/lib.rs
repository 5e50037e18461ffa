//! Host API access for dvcs-check
//!
//! This crate provides a trait-based client for the few GitHub calls the
//! check needs, plus the housekeeping of its status comments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                HostApi trait                    │
//! │  - fetch_comments() / delete_comment()          │
//! │  - fetch_commits()  / create_comment()          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabHost    │         │ janitor             │
//! │ (direct API)    │◄────────│ (comment cleanup)   │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use dvcs_client::{janitor, ApiConfig, OctocrabHost};
//!
//! # async fn example() -> Result<(), dvcs_client::ClientError> {
//! let host = OctocrabHost::from_config(&ApiConfig::new("token"))?;
//! let removed = janitor::clean_up_status_comments(
//!     &host,
//!     "https://api.github.com/repos/owner/repo/issues/1/comments",
//!     "DVCS PR Check Results:",
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod janitor;
pub mod octocrab_client;
pub mod types;

pub use client::HostApi;
pub use credentials::{ApiConfig, TokenResolver};
pub use error::ClientError;
pub use janitor::{clean_up_status_comments, delete_comments, find_status_comments};
pub use octocrab_client::OctocrabHost;
pub use types::{
    CommentHandle, CommitDetails, DeleteStatus, HeadRef, IssueComment, Link, PullCommit,
    PullRequestEvent, PullRequestLinks,
};
