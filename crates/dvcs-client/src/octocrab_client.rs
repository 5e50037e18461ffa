//! Octocrab-based host API client
//!
//! Direct implementation of the `HostApi` trait using octocrab's raw request
//! methods, since every URL comes ready-made from the PR payload.

use crate::client::HostApi;
use crate::credentials::ApiConfig;
use crate::error::ClientError;
use crate::types::{DeleteStatus, IssueComment, PullCommit};
use async_trait::async_trait;
use http::StatusCode;
use log::{debug, info};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabHost {
    octocrab: Arc<Octocrab>,
}

impl OctocrabHost {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build an authenticated client carrying the configured base headers
    ///
    /// Every request is sent exactly once; octocrab's retry layer is off.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .add_retry_config(RetryConfig::None);

        for (name, value) in config.headers() {
            builder = builder.add_header(name, value);
        }

        if let Some(uri) = &config.base_uri {
            debug!("Using API base URI {}", uri);
            builder = builder.base_uri(uri.as_str())?;
        }

        Ok(Self::new(Arc::new(builder.build()?)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        label: &'static str,
        what: &'static str,
    ) -> Result<T, ClientError> {
        let response = self.octocrab._get(url).await?;
        let status = response.status();
        info!("{} ... {}", label, status.as_u16());

        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                what,
                status: status.as_u16(),
            });
        }

        let body = self.octocrab.body_to_string(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl HostApi for OctocrabHost {
    async fn fetch_comments(&self, comments_url: &str) -> Result<Vec<IssueComment>, ClientError> {
        self.get_json(comments_url, "Getting comments", "getting comments")
            .await
    }

    async fn delete_comment(&self, comment_url: &str) -> Result<DeleteStatus, ClientError> {
        let response = self.octocrab._delete(comment_url, None::<&()>).await?;
        let status = response.status().as_u16();
        info!("Deleting old comment ... {}", status);
        Ok(DeleteStatus::from_status(status))
    }

    async fn fetch_commits(&self, commits_url: &str) -> Result<Vec<PullCommit>, ClientError> {
        self.get_json(commits_url, "Getting commits", "getting commits")
            .await
    }

    async fn create_comment(&self, comments_url: &str, body: &str) -> Result<(), ClientError> {
        let payload = serde_json::json!({ "body": body });
        let response = self.octocrab._post(comments_url, Some(&payload)).await?;
        let status = response.status();
        info!("Creating new comment ... {}", status.as_u16());

        if status != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                what: "creating comment",
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
