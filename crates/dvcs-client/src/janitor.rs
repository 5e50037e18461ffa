//! Status comment housekeeping
//!
//! Removes the status comments of earlier runs so the PR thread only ever
//! carries the latest report.

use crate::client::HostApi;
use crate::error::ClientError;
use crate::types::{CommentHandle, DeleteStatus};
use log::{debug, error, info};

/// Find every comment on the thread whose body starts with `preamble`
pub async fn find_status_comments<H: HostApi + ?Sized>(
    host: &H,
    comments_url: &str,
    preamble: &str,
) -> Result<Vec<CommentHandle>, ClientError> {
    let comments = host.fetch_comments(comments_url).await?;

    let handles: Vec<CommentHandle> = comments
        .into_iter()
        .filter(|comment| {
            comment
                .body
                .as_deref()
                .is_some_and(|body| body.starts_with(preamble))
        })
        .map(|comment| CommentHandle::new(comment.url))
        .collect();

    debug!("Found {} previous status comment(s)", handles.len());
    Ok(handles)
}

/// Delete the given comments one after another
///
/// A comment that is already gone counts as deleted. Every handle is
/// attempted; the ones that failed are reported together.
pub async fn delete_comments<H: HostApi + ?Sized>(
    host: &H,
    handles: &[CommentHandle],
) -> Result<(), ClientError> {
    let mut failed = Vec::new();

    for handle in handles {
        match host.delete_comment(handle.url()).await {
            Ok(DeleteStatus::Deleted) => {}
            Ok(DeleteStatus::AlreadyGone) => {
                debug!("Comment {} was already gone", handle);
            }
            Ok(DeleteStatus::Rejected(code)) => {
                error!("Failed to delete comment {}: HTTP {}", handle, code);
                failed.push(handle.clone());
            }
            Err(e) => {
                error!("Failed to delete comment {}: {}", handle, e);
                failed.push(handle.clone());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ClientError::DeleteFailed(failed))
    }
}

/// Find and delete previous status comments, returning how many were removed
pub async fn clean_up_status_comments<H: HostApi + ?Sized>(
    host: &H,
    comments_url: &str,
    preamble: &str,
) -> Result<usize, ClientError> {
    let handles = find_status_comments(host, comments_url, preamble).await?;
    delete_comments(host, &handles).await?;

    if !handles.is_empty() {
        info!("Removed {} previous status comment(s)", handles.len());
    }
    Ok(handles.len())
}
