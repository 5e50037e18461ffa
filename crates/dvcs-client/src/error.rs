use crate::types::CommentHandle;
use thiserror::Error;

/// Errors raised while talking to the host API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unexpected HTTP {status} while {what}")]
    UnexpectedStatus { what: &'static str, status: u16 },

    #[error("Request failed: {0}")]
    Request(#[from] octocrab::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Lists only the comments that could not be deleted
    #[error("{}", join_handles(.0))]
    DeleteFailed(Vec<CommentHandle>),
}

fn join_handles(handles: &[CommentHandle]) -> String {
    handles
        .iter()
        .map(CommentHandle::url)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_failed_names_each_handle() {
        let error = ClientError::DeleteFailed(vec![
            CommentHandle::new("https://example.com/1"),
            CommentHandle::new("https://example.com/2"),
        ]);
        assert_eq!(
            error.to_string(),
            "https://example.com/1\nhttps://example.com/2"
        );
    }

    #[test]
    fn test_unexpected_status_message() {
        let error = ClientError::UnexpectedStatus {
            what: "getting commits",
            status: 404,
        };
        assert_eq!(error.to_string(), "Unexpected HTTP 404 while getting commits");
    }
}
