//! The check run: clean up, extract, decide, publish

use crate::error::CheckError;
use crate::inputs::PullRequestTarget;
use dvcs_client::{janitor, HostApi};
use dvcs_ticket::{
    decide, extract_commit_tickets, extract_leading_ticket, ReportFormat, TicketPattern, Verdict,
};
use log::{error, info};

/// Result of a completed check run
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub verdict: Verdict,
    /// Rendered status comment
    pub report: String,
    /// Whether the status comment was posted
    pub published: bool,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }
}

/// Run the check against one pull request
///
/// Steps run strictly in sequence:
/// 1. delete previous status comments (fatal on failure)
/// 2. extract the title ticket
/// 3. fetch commits and extract their tickets (fatal on failure)
/// 4. extract the source branch ticket
/// 5. decide and render the report
/// 6. post the report (failure is logged only)
pub async fn run_check<H: HostApi + ?Sized>(
    host: &H,
    pull_request: &PullRequestTarget,
    pattern: &TicketPattern,
    format: &ReportFormat,
) -> Result<CheckOutcome, CheckError> {
    janitor::clean_up_status_comments(host, &pull_request.comments_url, &format.preamble)
        .await
        .map_err(CheckError::CommentCleanup)?;

    let title_ticket = extract_leading_ticket(pattern, pull_request.event.title());

    let commits = host
        .fetch_commits(&pull_request.commits_url)
        .await
        .map_err(CheckError::CommitFetch)?;
    let commit_tickets =
        extract_commit_tickets(pattern, commits.iter().map(|c| c.commit.message.as_str()));

    let branch_ticket = extract_leading_ticket(pattern, pull_request.event.head_ref());

    let verdict = decide(title_ticket.as_ref(), &commit_tickets, branch_ticket.as_ref());
    let report = format.render(&verdict);

    info!("Results:\n{}", report);

    let published = match host.create_comment(&pull_request.comments_url, &report).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to add new comment: {}", e);
            false
        }
    };

    Ok(CheckOutcome {
        verdict,
        report,
        published,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dvcs_client::{
        ClientError, CommitDetails, DeleteStatus, IssueComment, PullCommit, PullRequestEvent,
    };
    use dvcs_ticket::{Finding, DEFAULT_PREAMBLE};
    use std::sync::Mutex;

    /// Mock host recording every call
    struct MockHost {
        comments: Mutex<Vec<IssueComment>>,
        commit_messages: Result<Vec<&'static str>, u16>,
        delete_status: u16,
        create_status: u16,
        calls: Mutex<Vec<String>>,
        posted: Mutex<Vec<String>>,
    }

    impl MockHost {
        fn new(commit_messages: &[&'static str]) -> Self {
            Self {
                comments: Mutex::new(vec![]),
                commit_messages: Ok(commit_messages.to_vec()),
                delete_status: 204,
                create_status: 201,
                calls: Mutex::new(vec![]),
                posted: Mutex::new(vec![]),
            }
        }

        fn with_previous_report(self, url: &str) -> Self {
            self.comments.lock().unwrap().push(IssueComment {
                url: url.to_string(),
                body: Some(format!("{DEFAULT_PREAMBLE}\n* ❌ Title: old")),
            });
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl HostApi for MockHost {
        async fn fetch_comments(
            &self,
            comments_url: &str,
        ) -> Result<Vec<IssueComment>, ClientError> {
            self.record(format!("GET {comments_url}"));
            Ok(self.comments.lock().unwrap().clone())
        }

        async fn delete_comment(&self, comment_url: &str) -> Result<DeleteStatus, ClientError> {
            self.record(format!("DELETE {comment_url}"));
            Ok(DeleteStatus::from_status(self.delete_status))
        }

        async fn fetch_commits(&self, commits_url: &str) -> Result<Vec<PullCommit>, ClientError> {
            self.record(format!("GET {commits_url}"));
            match &self.commit_messages {
                Ok(messages) => Ok(messages
                    .iter()
                    .map(|m| PullCommit {
                        commit: CommitDetails {
                            message: m.to_string(),
                        },
                    })
                    .collect()),
                Err(status) => Err(ClientError::UnexpectedStatus {
                    what: "getting commits",
                    status: *status,
                }),
            }
        }

        async fn create_comment(&self, comments_url: &str, body: &str) -> Result<(), ClientError> {
            self.record(format!("POST {comments_url}"));
            self.posted.lock().unwrap().push(body.to_string());
            if self.create_status == 201 {
                Ok(())
            } else {
                Err(ClientError::UnexpectedStatus {
                    what: "creating comment",
                    status: self.create_status,
                })
            }
        }
    }

    fn target(title: &str, branch: &str) -> PullRequestTarget {
        let event: PullRequestEvent = serde_json::from_value(serde_json::json!({
            "title": title,
            "head": {"ref": branch},
            "_links": {
                "comments": {"href": "https://example.com/comments"},
                "commits": {"href": "https://example.com/commits"}
            }
        }))
        .unwrap();
        PullRequestTarget {
            event,
            comments_url: "https://example.com/comments".to_string(),
            commits_url: "https://example.com/commits".to_string(),
        }
    }

    async fn run(host: &MockHost, title: &str, branch: &str) -> Result<CheckOutcome, CheckError> {
        let pattern = TicketPattern::default();
        let format = ReportFormat::new(&pattern);
        run_check(host, &target(title, branch), &pattern, &format).await
    }

    #[tokio::test]
    async fn test_passing_run() {
        let host = MockHost::new(&["AAP-1234 add widget", "fix typo"]);
        let outcome = run(&host, "AAP-1234 Add widget", "aap-1234-widget")
            .await
            .unwrap();

        assert!(outcome.passed());
        assert!(outcome.published);
        assert!(outcome.report.starts_with(DEFAULT_PREAMBLE));
        assert_eq!(host.posted.lock().unwrap().clone(), vec![outcome.report]);
        assert_eq!(
            host.calls(),
            vec![
                "GET https://example.com/comments",
                "GET https://example.com/commits",
                "POST https://example.com/comments",
            ]
        );
    }

    #[tokio::test]
    async fn test_previous_reports_deleted_before_posting() {
        let host = MockHost::new(&["NO_JIRA bump"]).with_previous_report("https://example.com/c/1");
        run(&host, "NO_JIRA bump deps", "NO_JIRA-bump").await.unwrap();

        let calls = host.calls();
        assert_eq!(calls[1], "DELETE https://example.com/c/1");
        assert_eq!(calls.last().unwrap(), "POST https://example.com/comments");
    }

    #[tokio::test]
    async fn test_cleanup_failure_is_fatal() {
        let mut host =
            MockHost::new(&["AAP-1 fix"]).with_previous_report("https://example.com/c/1");
        host.delete_status = 500;

        let error = run(&host, "AAP-1 fix", "AAP-1").await.unwrap_err();
        assert!(matches!(error, CheckError::CommentCleanup(_)));
        assert!(error.to_string().contains("https://example.com/c/1"));
        // Nothing else happens after the failed cleanup
        assert!(!host.calls().iter().any(|c| c.starts_with("POST")));
    }

    #[tokio::test]
    async fn test_commit_fetch_failure_is_fatal() {
        let mut host = MockHost::new(&[]);
        host.commit_messages = Err(404);

        let error = run(&host, "junk", "junk").await.unwrap_err();
        assert!(matches!(error, CheckError::CommitFetch(_)));
        assert!(error.to_string().starts_with("Failed to get commits"));
    }

    #[tokio::test]
    async fn test_publish_failure_is_not_fatal() {
        let mut host = MockHost::new(&["AAP-1 fix"]);
        host.create_status = 404;

        let outcome = run(&host, "AAP-1 fix", "AAP-1-fix").await.unwrap();
        assert!(!outcome.published);
        assert!(outcome.passed());
    }

    #[tokio::test]
    async fn test_failed_check() {
        let host = MockHost::new(&[]);
        let outcome = run(&host, "junk", "junk").await.unwrap();

        assert!(!outcome.passed());
        assert!(outcome.published);
        assert!(outcome.verdict.contains(&Finding::TitleMissing));
        assert!(outcome.verdict.contains(&Finding::BranchMissing));
        assert!(outcome.verdict.contains(&Finding::NoCommitTickets));
        assert!(outcome.report.contains("❌"));
    }

    #[tokio::test]
    async fn test_ticket_mid_title_does_not_count() {
        let host = MockHost::new(&["AAP-9 fix things"]);
        let outcome = run(&host, "fix things AAP-9", "AAP-9-fix").await.unwrap();
        assert!(outcome.verdict.contains(&Finding::TitleMissing));
        assert!(!outcome.passed());
    }
}
