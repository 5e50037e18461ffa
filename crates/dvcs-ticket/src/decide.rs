//! Consistency decisions between title, branch and commit tickets

use crate::pattern::Ticket;
use crate::verdict::{Finding, Verdict};

/// Reconcile the tickets found in the PR title, its commits and its source branch
///
/// All tickets are lower-cased before comparison. Rules, in order:
///
/// 1. title ticket present or missing
/// 2. branch ticket present or missing
/// 3. title and branch both present but different
/// 4. no commit tickets at all
/// 5. with commit tickets: when title and branch agree, the shared ticket is the
///    reference. No reference lists the commit tickets; a reference found in the
///    commits passes. A reference missing from the commits emits nothing.
///    When title and branch disagree, each one present must appear in the commits.
pub fn decide(title: Option<&Ticket>, commits: &[Ticket], branch: Option<&Ticket>) -> Verdict {
    let title = normalize(title);
    let branch = normalize(branch);
    let commits: Vec<String> = commits.iter().map(Ticket::normalized).collect();

    let mut findings = Vec::new();

    findings.push(match &title {
        Some(ticket) => Finding::TitleTicket {
            ticket: ticket.clone(),
        },
        None => Finding::TitleMissing,
    });

    findings.push(match &branch {
        Some(ticket) => Finding::BranchTicket {
            ticket: ticket.clone(),
        },
        None => Finding::BranchMissing,
    });

    if let (Some(title), Some(branch)) = (&title, &branch) {
        if title != branch {
            findings.push(Finding::TitleBranchMismatch {
                branch: branch.clone(),
                title: title.clone(),
            });
        }
    }

    if commits.is_empty() {
        findings.push(Finding::NoCommitTickets);
    } else if title == branch {
        match &branch {
            None => findings.push(Finding::CommitTickets {
                tickets: commits.clone(),
            }),
            Some(reference) => {
                // A reference that no commit carries is left unreported
                if commits.contains(reference) {
                    findings.push(Finding::CommitsMatchReference);
                }
            }
        }
    } else {
        if let Some(branch) = &branch {
            if !commits.contains(branch) {
                findings.push(Finding::NoCommitWithBranchTicket);
            }
        }
        if let Some(title) = &title {
            if !commits.contains(title) {
                findings.push(Finding::NoCommitWithTitleTicket);
            }
        }
    }

    Verdict::new(findings)
}

fn normalize(ticket: Option<&Ticket>) -> Option<String> {
    ticket
        .map(Ticket::normalized)
        .filter(|ticket| !ticket.is_empty())
}
