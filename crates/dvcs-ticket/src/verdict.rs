//! Check findings and the overall verdict

/// Pass/fail marker of a single report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

/// Which dimension of the pull request a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Title,
    SourceBranch,
    Mismatch,
    Commits,
}

impl Check {
    /// Label used in the report bullet
    pub fn label(&self) -> &'static str {
        match self {
            Check::Title => "Title",
            Check::SourceBranch => "Source Branch",
            Check::Mismatch => "Mismatch",
            Check::Commits => "Commits",
        }
    }
}

/// One line of the report
///
/// Ticket values are already lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    TitleMissing,
    TitleTicket { ticket: String },
    BranchMissing,
    BranchTicket { ticket: String },
    TitleBranchMismatch { branch: String, title: String },
    NoCommitTickets,
    /// Commits carry tickets and there is no reference ticket to check them against
    CommitTickets { tickets: Vec<String> },
    CommitsMatchReference,
    NoCommitWithBranchTicket,
    NoCommitWithTitleTicket,
}

impl Finding {
    pub fn check(&self) -> Check {
        match self {
            Finding::TitleMissing | Finding::TitleTicket { .. } => Check::Title,
            Finding::BranchMissing | Finding::BranchTicket { .. } => Check::SourceBranch,
            Finding::TitleBranchMismatch { .. }
            | Finding::NoCommitWithBranchTicket
            | Finding::NoCommitWithTitleTicket => Check::Mismatch,
            Finding::NoCommitTickets
            | Finding::CommitTickets { .. }
            | Finding::CommitsMatchReference => Check::Commits,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Finding::TitleTicket { .. }
            | Finding::BranchTicket { .. }
            | Finding::CommitTickets { .. }
            | Finding::CommitsMatchReference => Outcome::Pass,
            Finding::TitleMissing
            | Finding::BranchMissing
            | Finding::TitleBranchMismatch { .. }
            | Finding::NoCommitTickets
            | Finding::NoCommitWithBranchTicket
            | Finding::NoCommitWithTitleTicket => Outcome::Fail,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.outcome() == Outcome::Fail
    }
}

/// Ordered findings of one check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    findings: Vec<Finding>,
}

impl Verdict {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_failure())
    }

    /// True when no finding failed
    pub fn passed(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn contains(&self, finding: &Finding) -> bool {
        self.findings.contains(finding)
    }
}
