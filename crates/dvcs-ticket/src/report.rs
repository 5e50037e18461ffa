//! Status comment rendering

use crate::pattern::TicketPattern;
use crate::verdict::{Finding, Outcome, Verdict};

/// First line of every status comment, also used to find previous ones
pub const DEFAULT_PREAMBLE: &str = "DVCS PR Check Results:";
pub const DEFAULT_PASS_GLYPH: &str = "✅";
pub const DEFAULT_FAIL_GLYPH: &str = "❌";

/// Text settings for rendering a [`Verdict`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    pub preamble: String,
    pub pass_glyph: String,
    pub fail_glyph: String,
    /// Grammar description, e.g. `(AAP-[0-9]+)`
    pub grammar: String,
    pub bypass_marker: String,
}

impl ReportFormat {
    /// Default texts for the given grammar
    pub fn new(pattern: &TicketPattern) -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            pass_glyph: DEFAULT_PASS_GLYPH.to_string(),
            fail_glyph: DEFAULT_FAIL_GLYPH.to_string(),
            grammar: pattern.describe(),
            bypass_marker: pattern.bypass_marker().to_string(),
        }
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn with_glyphs(mut self, pass: impl Into<String>, fail: impl Into<String>) -> Self {
        self.pass_glyph = pass.into();
        self.fail_glyph = fail.into();
        self
    }

    /// Render the preamble followed by one bullet per finding
    pub fn render(&self, verdict: &Verdict) -> String {
        let mut lines = Vec::with_capacity(verdict.findings().len() + 1);
        lines.push(self.preamble.clone());
        lines.extend(verdict.findings().iter().map(|f| self.render_line(f)));
        lines.join("\n")
    }

    /// Render a single bullet: `* <glyph> <Check>: <message>`
    pub fn render_line(&self, finding: &Finding) -> String {
        let glyph = match finding.outcome() {
            Outcome::Pass => &self.pass_glyph,
            Outcome::Fail => &self.fail_glyph,
        };
        format!(
            "* {} {}: {}",
            glyph,
            finding.check().label(),
            self.message(finding)
        )
    }

    fn message(&self, finding: &Finding) -> String {
        let grammar = &self.grammar;
        let bypass = &self.bypass_marker;
        match finding {
            Finding::TitleMissing => {
                format!("PR title does not start with a JIRA number {grammar} or {bypass}")
            }
            Finding::TitleTicket { ticket } => format!("JIRA number {ticket}"),
            Finding::BranchMissing => format!(
                "The source branch of the PR does not start with a JIRA number {grammar} or {bypass}"
            ),
            Finding::BranchTicket { ticket } => format!("JIRA number {ticket}"),
            Finding::TitleBranchMismatch { branch, title } => format!(
                "The JIRAs in the source branch {branch} and title {title} do not match!"
            ),
            Finding::NoCommitTickets => {
                format!("No commits with a JIRA number {grammar} or {bypass} found!")
            }
            Finding::CommitTickets { tickets } => format!(
                "At least one JIRA number in commit messages {}",
                tickets.join(", ")
            ),
            Finding::CommitsMatchReference => {
                "At least one JIRA number in commit messages match the other JIRA numbers"
                    .to_string()
            }
            Finding::NoCommitWithBranchTicket => {
                "No commit with source branch JIRA number".to_string()
            }
            Finding::NoCommitWithTitleTicket => "No commit with PR title JIRA number".to_string(),
        }
    }
}
