//! Ticket linking rules for pull request checks
//!
//! This crate is pure logic, no I/O:
//! - [`TicketPattern`]: the data-driven ticket grammar (project prefixes,
//!   digit rule, bypass marker)
//! - [`extract_leading_ticket`] / [`extract_commit_tickets`]: anchored extraction
//! - [`decide`]: reconciles title, branch and commit tickets into a [`Verdict`]
//! - [`ReportFormat`]: renders a verdict as the status comment text
//!
//! # Example
//!
//! ```
//! use dvcs_ticket::{
//!     decide, extract_commit_tickets, extract_leading_ticket, ReportFormat, TicketPattern,
//! };
//!
//! let pattern = TicketPattern::default();
//! let title = extract_leading_ticket(&pattern, "AAP-12 Fix the widget");
//! let branch = extract_leading_ticket(&pattern, "aap-12-fix-widget");
//! let commits = extract_commit_tickets(&pattern, ["AAP-12 first pass", "wip"]);
//!
//! let verdict = decide(title.as_ref(), &commits, branch.as_ref());
//! assert!(verdict.passed());
//!
//! let report = ReportFormat::new(&pattern).render(&verdict);
//! assert!(report.starts_with("DVCS PR Check Results:"));
//! ```

pub mod decide;
pub mod extract;
pub mod pattern;
pub mod report;
pub mod verdict;

pub use decide::decide;
pub use extract::{extract_commit_tickets, extract_leading_ticket};
pub use pattern::{PatternError, Ticket, TicketPattern, DEFAULT_BYPASS_MARKER, DEFAULT_PREFIX};
pub use report::{ReportFormat, DEFAULT_FAIL_GLYPH, DEFAULT_PASS_GLYPH, DEFAULT_PREAMBLE};
pub use verdict::{Check, Finding, Outcome, Verdict};
