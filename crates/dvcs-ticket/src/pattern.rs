//! Ticket grammar
//!
//! A ticket is either `PREFIX-<digits>` for one of the configured project
//! prefixes, or the bypass marker. Matching is anchored at the start of the
//! text and case-insensitive.

use regex::{Regex, RegexBuilder};
use std::fmt;
use thiserror::Error;

/// Default project prefix
pub const DEFAULT_PREFIX: &str = "AAP";

/// Default marker for changes that intentionally have no ticket
pub const DEFAULT_BYPASS_MARKER: &str = "NO_JIRA";

/// Errors raised while building a [`TicketPattern`]
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("at least one ticket prefix is required")]
    NoPrefixes,

    #[error("ticket prefix {0:?} must be non-empty and contain no whitespace")]
    InvalidPrefix(String),

    #[error("bypass marker must be non-empty and contain no whitespace")]
    InvalidBypassMarker,

    #[error("tickets need at least one digit")]
    ZeroDigits,

    #[error("failed to compile ticket grammar: {0}")]
    Regex(#[from] regex::Error),
}

/// A ticket token as it appeared in the source text
///
/// The original casing is kept; use [`Ticket::normalized`] for comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket(String);

impl Ticket {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token exactly as matched
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for every comparison and in report text
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiled ticket grammar
#[derive(Debug, Clone)]
pub struct TicketPattern {
    prefixes: Vec<String>,
    min_digits: usize,
    bypass_marker: String,
    regex: Regex,
}

impl TicketPattern {
    /// Build a grammar from project prefixes, a minimum digit count and the bypass marker
    ///
    /// Prefixes and the marker are matched literally.
    pub fn new<I, S>(
        prefixes: I,
        min_digits: usize,
        bypass_marker: impl Into<String>,
    ) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        let bypass_marker = bypass_marker.into();

        if prefixes.is_empty() {
            return Err(PatternError::NoPrefixes);
        }
        if let Some(bad) = prefixes.iter().find(|p| !is_literal_token(p)) {
            return Err(PatternError::InvalidPrefix(bad.clone()));
        }
        if !is_literal_token(&bypass_marker) {
            return Err(PatternError::InvalidBypassMarker);
        }
        if min_digits == 0 {
            return Err(PatternError::ZeroDigits);
        }

        let mut alternatives: Vec<String> = prefixes
            .iter()
            .map(|prefix| format!("{}-[0-9]{{{},}}", regex::escape(prefix), min_digits))
            .collect();
        alternatives.push(regex::escape(&bypass_marker));

        let regex = RegexBuilder::new(&format!("^(?:{})", alternatives.join("|")))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            prefixes,
            min_digits,
            bypass_marker,
            regex,
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn bypass_marker(&self) -> &str {
        &self.bypass_marker
    }

    /// Whether `token` is the bypass marker, ignoring case
    pub fn is_bypass(&self, token: &str) -> bool {
        token.eq_ignore_ascii_case(&self.bypass_marker)
    }

    /// Return the ticket token at the very start of `text`, if any
    pub fn find_leading<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }

    /// Human readable grammar for report messages, e.g. `(AAP-[0-9]+)`
    pub fn describe(&self) -> String {
        let digits = if self.min_digits == 1 {
            "[0-9]+".to_string()
        } else {
            format!("[0-9]{{{},}}", self.min_digits)
        };
        let alternatives: Vec<String> = self
            .prefixes
            .iter()
            .map(|prefix| format!("{prefix}-{digits}"))
            .collect();
        format!("({})", alternatives.join("|"))
    }
}

impl Default for TicketPattern {
    fn default() -> Self {
        // Built from constants that always pass validation
        Self::new([DEFAULT_PREFIX], 1, DEFAULT_BYPASS_MARKER)
            .expect("default ticket grammar is valid")
    }
}

fn is_literal_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}
