//! Check configuration
//!
//! Loaded from `.dvcs-check.toml`; every field has a default so partial
//! files are valid.

use anyhow::Result;
use dvcs_ticket::{
    PatternError, ReportFormat, TicketPattern, DEFAULT_BYPASS_MARKER, DEFAULT_FAIL_GLYPH,
    DEFAULT_PASS_GLYPH, DEFAULT_PREAMBLE, DEFAULT_PREFIX,
};
use serde::{Deserialize, Serialize};

/// Configuration loaded from .dvcs-check.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    #[serde(default)]
    pub ticket: TicketSettings,

    #[serde(default)]
    pub report: ReportSettings,

    #[serde(default)]
    pub api: ApiSettings,
}

/// Ticket grammar settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TicketSettings {
    /// Project prefixes accepted in front of `-<digits>`
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    #[serde(default = "default_min_digits")]
    pub min_digits: usize,

    /// Marker for changes that intentionally have no ticket
    #[serde(default = "default_bypass_marker")]
    pub bypass_marker: String,
}

/// Status comment texts
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// First line of the status comment; previous comments are found by it
    #[serde(default = "default_preamble")]
    pub preamble: String,

    #[serde(default = "default_pass_glyph")]
    pub pass_glyph: String,

    #[serde(default = "default_fail_glyph")]
    pub fail_glyph: String,
}

/// Host API request settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// API base URI for GitHub Enterprise, e.g. `https://ghe.example.com/api/v3`
    #[serde(default)]
    pub base_uri: Option<String>,
}

fn default_prefixes() -> Vec<String> {
    vec![DEFAULT_PREFIX.to_string()]
}

fn default_min_digits() -> usize {
    1
}

fn default_bypass_marker() -> String {
    DEFAULT_BYPASS_MARKER.to_string()
}

fn default_preamble() -> String {
    DEFAULT_PREAMBLE.to_string()
}

fn default_pass_glyph() -> String {
    DEFAULT_PASS_GLYPH.to_string()
}

fn default_fail_glyph() -> String {
    DEFAULT_FAIL_GLYPH.to_string()
}

fn default_accept() -> String {
    "application/vnd.github+json".to_string()
}

fn default_api_version() -> String {
    "2022-11-28".to_string()
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            min_digits: default_min_digits(),
            bypass_marker: default_bypass_marker(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            preamble: default_preamble(),
            pass_glyph: default_pass_glyph(),
            fail_glyph: default_fail_glyph(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            accept: default_accept(),
            api_version: default_api_version(),
            base_uri: None,
        }
    }
}

impl CheckConfig {
    /// Load config from the first config file found, or use defaults
    ///
    /// A file that cannot be parsed is reported and ignored. Failing to read
    /// an explicitly configured path is an error.
    pub fn load() -> Result<Self> {
        if let Some(content) = crate::load_config_file()? {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded check config from file");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default check config");
        Ok(Self::default())
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Compile the configured ticket grammar
    pub fn ticket_pattern(&self) -> Result<TicketPattern, PatternError> {
        TicketPattern::new(
            self.ticket.prefixes.iter().cloned(),
            self.ticket.min_digits,
            self.ticket.bypass_marker.clone(),
        )
    }

    /// Report texts for the given grammar
    pub fn report_format(&self, pattern: &TicketPattern) -> ReportFormat {
        ReportFormat::new(pattern)
            .with_preamble(self.report.preamble.clone())
            .with_glyphs(
                self.report.pass_glyph.clone(),
                self.report.fail_glyph.clone(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckConfig::default();
        assert_eq!(config.ticket.prefixes, vec!["AAP".to_string()]);
        assert_eq!(config.ticket.min_digits, 1);
        assert_eq!(config.ticket.bypass_marker, "NO_JIRA");
        assert_eq!(config.report.preamble, "DVCS PR Check Results:");
        assert_eq!(config.api.accept, "application/vnd.github+json");
        assert_eq!(config.api.api_version, "2022-11-28");
        assert!(config.api.base_uri.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [ticket]
            prefixes = ["AAP", "ACA"]
            bypass_marker = "NO_TICKET"

            [report]
            preamble = "Ticket check:"

            [api]
            base_uri = "https://ghe.example.com/api/v3"
        "#;
        let config = CheckConfig::from_toml(toml).unwrap();
        assert_eq!(config.ticket.prefixes, vec!["AAP", "ACA"]);
        assert_eq!(config.ticket.bypass_marker, "NO_TICKET");
        assert_eq!(config.report.preamble, "Ticket check:");
        assert_eq!(
            config.api.base_uri.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        // Unset fields keep their defaults
        assert_eq!(config.ticket.min_digits, 1);
        assert_eq!(config.report.fail_glyph, "❌");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config = CheckConfig::from_toml("").unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_ticket_pattern_from_config() {
        let config = CheckConfig::from_toml(
            r#"
            [ticket]
            prefixes = ["ACA"]
            "#,
        )
        .unwrap();
        let pattern = config.ticket_pattern().unwrap();
        assert_eq!(pattern.find_leading("ACA-1 docs"), Some("ACA-1"));
        assert_eq!(pattern.find_leading("AAP-1 docs"), None);
    }

    #[test]
    fn test_invalid_ticket_pattern() {
        let config = CheckConfig::from_toml(
            r#"
            [ticket]
            prefixes = []
            "#,
        )
        .unwrap();
        assert!(config.ticket_pattern().is_err());
    }

    #[test]
    fn test_report_format_from_config() {
        let config = CheckConfig::from_toml(
            r#"
            [report]
            preamble = "Ticket check:"
            pass_glyph = "ok"
            "#,
        )
        .unwrap();
        let pattern = config.ticket_pattern().unwrap();
        let format = config.report_format(&pattern);
        assert_eq!(format.preamble, "Ticket check:");
        assert_eq!(format.pass_glyph, "ok");
        assert_eq!(format.fail_glyph, "❌");
        assert_eq!(format.grammar, "(AAP-[0-9]+)");
    }
}
