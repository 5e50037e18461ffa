//! Configuration for dvcs-check
//!
//! This crate provides:
//! - Configuration file discovery (`$DVCS_CHECK_CONFIG`, CWD, home directory)
//! - The check configuration (`CheckConfig`): ticket grammar, report texts, API headers

pub mod check_config;
pub mod config_file;

pub use check_config::{ApiSettings, CheckConfig, ReportSettings, TicketSettings};
pub use config_file::{load_config_file, CONFIG_FILE, CONFIG_PATH_ENV};
