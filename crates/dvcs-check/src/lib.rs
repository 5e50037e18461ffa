//! Pull request ticket check
//!
//! Validates that a pull request's title, source branch and commits start
//! with a ticket number (or the bypass marker), posts the result as a single
//! status comment and reports failure through the process exit code.

pub mod error;
pub mod inputs;
pub mod logger;
pub mod pipeline;

pub use error::{CheckError, FAILURE_EXIT_CODE};
pub use inputs::{Inputs, PullRequestTarget, PULL_REQUEST_ENV};
pub use pipeline::{run_check, CheckOutcome};

use dvcs_client::{ApiConfig, OctocrabHost};
use dvcs_config::CheckConfig;

/// Run the check with configuration and inputs from the environment
///
/// Configuration and inputs are validated before any network call.
pub async fn run() -> Result<CheckOutcome, CheckError> {
    let config = CheckConfig::load().map_err(CheckError::Config)?;
    let pattern = config.ticket_pattern()?;
    let format = config.report_format(&pattern);

    let inputs = Inputs::from_env()?;

    let api = ApiConfig::new(inputs.token.clone())
        .with_accept(config.api.accept.clone())
        .with_api_version(config.api.api_version.clone())
        .with_base_uri(config.api.base_uri.clone());
    let host = OctocrabHost::from_config(&api).map_err(CheckError::Client)?;

    run_check(&host, &inputs.pull_request, &pattern, &format).await
}
