use std::process::ExitCode;

use dvcs_check::{logger, FAILURE_EXIT_CODE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Local runs may keep the token and payload in .env
    let dotenv = dotenvy::dotenv();

    logger::init();

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, relying on environment variables"),
    }

    match dvcs_check::run().await {
        Ok(outcome) if outcome.passed() => ExitCode::SUCCESS,
        Ok(_) => {
            log::error!("One or more checks failed");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
