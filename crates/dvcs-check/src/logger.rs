//! Console logging using env_logger
//!
//! CI runners capture stdout, so everything (progress, results, fatal
//! diagnostics) is written there. `RUST_LOG` overrides the default `info`
//! level.

use env_logger::{Builder, Env, Target};

/// Initialize stdout logging
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
