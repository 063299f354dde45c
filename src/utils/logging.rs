// @file: aggregates_client/src/utils/logging.rs
// @description: Logger bootstrap shared by the binary and ad-hoc runs.
// @author: LAS.

use env_logger::{Builder, Env};

/// Initializes env_logger with `default_level` unless RUST_LOG says otherwise.
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level)).try_init();
}
