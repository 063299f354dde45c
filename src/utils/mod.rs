// @file: aggregates_client/src/utils/mod.rs
// @description: Configuration, credential loading and logger setup.
// @author: LAS.

pub mod config;
pub mod env;
pub mod logging;
