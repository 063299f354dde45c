// @file: aggregates_client/src/core/mod.rs
// @description: Exports domain logic and data structures.
// @author: LAS.

pub mod cursor;
pub mod errors;
pub mod interfaces;
pub mod models;
