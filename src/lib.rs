// @file: aggregates_client/src/lib.rs
// @description: Exposes the modular architecture for integration testing and external usage.
// @author: LAS.

pub mod core;
pub mod connectors;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::connectors::polygon_rest::{AggsClient, AggsCursor, Client};
pub use crate::core::errors::{Error, Result};
pub use crate::core::models::{Agg, ListAggsParams, ListAggsResponse, Millis, Order, Timespan};
