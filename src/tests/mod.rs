// @file: aggregates_client/src/tests/mod.rs
// @description: Scenario tests run against a mocked REST endpoint and temporary env files.
// @author: LAS.

mod pagination;
