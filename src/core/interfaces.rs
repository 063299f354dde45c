// @file: aggregates_client/src/core/interfaces.rs
// @description: Defines the trait the cursor uses to pull pages from a transport.
// @author: LAS.

use crate::core::errors::Result;
use crate::core::models::Page;

//
// TRAIT DEFINITIONS
//

pub trait PageFetcher {
    type Item;

    // #1. Fetch the page described by the query itself
    fn first_page(&self) -> Result<Page<Self::Item>>;

    // #2. Follow a continuation link handed back by a previous page
    fn next_page(&self, next_url: &str) -> Result<Page<Self::Item>>;
}
