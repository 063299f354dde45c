// @file: aggregates_client/src/core/cursor.rs
// @description: Pull-based cursor that walks a paged result sequence one record at a time.
// @author: LAS.

use crate::core::errors::Error;
use crate::core::interfaces::PageFetcher;
use log::debug;
use std::collections::VecDeque;


//
// TYPE DEFINITIONS
//

enum PageState {
    NotStarted,
    Next(String),
    Exhausted,
}

/// Cursor over the records of one logical query.
///
/// Nothing is fetched until the first [`Cursor::advance`]. Pages are pulled
/// on demand and the cursor stops for good on the first error, which then
/// stays readable through [`Cursor::err`].
pub struct Cursor<F: PageFetcher> {
    fetcher: F,
    state: PageState,
    buffer: VecDeque<F::Item>,
    current: Option<F::Item>,
    err: Option<Error>,
    failed: bool,
    pages_fetched: usize,
}

impl<F: PageFetcher> Cursor<F> {
    pub fn new(fetcher: F) -> Self {
        Cursor {
            fetcher,
            state: PageState::NotStarted,
            buffer: VecDeque::new(),
            current: None,
            err: None,
            failed: false,
            pages_fetched: 0,
        }
    }

    //
    // PUBLIC INTERFACE
    //

    /// Moves to the next record. Returns `false` once the sequence is
    /// exhausted or an error occurred.
    pub fn advance(&mut self) -> bool {
        if self.failed {
            return false;
        }

        loop {
            // #1. Serve from the current page first
            if let Some(item) = self.buffer.pop_front() {
                self.current = Some(item);
                return true;
            }

            // #2. Pull the next page, if there is one
            let page = match std::mem::replace(&mut self.state, PageState::Exhausted) {
                PageState::NotStarted => self.fetcher.first_page(),
                PageState::Next(url) => self.fetcher.next_page(&url),
                PageState::Exhausted => {
                    self.current = None;
                    return false;
                }
            };

            match page {
                Ok(page) => {
                    self.pages_fetched += 1;
                    debug!("Fetched page {} with {} records", self.pages_fetched, page.items.len());

                    if let Some(url) = page.next_url {
                        self.state = PageState::Next(url);
                    }
                    self.buffer.extend(page.items);
                }
                Err(e) => {
                    self.current = None;
                    self.err = Some(e);
                    self.failed = true;
                    return false;
                }
            }
        }
    }

    /// The record the cursor is positioned on.
    pub fn item(&self) -> Option<&F::Item> {
        self.current.as_ref()
    }

    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Moves the error out. The cursor stays stopped.
    pub fn take_err(&mut self) -> Option<Error> {
        self.err.take()
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

// Iterating moves records (and the terminating error) out of the cursor.
impl<F: PageFetcher> Iterator for Cursor<F> {
    type Item = Result<F::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            return self.current.take().map(Ok);
        }
        self.take_err().map(Err)
    }
}
