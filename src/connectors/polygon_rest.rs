// @file: aggregates_client/src/connectors/polygon_rest.rs
// @description: Blocking HTTP client for the aggregates endpoint of the market data REST API.
// @author: LAS.

use crate::core::cursor::Cursor;
use crate::core::errors::{Error, Result};
use crate::core::interfaces::PageFetcher;
use crate::core::models::{Agg, ListAggsParams, ListAggsResponse, Page};
use log::debug;
use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;


//
// CONSTANTS
//

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub type AggsCursor = Cursor<AggsPager>;


//
// BASE CLIENT
//

#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: Url,
    api_key: String,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let http: HttpClient = HttpClient::builder().timeout(timeout).build()?;
        let base_url: Url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidParams(format!("Base URL cannot hold a path: {}", base_url)));
        }

        Ok(Client {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Parses a continuation link and refuses it unless it points at the
    /// configured host, so the key is never sent elsewhere.
    pub fn continuation_url(&self, next_url: &str) -> Result<Url> {
        let url: Url = Url::parse(next_url)?;

        if url.origin() != self.base_url.origin() {
            return Err(Error::InvalidParams(format!(
                "next_url {} is outside {}",
                url.origin().ascii_serialization(),
                self.base_url.origin().ascii_serialization()
            )));
        }

        Ok(url)
    }

    /// Builds `/v2/aggs/ticker/{ticker}/range/{multiplier}/{timespan}/{from}/{to}`
    /// with the optional query parameters appended.
    pub fn aggs_url(&self, params: &ListAggsParams) -> Result<Url> {
        // #1. Path
        let segments: [String; 9] = [
            "v2".to_string(),
            "aggs".to_string(),
            "ticker".to_string(),
            params.ticker.clone(),
            "range".to_string(),
            params.multiplier.to_string(),
            params.timespan.as_str().to_string(),
            params.from.to_string(),
            params.to.to_string(),
        ];

        let mut url: Url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidParams(format!("Base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments.iter());

        // #2. Query
        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Sends an authenticated GET and decodes the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http.get(url).bearer_auth(&self.api_key).send()?;
        let status = response.status();

        if !status.is_success() {
            let body: String = match response.text() {
                Ok(body) => body,
                Err(e) => {
                    debug!("Could not read error body for status {}: {}", status, e);
                    String::new()
                }
            };
            return Err(Error::Api { status: status.as_u16(), body });
        }

        let bytes = response.bytes()?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}


//
// AGGREGATES CLIENT
//

#[derive(Debug, Clone)]
pub struct AggsClient {
    pub client: Client,
}

impl AggsClient {
    pub fn new(client: Client) -> Self {
        AggsClient { client }
    }

    /// Returns a cursor over the bars matching `params`. No request is made
    /// until the cursor is advanced; invalid params surface as the cursor's error.
    pub fn list_aggs(&self, params: ListAggsParams) -> AggsCursor {
        Cursor::new(AggsPager {
            client: self.client.clone(),
            params,
        })
    }
}

pub struct AggsPager {
    client: Client,
    params: ListAggsParams,
}

impl PageFetcher for AggsPager {
    type Item = Agg;

    fn first_page(&self) -> Result<Page<Agg>> {
        self.params.validate()?;

        let url: Url = self.client.aggs_url(&self.params)?;
        let response: ListAggsResponse = self.client.get_json(url)?;

        debug!(
            "Aggregates response: status={} request_id={} results={}",
            response.status, response.request_id, response.results_count
        );
        Ok(response.into())
    }

    fn next_page(&self, next_url: &str) -> Result<Page<Agg>> {
        let url: Url = self.client.continuation_url(next_url)?;
        let response: ListAggsResponse = self.client.get_json(url)?;
        Ok(response.into())
    }
}
