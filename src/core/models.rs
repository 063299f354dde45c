// @file: aggregates_client/src/core/models.rs
// @description: Query parameters, aggregate bars and the response envelope of the aggregates endpoint.
// @author: LAS.

use crate::core::errors::{Error, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;


//
// CONSTANTS
//

/// Largest page size the aggregates endpoint accepts.
pub const MAX_LIMIT: u32 = 50_000;


//
// TIMESTAMPS
//

/// A UTC instant carried on the wire as integer milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millis(DateTime<Utc>);

impl Millis {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        Millis(datetime)
    }

    /// Midnight UTC of the given calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| Error::InvalidParams(format!("Invalid date: {}-{}-{}", year, month, day)))?;

        Ok(Millis(Utc.from_utc_datetime(&midnight)))
    }

    pub fn from_millis(ms: i64) -> Result<Self> {
        Utc.timestamp_millis_opt(ms)
            .single()
            .map(Millis)
            .ok_or_else(|| Error::InvalidParams(format!("Timestamp out of range: {}", ms)))
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Millis {
    fn from(datetime: DateTime<Utc>) -> Self {
        Millis(datetime)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_millis())
    }
}

impl Serialize for Millis {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for Millis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Millis::from_millis(ms).map_err(serde::de::Error::custom)
    }
}


//
// QUERY ENUMS
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timespan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timespan::Second => "second",
            Timespan::Minute => "minute",
            Timespan::Hour => "hour",
            Timespan::Day => "day",
            Timespan::Week => "week",
            Timespan::Month => "month",
            Timespan::Quarter => "quarter",
            Timespan::Year => "year",
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


//
// REQUEST PARAMETERS
//

/// Parameters of one aggregates query. `from` and `to` are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ListAggsParams {
    pub ticker: String,
    pub multiplier: u32,
    pub timespan: Timespan,
    pub from: Millis,
    pub to: Millis,
    pub order: Option<Order>,
    pub limit: Option<u32>,
    pub adjusted: Option<bool>,
}

impl ListAggsParams {
    pub fn new(ticker: impl Into<String>, multiplier: u32, timespan: Timespan, from: Millis, to: Millis) -> Self {
        ListAggsParams {
            ticker: ticker.into(),
            multiplier,
            timespan,
            from,
            to,
            order: None,
            limit: None,
            adjusted: None,
        }
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = Some(adjusted);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(Error::InvalidParams("ticker must not be empty".to_string()));
        }
        if self.multiplier == 0 {
            return Err(Error::InvalidParams("multiplier must be at least 1".to_string()));
        }
        if self.from > self.to {
            return Err(Error::InvalidParams(format!(
                "range start {} is after range end {}",
                self.from, self.to
            )));
        }
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(Error::InvalidParams(format!(
                    "limit {} outside 1..={}",
                    limit, MAX_LIMIT
                )));
            }
        }
        Ok(())
    }

    /// Optional query-string parameters, in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);

        if let Some(adjusted) = self.adjusted {
            pairs.push(("adjusted", adjusted.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("sort", order.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }

        pairs
    }
}


//
// RESPONSE STRUCTURES
//

/// One aggregate bar as returned by the endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Agg {
    #[serde(rename = "T", skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "n")]
    pub transactions: i64,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Millis>,
    #[serde(rename = "v")]
    pub volume: f64,
    #[serde(rename = "vw")]
    pub vwap: f64,
    pub otc: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListAggsResponse {
    pub status: String,
    pub request_id: String,
    pub ticker: String,
    #[serde(rename = "queryCount")]
    pub query_count: i64,
    #[serde(rename = "resultsCount")]
    pub results_count: i64,
    pub adjusted: bool,
    #[serde(deserialize_with = "null_as_empty")]
    pub results: Vec<Agg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

// The endpoint sends `"results": null` for an empty range.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A decoded page plus the link to the page after it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_url: Option<String>,
}

impl From<ListAggsResponse> for Page<Agg> {
    fn from(response: ListAggsResponse) -> Self {
        Page {
            items: response.results,
            next_url: response.next_url.filter(|url| !url.is_empty()),
        }
    }
}
