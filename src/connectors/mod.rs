// @file: aggregates_client/src/connectors/mod.rs
// @description: Aggregate retrieval routine and log rendering of the returned bars.
// @author: LAS.

pub mod polygon_rest;

use crate::connectors::polygon_rest::{AggsClient, AggsCursor};
use crate::core::cursor::Cursor;
use crate::core::errors::Result;
use crate::core::interfaces::PageFetcher;
use crate::core::models::{Agg, ListAggsParams, Millis, Order, Timespan};
use log::info;
use serde_json::{json, Map, Value};


//
// PUBLIC INTERFACE
//

/// Daily bars for `ticker` from 2021-07-22 to 2021-08-22, newest first,
/// two results, split-adjusted.
pub fn get_aggregates(client: &AggsClient, ticker: &str) -> Result<AggsCursor> {
    let params: ListAggsParams = ListAggsParams::new(
        ticker,
        1,
        Timespan::Day,
        Millis::from_ymd(2021, 7, 22)?,
        Millis::from_ymd(2021, 8, 22)?,
    )
    .with_order(Order::Desc)
    .with_limit(2)
    .with_adjusted(true);

    info!(
        "Requesting {} {} {} bars from {} to {}",
        params.ticker, params.multiplier, params.timespan, params.from, params.to
    );

    Ok(client.list_aggs(params))
}

/// Short-key view of a bar, matching the keys used on the wire.
pub fn aggregate_map(agg: &Agg) -> Map<String, Value> {
    let mut map: Map<String, Value> = Map::new();

    if let Some(ticker) = &agg.ticker {
        map.insert("T".to_string(), json!(ticker));
    }
    map.insert("c".to_string(), json!(agg.close));
    map.insert("h".to_string(), json!(agg.high));
    map.insert("l".to_string(), json!(agg.low));
    map.insert("n".to_string(), json!(agg.transactions));
    map.insert("o".to_string(), json!(agg.open));
    map.insert("v".to_string(), json!(agg.volume));
    map.insert("vw".to_string(), json!(agg.vwap));
    map.insert("otc".to_string(), json!(agg.otc));

    map
}

/// Logs every bar the cursor yields. Stops at the first error and returns it.
pub fn print_aggregates<F>(cursor: &mut Cursor<F>) -> Result<usize>
where
    F: PageFetcher<Item = Agg>,
{
    let mut count: usize = 0;

    while cursor.advance() {
        if let Some(agg) = cursor.item() {
            info!("{}", Value::Object(aggregate_map(agg)));
            count += 1;
        }
    }

    match cursor.take_err() {
        Some(e) => Err(e),
        None => Ok(count),
    }
}
