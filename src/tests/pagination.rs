// @file: aggregates_client/src/tests/pagination.rs
// @description: Verifies that the aggregates cursor follows next_url links across pages.
// @author: LAS.

#[cfg(test)]
mod pagination_tests {
    use crate::connectors::polygon_rest::{AggsClient, Client};
    use crate::core::errors::Error;
    use crate::core::models::{ListAggsParams, Millis, Order, Timespan};
    use mockito::{Matcher, Server};
    use std::time::Duration;

    const FIRST_PAGE_PATH: &str = "/v2/aggs/ticker/AAPL/range/1/hour/1626912000000/1626998400000";

    fn hourly_params() -> ListAggsParams {
        ListAggsParams::new(
            "AAPL",
            1,
            Timespan::Hour,
            Millis::from_ymd(2021, 7, 22).unwrap(),
            Millis::from_ymd(2021, 7, 23).unwrap(),
        )
        .with_order(Order::Asc)
        .with_limit(2)
    }

    fn page_body(closes: &[f64], next_url: Option<&str>) -> String {
        let results: Vec<serde_json::Value> = closes
            .iter()
            .map(|c| serde_json::json!({ "T": "AAPL", "c": c, "n": 1 }))
            .collect();

        let mut body = serde_json::json!({
            "status": "OK",
            "ticker": "AAPL",
            "resultsCount": results.len(),
            "results": results,
        });
        if let Some(url) = next_url {
            body["next_url"] = serde_json::json!(url);
        }
        body.to_string()
    }

    #[test]
    fn test_cursor_walks_all_pages() {
        // #1. Two pages, the first pointing at the second
        let mut server = Server::new();
        let next_url = format!("{}/v2/aggs/page-2?cursor=abc", server.url());

        let first = server
            .mock("GET", FIRST_PAGE_PATH)
            .match_query(Matcher::UrlEncoded("sort".into(), "asc".into()))
            .match_header("authorization", "Bearer paging-key")
            .with_status(200)
            .with_body(page_body(&[10.0, 11.0], Some(&next_url)))
            .create();
        let second = server
            .mock("GET", "/v2/aggs/page-2")
            .match_query(Matcher::UrlEncoded("cursor".into(), "abc".into()))
            .match_header("authorization", "Bearer paging-key")
            .with_status(200)
            .with_body(page_body(&[12.0], None))
            .create();

        // #2. Drain through the Iterator interface
        let client = Client::with_base_url("paging-key", &server.url(), Duration::from_secs(5)).unwrap();
        let aggs = AggsClient::new(client).list_aggs(hourly_params());

        let closes: Vec<f64> = aggs.map(|agg| agg.unwrap().close).collect();

        assert_eq!(closes, vec![10.0, 11.0, 12.0]);
        first.assert();
        second.assert();
    }

    #[test]
    fn test_failed_second_page_keeps_first_page_records() {
        let mut server = Server::new();
        let next_url = format!("{}/v2/aggs/page-2?cursor=def", server.url());

        let _first = server
            .mock("GET", FIRST_PAGE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(page_body(&[10.0], Some(&next_url)))
            .create();
        let _second = server
            .mock("GET", "/v2/aggs/page-2")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create();

        let client = Client::with_base_url("paging-key", &server.url(), Duration::from_secs(5)).unwrap();
        let mut aggs = AggsClient::new(client).list_aggs(hourly_params());

        assert!(aggs.advance());
        assert_eq!(aggs.item().unwrap().close, 10.0);
        assert!(!aggs.advance());
        assert!(matches!(aggs.err(), Some(Error::Api { status: 502, .. })));
        assert_eq!(aggs.pages_fetched(), 1);
    }

    #[test]
    fn test_next_url_on_another_host_is_refused() {
        // #1. Home server hands out a continuation link to a second server
        let mut home = Server::new();
        let mut foreign = Server::new();
        let next_url = format!("{}/v2/aggs/page-2?cursor=ghi", foreign.url());

        let _first = home
            .mock("GET", FIRST_PAGE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(page_body(&[10.0], Some(&next_url)))
            .create();
        let foreign_hit = foreign
            .mock("GET", Matcher::Any)
            .expect(0)
            .create();

        // #2. The first page is served, the foreign link stops the cursor
        let client = Client::with_base_url("secret-key", &home.url(), Duration::from_secs(5)).unwrap();
        let mut aggs = AggsClient::new(client).list_aggs(hourly_params());

        assert!(aggs.advance());
        assert_eq!(aggs.item().unwrap().close, 10.0);
        assert!(!aggs.advance());
        assert!(matches!(aggs.err(), Some(Error::InvalidParams(_))));
        foreign_hit.assert();
    }
}
