// @file: aggregates_client/src/main.rs
// @description: Fetches daily aggregates for one ticker and logs every bar. Any error is fatal.
// @author: LAS.

use aggregates_client::connectors::{get_aggregates, print_aggregates};
use aggregates_client::utils::config::AppConfig;
use aggregates_client::utils::env::load_api_key;
use aggregates_client::utils::logging::init_logger;
use aggregates_client::{AggsClient, AggsCursor, Error};
use log::{error, info};
use std::process;

fn main() {
    // 1. Load configuration, then initialize the logger at the configured level
    let app_config: AppConfig = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logger("info");
            fatal(Error::Config(e));
        }
    };
    init_logger(&app_config.log_level);

    info!(">>> Aggregates client starting... <<<");

    // 2. Read the API key from the env file
    let api_key: String = load_api_key(&app_config.env_file, &app_config.api_key_var)
        .unwrap_or_else(|e| fatal(e));

    // 3. Build the client and submit the query
    let client: AggsClient = app_config.aggs_client(api_key).unwrap_or_else(|e| fatal(e));
    let mut aggs: AggsCursor = get_aggregates(&client, &app_config.default_ticker)
        .unwrap_or_else(|e| fatal(e));

    // 4. Log each bar; the first cursor error ends the process
    match print_aggregates(&mut aggs) {
        Ok(count) => info!(">>> Done. {} aggregates received <<<", count),
        Err(e) => fatal(e),
    }
}

fn fatal(err: Error) -> ! {
    error!("{}", err);
    process::exit(1)
}
