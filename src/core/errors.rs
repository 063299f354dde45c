// @file: aggregates_client/src/core/errors.rs
// @description: Error taxonomy shared by config loading, the REST client and the cursor.
// @author: LAS.

use thiserror::Error as ThisError;

//
// TYPE DEFINITIONS
//

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Error loading env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenv::Error,
    },
    #[error("Missing credential: {0} is empty or unset")]
    MissingCredential(String),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API Error: {status}: {body}")]
    Api { status: u16, body: String },
    #[error("JSON Parse Error: {0}")]
    Decode(#[from] serde_json::Error),
}
