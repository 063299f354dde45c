// @file: aggregates_client/src/utils/env.rs
// @description: Loads a dotenv file into the process environment and reads credentials from it.
// @author: LAS.

use crate::core::errors::{Error, Result};
use log::debug;
use std::env;
use std::path::Path;

//
// PUBLIC INTERFACE
//

/// Loads `env_file` into the process environment, then reads `key`.
/// Variables already set in the environment win over the file. An unset
/// variable reads as an empty string.
pub fn get_env_var(env_file: impl AsRef<Path>, key: &str) -> Result<String> {
    let path: &Path = env_file.as_ref();

    dotenv::from_path(path).map_err(|source| Error::EnvFile {
        path: path.display().to_string(),
        source,
    })?;
    debug!("Loaded env file {}", path.display());

    Ok(env::var(key).unwrap_or_default())
}

/// Like [`get_env_var`], but an empty or unset credential is an error.
pub fn load_api_key(env_file: impl AsRef<Path>, key: &str) -> Result<String> {
    let value: String = get_env_var(env_file, key)?;

    if value.trim().is_empty() {
        return Err(Error::MissingCredential(key.to_string()));
    }

    Ok(value)
}
