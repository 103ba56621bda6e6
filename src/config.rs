use std::env;

use crate::error::IngestError;

pub const API_KEY_VAR: &str = "YT_API_KEY";
pub const BASE_URL_VAR: &str = "YT_API_BASE_URL";
pub const SEARCH_URL: &str = "https://youtube.googleapis.com/youtube/v3/search";

/// Settings read once at startup and handed to the fetcher.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub search_url: String,
}

impl Config {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, IngestError> {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("no .env loaded: {}", e);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, IngestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or(IngestError::MissingCredential(API_KEY_VAR))?;

        let search_url = lookup(BASE_URL_VAR)
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| SEARCH_URL.to_owned());

        Ok(Self {
            api_key,
            search_url,
        })
    }
}
