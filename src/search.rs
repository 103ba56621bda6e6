use std::collections::HashSet;

use log::{debug, info};
use reqwest::Client;

use crate::api_stuff::{ApiResponse, ErrorResponse};
use crate::config::Config;
use crate::error::IngestError;
use crate::record::VideoMetadataRecord;

pub struct YouTubeSearch {
    client: Client,
    api_key: String,
    search_url: String,
}

impl YouTubeSearch {
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &Config, client: Client) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            search_url: config.search_url.clone(),
        }
    }

    /// Runs one search request and returns the video results in API order.
    pub async fn fetch(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoMetadataRecord>, IngestError> {
        if max_results == 0 {
            return Err(IngestError::InvalidMaxResults);
        }

        info!("Searching for {:?} (maxResults={})", query, max_results);

        let max_results = max_results.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            // the url carries the API key
            .map_err(|e| IngestError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IngestError::Transport(e.without_url()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_owned());
            return Err(IngestError::RemoteRequest {
                status: status.as_u16(),
                message,
            });
        }

        let records = parse_search_response(&body)?;
        info!("Fetched {} video(s)", records.len());
        Ok(records)
    }
}

/// Turns a search response body into records, skipping non-video results
/// and repeated video ids.
pub fn parse_search_response(body: &str) -> Result<Vec<VideoMetadataRecord>, IngestError> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(IngestError::MalformedResponse)?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(response.items.len());

    for item in response.items {
        let record = match VideoMetadataRecord::from_item(item) {
            Some(record) => record,
            None => {
                debug!("skipping a result without a video id");
                continue;
            }
        };
        if !seen.insert(record.video_id().to_owned()) {
            debug!("skipping repeated video id {}", record.video_id());
            continue;
        }
        records.push(record);
    }

    Ok(records)
}
