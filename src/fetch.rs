use serde::Deserialize;
use serde_json::Value;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::storage::save_items;

/// Response envelope returned by the API. Everything besides `data` is
/// ignored; a missing `data` field means an empty item list.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Vec<Value>,
}

pub struct Fetcher {
    config: FetchConfig,
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| FetchError::Network {
                url: config.items_url(),
                source,
            })?;

        Ok(Self { config, client })
    }

    /// Downloads the item list. Items are kept as opaque JSON values.
    pub fn fetch_items(&self) -> Result<Vec<Value>, FetchError> {
        let url = self.config.items_url();
        log::info!("Fetching item list from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Platform", self.config.platform.as_str())
            .header("Language", self.config.language.as_str())
            .send()
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail: String = body.chars().take(200).collect();
            return Err(FetchError::Status {
                url,
                status,
                detail,
            });
        }

        let body = response.text().map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;

        let envelope: Envelope = serde_json::from_str(&body)?;
        log::info!("Received {} items", envelope.data.len());

        Ok(envelope.data)
    }

    /// Fetches the item list and writes it to the configured path,
    /// returning how many items were written. Nothing is written on any
    /// error path.
    pub fn fetch_and_save(&self) -> Result<usize, FetchError> {
        let items = self.fetch_items()?;
        save_items(&self.config.output_path, &items)?;
        Ok(items.len())
    }
}
