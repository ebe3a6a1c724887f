// Synchronous Genius client, for the blocking lookup mode
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::genius::{decode, search_url, song_url};
use crate::error::Result;
use crate::models::genius::{Envelope, SearchResponse, SongResponse};

/// Must be built, used and dropped off the async runtime.
pub struct BlockingGeniusClient {
    client: Client,
    base_url: String,
}

impl BlockingGeniusClient {
    pub fn new(headers: HeaderMap, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn search(&self, name: &str) -> Result<Envelope<SearchResponse>> {
        debug!("Genius search (blocking): {}", name);
        Self::get_json(self.client.get(search_url(&self.base_url)).query(&[("q", name)]))
    }

    pub fn song(&self, id: u64) -> Result<Envelope<SongResponse>> {
        debug!("Genius song lookup (blocking): {}", id);
        Self::get_json(self.client.get(song_url(&self.base_url, id)))
    }

    fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<Envelope<T>> {
        let response = request.send()?.error_for_status()?;
        let body = response.bytes()?;
        decode(&body)
    }
}
