// Genius API client
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::models::genius::{Envelope, SearchResponse, SongResponse};

pub(crate) fn search_url(base_url: &str) -> String {
    format!("{}/search", base_url)
}

pub(crate) fn song_url(base_url: &str, id: u64) -> String {
    format!("{}/songs/{}", base_url, id)
}

pub(crate) fn auth_headers(token: &str) -> anyhow::Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Genius answers with JSON even when it labels the body otherwise.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>> {
    Ok(serde_json::from_slice(body)?)
}

/// Shared, authenticated session against the Genius API.
#[derive(Clone, Debug)]
pub struct GeniusClient {
    client: Client,
    base_url: String,
}

impl GeniusClient {
    pub fn new(token: &str, base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .default_headers(auth_headers(token)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Search songs, artists and lyrics by free text
    pub async fn search(&self, name: &str) -> Result<Envelope<SearchResponse>> {
        debug!("Genius search: {}", name);
        self.get_json(self.client.get(search_url(&self.base_url)).query(&[("q", name)]))
            .await
    }

    /// Full metadata for one song
    pub async fn song(&self, id: u64) -> Result<Envelope<SongResponse>> {
        debug!("Genius song lookup: {}", id);
        self.get_json(self.client.get(song_url(&self.base_url, id)))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>> {
        let response = request.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use mockito::Matcher;

    #[tokio::test]
    async fn search_sends_bearer_token_and_escaped_query() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_header("authorization", "Bearer secret-token")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Rolling in the Deep & more".into()),
                Matcher::Regex(r"(^|&)q=Rolling\+in\+the\+Deep\+%26\+more($|&)".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(r#"{"meta":{"status":200},"response":{"hits":[{"type":"song","result":{"id":12345}}]}}"#)
            .create_async()
            .await;

        let genius = GeniusClient::new("secret-token", server.url())?;
        let envelope = genius.search("Rolling in the Deep & more").await?;

        mock.assert_async().await;
        assert_eq!(envelope.meta.status, 200);
        let hits = envelope.response.unwrap().hits;
        assert_eq!(hits[0].song().unwrap()?.id, 12345);
        Ok(())
    }

    #[tokio::test]
    async fn song_hits_per_id_endpoint() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/songs/12345")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body(r#"{"meta":{"status":200},"response":{"song":{"id":12345,"language":"en"}}}"#)
            .create_async()
            .await;

        let genius = GeniusClient::new("secret-token", server.url())?;
        let envelope = genius.song(12345).await?;

        mock.assert_async().await;
        assert_eq!(envelope.response.unwrap().song.language(), Some("en"));
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/songs/1")
            .with_status(503)
            .with_body("upstream down")
            .create_async()
            .await;

        let genius = GeniusClient::new("t", server.url())?;
        let err = genius.song(1).await.unwrap_err();

        assert!(matches!(err, LookupError::Transport(_)), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let genius = GeniusClient::new("t", server.url())?;
        let err = genius.search("Hello").await.unwrap_err();

        assert!(matches!(err, LookupError::Decode(_)), "{err:?}");
        Ok(())
    }
}
