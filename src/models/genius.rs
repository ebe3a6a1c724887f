// Genius API payloads
use serde::{Deserialize, Deserializer};

/// Wrapper Genius puts around every response body.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub meta: Meta,
    pub response: Option<T>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Meta {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hit {
    #[serde(rename = "type")]
    pub kind: String,
    /// Shape depends on `kind`; only song results are decoded further.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SongSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub full_title: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SongResponse {
    pub song: SongRecord,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SongRecord {
    #[serde(default)]
    pub title: Option<String>,
    /// Outer `None`: key absent. `Some(None)`: explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub language: Option<Option<String>>,
}

impl SongRecord {
    pub fn language(&self) -> Option<&str> {
        self.language.as_ref().and_then(|l| l.as_deref())
    }
}

impl Hit {
    /// `None` for non-song hits and empty results.
    pub fn song(&self) -> Option<serde_json::Result<SongSummary>> {
        if self.kind != "song" {
            return None;
        }
        self.result.as_ref().map(SongSummary::deserialize)
    }
}

// Only runs when the key exists, so a JSON null still lands in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
