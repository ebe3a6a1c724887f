// Song language lookup
use reqwest::header::HeaderMap;
use tracing::{debug, info};

use super::genius::{GeniusClient, auth_headers};
use super::genius_blocking::BlockingGeniusClient;
use crate::error::{LookupError, Result, Stage};
use crate::models::genius::{Envelope, Meta, SearchResponse, SongResponse};
use crate::secrets::LookupMode;

enum Backend {
    /// One pooled session for the whole process.
    Async(GeniusClient),
    /// A fresh blocking client per lookup.
    Blocking { headers: HeaderMap, base_url: String },
}

pub struct SongController {
    backend: Backend,
}

impl SongController {
    pub fn new(mode: LookupMode, token: &str, base_url: &str) -> anyhow::Result<Self> {
        let backend = match mode {
            LookupMode::Async => Backend::Async(GeniusClient::new(token, base_url)?),
            LookupMode::Blocking => Backend::Blocking {
                headers: auth_headers(token)?,
                base_url: base_url.to_string(),
            },
        };
        info!("Song lookups use {:?} Genius calls against {}", mode, base_url);
        Ok(SongController { backend })
    }

    /// Name → first song hit → that song's `language`.
    ///
    /// `Ok(None)` means Genius knows the song but has no language for it.
    pub async fn resolve_language(&self, name: &str) -> Result<Option<String>> {
        match &self.backend {
            Backend::Async(genius) => {
                let search = genius.search(name).await?;
                let id = pick_song_id(search, name)?;
                language_of(genius.song(id).await?, id)
            }
            Backend::Blocking { headers, base_url } => {
                let headers = headers.clone();
                let base_url = base_url.clone();
                let name = name.to_string();
                tokio::task::spawn_blocking(move || {
                    let genius = BlockingGeniusClient::new(headers, base_url)?;
                    let search = genius.search(&name)?;
                    let id = pick_song_id(search, &name)?;
                    language_of(genius.song(id)?, id)
                })
                .await?
            }
        }
    }
}

fn ensure_ok(meta: &Meta, stage: Stage, song_id: Option<u64>) -> Result<()> {
    if meta.status == 200 {
        return Ok(());
    }
    if let Some(message) = &meta.message {
        debug!("Genius {} said: {}", stage, message);
    }
    Err(LookupError::UpstreamStatus {
        stage,
        status: meta.status,
        song_id,
    })
}

fn pick_song_id(envelope: Envelope<SearchResponse>, name: &str) -> Result<u64> {
    ensure_ok(&envelope.meta, Stage::Search, None)?;
    let song = envelope
        .response
        .unwrap_or_default()
        .hits
        .iter()
        .find_map(|hit| hit.song())
        .ok_or_else(|| LookupError::NotFound {
            name: name.to_string(),
        })??;
    debug!(
        "{:?} matched song {} ({})",
        name,
        song.id,
        song.full_title.as_deref().or(song.title.as_deref()).unwrap_or("untitled")
    );
    Ok(song.id)
}

fn language_of(envelope: Envelope<SongResponse>, id: u64) -> Result<Option<String>> {
    ensure_ok(&envelope.meta, Stage::Song, Some(id))?;
    let song = envelope
        .response
        .ok_or(LookupError::MissingBody(Stage::Song))?
        .song;
    let title = song.title.as_deref().unwrap_or("untitled");
    match &song.language {
        None => debug!("Song {} ({}) has no language field", id, title),
        Some(None) => debug!("Song {} ({}) has a null language", id, title),
        Some(Some(language)) => debug!("Song {} ({}) language: {}", id, title, language),
    }
    Ok(song.language.flatten())
}
