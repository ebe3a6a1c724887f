use std::sync::Arc;

use crate::controllers::SongController;
use crate::secrets::{GENIUS_API_TOKEN, GENIUS_API_URL, SecretManager};

/// Built once before serving; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub songs: Arc<SongController>,
}

impl AppState {
    pub fn new(songs: SongController) -> Self {
        AppState {
            songs: Arc::new(songs),
        }
    }

    pub fn from_secrets(secrets: &SecretManager) -> anyhow::Result<Self> {
        let songs = SongController::new(
            secrets.lookup_mode()?,
            &secrets.get(GENIUS_API_TOKEN),
            &secrets.get(GENIUS_API_URL),
        )?;
        Ok(AppState::new(songs))
    }
}
