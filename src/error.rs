use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::song::ErrorDetail;

pub const NOT_FOUND_DETAIL: &str = "Song not found";
pub const INTERNAL_DETAIL: &str = "Internal Server Error";

pub type Result<T> = std::result::Result<T, LookupError>;

/// Which Genius call produced an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Search,
    Song,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Search => f.write_str("search"),
            Stage::Song => f.write_str("get song info"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    /// No hit of type `song` with an embedded result.
    #[error("Song not found: {name}")]
    NotFound { name: String },

    /// `meta.status` in the Genius envelope was not 200.
    #[error("Genius {stage} error. Status code: {status}{}", .song_id.map(|id| format!(". Song id: {}", id)).unwrap_or_default())]
    UpstreamStatus {
        stage: Stage,
        status: u16,
        song_id: Option<u64>,
    },

    #[error("Genius request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected Genius payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Genius {0} response carried no body")]
    MissingBody(Stage),

    #[error("Blocking lookup task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

// Only the kind reaches the caller; details stay in the server log.
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let detail = if self.is_not_found() {
            NOT_FOUND_DETAIL
        } else {
            INTERNAL_DETAIL
        };
        (self.status_code(), Json(ErrorDetail::new(detail))).into_response()
    }
}
