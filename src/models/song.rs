use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct SearchQuery {
    /// Name of the song
    pub q: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LanguageResponse {
    pub language: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorDetail {
            detail: detail.into(),
        }
    }
}
