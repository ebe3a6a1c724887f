use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::models::song::{ErrorDetail, LanguageResponse, SearchQuery};
use crate::state::AppState;

pub async fn song_language_route(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let Query(SearchQuery { q }) = match query {
        Ok(query) => query,
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!("Rejected /search query: {}", detail);
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDetail::new(detail)))
                .into_response();
        }
    };

    match state.songs.resolve_language(&q).await {
        Ok(language) => {
            info!("Language for {:?}: {:?}", q, language);
            (StatusCode::OK, Json(LanguageResponse { language })).into_response()
        }
        Err(e) => {
            if e.is_not_found() {
                warn!("Song not found: {}", q);
            } else {
                error!("Language lookup for {:?} failed: {}", q, e);
            }
            e.into_response()
        }
    }
}
