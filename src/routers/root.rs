use crate::controllers::RootController;

pub async fn root_route() -> impl axum::response::IntoResponse {
    RootController::root().await
}

pub async fn health_check_route() -> impl axum::response::IntoResponse {
    RootController::health_check().await
}
