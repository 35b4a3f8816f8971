//! Connectivity check endpoints.

use axum::Router;
use axum::extract::State;
use axum::routing::get;

use crate::AppState;
use crate::error::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_check))
        .route("/test", get(database_check))
}

/// Confirms the API itself is reachable; never touches the database.
async fn api_check() -> &'static str {
    "API接続テストが成功しました"
}

/// Confirms database connectivity by counting reservations.
async fn database_check(State(state): State<AppState>) -> Result<String, ApiError> {
    let count = state.reservation_repo.count().await?;
    Ok(format!(
        "データベース接続テストが成功しました（Reservationsの件数：{count}）"
    ))
}
