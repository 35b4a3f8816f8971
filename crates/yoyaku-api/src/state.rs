//! Application state.

use std::sync::Arc;

use sqlx::MySqlPool;
use yoyaku_db::{MySqlReservationRepo, ReservationRepo};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub reservation_repo: Arc<dyn ReservationRepo>,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            reservation_repo: Arc::new(MySqlReservationRepo::new(pool)),
        }
    }
}
