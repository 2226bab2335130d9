mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::board::BoardEngine;
use crate::client::BoardClient;
use crate::state::SnapshotStore;

/// Shared state for the board API.
#[derive(Clone)]
pub struct AppState {
    pub store: SnapshotStore,
    pub engine: Arc<BoardEngine>,
    /// Data source used by `/refresh`. Absent when the snapshot is injected.
    pub client: Option<BoardClient>,
}

impl AppState {
    pub fn new(store: SnapshotStore, engine: BoardEngine, client: Option<BoardClient>) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
            client,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/board", get(handlers::get_board))
        .route("/users", get(handlers::list_users))
        .route("/refresh", post(handlers::refresh))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
