use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub mod corpus;
pub mod error;
pub mod handlers;
pub mod language;
pub mod state;
pub mod translator;


use corpus::CorpusStore;
use handlers::{status_handler, translate_handler};
use state::AppState;

pub use translator::Translator;

pub fn create_router() -> Router {
    create_router_with_corpus(Arc::new(CorpusStore::healthcare()))
}

pub fn create_router_with_corpus(corpus: Arc<CorpusStore>) -> Router {
    let state = AppState::new(corpus);

    Router::new()
        .route("/api/translate", post(translate_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
