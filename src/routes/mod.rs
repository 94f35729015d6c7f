// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::{error::AppError, state::SharedState};
use axum::{
    Router,
    extract::FromRequest,
    routing::{get, post},
};
use chat::{chat_handler, furigana_handler, translate_handler};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// `Json` whose rejections answer with the usual `{"detail": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `static_dir` holds `index.html` (served at `/`) and the client assets
/// (served under `/static`).
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_dir = static_dir.as_ref();

    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/translate", post(translate_handler))
        .route("/furigana", post(furigana_handler));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
