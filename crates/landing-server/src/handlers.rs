use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::{LandingState, page::Assets};

pub async fn index_handler(State(state): State<LandingState>) -> Html<String> {
    Html(state.index.as_ref().to_owned())
}

pub async fn static_handler(Path(path): Path<String>) -> Response {
    let asset_path = format!("static/{path}");
    match Assets::get(&asset_path) {
        Some(file) => {
            let mime = mime_guess::from_path(&asset_path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref().to_string())], file.data).into_response()
        }
        None => {
            info!("Static Handler: no embedded asset at {}", asset_path);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
