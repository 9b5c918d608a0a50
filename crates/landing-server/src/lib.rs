use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::info;

pub mod handlers;
pub mod page;
pub mod qr;


use handlers::{index_handler, static_handler};

pub const DEFAULT_DOMAIN_URL: &str = "https://ylkf.us.ci";

#[derive(Clone)]
pub struct LandingState {
    pub index: Arc<str>,
}

/// The QR code only depends on `domain_url`, so the page is rendered once here.
pub fn create_router(domain_url: &str) -> anyhow::Result<Router> {
    let qr_code = qr::render_base64(domain_url);
    info!(
        "Landing: rendered QR for {} ({} bytes base64)",
        domain_url,
        qr_code.len()
    );

    let state = LandingState {
        index: page::render_index(&qr_code, domain_url)?.into(),
    };

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/static/{*path}", get(static_handler))
        .with_state(state))
}
