pub mod render;

use crate::config::StorefrontConfig;
use crate::services::{ProductSource, load_products};
use axum::{Router, extract::State, response::Html, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct StorefrontState {
    pub source: Arc<dyn ProductSource>,
    pub config: Arc<StorefrontConfig>,
}

/// `/` renders the catalog; everything else is looked up in the static directory.
pub fn storefront_router(state: StorefrontState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// each page view is one mount: one fetch, then render whatever came back
async fn home_handler(State(state): State<StorefrontState>) -> Html<String> {
    let products = load_products(state.source.as_ref()).await;
    tracing::debug!(count = products.len(), "rendering home page");

    Html(render::home_page(&products))
}
