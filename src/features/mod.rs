pub mod products;

use crate::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// The full API surface: features composed under `/api`, any origin allowed.
pub fn api_router(state: AppState) -> Router {
    let api_router = Router::new().merge(products::products_router());

    Router::new()
        .nest("/api", api_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
