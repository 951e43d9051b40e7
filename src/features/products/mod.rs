pub mod model;

use crate::AppState;
use crate::database::StoreError;
use crate::domain::Product;
use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use http::StatusCode;

pub fn products_router() -> Router<AppState> {
    Router::new().route("/products", get(list_products_handler))
}

async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, StoreError> {
    let products = state.repository.list_products().await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to list products");
    })?;

    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

// the raw store message goes back as a plain-text 500
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
