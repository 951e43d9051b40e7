use catalog::config::StorefrontConfig;
use catalog::observability::init_tracing;
use catalog::services::HttpProductSource;
use catalog::storefront::{StorefrontState, storefront_router};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("catalog=info,storefront=info,tower_http=info");

    let config = Arc::new(StorefrontConfig::from_env());
    tracing::info!(api_origin = %config.api_origin, "Loading products from catalog API.");

    let state = StorefrontState {
        source: Arc::new(HttpProductSource::new(config.api_origin.clone())),
        config: config.clone(),
    };

    let app = storefront_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Storefront listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
