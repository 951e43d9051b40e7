use catalog::AppState;
use catalog::config::CatalogConfig;
use catalog::database::open_repository;
use catalog::features::api_router;
use catalog::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    init_tracing("catalog=info,tower_http=info");

    let config = CatalogConfig::from_env();

    // open the store once; a failed connection is logged and the server still starts
    let app_state = AppState {
        repository: open_repository(&config).await,
    };

    let app = api_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
