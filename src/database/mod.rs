use crate::config::CatalogConfig;
use crate::domain::Product;
use async_trait::async_trait;
use sqlite::SqliteRepository;
use std::sync::Arc;
use thiserror::Error;

pub mod sqlite;

/// Why a read against the product store did not produce rows.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was never reachable; the message is the original connection error.
    #[error("database unavailable: {0}")]
    Unavailable(String),

    /// The store was reachable but the query itself failed.
    #[error("{0}")]
    Query(#[from] sqlx::Error),
}

// read access to the products table, shared between request handlers.
// sqlx::Pool is thread safe, so implementations just hold one
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in whatever order the store yields them.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;
}

/// Stands in for the store when the startup connection failed. Every query
/// fails fast with the connection error instead of hanging or returning nothing.
pub struct UnavailableRepository {
    reason: String,
}

impl UnavailableRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ProductRepository for UnavailableRepository {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

/// Opens the configured store once for the whole process. A failed connection
/// is logged and replaced by an [`UnavailableRepository`] carrying the error,
/// so the server still starts and every query answers with that message.
pub async fn open_repository(config: &CatalogConfig) -> Arc<dyn ProductRepository> {
    match SqliteRepository::connect(config).await {
        Ok(repo) => {
            tracing::info!(database_url = %config.database_url, "Connected to SQLite product store.");
            Arc::new(repo)
        }
        Err(e) => {
            tracing::error!(
                database_url = %config.database_url,
                error = %e,
                "Unable to open product store, /api/products will answer 500."
            );
            Arc::new(UnavailableRepository::new(e.to_string()))
        }
    }
}
