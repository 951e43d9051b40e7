use crate::config::CatalogConfig;
use crate::database::{ProductRepository, StoreError};
use crate::domain::Product;
use crate::features::products::model::DbProduct;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

// price is decoded per value in DbProduct, see model.rs
const LIST_PRODUCTS_SQL: &str = "SELECT id, name, description, price, imageUrl FROM products";

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Opens the store described by `config`. The pool connects eagerly, so a
    /// bad path or unreadable file surfaces here and not on the first request.
    pub async fn connect(config: &CatalogConfig) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let db_products = sqlx::query_as::<_, DbProduct>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(db_products.into_iter().map(Product::from).collect())
    }
}
