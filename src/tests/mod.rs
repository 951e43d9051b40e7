mod unit_storefront_render;

use crate::domain::{Price, Product};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub(crate) const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE products (
        id INTEGER PRIMARY KEY,
        name TEXT,
        description TEXT,
        price REAL,
        imageUrl TEXT
    )
"#;

// a fresh in-memory database; one connection, otherwise every connection gets its own empty db
pub(crate) async fn memory_pool() -> Pool<Sqlite> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

pub(crate) async fn create_products_table(pool: &Pool<Sqlite>) {
    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .expect("Failed to create products table");
}

pub(crate) async fn insert_product(pool: &Pool<Sqlite>, product: &Product) {
    sqlx::query(
        "INSERT INTO products (id, name, description, price, imageUrl) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price.map(|p| p.0))
    .bind(&product.image_url)
    .execute(pool)
    .await
    .expect("Failed to insert product");
}

pub(crate) fn keyboard() -> Product {
    Product {
        id: 1,
        name: Some("Teclado Gamer".to_string()),
        description: Some("Mecânico RGB".to_string()),
        price: Some(Price(250.0)),
        image_url: Some("/img/kb.png".to_string()),
    }
}

pub(crate) fn mock_product(id: i64, price: f64) -> Product {
    Product {
        id,
        name: Some(format!("Produto {}", id)),
        description: Some(format!("Descrição do produto {}", id)),
        price: Some(Price(price)),
        image_url: Some(format!("/img/{}.png", id)),
    }
}
