use crate::domain::{Price, Product};
use derive_more::derive::Display;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, TypeInfo, ValueRef};

/// One row of the `products` table as SQLite hands it back. The table is
/// filled from outside, so every column but `id` may be NULL.
#[derive(PartialEq, Clone, Debug, Display)]
#[display("product {}", id)]
pub struct DbProduct {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for DbProduct {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: decode_price(row)?,
            image_url: row.try_get("imageUrl")?,
        })
    }
}

// sqlite types per value: INTEGER and REAL cells are both prices, anything else is a decode error
fn decode_price(row: &SqliteRow) -> sqlx::Result<Option<f64>> {
    let storage = {
        let raw = row.try_get_raw("price")?;
        if raw.is_null() {
            return Ok(None);
        }
        raw.type_info().name().to_string()
    };

    match storage.as_str() {
        "INTEGER" => row.try_get::<i64, _>("price").map(|v| Some(v as f64)),
        "REAL" => row.try_get::<f64, _>("price").map(Some),
        other => Err(sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: format!("expected a numeric price, found {} value", other).into(),
        }),
    }
}

impl From<DbProduct> for Product {
    fn from(row: DbProduct) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price.map(Price),
            image_url: row.image_url,
        }
    }
}
