use crate::domain::Product;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const PRODUCTS_PATH: &str = "/api/products";

/// Where the storefront gets its product list from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// Reads the list from a running catalog API.
pub struct HttpProductSource {
    pub client: Client,
    pub origin: String,
}

impl HttpProductSource {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            origin: origin.into(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), PRODUCTS_PATH)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = self.products_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach catalog API at {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Catalog API answered {} for {}", status, url);
        }

        response
            .json::<Vec<Product>>()
            .await
            .with_context(|| format!("Catalog API at {} returned a malformed product list", url))
    }
}

/// Fetches once and hands back the list. Any failure leaves the list empty;
/// the page never shows an error, the process only logs it.
pub async fn load_products(source: &dyn ProductSource) -> Vec<Product> {
    match source.fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = ?e, "product list unavailable, rendering empty");
            Vec::new()
        }
    }
}
