use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./src/config/database.sqlite";
pub const DEFAULT_API_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:3001";
pub const DEFAULT_STOREFRONT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings for the catalog API process.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl CatalogConfig {
    // every value falls back to the built-in default, an empty environment is a valid setup
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|val| *val > 0)
            .unwrap_or(1);

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_API_BIND_ADDR.to_string());

        Self {
            database_url,
            max_connections,
            bind_addr,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            bind_addr: DEFAULT_API_BIND_ADDR.to_string(),
        }
    }
}

/// Settings for the storefront (HTML) process.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    pub api_origin: String,
    pub bind_addr: String,
    pub static_dir: PathBuf,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        let api_origin =
            std::env::var("API_ORIGIN").unwrap_or_else(|_| DEFAULT_API_ORIGIN.to_string());

        let bind_addr = std::env::var("STOREFRONT_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_STOREFRONT_BIND_ADDR.to_string());

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()));

        Self {
            api_origin,
            bind_addr,
            static_dir,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            bind_addr: DEFAULT_STOREFRONT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from("./public"),
        }
    }
}
