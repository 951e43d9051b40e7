use crate::database::ProductRepository;
use std::sync::Arc;

pub mod config;
pub mod database;
pub mod domain;
pub mod features;
pub mod observability;
pub mod services;
pub mod storefront;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProductRepository>,
}
