pub mod product;

pub use product::{Price, Product};
