//! Product catalog module.
//!
//! Contains the product and category types and the read-only catalog.

mod catalog;
mod product;
mod seed;

pub use catalog::Catalog;
pub use product::{Category, Product};
