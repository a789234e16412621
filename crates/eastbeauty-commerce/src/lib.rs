//! Catalog, cart and category filter state for the eastbeauty storefront.
//!
//! This crate is the logic behind a single-page storefront selling clothing
//! and cosmetics. Rendering lives elsewhere; the presentation layer reads
//! state from here and forwards user intents back:
//!
//! - **Catalog**: the fixed, ordered product list and lookup by id
//! - **Cart**: cart lines, quantities, totals and change notification
//! - **Filter**: the active category and the visible product subset
//!
//! Everything is synchronous and single-threaded. Logging goes through
//! `tracing`; install a subscriber in the application to see it.
//!
//! # Example
//!
//! ```rust
//! use eastbeauty_commerce::prelude::*;
//!
//! let mut storefront = Storefront::new();
//! storefront.filter.set_active(Category::Cosmetics);
//!
//! let mascara = storefront.catalog().get(ProductId::new(4)).cloned().unwrap();
//! storefront.cart.add_item(&mascara).unwrap();
//! storefront.cart.add_item(&mascara).unwrap();
//!
//! assert_eq!(storefront.cart.total_item_count(), 2);
//! assert_eq!(storefront.cart.total_price().unwrap().display(), "2900 ₽");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod observer;

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod storefront;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::observer::SubscriptionId;
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartEvent, CartLine, CartPricing, CartStore, LinePricing};

    // Filter
    pub use crate::filter::{
        navigation_menu, CategoryFilter, FilterChange, FilterSelector, MenuItem,
    };
}
