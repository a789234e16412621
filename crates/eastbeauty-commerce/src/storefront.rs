//! Session wiring of catalog, cart and filter.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::{Catalog, Product};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::filter::FilterSelector;

/// Everything one storefront session needs.
///
/// Constructed once at application start and passed by reference to the
/// presentation layer.
#[derive(Debug)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    pub cart: CartStore,
    pub filter: FilterSelector,
}

impl Storefront {
    /// A session over the compiled-in catalog with default configuration.
    pub fn new() -> Self {
        let catalog = Arc::new(Catalog::storefront());
        Self {
            cart: CartStore::new().with_catalog(Arc::clone(&catalog)),
            filter: FilterSelector::new(),
            catalog,
        }
    }

    /// A session over a given catalog and configuration.
    ///
    /// The catalog must be priced in the configured cart currency.
    pub fn with_catalog(catalog: Catalog, config: StoreConfig) -> Result<Self, CommerceError> {
        if let Some(currency) = catalog.currency().filter(|&c| c != config.currency) {
            return Err(CommerceError::Config(format!(
                "catalog is priced in {}, cart currency is {}",
                currency.code(),
                config.currency.code()
            )));
        }
        let cart = CartStore::from_config(config)?;
        let catalog = Arc::new(catalog);
        tracing::debug!(products = catalog.len(), "storefront session created");
        Ok(Self {
            cart: cart.with_catalog(Arc::clone(&catalog)),
            filter: FilterSelector::new(),
            catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products for the grid under the active filter.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.filter.visible_products(&self.catalog)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
