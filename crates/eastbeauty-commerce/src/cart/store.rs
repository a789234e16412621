//! The cart store: the single owner of cart state.
//!
//! The presentation layer holds one [`CartStore`] per session, forwards user
//! intents to it, and re-renders from the listeners registered with
//! [`CartStore::subscribe`].

use std::sync::Arc;

use crate::cart::{Cart, CartLine, CartPricing};
use crate::catalog::{Catalog, Product};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::observer::{Listeners, SubscriptionId};
use serde::{Deserialize, Serialize};

/// What a successful cart mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new line was appended.
    LineAdded {
        product_id: ProductId,
        quantity: u32,
    },
    /// An existing line's quantity changed.
    QuantityChanged {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
    /// A line was removed.
    LineRemoved { product_id: ProductId },
    /// All lines were removed.
    Cleared,
}

/// Session cart with mutation API and change notification.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    config: StoreConfig,
    catalog: Option<Arc<Catalog>>,
    listeners: Listeners<CartEvent, Cart>,
}

impl CartStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_valid_config(StoreConfig::default())
    }

    /// Create an empty store from configuration.
    pub fn from_config(config: StoreConfig) -> Result<Self, CommerceError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: StoreConfig) -> Self {
        Self {
            cart: Cart::new(config.currency),
            config,
            catalog: None,
            listeners: Listeners::new(),
        }
    }

    /// Wire in the catalog for id-based operations.
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add one unit of a product.
    ///
    /// Increments the existing line, or appends a new line with quantity 1.
    /// Returns the line's new quantity. A product with id 0 is rejected with
    /// `ValidationError`.
    pub fn add_item(&mut self, product: &Product) -> Result<u32, CommerceError> {
        let quantity = self
            .cart
            .add(product, self.config.max_quantity_per_line)
            .inspect_err(|e| {
                tracing::warn!(product_id = %product.id, error = %e, "add to cart rejected");
            })?;

        let event = if quantity == 1 {
            CartEvent::LineAdded {
                product_id: product.id,
                quantity,
            }
        } else {
            CartEvent::QuantityChanged {
                product_id: product.id,
                from: quantity - 1,
                to: quantity,
            }
        };
        self.commit(event);
        Ok(quantity)
    }

    /// Add one unit of a catalog product by id.
    ///
    /// Requires a catalog; an unknown id is `ProductNotFound`.
    pub fn add_by_id(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        let product = self
            .catalog_product(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id.get()))?;
        self.add_item(&product)
    }

    /// Remove a product's line. Returns false (no-op) if it was not in the cart.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        if !self.cart.remove(product_id) {
            tracing::trace!(product_id = %product_id, "remove: not in cart");
            return false;
        }
        self.commit(CartEvent::LineRemoved { product_id });
        true
    }

    /// Set a product's quantity.
    ///
    /// - negative: `InvalidQuantity`, nothing changes
    /// - zero: same as [`CartStore::remove_item`]
    /// - above the configured maximum: `QuantityExceedsLimit`
    /// - positive for a product not in the cart: no-op, unless a catalog is
    ///   wired in and `materialize_on_set_quantity` is set, in which case the
    ///   line is created from the catalog entry
    ///
    /// Returns whether the cart changed.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        let quantity = self.validate_quantity(product_id, quantity)?;
        if quantity == 0 {
            return Ok(self.remove_item(product_id));
        }

        match self.cart.replace_quantity(product_id, quantity) {
            Some(from) if from == quantity => Ok(false),
            Some(from) => {
                self.commit(CartEvent::QuantityChanged {
                    product_id,
                    from,
                    to: quantity,
                });
                Ok(true)
            }
            None => Ok(self.materialize(product_id, quantity)),
        }
    }

    /// The "+" button on a cart line. No-op if the product is not in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let Some(quantity) = self.cart.line(product_id).map(|l| l.quantity) else {
            return Ok(false);
        };
        self.set_quantity(product_id, i64::from(quantity) + 1)
    }

    /// The "−" button on a cart line. A line at quantity 1 is removed.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let Some(quantity) = self.cart.line(product_id).map(|l| l.quantity) else {
            return Ok(false);
        };
        self.set_quantity(product_id, i64::from(quantity) - 1)
    }

    /// Remove every line. Returns false if the cart was already empty.
    pub fn clear(&mut self) -> bool {
        if !self.cart.clear() {
            return false;
        }
        self.commit(CartEvent::Cleared);
        true
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of price times quantity; zero for an empty cart.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.cart.total_price()
    }

    /// Sum of quantities; zero for an empty cart.
    pub fn total_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Count for the cart button badge. Hidden (None) while the cart is empty.
    pub fn badge_count(&self) -> Option<u64> {
        Some(self.total_item_count()).filter(|&count| count > 0)
    }

    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.calculate_pricing()
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Register a listener called after every change with the event and the
    /// new cart.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CartEvent, &Cart) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn commit(&mut self, event: CartEvent) {
        tracing::debug!(?event, lines = self.cart.unique_item_count(), "cart changed");
        self.listeners.notify(&event, &self.cart);
    }

    fn validate_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<u32, CommerceError> {
        let max = i64::from(self.config.max_quantity_per_line);
        let result = if quantity < 0 {
            Err(CommerceError::InvalidQuantity(quantity))
        } else if quantity > max {
            Err(CommerceError::QuantityExceedsLimit(quantity, max))
        } else {
            u32::try_from(quantity).map_err(|_| CommerceError::Overflow)
        };
        result.inspect_err(|e| {
            tracing::warn!(product_id = %product_id, quantity, error = %e, "quantity rejected");
        })
    }

    fn catalog_product(&self, product_id: ProductId) -> Option<Product> {
        self.catalog.as_ref()?.get(product_id).cloned()
    }

    fn materialize(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if !self.config.materialize_on_set_quantity {
            tracing::trace!(product_id = %product_id, "set quantity: not in cart");
            return false;
        }
        let Some(product) = self.catalog_product(product_id) else {
            tracing::trace!(product_id = %product_id, "set quantity: not in catalog");
            return false;
        };
        if product.price.currency != self.cart.currency() {
            tracing::warn!(product_id = %product_id, "set quantity: currency differs from cart");
            return false;
        }
        self.cart.insert(product, quantity);
        self.commit(CartEvent::LineAdded {
            product_id,
            quantity,
        });
        true
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
