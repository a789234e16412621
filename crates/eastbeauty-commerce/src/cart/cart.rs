//! Cart and cart line types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
///
/// `quantity` is at least 1. A line whose quantity would reach 0 is removed
/// from the cart instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product copied from the catalog when the line was created.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price multiplied by quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(u64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart.
///
/// Lines are kept in the order products were first added. There is at most
/// one line per product. Mutation goes through [`crate::cart::CartStore`];
/// this type is the read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for line in &self.lines {
            total = total
                .try_add(&line.subtotal()?)
                .ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Calculate the per-line pricing breakdown.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| -> Result<LinePricing, CommerceError> {
                Ok(LinePricing {
                    product_id: line.product.id,
                    name: line.product.name.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total = Money::try_sum(lines.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            lines,
            total,
            item_count: self.item_count(),
        })
    }

    /// Increment the product's line by one, or append a new line.
    ///
    /// Returns the new quantity. Nothing changes on error.
    pub(crate) fn add(
        &mut self,
        product: &Product,
        max_quantity: u32,
    ) -> Result<u32, CommerceError> {
        if !product.id.is_valid() {
            return Err(CommerceError::ValidationError(format!(
                "product id must be positive (\"{}\")",
                product.name
            )));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > max_quantity {
                return Err(CommerceError::QuantityExceedsLimit(
                    i64::from(new_quantity),
                    i64::from(max_quantity),
                ));
            }
            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        self.lines.push(CartLine::new(product.clone()));
        Ok(1)
    }

    /// Remove the product's line. Returns false if there was none.
    pub(crate) fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Replace the quantity of an existing line.
    ///
    /// Returns the previous quantity, or None if the product has no line.
    /// `quantity` must already be validated as positive.
    pub(crate) fn replace_quantity(&mut self, product_id: ProductId, quantity: u32) -> Option<u32> {
        let line = self.lines.iter_mut().find(|l| l.product.id == product_id)?;
        let previous = line.quantity;
        line.quantity = quantity;
        Some(previous)
    }

    /// Append a line with an explicit quantity for a product not yet in the cart.
    pub(crate) fn insert(&mut self, product: Product, quantity: u32) {
        debug_assert!(quantity > 0 && !self.contains(product.id));
        self.lines.push(CartLine { product, quantity });
    }

    /// Remove every line. Returns false if the cart was already empty.
    pub(crate) fn clear(&mut self) -> bool {
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        had_lines
    }
}
