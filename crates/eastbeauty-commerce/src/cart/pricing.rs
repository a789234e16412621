//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for the cart sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Per-line pricing, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of line subtotals.
    pub total: Money,
    /// Sum of quantities.
    pub item_count: u64,
}

impl CartPricing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total formatted for the "Итого:" row.
    pub fn total_display(&self) -> String {
        self.total.display()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePricing {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
}
