//! Shopping cart module.
//!
//! Contains the cart snapshot types, pricing breakdown and the cart store.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLine};
pub use pricing::{CartPricing, LinePricing};
pub use store::{CartEvent, CartStore};
