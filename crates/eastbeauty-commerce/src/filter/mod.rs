//! Catalog filtering module.
//!
//! Contains the category filter, its selector and the header menu that
//! drives it.

mod menu;
mod selector;

pub use menu::{navigation_menu, MenuItem};
pub use selector::{CategoryFilter, FilterChange, FilterSelector};
