//! Category filter state.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use crate::observer::{Listeners, SubscriptionId};
use serde::{Deserialize, Serialize};

/// The active catalog filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The filter buttons above the product grid, in display order.
    pub const OPTIONS: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Clothing),
        CategoryFilter::Only(Category::Cosmetics),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a filter key ("all", "clothing", "cosmetics").
    ///
    /// Unknown keys are rejected rather than treated as "all".
    pub fn parse(key: &str) -> Result<Self, CommerceError> {
        if key.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(key)
            .map(CategoryFilter::Only)
            .ok_or_else(|| {
                CommerceError::ValidationError(format!("unknown category filter: {key}"))
            })
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все товары",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether a product is visible under this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.is_in(*category),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::parse(s)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryFilter::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A change of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChange {
    pub from: CategoryFilter,
    pub to: CategoryFilter,
}

/// Holds the active category and derives the visible products.
#[derive(Debug, Default)]
pub struct FilterSelector {
    active: CategoryFilter,
    listeners: Listeners<FilterChange, CategoryFilter>,
}

impl FilterSelector {
    /// Create a selector showing all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current filter.
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Whether a filter button should render as selected.
    pub fn is_active(&self, filter: CategoryFilter) -> bool {
        self.active == filter
    }

    /// Set the active filter. Returns whether it changed.
    pub fn set_active(&mut self, filter: impl Into<CategoryFilter>) -> bool {
        let to = filter.into();
        let from = self.active;
        if from == to {
            return false;
        }
        self.active = to;
        tracing::debug!(%from, %to, "category filter changed");
        self.listeners.notify(&FilterChange { from, to }, &self.active);
        true
    }

    /// Catalog entries visible under the active filter, in catalog order.
    pub fn visible_products<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        let active = self.active;
        catalog.iter().filter(move |p| active.matches(p))
    }

    /// Register a listener called after the filter changes.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&FilterChange, &CategoryFilter) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ids<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<u32> {
        products.map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_all_shows_full_catalog() {
        let catalog = Catalog::storefront();
        let selector = FilterSelector::new();
        assert_eq!(selector.active(), CategoryFilter::All);
        assert_eq!(
            ids(selector.visible_products(&catalog)),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_category_subset_in_order() {
        let catalog = Catalog::storefront();
        let mut selector = FilterSelector::new();

        selector.set_active(Category::Clothing);
        assert_eq!(ids(selector.visible_products(&catalog)), vec![1, 3, 5]);

        selector.set_active(Category::Cosmetics);
        assert_eq!(ids(selector.visible_products(&catalog)), vec![2, 4, 6]);

        selector.set_active(CategoryFilter::All);
        assert_eq!(selector.visible_products(&catalog).count(), 6);
    }

    #[test]
    fn test_is_active() {
        let mut selector = FilterSelector::new();
        selector.set_active(Category::Cosmetics);
        assert!(selector.is_active(Category::Cosmetics.into()));
        assert!(!selector.is_active(CategoryFilter::All));
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse("all").unwrap(), CategoryFilter::All);
        assert_eq!(
            "clothing".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Clothing)
        );
        assert!(matches!(
            CategoryFilter::parse("shoes"),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = CategoryFilter::OPTIONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Все товары", "Одежда", "Косметика"]);
    }

    #[test]
    fn test_serde_as_key() {
        let filter = CategoryFilter::Only(Category::Cosmetics);
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, "\"cosmetics\"");
        let parsed: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, CategoryFilter::All);
        assert!(serde_json::from_str::<CategoryFilter>("\"hats\"").is_err());
    }

    #[test]
    fn test_listener_called_on_change_only() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut selector = FilterSelector::new();
        let sink = Rc::clone(&changes);
        selector.subscribe(move |change, _| sink.borrow_mut().push(*change));

        assert!(selector.set_active(Category::Clothing));
        assert!(!selector.set_active(Category::Clothing));
        assert!(selector.set_active(CategoryFilter::All));

        assert_eq!(
            *changes.borrow(),
            vec![
                FilterChange {
                    from: CategoryFilter::All,
                    to: CategoryFilter::Only(Category::Clothing),
                },
                FilterChange {
                    from: CategoryFilter::Only(Category::Clothing),
                    to: CategoryFilter::All,
                },
            ]
        );
    }
}
