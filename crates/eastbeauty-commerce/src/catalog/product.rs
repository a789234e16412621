//! Product and category types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product category.
///
/// The storefront sells exactly two kinds of goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Cosmetics,
}

impl Category {
    /// All categories, in storefront order.
    pub const ALL: [Category; 2] = [Category::Clothing, Category::Cosmetics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Cosmetics => "cosmetics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clothing" => Some(Category::Clothing),
            "cosmetics" => Some(Category::Cosmetics),
            _ => None,
        }
    }

    /// Display label shown on product badges and filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Clothing => "Одежда",
            Category::Cosmetics => "Косметика",
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Category the product is listed under.
    pub category: Category,
    /// Image URI. Passed through to the presentation layer as-is.
    pub image: String,
}

impl Product {
    /// Create a new product with an empty description and image.
    pub fn new(id: u32, name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price,
            category,
            image: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check if the product is listed under a category.
    pub fn is_in(&self, category: Category) -> bool {
        self.category == category
    }

    /// Price formatted for display (e.g., "8900 ₽").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Ципао", Money::rub(8900), Category::Clothing)
            .with_description("Шёлк")
            .with_image("https://example.com/qipao.jpg");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.description, "Шёлк");
        assert!(product.is_in(Category::Clothing));
        assert!(!product.is_in(Category::Cosmetics));
        assert_eq!(product.price_display(), "8900 \u{20bd}");
    }

    #[test]
    fn test_category_roundtrip_names() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("Cosmetics"), Some(Category::Cosmetics));
        assert_eq!(Category::from_str("shoes"), None);
    }

    #[test]
    fn test_category_serde_uses_lowercase() {
        let json = serde_json::to_string(&Category::Cosmetics).unwrap();
        assert_eq!(json, "\"cosmetics\"");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Clothing.label(), "Одежда");
        assert_eq!(Category::Cosmetics.label(), "Косметика");
    }
}
