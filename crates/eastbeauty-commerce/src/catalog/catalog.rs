//! The read-only product catalog.

use std::collections::HashMap;

use crate::catalog::{seed, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// An ordered, immutable set of products.
///
/// Built once at startup; there are no mutation operations. Order is the
/// listing order of the storefront grid. Every product is priced in the
/// same currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in listing order.
    ///
    /// Returns an error if an id is zero or appears twice, or if products
    /// are priced in more than one currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let currency = products
            .first()
            .map_or(Currency::default(), |p| p.price.currency);
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if !product.id.is_valid() {
                return Err(CommerceError::ValidationError(format!(
                    "product id must be positive (\"{}\")",
                    product.name
                )));
            }
            if index.insert(product.id, position).is_some() {
                return Err(CommerceError::ValidationError(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.price.currency != currency {
                return Err(CommerceError::ValidationError(format!(
                    "product {} is priced in {}, catalog uses {}",
                    product.id,
                    product.price.currency.code(),
                    currency.code()
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// The compiled-in storefront catalog.
    pub fn storefront() -> Self {
        let products = seed::storefront_products();
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();
        Self { products, index }
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in listing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        let &position = self.index.get(&id)?;
        self.products.get(position)
    }

    /// Check whether a product id is in the catalog.
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Products listed under a category, in listing order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |p| p.is_in(category))
    }

    /// Currency every product is priced in. None for an empty catalog.
    pub fn currency(&self) -> Option<Currency> {
        self.products.first().map(|p| p.price.currency)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, category: Category) -> Product {
        Product::new(id, format!("Product {id}"), Money::rub(100), category)
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new(vec![
            product(1, Category::Clothing),
            product(7, Category::Cosmetics),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(ProductId::new(7)).unwrap().category,
            Category::Cosmetics
        );
        assert!(catalog.get(ProductId::new(2)).is_none());
        assert!(catalog.contains(ProductId::new(1)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            product(1, Category::Clothing),
            product(1, Category::Cosmetics),
        ]);
        assert!(matches!(result, Err(CommerceError::ValidationError(_))));
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = Catalog::new(vec![product(0, Category::Clothing)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let dollars = Product::new(2, "Худи", Money::new(54, Currency::USD), Category::Clothing);
        let result = Catalog::new(vec![product(1, Category::Clothing), dollars]);
        assert!(matches!(result, Err(CommerceError::ValidationError(_))));
    }

    #[test]
    fn test_single_currency_reported() {
        let price = Money::new(450, Currency::CNY);
        let yuan = Product::new(1, "Шаль", price, Category::Clothing);
        let catalog = Catalog::new(vec![yuan]).unwrap();
        assert_eq!(catalog.currency(), Some(Currency::CNY));
        assert_eq!(Catalog::storefront().currency(), Some(Currency::RUB));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), None);
        assert_eq!(catalog.in_category(Category::Clothing).count(), 0);
    }

    #[test]
    fn test_in_category_keeps_order() {
        let catalog = Catalog::new(vec![
            product(3, Category::Clothing),
            product(1, Category::Cosmetics),
            product(2, Category::Clothing),
        ])
        .unwrap();

        let ids: Vec<u32> = catalog
            .in_category(Category::Clothing)
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_storefront_catalog_is_well_formed() {
        let storefront = Catalog::storefront();
        let validated = Catalog::new(storefront.products().to_vec()).unwrap();
        assert_eq!(storefront, validated);
        assert_eq!(storefront.len(), 6);
    }
}
