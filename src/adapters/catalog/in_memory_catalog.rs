//! In-Memory Product Catalog Adapter
//!
//! Holds the full product list in memory. The storefront ships a fixed
//! catalog, so `seeded()` is the production constructor.

use crate::domain::catalog::{seed_categories, seed_products, Category, Product};
use crate::domain::foundation::ValidationError;
use crate::ports::ProductCatalog;

/// In-memory product catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    /// Create a catalog over the given products and categories
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Create a catalog holding the built-in seed data
    pub fn seeded() -> Result<Self, ValidationError> {
        Ok(Self::new(seed_products()?, seed_categories().to_vec()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn all(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> Vec<&Category> {
        let mut active: Vec<&Category> = self.categories.iter().filter(|c| c.is_active).collect();
        active.sort_by_key(|c| c.sort_order);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, ProductId};
    use rust_decimal_macros::dec;

    #[test]
    fn seeded_catalog_has_six_products_and_five_categories() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.categories().len(), 5);
    }

    #[test]
    fn find_by_id_returns_matching_product() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let product = catalog.find_by_id(&ProductId::new("4").unwrap()).unwrap();
        assert_eq!(product.price(), Money::new(dec!(449.99)));
    }

    #[test]
    fn find_by_id_unknown_is_none() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        assert!(catalog.find_by_id(&ProductId::new("99").unwrap()).is_none());
    }

    #[test]
    fn find_category_by_slug() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let category = catalog.find_category("sports-outdoors").unwrap();
        assert_eq!(category.name, "Sports & Outdoors");
        assert!(catalog.find_category("toys").is_none());
    }

    #[test]
    fn inactive_categories_are_hidden_and_order_is_by_sort_order() {
        let mut hidden = Category::new("9", "Hidden", 0);
        hidden.is_active = false;
        let catalog = InMemoryCatalog::new(
            Vec::new(),
            vec![Category::new("2", "Second", 2), hidden, Category::new("1", "First", 1)],
        );

        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
