//! ListProductsHandler - Query handler for the product listing page.

use std::sync::Arc;

use crate::domain::catalog::{
    filter_products, CriteriaQuery, FilterCriteria, PriceRange, Product, ProductListing,
};
use crate::ports::ProductCatalog;

/// Runs the filter/sort pipeline over the catalog.
pub struct ListProductsHandler {
    catalog: Arc<dyn ProductCatalog>,
    default_range: PriceRange,
}

impl ListProductsHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>, default_range: PriceRange) -> Self {
        Self {
            catalog,
            default_range,
        }
    }

    /// Price range a fresh filter panel starts from.
    pub fn default_price_range(&self) -> PriceRange {
        self.default_range
    }

    /// Products matching `criteria`, in the requested order.
    pub fn handle(&self, criteria: &FilterCriteria) -> Vec<Product> {
        let products = filter_products(self.catalog.all(), criteria);
        tracing::debug!(
            search = %criteria.search,
            category = ?criteria.category,
            sort = %criteria.sort_by,
            matched = products.len(),
            "Filtered catalog"
        );
        products
    }

    /// Listing for query-string style parameters.
    pub fn handle_query(&self, query: &CriteriaQuery) -> ProductListing {
        ProductListing::Ready(self.handle(&FilterCriteria::from_query(query)))
    }
}
