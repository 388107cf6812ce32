//! ProductCatalog port: read access to the products the store sells.

use crate::domain::catalog::{Category, Product};
use crate::domain::foundation::ProductId;

/// Read-only product source.
///
/// The cart resolves ids through this port when adding, and the listing
/// pipeline filters over `all()`.
pub trait ProductCatalog: Send + Sync {
    /// Every product, in catalog order.
    fn all(&self) -> &[Product];

    /// Looks up a product by id.
    fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.all().iter().find(|product| product.id() == id)
    }

    /// Active categories ordered by `sort_order`.
    fn categories(&self) -> Vec<&Category>;

    /// Looks up a category by slug.
    fn find_category(&self, slug: &str) -> Option<&Category> {
        self.categories()
            .into_iter()
            .find(|category| category.slug == slug)
    }
}
