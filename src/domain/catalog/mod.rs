//! Catalog domain module.
//!
//! Read-only products and categories, the seed catalog, and the pure
//! filter/sort pipeline used when browsing.

mod criteria;
mod filter;
mod product;
mod seed;

pub use criteria::{
    default_price_range, price_presets, CriteriaQuery, FilterCriteria, PricePreset, PriceRange,
    SortDirection, SortKey,
};
pub use filter::{filter_products, sort_products, ProductListing};
pub use product::{Category, Product, MAX_NAME_LENGTH};
pub use seed::{seed_categories, seed_products};
