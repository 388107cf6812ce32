//! Integration tests for the catalog filter/sort pipeline.
//!
//! Covers the pure pipeline over hand-built products and the listing
//! handler over the seeded catalog.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use storefront::adapters::InMemoryCatalog;
use storefront::application::ListProductsHandler;
use storefront::domain::catalog::{
    default_price_range, filter_products, price_presets, CriteriaQuery, FilterCriteria,
    PriceRange, Product, ProductListing, SortDirection, SortKey,
};
use storefront::domain::foundation::{Money, ProductId, StarRating};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn product(id: &str, name: &str, price: Decimal, category: &str) -> Product {
    Product::new(ProductId::new(id).unwrap(), name, Money::new(price), category).unwrap()
}

fn three_products() -> Vec<Product> {
    vec![
        product("1", "Red Shirt", dec!(20), "clothing"),
        product("2", "Blue Hat", dec!(35), "clothing"),
        product("3", "Camera", dec!(450), "electronics").with_description("Mirrorless body"),
    ]
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(Product::name).collect()
}

fn handler() -> ListProductsHandler {
    ListProductsHandler::new(
        Arc::new(InMemoryCatalog::seeded().unwrap()),
        default_price_range(),
    )
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn category_filter_with_price_descending() {
    let products = three_products();
    let criteria = FilterCriteria::new()
        .with_category("clothing")
        .sorted_by(SortKey::Price, SortDirection::Desc);

    let visible = filter_products(&products, &criteria);

    assert_eq!(names(&visible), vec!["Blue Hat", "Red Shirt"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let products = three_products();

    let visible = filter_products(&products, &FilterCriteria::new().with_search("cam"));
    assert_eq!(names(&visible), vec!["Camera"]);

    let visible = filter_products(&products, &FilterCriteria::new().with_search("MIRRORLESS"));
    assert_eq!(names(&visible), vec!["Camera"]);
}

#[test]
fn price_range_without_matches_is_empty_not_error() {
    let products = three_products();
    let range = PriceRange::between(Money::new(dec!(1000)), Money::new(dec!(2000))).unwrap();

    let listing = ProductListing::apply(&products, &FilterCriteria::new().with_price_range(range));

    assert!(listing.is_empty_result());
    assert_eq!(listing.products(), Some(&[][..]));
}

#[test]
fn price_bounds_are_inclusive() {
    let products = three_products();
    let range = PriceRange::between(Money::new(dec!(20)), Money::new(dec!(35))).unwrap();

    let visible = filter_products(&products, &FilterCriteria::new().with_price_range(range));

    assert_eq!(names(&visible), vec!["Blue Hat", "Red Shirt"]);
}

#[test]
fn rating_sort_treats_missing_rating_as_zero() {
    let products = vec![
        product("1", "Unrated", dec!(10), "misc"),
        product("2", "Rated", dec!(10), "misc").with_rating(StarRating::try_new(3.0).unwrap(), 4),
    ];
    let criteria = FilterCriteria::new().sorted_by(SortKey::Rating, SortDirection::Asc);

    let visible = filter_products(&products, &criteria);

    assert_eq!(names(&visible), vec!["Unrated", "Rated"]);
}

#[test]
fn equal_keys_keep_catalog_order_in_both_directions() {
    let products = vec![
        product("1", "First", dec!(10), "misc"),
        product("2", "Second", dec!(10), "misc"),
    ];

    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let criteria = FilterCriteria::new().sorted_by(SortKey::Price, direction);
        let visible = filter_products(&products, &criteria);
        assert_eq!(names(&visible), vec!["First", "Second"]);
    }
}

#[test]
fn pending_listing_is_distinct_from_empty_result() {
    let pending = ProductListing::default();
    assert!(pending.is_pending());
    assert!(!pending.is_empty_result());
    assert_eq!(pending.products(), None);
}

// =============================================================================
// Seeded Catalog
// =============================================================================

#[test]
fn presets_select_expected_seed_products() {
    let presets = price_presets();
    let under_50 = presets.iter().find(|p| p.label == "Under $50").unwrap();

    let visible = handler().handle(
        &FilterCriteria::new()
            .with_price_range(under_50.range)
            .sorted_by(SortKey::Price, SortDirection::Asc),
    );

    assert_eq!(
        names(&visible),
        vec!["Organic Cotton T-Shirt", "Stainless Steel Water Bottle"]
    );
}

#[test]
fn query_with_unknown_sort_and_bad_price_falls_back() {
    let query = CriteriaQuery {
        min_price: Some("abc".to_string()),
        sort_by: Some("popularity".to_string()),
        ..CriteriaQuery::default()
    };

    let listing = handler().handle_query(&query);

    let products = listing.products().unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[0].name(), "Ergonomic Office Chair");
}

#[test]
fn search_and_category_combine() {
    let query = CriteriaQuery {
        search: Some("watch".to_string()),
        category: Some("electronics".to_string()),
        ..CriteriaQuery::default()
    };

    let listing = handler().handle_query(&query);

    assert_eq!(names(listing.products().unwrap()), vec!["Smart Fitness Watch"]);
}
