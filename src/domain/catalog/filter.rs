//! Catalog filter/sort pipeline.
//!
//! A pure function from (products, criteria) to the visible, ordered subset.
//! Predicates are independent and combined as a conjunction:
//! search text, then category, then price range.

use std::cmp::Ordering;

use super::criteria::{FilterCriteria, SortDirection, SortKey};
use super::product::Product;

/// Applies `criteria` to `products` and returns the visible products in order.
///
/// An empty result is a normal outcome ("no products found").
pub fn filter_products<'a, I>(products: I, criteria: &FilterCriteria) -> Vec<Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    // The search text is matched as typed, surrounding spaces included.
    let needle = criteria.search.to_lowercase();
    let category = criteria.category.as_deref().filter(|c| !c.is_empty());

    let mut visible: Vec<Product> = products
        .into_iter()
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .filter(|p| category.map_or(true, |c| p.category() == c))
        .filter(|p| criteria.price_range.contains(p.price()))
        .cloned()
        .collect();

    sort_products(&mut visible, criteria.sort_by, criteria.direction);
    visible
}

/// Stable sort; products that compare equal keep their catalog order
/// in both directions.
pub fn sort_products(products: &mut [Product], key: SortKey, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(a.name(), b.name()),
        SortKey::Price => a.price().cmp(&b.price()),
        SortKey::Rating => a
            .rating()
            .unwrap_or_default()
            .cmp(&b.rating().unwrap_or_default()),
    }
}

/// Alphabetical first, then lowercase before uppercase for names that differ
/// only in case.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Result of browsing the catalog.
///
/// `Pending` means no criteria have been applied yet; `Ready` with an empty
/// list means the criteria matched nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProductListing {
    #[default]
    Pending,
    Ready(Vec<Product>),
}

impl ProductListing {
    /// Recomputes the listing for new criteria.
    pub fn apply<'a, I>(products: I, criteria: &FilterCriteria) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        ProductListing::Ready(filter_products(products, criteria))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ProductListing::Pending)
    }

    /// True only when criteria were applied and nothing matched.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ProductListing::Ready(products) if products.is_empty())
    }

    pub fn products(&self) -> Option<&[Product]> {
        match self {
            ProductListing::Pending => None,
            ProductListing::Ready(products) => Some(products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::criteria::PriceRange;
    use crate::domain::foundation::{Money, ProductId, StarRating};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn product(id: &str, name: &str, price: Decimal, category: &str) -> Product {
        Product::new(ProductId::new(id).unwrap(), name, Money::new(price), category).unwrap()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Red Shirt", dec!(20), "clothing"),
            product("2", "Blue Hat", dec!(35), "clothing"),
            product("3", "Camera", dec!(450), "electronics"),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(Product::name).collect()
    }

    #[test]
    fn category_filter_with_price_descending() {
        let criteria = FilterCriteria::new()
            .with_category("clothing")
            .sorted_by(SortKey::Price, SortDirection::Desc);
        let result = filter_products(&sample(), &criteria);
        assert_eq!(names(&result), vec!["Blue Hat", "Red Shirt"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let criteria = FilterCriteria::new().with_search("cam");
        assert_eq!(names(&filter_products(&sample(), &criteria)), vec!["Camera"]);

        let criteria = FilterCriteria::new().with_search("CAM");
        assert_eq!(names(&filter_products(&sample(), &criteria)), vec!["Camera"]);
    }

    #[test]
    fn search_keeps_surrounding_spaces() {
        let products = vec![
            product("1", "Red Shirt", dec!(20), "clothing"),
            product("2", "Bluered", dec!(25), "clothing"),
        ];

        let criteria = FilterCriteria::new().with_search("red ");
        assert_eq!(names(&filter_products(&products, &criteria)), vec!["Red Shirt"]);

        let criteria = FilterCriteria::new().with_search(" ");
        assert_eq!(names(&filter_products(&products, &criteria)), vec!["Red Shirt"]);

        let criteria = FilterCriteria::new().with_search("   ");
        assert!(filter_products(&products, &criteria).is_empty());
    }

    #[test]
    fn search_also_matches_description() {
        let products = vec![product("1", "Lens", dec!(10), "electronics")
            .with_description("Sharp images with beautiful bokeh")];
        let criteria = FilterCriteria::new().with_search("bokeh");
        assert_eq!(filter_products(&products, &criteria).len(), 1);
    }

    #[test]
    fn price_range_outside_catalog_yields_empty_result() {
        let range = PriceRange::between(Money::new(dec!(1000)), Money::new(dec!(2000))).unwrap();
        let criteria = FilterCriteria::new().with_price_range(range);
        let listing = ProductListing::apply(&sample(), &criteria);

        assert!(listing.is_empty_result());
        assert!(!listing.is_pending());
        assert_eq!(listing.products(), Some(&[][..]));
    }

    #[test]
    fn pending_listing_is_not_an_empty_result() {
        let listing = ProductListing::default();
        assert!(listing.is_pending());
        assert!(!listing.is_empty_result());
        assert_eq!(listing.products(), None);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let range = PriceRange::between(Money::new(dec!(20)), Money::new(dec!(35))).unwrap();
        let criteria = FilterCriteria::new().with_price_range(range);
        assert_eq!(
            names(&filter_products(&sample(), &criteria)),
            vec!["Blue Hat", "Red Shirt"]
        );
    }

    #[test]
    fn default_criteria_sort_by_name_ascending() {
        let result = filter_products(&sample(), &FilterCriteria::new());
        assert_eq!(names(&result), vec!["Blue Hat", "Camera", "Red Shirt"]);
    }

    #[test]
    fn name_sort_ignores_case_for_ordering() {
        let products = vec![
            product("1", "banana", dec!(1), "food"),
            product("2", "Apple", dec!(1), "food"),
            product("3", "cherry", dec!(1), "food"),
        ];
        let result = filter_products(&products, &FilterCriteria::new());
        assert_eq!(names(&result), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn missing_rating_sorts_as_zero() {
        let products = vec![
            product("1", "Rated", dec!(1), "x").with_rating(StarRating::try_new(0.5).unwrap(), 3),
            product("2", "Unrated", dec!(1), "x"),
        ];
        let criteria = FilterCriteria::new().sorted_by(SortKey::Rating, SortDirection::Asc);
        assert_eq!(
            names(&filter_products(&products, &criteria)),
            vec!["Unrated", "Rated"]
        );
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let products = vec![
            product("1", "First", dec!(5), "x"),
            product("2", "Second", dec!(5), "x"),
            product("3", "Cheap", dec!(1), "x"),
        ];
        let asc = FilterCriteria::new().sorted_by(SortKey::Price, SortDirection::Asc);
        assert_eq!(
            names(&filter_products(&products, &asc)),
            vec!["Cheap", "First", "Second"]
        );

        let desc = FilterCriteria::new().sorted_by(SortKey::Price, SortDirection::Desc);
        assert_eq!(
            names(&filter_products(&products, &desc)),
            vec!["First", "Second", "Cheap"]
        );
    }

    #[test]
    fn filtering_does_not_mutate_input() {
        let products = sample();
        let before = products.clone();
        let _ = filter_products(
            &products,
            &FilterCriteria::new().sorted_by(SortKey::Price, SortDirection::Desc),
        );
        assert_eq!(products, before);
    }
}
