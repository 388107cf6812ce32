//! Filter and sort criteria for catalog browsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Money, ValidationError};

/// Field used to order the visible products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    /// Lenient parse used for query strings: anything unknown sorts by name.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            other => Err(ValidationError::invalid_format(
                "sort_by",
                format!("expected name, price or rating, got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Inclusive price bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    /// Bounded range `[min, max]`.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if `min > max` or either bound is negative.
    pub fn between(min: Money, max: Money) -> Result<Self, ValidationError> {
        if min.is_negative() || max.is_negative() {
            return Err(ValidationError::invalid_format(
                "price_range",
                "bounds must not be negative",
            ));
        }
        if min > max {
            return Err(ValidationError::invalid_format(
                "price_range",
                format!("minimum {} exceeds maximum {}", min, max),
            ));
        }
        Ok(Self {
            min: Some(min),
            max: Some(max),
        })
    }

    pub fn at_least(min: Money) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: Money) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: Money) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// A named shortcut range offered next to the price inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

/// Default bounds of the price inputs.
pub fn default_price_range() -> PriceRange {
    PriceRange {
        min: Some(Money::ZERO),
        max: Some(Money::from_cents(100_000)),
    }
}

/// Quick price filters: under $50, $50–$100, $100–$200, over $200.
pub fn price_presets() -> Vec<PricePreset> {
    let bounded = |label: &'static str, min: i64, max: i64| PricePreset {
        label,
        range: PriceRange {
            min: Some(Money::from_cents(min * 100)),
            max: Some(Money::from_cents(max * 100)),
        },
    };
    vec![
        bounded("Under $50", 0, 50),
        bounded("$50 - $100", 50, 100),
        bounded("$100 - $200", 100, 200),
        bounded("Over $200", 200, 1000),
    ]
}

/// Everything that decides which products are visible and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<String>,
    pub price_range: PriceRange,
    pub sort_by: SortKey,
    pub direction: SortDirection,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_by = key;
        self.direction = direction;
        self
    }

    /// Builds criteria from raw query-string values.
    ///
    /// Empty strings mean "not set". Unparseable price bounds are ignored and
    /// an unknown sort key falls back to name.
    pub fn from_query(query: &CriteriaQuery) -> Self {
        let bound = |raw: &Option<String>| {
            raw.as_deref()
                .filter(|s| !s.trim().is_empty())
                .and_then(|s| Money::parse(s).ok())
        };
        Self {
            search: query.search.clone().unwrap_or_default(),
            category: query
                .category
                .clone()
                .filter(|c| !c.trim().is_empty()),
            price_range: PriceRange {
                min: bound(&query.min_price),
                max: bound(&query.max_price),
            },
            sort_by: query
                .sort_by
                .as_deref()
                .map(SortKey::parse_or_default)
                .unwrap_or_default(),
            direction: query
                .sort_order
                .as_deref()
                .map(SortDirection::parse_or_default)
                .unwrap_or_default(),
        }
    }

    /// Resets the filter inputs to their defaults, keeping the sort order.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.category = None;
        self.price_range = PriceRange::default();
    }
}

/// Raw, untyped criteria as they arrive from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sort_key_parses_known_values() {
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert_eq!("RATING".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert!("popularity".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_or_default("popularity"), SortKey::Name);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        assert_eq!(SortDirection::parse_or_default("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_or_default("sideways"), SortDirection::Asc);
    }

    #[test]
    fn price_range_is_inclusive() {
        let range = PriceRange::between(Money::from_cents(2000), Money::from_cents(3500)).unwrap();
        assert!(range.contains(Money::from_cents(2000)));
        assert!(range.contains(Money::from_cents(3500)));
        assert!(!range.contains(Money::from_cents(3501)));
        assert!(!range.contains(Money::from_cents(1999)));
    }

    #[test]
    fn price_range_rejects_inverted_bounds() {
        assert!(PriceRange::between(Money::from_cents(500), Money::from_cents(100)).is_err());
    }

    #[test]
    fn open_ended_ranges() {
        assert!(PriceRange::at_least(Money::from_cents(100)).contains(Money::from_cents(1_000_000)));
        assert!(PriceRange::at_most(Money::from_cents(100)).contains(Money::ZERO));
        assert!(PriceRange::default().is_unbounded());
    }

    #[test]
    fn presets_cover_quick_filters() {
        let presets = price_presets();
        assert_eq!(presets.len(), 4);
        assert_eq!(presets[0].label, "Under $50");
        assert_eq!(presets[3].range.max, Some(Money::new(dec!(1000))));
        assert_eq!(default_price_range().max, Some(Money::new(dec!(1000))));
    }

    #[test]
    fn from_query_ignores_blank_and_invalid_values() {
        let query = CriteriaQuery {
            search: Some("cam".to_string()),
            category: Some("".to_string()),
            min_price: Some("abc".to_string()),
            max_price: Some("500".to_string()),
            sort_by: Some("price".to_string()),
            sort_order: Some("desc".to_string()),
        };
        let criteria = FilterCriteria::from_query(&query);

        assert_eq!(criteria.search, "cam");
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.price_range.min, None);
        assert_eq!(criteria.price_range.max, Some(Money::new(dec!(500))));
        assert_eq!(criteria.sort_by, SortKey::Price);
        assert_eq!(criteria.direction, SortDirection::Desc);
    }

    #[test]
    fn clear_filters_keeps_sort_order() {
        let mut criteria = FilterCriteria::new()
            .with_search("shirt")
            .with_category("clothing")
            .sorted_by(SortKey::Rating, SortDirection::Desc);
        criteria.clear_filters();

        assert!(criteria.search.is_empty());
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.sort_by, SortKey::Rating);
    }
}
