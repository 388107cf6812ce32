//! Catalog browsing configuration

use rust_decimal_macros::dec;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::catalog::PriceRange;
use crate::domain::foundation::Money;

/// Defaults for the product listing filters
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Lower bound of the default price slider
    #[serde(default = "default_min_price")]
    pub default_min_price: Money,

    /// Upper bound of the default price slider
    #[serde(default = "default_max_price")]
    pub default_max_price: Money,
}

impl CatalogConfig {
    /// Default price range for a fresh filter panel
    pub fn default_price_range(&self) -> PriceRange {
        PriceRange {
            min: Some(self.default_min_price),
            max: Some(self.default_max_price),
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_min_price.is_negative() || self.default_max_price.is_negative() {
            return Err(ValidationError::NegativePrice);
        }
        if self.default_min_price > self.default_max_price {
            return Err(ValidationError::InvalidPriceRange);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_min_price: default_min_price(),
            default_max_price: default_max_price(),
        }
    }
}

fn default_min_price() -> Money {
    Money::ZERO
}

fn default_max_price() -> Money {
    Money::new(dec!(1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::default_price_range;

    #[test]
    fn test_catalog_config_defaults_match_listing_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_price_range(), default_price_range());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = CatalogConfig {
            default_min_price: Money::new(dec!(500)),
            default_max_price: Money::new(dec!(100)),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPriceRange));
    }

    #[test]
    fn test_negative_price_rejected() {
        let config = CatalogConfig {
            default_min_price: Money::new(dec!(-1)),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NegativePrice));
    }
}
