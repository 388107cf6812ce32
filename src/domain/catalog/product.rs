//! Product and category entities.
//!
//! Products are read-only for the lifetime of the process. They are built
//! once (seed data or a catalog adapter) and then only queried.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ProductId, StarRating, Timestamp, ValidationError};

/// Maximum length for product names.
pub const MAX_NAME_LENGTH: usize = 200;

/// A purchasable catalog product.
///
/// # Invariants
///
/// - `name` is non-empty and at most 200 characters
/// - `price` is not negative
/// - `category` is a category slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    original_price: Option<Money>,
    category: String,
    image: String,
    in_stock: bool,
    stock_quantity: u32,
    rating: Option<StarRating>,
    review_count: u32,
    brand: Option<String>,
    sku: Option<String>,
    tags: Vec<String>,
    features: Vec<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl Product {
    /// Create a product with the required fields.
    ///
    /// The product starts in stock with no rating; use the `with_*`
    /// methods to fill in the rest.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name or category is blank
    /// - `OutOfRange` if the name is too long
    /// - `InvalidFormat` if the price is negative or has sub-cent digits
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LENGTH as i64,
                name.chars().count() as i64,
            ));
        }
        if category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if price.is_negative() {
            return Err(ValidationError::invalid_format("price", "must not be negative"));
        }
        if !price.is_whole_cents() {
            return Err(ValidationError::invalid_format(
                "price",
                format!("{} has more than two decimal places", price.amount()),
            ));
        }

        Ok(Self {
            id,
            name,
            description: String::new(),
            price,
            original_price: None,
            category,
            image: String::new(),
            in_stock: true,
            stock_quantity: 0,
            rating: None,
            review_count: 0,
            brand: None,
            sku: None,
            tags: Vec::new(),
            features: Vec::new(),
            created_at: None,
            updated_at: None,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builders
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the pre-discount price, rounded to cents.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price.round_to_cents());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets stock; a zero quantity also marks the product out of stock.
    pub fn with_stock(mut self, in_stock: bool, stock_quantity: u32) -> Self {
        self.in_stock = in_stock && stock_quantity > 0;
        self.stock_quantity = stock_quantity;
        self
    }

    pub fn with_rating(mut self, rating: StarRating, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = review_count;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>, sku: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self.sku = Some(sku.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timestamps(mut self, created_at: Timestamp, updated_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn original_price(&self) -> Option<Money> {
        self.original_price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    pub fn rating(&self) -> Option<StarRating> {
        self.rating
    }

    pub fn review_count(&self) -> u32 {
        self.review_count
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the product can be added to a cart right now.
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock_quantity > 0
    }

    /// Whole-percent discount against the original price, if any.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount();
        let price = self.price.amount();
        if original <= price || original.is_zero() {
            return None;
        }
        ((original - price) / original * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
    }

    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A product category. Products reference categories by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_active: bool,
    pub sort_order: u32,
}

impl Category {
    /// Create an active category; the slug is derived from the name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, sort_order: u32) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: crate::domain::foundation::slugify(&name),
            name,
            description: String::new(),
            is_active: true,
            sort_order,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
