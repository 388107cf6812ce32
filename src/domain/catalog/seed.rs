//! Seed catalog shipped with the storefront.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use super::product::{Category, Product};
use crate::domain::foundation::{Money, ProductId, StarRating, Timestamp, ValidationError};

static SEED_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new("1", "Electronics", 1)
            .with_description("Latest gadgets, devices, and electronic accessories"),
        Category::new("2", "Clothing", 2).with_description("Fashion and apparel for all occasions"),
        Category::new("3", "Furniture", 3)
            .with_description("Home and office furniture for every space"),
        Category::new("4", "Lifestyle", 4)
            .with_description("Products for a better lifestyle and wellness"),
        Category::new("5", "Sports & Outdoors", 5)
            .with_description("Equipment and gear for sports and outdoor activities"),
    ]
});

/// The seed categories, ordered by `sort_order`.
pub fn seed_categories() -> &'static [Category] {
    &SEED_CATEGORIES
}

fn image(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?w=500&h=500&fit=crop",
        photo
    )
}

/// Builds the seed products.
///
/// # Errors
///
/// Returns the first `ValidationError` if any seed record is malformed.
pub fn seed_products() -> Result<Vec<Product>, ValidationError> {
    Ok(vec![
        Product::new(
            ProductId::new("1")?,
            "Wireless Bluetooth Headphones",
            Money::new(dec!(199.99)),
            "electronics",
        )?
        .with_description(
            "Premium wireless headphones with active noise cancellation and 30-hour battery life. \
             Perfect for music lovers and professionals.",
        )
        .with_original_price(Money::new(dec!(249.99)))
        .with_image(image("photo-1505740420928-5e560c06d30e"))
        .with_stock(true, 45)
        .with_rating(StarRating::try_new(4.5)?, 128)
        .with_brand("AudioTech", "AT-WH-001")
        .with_tags(["wireless", "bluetooth", "noise-cancelling", "premium"])
        .with_features([
            "Active Noise Cancellation",
            "30-hour battery life",
            "Quick charge (15 min = 3 hours)",
            "Premium leather ear cups",
            "Built-in microphone",
        ])
        .with_timestamps(
            Timestamp::parse_rfc3339("2024-01-15T10:00:00Z")?,
            Timestamp::parse_rfc3339("2024-01-20T14:30:00Z")?,
        ),
        Product::new(
            ProductId::new("2")?,
            "Smart Fitness Watch",
            Money::new(dec!(299.99)),
            "electronics",
        )?
        .with_description(
            "Advanced fitness tracker with heart rate monitoring, GPS, and 7-day battery life. \
             Track your workouts and health metrics.",
        )
        .with_image(image("photo-1523275335684-37898b6baf30"))
        .with_stock(true, 32)
        .with_rating(StarRating::try_new(4.3)?, 89)
        .with_brand("FitTech", "FT-SW-002")
        .with_tags(["fitness", "smartwatch", "health", "gps"])
        .with_features([
            "Heart rate monitoring",
            "Built-in GPS",
            "7-day battery life",
            "Water resistant (50m)",
            "40+ workout modes",
        ])
        .with_timestamps(
            Timestamp::parse_rfc3339("2024-01-10T08:00:00Z")?,
            Timestamp::parse_rfc3339("2024-01-18T16:45:00Z")?,
        ),
        Product::new(
            ProductId::new("3")?,
            "Organic Cotton T-Shirt",
            Money::new(dec!(29.99)),
            "clothing",
        )?
        .with_description(
            "Comfortable and sustainable organic cotton t-shirt. \
             Perfect for everyday wear with a classic fit.",
        )
        .with_image(image("photo-1521572163474-6864f9cf17ab"))
        .with_stock(true, 120)
        .with_rating(StarRating::try_new(4.7)?, 203)
        .with_brand("EcoWear", "EW-TS-003")
        .with_tags(["organic", "cotton", "sustainable", "casual"])
        .with_features([
            "100% organic cotton",
            "Pre-shrunk fabric",
            "Classic fit",
            "Machine washable",
            "GOTS certified",
        ])
        .with_timestamps(
            Timestamp::parse_rfc3339("2024-01-05T12:00:00Z")?,
            Timestamp::parse_rfc3339("2024-01-15T09:20:00Z")?,
        ),
        Product::new(
            ProductId::new("4")?,
            "Professional Camera Lens",
            Money::new(dec!(449.99)),
            "electronics",
        )?
        .with_description(
            "High-quality 50mm f/1.8 lens for professional photography. \
             Sharp images with beautiful bokeh effect.",
        )
        .with_image(image("photo-1606983340126-99ab4feaa64a"))
        .with_stock(true, 18)
        .with_rating(StarRating::try_new(4.8)?, 67)
        .with_brand("LensMaster", "LM-50-004")
        .with_tags(["camera", "lens", "photography", "professional"])
        .with_features([
            "50mm focal length",
            "f/1.8 maximum aperture",
            "Multi-coated elements",
            "Silent autofocus motor",
            "Weather sealed",
        ])
        .with_timestamps(
            Timestamp::parse_rfc3339("2024-01-08T14:00:00Z")?,
            Timestamp::parse_rfc3339("2024-01-22T11:15:00Z")?,
        ),
        Product::new(
            ProductId::new("5")?,
            "Ergonomic Office Chair",
            Money::new(dec!(399.99)),
            "furniture",
        )?
        .with_description(
            "Premium ergonomic office chair with lumbar support and adjustable height. \
             Perfect for long work sessions.",
        )
        .with_original_price(Money::new(dec!(499.99)))
        .with_image(image("photo-1586023492125-27b2c045efd7"))
        .with_stock(true, 25)
        .with_rating(StarRating::try_new(4.6)?, 156)
        .with_brand("ComfortSeating", "CS-EC-005")
        .with_tags(["office", "chair", "ergonomic", "furniture"])
        .with_features([
            "Adjustable lumbar support",
            "Height adjustable",
            "Breathable mesh back",
            "360-degree swivel",
            "5-year warranty",
        ])
        .with_timestamps(
            Timestamp::parse_rfc3339("2024-01-12T16:00:00Z")?,
            Timestamp::parse_rfc3339("2024-01-19T13:40:00Z")?,
        ),
        Product::new(
            ProductId::new("6")?,
            "Stainless Steel Water Bottle",
            Money::new(dec!(34.99)),
            "lifestyle",
        )?
        .with_description(
            "Insulated stainless steel water bottle that keeps drinks cold for 24 hours \
             or hot for 12 hours.",
        )
        .with_image(image("photo-1602143407151-7111542de6e8"))
        .with_stock(true, 85)
        .with_rating(StarRating::try_new(4.4)?, 94)
        .with_brand("HydroLife", "HL-WB-006")
        .with_tags(["water bottle", "insulated", "stainless steel", "eco-friendly"])
        .with_features([
            "Double-wall insulation",
            "BPA-free",
            "Leak-proof cap",
            "500ml capacity",
            "Dishwasher safe",
        ])
        .with_timestamps(
            Timestamp::parse_rfc3339("2024-01-07T10:30:00Z")?,
            Timestamp::parse_rfc3339("2024-01-16T15:20:00Z")?,
        ),
    ])
}
