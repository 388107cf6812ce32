//! Storefront demo binary.
//!
//! Wires the configured adapters together, lists the catalog, fills a
//! cart and places an order against the simulated payment gateway. The
//! cart survives between runs when the file backend is used.

use std::sync::Arc;

use storefront::adapters::{
    FileCartStorage, InMemoryCartStorage, InMemoryCatalog, SimulatedPaymentProvider,
};
use storefront::application::{CartStore, CheckoutService, ListProductsHandler};
use storefront::config::{AppConfig, StorageBackend};
use storefront::domain::catalog::{FilterCriteria, SortDirection, SortKey};
use storefront::domain::checkout::{CheckoutField, CheckoutForm};
use storefront::domain::foundation::ProductId;
use storefront::ports::{CartStorage, ProductCatalog};
use storefront::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    telemetry::init_tracing(&config.logging)?;

    let catalog: Arc<dyn ProductCatalog> = Arc::new(InMemoryCatalog::seeded()?);
    let storage: Arc<dyn CartStorage> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileCartStorage::new(&config.storage.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryCartStorage::new()),
    };

    let listing = ListProductsHandler::new(
        Arc::clone(&catalog),
        config.catalog.default_price_range(),
    );
    let criteria = FilterCriteria::new()
        .with_price_range(listing.default_price_range())
        .sorted_by(SortKey::Price, SortDirection::Asc);
    for product in listing.handle(&criteria) {
        println!("{:>4}  {:<32} {}", product.id(), product.name(), product.price());
    }

    let mut cart = CartStore::open_with_key(catalog, storage, config.storage.cart_key.clone());
    if cart.is_empty() {
        cart.add(&ProductId::new("3")?, 2)?;
        cart.add_one(&ProductId::new("6")?)?;
    }
    println!("Cart: {} items, total {}", cart.item_count(), cart.total());

    let checkout = CheckoutService::new(
        Arc::new(SimulatedPaymentProvider::new(config.checkout.payment_delay())),
        config.checkout.currency.clone(),
    );
    let form = CheckoutForm::new()
        .with(CheckoutField::Email, "shopper@example.com")
        .with(CheckoutField::FirstName, "Sam")
        .with(CheckoutField::LastName, "Shopper")
        .with(CheckoutField::Address, "1 Market Street")
        .with(CheckoutField::City, "San Francisco")
        .with(CheckoutField::State, "CA")
        .with(CheckoutField::ZipCode, "94105")
        .with(CheckoutField::Country, &config.checkout.default_country)
        .with(CheckoutField::CardNumber, "4242424242424242")
        .with(CheckoutField::ExpiryDate, "1230")
        .with(CheckoutField::Cvv, "123")
        .with(CheckoutField::NameOnCard, "Sam Shopper");

    let order = checkout.place_order(&mut cart, &form).await?;
    println!(
        "Order {} placed: {} items, {} (transaction {})",
        order.order_id(),
        order.item_count(),
        order.total().format(checkout.currency()),
        order.transaction_id()
    );

    Ok(())
}
