//! Storefront - catalog browsing, a persisted shopping cart and checkout
//!
//! The crate is laid out hexagonally: `domain` holds the pure cart, catalog
//! and checkout rules; `ports` the traits for storage, catalog and payment;
//! `adapters` their implementations; `application` the cart store, listing
//! query and checkout service that tie them together.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
