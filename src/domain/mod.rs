//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, money, ratings, timestamps, errors)
//! - `catalog` - Products, categories, filter criteria and the filter/sort pipeline
//! - `cart` - Cart state, derived totals and the persisted cart layout
//! - `checkout` - Checkout form validation and order confirmation

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod foundation;
