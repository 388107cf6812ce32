//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the storefront domain.

mod errors;
mod ids;
mod money;
mod rating;
mod text;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OrderId, ProductId};
pub use money::{Money, CURRENCY_SCALE};
pub use rating::{StarRating, MAX_STARS};
pub use text::{is_valid_email, slugify, truncate_text, DEFAULT_TRUNCATE_LENGTH};
pub use timestamp::Timestamp;
