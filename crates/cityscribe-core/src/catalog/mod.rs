// crates/cityscribe-core/src/catalog/mod.rs

//! # Product Catalog
//!
//! Products, their reviews, and the search/sort helpers that work on a
//! product list. Product variants are a [`ProductKind`] value instead of a
//! type hierarchy.

pub mod product;
pub mod query;
#[cfg(feature = "json")]
pub mod raw;
pub mod review;

pub use product::{generate_id, Product, ProductKind, GENERATED_ID_LEN};
pub use query::{search_products, sort_products, sort_products_by, SortRule};
#[cfg(feature = "json")]
pub use raw::{products_from_reader, products_from_str, ProductRaw, ReviewRaw};
pub use review::{display_date, parse_date, Rating, Review, RATING_MAX, RATING_MIN};
