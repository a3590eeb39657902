// crates/cityscribe-core/src/lib.rs

//! # cityscribe-core
//!
//! - [`city`]: rank the ten most populous cities of a CSV blob and annotate
//!   their names in free text
//! - [`validate`]: email, phone and password checks
//! - [`catalog`]: products, reviews, search and sort

pub mod catalog;
pub mod city;
pub mod error;
pub mod traits;
pub mod validate;

pub mod prelude;

// Re-exports
pub use crate::city::{build_city_annotator, Annotator, Locale, ParseMode, RankingTable, TableCache};
pub use crate::error::{Result, ScribeError};
