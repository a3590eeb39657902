// crates/cityscribe-core/src/city/mod.rs

//! # City Ranking & Annotation
//!
//! Turns a comment-laden `x,y,name,population` CSV blob into a top-10
//! [`RankingTable`] and rewrites city names in free text with a short
//! "N place in TOP-10" phrase.
//!
//! - [`record`]: line parsing, comment stripping, row filtering
//! - [`ranking`]: stable population sort and rank assignment
//! - [`annotate`]: literal substring replacement
//! - [`cache`]: per-text memoization and [`build_city_annotator`]

pub mod annotate;
pub mod cache;
pub mod ranking;
pub mod record;

pub use annotate::{Annotator, AnnotatorConfig, Locale};
pub use cache::{build_city_annotator, default_cache, TableCache};
pub use ranking::{RankedCity, RankingTable, TOP_N};
pub use record::{parse_cities, parse_cities_lenient, CityRecord, ParseMode, COMMENT_MARKER};
