//! cityscribe prelude: bring common types and traits into scope for demos.

pub use crate::catalog::{
    search_products, sort_products, sort_products_by, Product, ProductKind, Rating, Review,
    SortRule,
};
pub use crate::city::{
    build_city_annotator, Annotator, AnnotatorConfig, Locale, ParseMode, RankedCity,
    RankingTable, TableCache,
};
pub use crate::error::{Result, ScribeError};
pub use crate::traits::NameMatch;
pub use crate::validate::{is_valid_email, is_valid_password, is_valid_phone, Field};
