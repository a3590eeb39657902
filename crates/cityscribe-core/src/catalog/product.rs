// crates/cityscribe-core/src/catalog/product.rs
use super::review::{display_date, Review};
use crate::traits::NameMatch;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of generated product IDs.
pub const GENERATED_ID_LEN: usize = 8;

/// A fresh random product ID: 8 lowercase hex characters.
pub fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(GENERATED_ID_LEN);
    id
}

/// What sort of product this is, with the fields only that sort carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    #[default]
    General,
    Clothes {
        material: String,
        color: String,
    },
    Electronics {
        warranty: String,
        power: String,
    },
}

impl ProductKind {
    /// `(label, value)` pairs for the kind-specific fields.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        match self {
            ProductKind::General => Vec::new(),
            ProductKind::Clothes { material, color } => {
                vec![("material", material.as_str()), ("color", color.as_str())]
            }
            ProductKind::Electronics { warranty, power } => {
                vec![("warranty", warranty.as_str()), ("power", power.as_str())]
            }
        }
    }
}

/// A catalog product with its sizes, images and reviews.
///
/// Sizes are always stored upper-cased.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    description: String,
    price: f64,
    brand: String,
    sizes: Vec<String>,
    active_size: Option<String>,
    quantity: u32,
    date: NaiveDateTime,
    reviews: Vec<Review>,
    images: Vec<String>,
    kind: ProductKind,
}

impl Product {
    /// A [`ProductKind::General`] product with a random ID, no sizes and the
    /// current local time as its date.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
        quantity: u32,
        images: Vec<String>,
    ) -> Self {
        Product {
            id: generate_id(),
            name: name.into(),
            description: description.into(),
            price,
            brand: brand.into(),
            sizes: Vec::new(),
            active_size: None,
            quantity,
            date: Local::now().naive_local(),
            reviews: Vec::new(),
            images,
            kind: ProductKind::General,
        }
    }

    pub fn with_kind(mut self, kind: ProductKind) -> Self {
        self.kind = kind;
        self
    }

    /// Makes `size` both the only size and the active one.
    pub fn with_active_size(mut self, size: &str) -> Self {
        let size = size.to_uppercase();
        self.sizes = vec![size.clone()];
        self.active_size = Some(size);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    // ----- accessors -----

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn active_size(&self) -> Option<&str> {
        self.active_size.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Date as `dd.mm.yyyy, HH:MM:SS`.
    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    // ----- setters -----

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn set_sizes<S: AsRef<str>>(&mut self, sizes: &[S]) {
        self.sizes = sizes.iter().map(|s| s.as_ref().to_uppercase()).collect();
    }

    /// Sets the active size without touching the size list.
    pub fn set_active_size(&mut self, size: &str) {
        self.active_size = Some(size.to_uppercase());
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.date = date;
    }

    pub fn set_reviews(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
    }

    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
    }

    pub fn set_kind(&mut self, kind: ProductKind) {
        self.kind = kind;
    }

    // ----- sizes, images, reviews -----

    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn add_size(&mut self, size: &str) {
        self.sizes.push(size.to_uppercase());
    }

    /// Removes the first matching size (case-insensitive).
    ///
    /// If that size was active and others remain, the first remaining size
    /// becomes active. Unknown sizes are ignored.
    pub fn delete_size(&mut self, size: &str) {
        let size = size.to_uppercase();
        let Some(pos) = self.sizes.iter().position(|s| *s == size) else {
            return;
        };
        self.sizes.remove(pos);

        if self.active_size.as_deref() == Some(size.as_str()) {
            if let Some(first) = self.sizes.first() {
                self.active_size = Some(first.clone());
            }
        }
    }

    pub fn review_by_id(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id() == id)
    }

    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Removes the first review with this ID, if any.
    pub fn delete_review(&mut self, id: &str) {
        if let Some(pos) = self.reviews.iter().position(|r| r.id() == id) {
            self.reviews.remove(pos);
        }
    }

    /// Mean of the per-review averages; `None` without reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: f64 = self.reviews.iter().map(|r| r.rating().average()).sum();
        Some(sum / self.reviews.len() as f64)
    }

    /// Cost of `quantity` units, e.g. `$45.90`.
    pub fn price_for_quantity(&self, quantity: u32) -> String {
        format!("${:.2}", f64::from(quantity) * self.price)
    }

    /// One `property:\tvalue` line per field, kind-specific fields last.
    pub fn full_information(&self) -> String {
        let review_ids: Vec<&str> = self.reviews.iter().map(Review::id).collect();
        let mut lines = vec![
            format!("id:\t{}", self.id),
            format!("name:\t{}", self.name),
            format!("description:\t{}", self.description),
            format!("price:\t{}", self.price),
            format!("brand:\t{}", self.brand),
            format!("sizes:\t{}", self.sizes.join(",")),
            format!("active_size:\t{}", self.active_size.as_deref().unwrap_or("")),
            format!("quantity:\t{}", self.quantity),
            format!("date:\t{}", self.display_date()),
            format!("reviews:\t{}", review_ids.join(",")),
            format!("images:\t{}", self.images.join(",")),
        ];
        lines.extend(
            self.kind
                .properties()
                .into_iter()
                .map(|(label, value)| format!("{label}:\t{value}")),
        );
        lines.join("\n")
    }
}

impl NameMatch for Product {
    fn name_str(&self) -> &str {
        &self.name
    }
}
