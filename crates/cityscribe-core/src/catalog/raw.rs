// crates/cityscribe-core/src/catalog/raw.rs
use super::product::{Product, ProductKind};
use super::review::{parse_date, Rating, Review};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

/// Raw review as it comes from JSON.
#[derive(Debug, Deserialize)]
pub struct ReviewRaw {
    pub id: String,
    pub author: String,
    pub date: String,
    #[serde(default)]
    pub comment: String,
    pub rating: RatingRaw,
}

#[derive(Debug, Deserialize)]
pub struct RatingRaw {
    pub service: f64,
    pub price: f64,
    pub value: f64,
    pub quality: f64,
}

/// Raw product as it comes from JSON.
///
/// Anything missing gets the same default [`Product::new`] would pick.
#[derive(Debug, Deserialize)]
pub struct ProductRaw {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub active_size: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub reviews: Vec<ReviewRaw>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub kind: ProductKind,
}

impl From<RatingRaw> for Rating {
    fn from(raw: RatingRaw) -> Self {
        Rating::new(raw.service, raw.price, raw.value, raw.quality)
    }
}

impl TryFrom<ReviewRaw> for Review {
    type Error = crate::error::ScribeError;

    fn try_from(raw: ReviewRaw) -> Result<Self> {
        Review::parse(raw.id, raw.author, &raw.date, raw.comment, raw.rating.into())
    }
}

impl TryFrom<ProductRaw> for Product {
    type Error = crate::error::ScribeError;

    fn try_from(raw: ProductRaw) -> Result<Self> {
        let mut product = Product::new(
            raw.name,
            raw.description,
            raw.price,
            raw.brand,
            raw.quantity,
            raw.images,
        )
        .with_kind(raw.kind);

        if let Some(id) = raw.id {
            product.set_id(id);
        }
        if let Some(date) = raw.date {
            product.set_date(parse_date(&date)?);
        }
        product.set_sizes(&raw.sizes);
        if let Some(active) = raw.active_size {
            product.set_active_size(&active);
        }
        let reviews = raw
            .reviews
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>>>()?;
        product.set_reviews(reviews);

        Ok(product)
    }
}

/// Reads a JSON array of products.
pub fn products_from_reader<R: Read>(reader: R) -> Result<Vec<Product>> {
    let raw: Vec<ProductRaw> = serde_json::from_reader(reader)?;
    debug!(count = raw.len(), "loaded raw products");
    raw.into_iter().map(Product::try_from).collect()
}

pub fn products_from_str(json: &str) -> Result<Vec<Product>> {
    products_from_reader(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScribeError;

    const CATALOG: &str = r#"[
        {
            "id": "245662",
            "name": "Shirt",
            "description": "A blue shirt",
            "price": 15.3,
            "brand": "MyClothesBrand",
            "sizes": ["xl", "l"],
            "active_size": "l",
            "quantity": 5,
            "date": "2023-09-11 10:10:10",
            "images": ["image 1"],
            "kind": { "type": "clothes", "material": "Syntetic", "color": "Blue" },
            "reviews": [
                {
                    "id": "12", "author": "Tom", "date": "2023-05-03 11:03:24",
                    "comment": "Very Good",
                    "rating": { "service": 1, "price": 2, "value": 3, "quality": 40 }
                }
            ]
        },
        { "name": "Cable", "price": 3.0 }
    ]"#;

    #[test]
    fn loads_and_normalises() {
        let products = products_from_str(CATALOG).unwrap();
        assert_eq!(products.len(), 2);

        let shirt = &products[0];
        assert_eq!(shirt.id(), "245662");
        assert_eq!(shirt.sizes(), ["XL", "L"]);
        assert_eq!(shirt.active_size(), Some("L"));
        assert_eq!(shirt.display_date(), "11.09.2023, 10:10:10");
        assert_eq!(shirt.reviews()[0].rating().quality(), 5.0);
        assert!(matches!(shirt.kind(), ProductKind::Clothes { .. }));

        let cable = &products[1];
        assert_eq!(cable.kind(), &ProductKind::General);
        assert_eq!(cable.id().len(), crate::catalog::GENERATED_ID_LEN);
        assert!(cable.reviews().is_empty());
    }

    #[test]
    fn bad_review_date_is_an_error() {
        let json = r#"[{ "name": "x", "price": 1.0, "reviews": [
            { "id": "1", "author": "a", "date": "soon", "rating":
              { "service": 1, "price": 1, "value": 1, "quality": 1 } } ] }]"#;
        assert!(matches!(
            products_from_str(json),
            Err(ScribeError::InvalidDate(_))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            products_from_str("{ not json"),
            Err(ScribeError::Json(_))
        ));
    }
}
