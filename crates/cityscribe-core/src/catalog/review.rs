// crates/cityscribe-core/src/catalog/review.rs
use crate::error::{Result, ScribeError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Lowest and highest score a rating component may hold.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// Layout used when showing dates to users (`uk-UA` style).
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses `2023-09-11 10:10:10`, `2023-09-11T10:10:10` or a bare
/// `2023-09-11` (midnight).
pub fn parse_date(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ScribeError::InvalidDate(raw.to_owned()))
}

pub fn display_date(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return RATING_MIN;
    }
    score.clamp(RATING_MIN, RATING_MAX)
}

/// Four review scores, each kept inside `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rating {
    service: f64,
    price: f64,
    value: f64,
    quality: f64,
}

impl Rating {
    /// Out-of-range scores are pulled to the nearest bound.
    pub fn new(service: f64, price: f64, value: f64, quality: f64) -> Self {
        Rating {
            service: clamp_score(service),
            price: clamp_score(price),
            value: clamp_score(value),
            quality: clamp_score(quality),
        }
    }

    pub fn service(&self) -> f64 {
        self.service
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn average(&self) -> f64 {
        (self.service + self.price + self.value + self.quality) / 4.0
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    id: String,
    author: String,
    date: NaiveDateTime,
    comment: String,
    rating: Rating,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDateTime,
        comment: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Review {
            id: id.into(),
            author: author.into(),
            date,
            comment: comment.into(),
            rating,
        }
    }

    /// Same as [`Review::new`] but takes the date as text, see [`parse_date`].
    ///
    /// ```rust
    /// use cityscribe_core::catalog::{Rating, Review};
    ///
    /// let review = Review::parse("52", "Anna", "2023-09-11 10:10:10", "Any comment",
    ///     Rating::new(5.0, 2.0, 5.0, 7.0)).unwrap();
    /// assert_eq!(review.rating().quality(), 5.0);
    /// assert_eq!(review.display_date(), "11.09.2023, 10:10:10");
    /// ```
    pub fn parse(
        id: impl Into<String>,
        author: impl Into<String>,
        date: &str,
        comment: impl Into<String>,
        rating: Rating,
    ) -> Result<Self> {
        Ok(Self::new(id, author, parse_date(date)?, comment, rating))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.date = date;
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Replaces all four scores; each is clamped like in [`Rating::new`].
    pub fn set_rating(&mut self, service: f64, price: f64, value: f64, quality: f64) {
        self.rating = Rating::new(service, price, value, quality);
    }
}
