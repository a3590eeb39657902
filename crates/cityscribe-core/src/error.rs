// crates/cityscribe-core/src/error.rs
use thiserror::Error;

/// Errors produced by `cityscribe-core`.
///
/// Lenient CSV parsing and text annotation never fail; these variants come
/// from the opt-in strict parser, date handling, catalog loading and the
/// string-to-enum conversions used by the CLI.
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV row rejected by [`ParseMode::Strict`](crate::city::ParseMode::Strict).
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown field: {0} (expected email, phone or password)")]
    UnknownField(String),

    #[error("unknown locale: {0} (expected en or uk)")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, ScribeError>;
