// crates/cityscribe-core/src/validate.rs

//! Regex-backed checks for user-entered email addresses, Ukrainian phone
//! numbers and passwords.
//!
//! Every check first rejects inputs that are too short and then matches the
//! whole string against an anchored pattern. Character classes are ASCII
//! only.

use crate::error::ScribeError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

pub const MIN_EMAIL_LEN: usize = 6;
pub const MIN_PHONE_LEN: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)^[A-Za-z0-9_|][-a-z0-9.+]{1,19}@[-_?=/+*'&%$!.A-Za-z0-9_]{1,15}\.[A-Za-z0-9_]{1,5}$",
    )
    .expect("email pattern compiles")
});

// optional +38 prefix, 3-digit operator code (parentheses optional), 7 digits;
// dashes and whitespace may appear anywhere between them
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-|\s)*(\+38)?(-|\s)*\(?((-|\s)*[0-9]){3}\)?((-|\s)*[0-9]){7}(-|\s)*$")
        .expect("phone pattern compiles")
});

static PASSWORD_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("password pattern compiles"));

/// `true` when `email` has a short local part, a short domain and a 1-5
/// character top-level label.
///
/// ```rust
/// use cityscribe_core::validate::is_valid_email;
///
/// assert!(is_valid_email("user.name@example.com"));
/// assert!(!is_valid_email("a@b.c"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() >= MIN_EMAIL_LEN && EMAIL.is_match(email)
}

/// `true` for a 10-digit number with an optional `+38` country prefix.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() >= MIN_PHONE_LEN && PHONE.is_match(phone)
}

/// `true` for a word-character password with at least one lowercase letter,
/// one uppercase letter and one digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && PASSWORD_CHARSET.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// The kinds of input that can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Phone,
    Password,
}

impl Field {
    pub fn validate(self, value: &str) -> bool {
        match self {
            Field::Email => is_valid_email(value),
            Field::Phone => is_valid_phone(value),
            Field::Password => is_valid_password(value),
        }
    }
}

impl FromStr for Field {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "password" => Ok(Field::Password),
            other => Err(ScribeError::UnknownField(other.to_owned())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
        })
    }
}
