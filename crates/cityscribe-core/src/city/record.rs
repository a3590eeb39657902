// crates/cityscribe-core/src/city/record.rs
use crate::error::{Result, ScribeError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Marker that starts a trailing comment on a CSV line.
pub const COMMENT_MARKER: char = '#';

/// How strictly [`parse_cities`] treats malformed rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    /// Drop anything that fails the validity check. Never errors.
    #[default]
    Lenient,
    /// Skip blank and comment-only lines, reject every other incomplete row.
    Strict,
}

/// One line of city CSV: `x,y,name,population`.
///
/// Only `x` is always present (splitting an empty line still yields one
/// empty field); the remaining columns are `None` when the line ran out of
/// commas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub x: String,
    pub y: Option<String>,
    pub name: Option<String>,
    pub population: Option<String>,
}

impl CityRecord {
    /// Parses a single line. Everything from the first `#` on is discarded
    /// before the line is split on `,`; columns past the fourth are ignored.
    ///
    /// ```rust
    /// use cityscribe_core::city::CityRecord;
    ///
    /// let with_note = CityRecord::parse_line("1,2,CityA,100,#note");
    /// assert_eq!(with_note, CityRecord::parse_line("1,2,CityA,100"));
    /// assert_eq!(with_note.name.as_deref(), Some("CityA"));
    /// ```
    pub fn parse_line(line: &str) -> Self {
        let line = strip_comment(line);
        let mut fields = line.split(',').map(str::to_owned);

        CityRecord {
            x: fields.next().unwrap_or_default(),
            y: fields.next(),
            name: fields.next(),
            population: fields.next(),
        }
    }

    /// `x` must be non-empty and the other three columns must exist.
    ///
    /// Empty `y`, `name` or `population` still pass: only presence is
    /// checked for those columns.
    pub fn is_valid(&self) -> bool {
        !self.x.is_empty() && self.y.is_some() && self.name.is_some() && self.population.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn population(&self) -> &str {
        self.population.as_deref().unwrap_or("")
    }

    /// Numeric population used for ranking.
    ///
    /// A blank population counts as `0`. Besides plain decimals, unsigned
    /// `0x`/`0o`/`0b` integers and the word `Infinity` are numbers; anything
    /// else (including `inf` and `nan`) yields `None` and ranks below every
    /// number.
    pub fn population_value(&self) -> Option<f64> {
        parse_population(self.population())
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

pub(crate) fn parse_population(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(value) = parse_radix_integer(trimmed) {
        return Some(value);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        let sign = if trimmed.starts_with('-') { -1.0 } else { 1.0 };
        return (trimmed.len() - unsigned.len() <= 1).then_some(sign * f64::INFINITY);
    }
    // f64's parser also takes `inf`, `infinity` and `nan` in any case
    if unsigned.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

// `0x1F`, `0o17`, `0b101`; no sign, at least one digit.
fn parse_radix_integer(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Parses a CSV blob into the records that survive the validity filter.
///
/// In [`ParseMode::Lenient`] this never returns an error (see
/// [`parse_cities_lenient`]). [`ParseMode::Strict`] returns
/// [`ScribeError::MalformedRow`] for the first non-blank, non-comment line
/// that lacks a field or carries a non-numeric population.
pub fn parse_cities(text: &str, mode: ParseMode) -> Result<Vec<CityRecord>> {
    match mode {
        ParseMode::Lenient => Ok(parse_cities_lenient(text)),
        ParseMode::Strict => parse_cities_strict(text),
    }
}

/// Keeps every row that passes [`CityRecord::is_valid`] and silently drops
/// the rest.
pub fn parse_cities_lenient(text: &str) -> Vec<CityRecord> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let record = CityRecord::parse_line(line);
            if record.is_valid() {
                Some(record)
            } else {
                debug!(line = idx + 1, "dropping incomplete city row");
                None
            }
        })
        .collect()
}

fn parse_cities_strict(text: &str) -> Result<Vec<CityRecord>> {
    let mut out = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        if strip_comment(line).trim().is_empty() {
            continue;
        }
        let record = CityRecord::parse_line(line);
        check_strict(&record).map_err(|reason| ScribeError::MalformedRow {
            line: idx + 1,
            reason,
        })?;
        out.push(record);
    }
    Ok(out)
}

fn check_strict(record: &CityRecord) -> std::result::Result<(), String> {
    let columns = [
        ("x", Some(record.x.as_str())),
        ("y", record.y.as_deref()),
        ("name", record.name.as_deref()),
        ("population", record.population.as_deref()),
    ];
    for (column, value) in columns {
        match value {
            None => return Err(format!("missing {column}")),
            Some(v) if v.trim().is_empty() => return Err(format!("empty {column}")),
            Some(_) => {}
        }
    }
    if record.population().trim().parse::<f64>().map_or(true, f64::is_nan) {
        return Err(format!("population {:?} is not a number", record.population()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_become_none() {
        let r = CityRecord::parse_line("1,2");
        assert_eq!(r.x, "1");
        assert_eq!(r.y.as_deref(), Some("2"));
        assert!(r.name.is_none());
        assert!(r.population.is_none());
        assert!(!r.is_valid());
    }

    #[test]
    fn comment_only_and_blank_lines_are_dropped() {
        let rows = parse_cities("\n#\n# 1,2,A,3\n", ParseMode::Lenient).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn comment_inside_name_truncates_row() {
        let r = CityRecord::parse_line("46.49,36.58,#Бердянськ,121692,");
        assert_eq!(r.name.as_deref(), Some(""));
        assert!(r.population.is_none());
        assert!(!r.is_valid());
    }

    #[test]
    fn lenient_keeps_empty_name_and_population() {
        let rows = parse_cities("1,2,,", ParseMode::Lenient).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "");
        assert_eq!(rows[0].population_value(), Some(0.0));
    }

    #[test]
    fn strict_reports_line_number() {
        let err = parse_cities("1,2,A,10\n\n#skip\n1,2,,5", ParseMode::Strict).unwrap_err();
        match err {
            ScribeError::MalformedRow { line, reason } => {
                assert_eq!(line, 4);
                assert_eq!(reason, "empty name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_rejects_non_numeric_population() {
        let err = parse_cities("1,2,A,many", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ScribeError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn strict_accepts_clean_input() {
        let rows = parse_cities("1,2,A,10,# note\n#\n3,4,B,20", ParseMode::Strict).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn non_numeric_population_has_no_value() {
        assert_eq!(parse_population("abc"), None);
        assert_eq!(parse_population("NaN"), None);
        assert_eq!(parse_population(" 42 "), Some(42.0));
    }

    #[test]
    fn population_accepts_prefixed_integers() {
        assert_eq!(parse_population("0x10"), Some(16.0));
        assert_eq!(parse_population("0X1f"), Some(31.0));
        assert_eq!(parse_population("0o17"), Some(15.0));
        assert_eq!(parse_population("0b101"), Some(5.0));
        assert_eq!(parse_population("0x"), None);
        assert_eq!(parse_population("0x1g"), None);
        assert_eq!(parse_population("-0x10"), None);
    }

    #[test]
    fn only_the_word_infinity_is_infinite() {
        assert_eq!(parse_population("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_population("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_population("inf"), None);
        assert_eq!(parse_population("infinity"), None);
        assert_eq!(parse_population("+-Infinity"), None);
        assert_eq!(parse_population("1e3"), Some(1000.0));
        assert_eq!(parse_population(".5"), Some(0.5));
    }
}
