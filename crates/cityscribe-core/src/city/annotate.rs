// crates/cityscribe-core/src/city/annotate.rs
use super::ranking::{RankedCity, RankingTable};
use super::record::ParseMode;
use crate::error::ScribeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Wording used for the inserted phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// `Name(1 place in TOP-10 largest cities of Ukraine, 123 people)`
    #[default]
    En,
    /// `Name(1 місце в ТОП-10 найбільших міст України 123 чоловік)`
    Uk,
}

impl Locale {
    pub fn phrase(self, city: &RankedCity) -> String {
        match self {
            Locale::En => format!(
                "{}({} place in TOP-10 largest cities of Ukraine, {} people)",
                city.name, city.rating, city.population
            ),
            Locale::Uk => format!(
                "{}({} місце в ТОП-10 найбільших міст України {} чоловік)",
                city.name, city.rating, city.population
            ),
        }
    }
}

impl FromStr for Locale {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "uk" | "ua" => Ok(Locale::Uk),
            other => Err(ScribeError::UnknownLocale(other.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Locale::En => "en",
            Locale::Uk => "uk",
        })
    }
}

/// Knobs for building an [`Annotator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotatorConfig {
    pub locale: Locale,
    pub mode: ParseMode,
}

impl AnnotatorConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Rewrites city names in free text using a shared [`RankingTable`].
#[derive(Debug, Clone)]
pub struct Annotator {
    table: Arc<RankingTable>,
    locale: Locale,
}

impl Annotator {
    pub fn new(table: Arc<RankingTable>, locale: Locale) -> Self {
        Annotator { table, locale }
    }

    pub fn table(&self) -> &RankingTable {
        &self.table
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Replaces every occurrence of every ranked name, in rank order.
    ///
    /// Matching is plain substring matching: a ranked `Київ` also rewrites
    /// the start of `Київський`. Each replacement runs over the output of the
    /// previous one. Rows whose name is empty are skipped.
    ///
    /// ```rust
    /// use cityscribe_core::city::{Annotator, Locale, ParseMode, RankingTable};
    /// use std::sync::Arc;
    ///
    /// let table = RankingTable::from_csv("0,0,Київ,2952301", ParseMode::Lenient).unwrap();
    /// let annotator = Annotator::new(Arc::new(table), Locale::En);
    /// assert_eq!(
    ///     annotator.annotate("Київ!"),
    ///     "Київ(1 place in TOP-10 largest cities of Ukraine, 2952301 people)!"
    /// );
    /// ```
    pub fn annotate(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for city in self.table.iter().filter(|c| !c.name.is_empty()) {
            if out.contains(city.name.as_str()) {
                out = out.replace(city.name.as_str(), &self.locale.phrase(city));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator(csv: &str, locale: Locale) -> Annotator {
        let table = RankingTable::from_csv(csv, ParseMode::Lenient).unwrap();
        Annotator::new(Arc::new(table), locale)
    }

    #[test]
    fn replaces_every_occurrence() {
        let a = annotator("0,0,Lviv,717273", Locale::En);
        let phrase = "Lviv(1 place in TOP-10 largest cities of Ukraine, 717273 people)";
        assert_eq!(a.annotate("Lviv and Lviv"), format!("{phrase} and {phrase}"));
    }

    #[test]
    fn replacement_is_not_word_bounded() {
        let a = annotator("0,0,Київ,2952301", Locale::En);
        let out = a.annotate("Київський");
        assert_eq!(
            out,
            "Київ(1 place in TOP-10 largest cities of Ukraine, 2952301 people)ський"
        );
    }

    #[test]
    fn ukrainian_wording() {
        let a = annotator("0,0,Одеса,1015826", Locale::Uk);
        assert_eq!(
            a.annotate("Одеса"),
            "Одеса(1 місце в ТОП-10 найбільших міст України 1015826 чоловік)"
        );
    }

    #[test]
    fn unknown_text_is_untouched() {
        let a = annotator("0,0,Lviv,1", Locale::En);
        assert_eq!(a.annotate("Енергодар"), "Енергодар");
        assert_eq!(a.annotate(""), "");
    }

    #[test]
    fn empty_names_are_never_keys() {
        let a = annotator("1,2,,500\n0,0,Rivne,243934", Locale::En);
        assert_eq!(a.table().len(), 2);
        assert_eq!(
            a.annotate("ab"),
            "ab",
            "an empty key must not be spliced between characters"
        );
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ua".parse::<Locale>().unwrap(), Locale::Uk);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Uk.to_string(), "uk");
    }
}
