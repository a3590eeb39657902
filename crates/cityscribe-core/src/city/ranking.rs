// crates/cityscribe-core/src/city/ranking.rs
use super::record::{parse_cities, parse_cities_lenient, CityRecord, ParseMode};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Number of cities kept in a [`RankingTable`].
pub const TOP_N: usize = 10;

/// A city that made it into the top list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCity {
    pub name: String,
    /// Population exactly as written in the source row.
    pub population: String,
    /// 1-based position, largest city first.
    pub rating: usize,
}

/// Name → `{population, rating}` for the largest cities, kept in rank order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingTable {
    entries: Vec<RankedCity>,
}

impl RankingTable {
    /// Ranks already-filtered records.
    ///
    /// Records are ordered by numeric population, descending. The sort is
    /// stable, so equal populations keep their input order. Only the
    /// [`TOP_N`] largest records are considered. When a name repeats among
    /// them, its first (highest-ranked) occurrence is kept and the later ones
    /// are dropped, so the table can hold fewer than [`TOP_N`] cities.
    /// Ratings always run `1..=len`.
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        let mut keyed: Vec<(Option<f64>, CityRecord)> = records
            .into_iter()
            .map(|r| (r.population_value(), r))
            .collect();
        keyed.sort_by(|a, b| by_population_desc(a.0, b.0));

        let mut seen = HashSet::new();
        let entries = keyed
            .into_iter()
            .take(TOP_N)
            .filter(|(_, r)| {
                let fresh = seen.insert(r.name().to_owned());
                if !fresh {
                    debug!(name = r.name(), "skipping duplicate city name");
                }
                fresh
            })
            .enumerate()
            .map(|(idx, (_, r))| RankedCity {
                name: r.name().to_owned(),
                population: r.population().to_owned(),
                rating: idx + 1,
            })
            .collect();

        RankingTable { entries }
    }

    /// Parses and ranks a CSV blob in one go.
    ///
    /// ```rust
    /// use cityscribe_core::city::{ParseMode, RankingTable};
    ///
    /// let csv = "0,0,Small,10\n0,0,Big,1000\n0,0,Mid,100";
    /// let table = RankingTable::from_csv(csv, ParseMode::Lenient).unwrap();
    /// let order: Vec<&str> = table.iter().map(|c| c.name.as_str()).collect();
    /// assert_eq!(order, ["Big", "Mid", "Small"]);
    /// assert_eq!(table.get("Small").map(|c| c.rating), Some(3));
    /// ```
    pub fn from_csv(text: &str, mode: ParseMode) -> Result<Self> {
        Ok(Self::from_records(parse_cities(text, mode)?))
    }

    /// Infallible variant of [`from_csv`](Self::from_csv) for lenient input.
    pub fn from_csv_lenient(text: &str) -> Self {
        Self::from_records(parse_cities_lenient(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a city up by its exact name.
    pub fn get(&self, name: &str) -> Option<&RankedCity> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedCity> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RankedCity] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a RankingTable {
    type Item = &'a RankedCity;
    type IntoIter = std::slice::Iter<'a, RankedCity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Numbers first (largest to smallest), then rows whose population is not a number.
fn by_population_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(csv: &str) -> RankingTable {
        RankingTable::from_csv(csv, ParseMode::Lenient).unwrap()
    }

    #[test]
    fn keeps_only_top_ten() {
        let csv: String = (1..=15)
            .map(|i| format!("0,0,City{i},{}\n", i * 100))
            .collect();
        let t = table(&csv);
        assert_eq!(t.len(), TOP_N);
        assert_eq!(t.entries()[0].name, "City15");
        assert_eq!(t.entries()[9].name, "City6");
        assert!(t.get("City5").is_none());
    }

    #[test]
    fn ratings_follow_position() {
        let t = table("0,0,A,5\n0,0,B,50\n0,0,C,500");
        let ratings: Vec<usize> = t.iter().map(|c| c.rating).collect();
        assert_eq!(ratings, [1, 2, 3]);
        assert_eq!(t.get("C").unwrap().rating, 1);
    }

    #[test]
    fn equal_populations_keep_input_order() {
        let t = table("0,0,First,100\n0,0,Top,900\n0,0,Second,100\n0,0,Third,100");
        let order: Vec<&str> = t.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, ["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn comparison_is_numeric_not_lexical() {
        let t = table("0,0,Nine,9\n0,0,Eighty,80");
        assert_eq!(t.get("Eighty").unwrap().rating, 1);
    }

    #[test]
    fn non_numeric_population_ranks_last() {
        let t = table("0,0,Odd,lots\n0,0,Tiny,1\n0,0,Blank,");
        let order: Vec<&str> = t.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, ["Tiny", "Blank", "Odd"]);
    }

    #[test]
    fn duplicate_names_keep_best_rank() {
        let t = table("0,0,Twin,10\n0,0,Twin,1000\n0,0,Solo,100");
        assert_eq!(t.len(), 2);
        let twin = t.get("Twin").unwrap();
        assert_eq!(twin.rating, 1);
        assert_eq!(twin.population, "1000");
        assert_eq!(t.get("Solo").unwrap().rating, 2);
    }

    #[test]
    fn hex_and_infinity_rank_like_numbers() {
        let t = table("0,0,Inf,inf\n0,0,Infinity,Infinity\n0,0,Ten,10\n0,0,Hex,0x10");
        let order: Vec<&str> = t.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, ["Infinity", "Hex", "Ten", "Inf"]);
    }

    #[test]
    fn duplicates_do_not_pull_in_smaller_cities() {
        let mut csv: String = (0..TOP_N)
            .map(|i| format!("0,0,Dup,{}\n", 1000 - i))
            .collect();
        csv.push_str("0,0,Eleventh,1\n");

        let t = table(&csv);
        assert_eq!(t.len(), 1);
        let dup = t.get("Dup").unwrap();
        assert_eq!(dup.population, "1000");
        assert_eq!(dup.rating, 1);
        assert!(t.get("Eleventh").is_none());
    }

    #[test]
    fn ratings_stay_dense_after_dropping_duplicates() {
        let t = table("0,0,A,300\n0,0,A,200\n0,0,B,100");
        let ranked: Vec<(&str, usize)> = t
            .iter()
            .map(|c| (c.name.as_str(), c.rating))
            .collect();
        assert_eq!(ranked, [("A", 1), ("B", 2)]);
    }

    #[test]
    fn state_does_not_leak_between_builds() {
        let a = table("0,0,A,1\n0,0,B,2");
        let b = table("0,0,C,3");
        assert_eq!(a.get("B").unwrap().rating, 1);
        assert_eq!(b.get("C").unwrap().rating, 1);
    }
}
