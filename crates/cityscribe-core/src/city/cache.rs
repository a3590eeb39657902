// crates/cityscribe-core/src/city/cache.rs
use super::annotate::{Annotator, AnnotatorConfig, Locale};
use super::ranking::RankingTable;
use super::record::ParseMode;
use crate::error::Result;
use once_cell::sync::Lazy;
use std::collections::{HashMap, VecDeque};
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

// Single in-process cache backing `build_city_annotator`.
static DEFAULT_CACHE: Lazy<TableCache> = Lazy::new(TableCache::new);

/// The process-wide cache used by [`build_city_annotator`].
pub fn default_cache() -> &'static TableCache {
    &DEFAULT_CACHE
}

/// Builds a text annotator for `csv_text`, reusing the ranking table of any
/// earlier call with identical text.
///
/// ```rust
/// use cityscribe_core::city::build_city_annotator;
///
/// let annotate = build_city_annotator("0,0,Харків,1421125");
/// assert_eq!(
///     annotate("Харків"),
///     "Харків(1 place in TOP-10 largest cities of Ukraine, 1421125 people)"
/// );
/// ```
pub fn build_city_annotator(csv_text: &str) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let annotator = default_cache().annotator(csv_text, Locale::En);
    move |text: &str| annotator.annotate(text)
}

#[derive(Default)]
struct Slots {
    // keyed by mode first so a lookup can borrow the text
    tables: HashMap<ParseMode, HashMap<String, Arc<RankingTable>>>,
    // insertion order, consulted only when a capacity is set
    order: VecDeque<(ParseMode, String)>,
}

impl Slots {
    fn get(&self, mode: ParseMode, csv_text: &str) -> Option<&Arc<RankingTable>> {
        self.tables.get(&mode)?.get(csv_text)
    }

    fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    fn remove(&mut self, mode: ParseMode, csv_text: &str) {
        if let Some(by_text) = self.tables.get_mut(&mode) {
            by_text.remove(csv_text);
        }
    }
}

/// Memoizes [`RankingTable`]s by the exact CSV text they were built from.
///
/// Each distinct text (per [`ParseMode`]) is parsed and ranked once; later
/// requests share the same `Arc`. By default entries live as long as the
/// cache. [`TableCache::with_capacity`] bounds it, evicting the oldest
/// insertion first.
pub struct TableCache {
    slots: Mutex<Slots>,
    capacity: Option<usize>,
    builds: AtomicUsize,
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TableCache {
    /// An unbounded cache.
    pub fn new() -> Self {
        TableCache {
            slots: Mutex::new(Slots::default()),
            capacity: None,
            builds: AtomicUsize::new(0),
        }
    }

    /// A cache holding at most `capacity` tables (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        TableCache {
            capacity: Some(capacity.max(1)),
            ..Self::new()
        }
    }

    /// How many tables this cache has built so far.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lenient lookup; never fails.
    pub fn table(&self, csv_text: &str) -> Arc<RankingTable> {
        let built = self.get_or_build::<Infallible>(ParseMode::Lenient, csv_text, || {
            Ok(RankingTable::from_csv_lenient(csv_text))
        });
        match built {
            Ok(table) => table,
            Err(never) => match never {},
        }
    }

    /// Lookup honouring `mode`. A strict parse error is returned and nothing
    /// is cached for that text.
    pub fn table_with_mode(&self, csv_text: &str, mode: ParseMode) -> Result<Arc<RankingTable>> {
        match mode {
            ParseMode::Lenient => Ok(self.table(csv_text)),
            ParseMode::Strict => self.get_or_build(mode, csv_text, || {
                RankingTable::from_csv(csv_text, mode)
            }),
        }
    }

    /// Lenient annotator in the given wording.
    pub fn annotator(&self, csv_text: &str, locale: Locale) -> Annotator {
        Annotator::new(self.table(csv_text), locale)
    }

    pub fn annotator_with_config(
        &self,
        csv_text: &str,
        config: AnnotatorConfig,
    ) -> Result<Annotator> {
        let table = self.table_with_mode(csv_text, config.mode)?;
        Ok(Annotator::new(table, config.locale))
    }

    // The build runs under the lock so concurrent callers never rank the same text twice.
    fn get_or_build<E>(
        &self,
        mode: ParseMode,
        csv_text: &str,
        build: impl FnOnce() -> std::result::Result<RankingTable, E>,
    ) -> std::result::Result<Arc<RankingTable>, E> {
        let mut slots = self.lock();

        if let Some(table) = slots.get(mode, csv_text) {
            debug!(bytes = csv_text.len(), "ranking table cache hit");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(build()?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        debug!(
            bytes = csv_text.len(),
            cities = table.len(),
            "built ranking table"
        );

        if let Some(capacity) = self.capacity {
            while slots.len() >= capacity {
                let Some((old_mode, old_text)) = slots.order.pop_front() else {
                    break;
                };
                slots.remove(old_mode, &old_text);
                warn!(capacity, "ranking table cache full, evicted oldest entry");
            }
            slots.order.push_back((mode, csv_text.to_owned()));
        }
        slots
            .tables
            .entry(mode)
            .or_default()
            .insert(csv_text.to_owned(), Arc::clone(&table));

        Ok(table)
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
