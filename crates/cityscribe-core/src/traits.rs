// crates/cityscribe-core/src/traits.rs

/// Lowercases a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, so Cyrillic and Latin names fold alike.
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use cityscribe_core::traits::NameMatch;
///
/// struct Item(&'static str);
/// impl NameMatch for Item {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Item("Футболка").is_named("футболка"));
/// assert!(Item("AT-shirt").name_contains("SHIRT"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
