// crates/cityscribe-core/src/catalog/query.rs
use super::product::Product;
use crate::traits::{fold_key, NameMatch};
use std::cmp::Ordering;

/// Products whose name or description contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let q = fold_key(query);
    products
        .iter()
        .filter(|p| p.name_contains(&q) || fold_key(p.description()).contains(&q))
        .collect()
}

/// Field to order products by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRule {
    Name,
    Price,
    Id,
}

impl SortRule {
    /// `"name"`, `"price"` or `"id"` (any case); anything else is `None`.
    pub fn from_name(rule: &str) -> Option<Self> {
        match rule.trim().to_ascii_lowercase().as_str() {
            "name" => Some(SortRule::Name),
            "price" => Some(SortRule::Price),
            "id" => Some(SortRule::Id),
            _ => None,
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortRule::Name => a.name().cmp(b.name()),
            SortRule::Price => a.price().total_cmp(&b.price()),
            SortRule::Id => a.id().cmp(b.id()),
        }
    }
}

/// Sorts ascending by `rule`. Equal keys keep their relative order.
pub fn sort_products(products: &mut [Product], rule: SortRule) {
    products.sort_by(|a, b| rule.compare(a, b));
}

/// Sorts by a rule given as text. Returns `false`, leaving `products`
/// untouched, when the rule is not recognised.
///
/// ```rust
/// use cityscribe_core::catalog::{sort_products_by, Product};
///
/// let mut items = vec![
///     Product::new("b", "", 2.0, "x", 1, vec![]),
///     Product::new("a", "", 9.0, "x", 1, vec![]),
/// ];
/// assert!(sort_products_by(&mut items, "name"));
/// assert_eq!(items[0].name(), "a");
/// assert!(!sort_products_by(&mut items, "colour"));
/// assert_eq!(items[0].name(), "a");
/// ```
pub fn sort_products_by(products: &mut [Product], rule: &str) -> bool {
    match SortRule::from_name(rule) {
        Some(rule) => {
            sort_products(products, rule);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Shirt", "A blue shirt", 15.3, "MyClothesBrand", 5, vec![]).with_id("c"),
            Product::new("Laptop", "Thin and light", 999.0, "Tech", 1, vec![]).with_id("a"),
            Product::new("Socks", "Warm wool socks", 4.5, "MyClothesBrand", 20, vec![])
                .with_id("b"),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(Product::name).collect()
    }

    #[test]
    fn search_matches_name_or_description() {
        let items = catalog();
        let by_name: Vec<&str> = search_products(&items, "SHIRT")
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(by_name, ["Shirt"]);

        let by_desc: Vec<&str> = search_products(&items, "wool")
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(by_desc, ["Socks"]);

        assert!(search_products(&items, "tablet").is_empty());
        assert_eq!(search_products(&items, "").len(), 3);
    }

    #[test]
    fn sort_by_each_rule() {
        let mut items = catalog();
        sort_products(&mut items, SortRule::Price);
        assert_eq!(names(&items), ["Socks", "Shirt", "Laptop"]);

        sort_products(&mut items, SortRule::Name);
        assert_eq!(names(&items), ["Laptop", "Shirt", "Socks"]);

        sort_products(&mut items, SortRule::Id);
        assert_eq!(names(&items), ["Laptop", "Socks", "Shirt"]);
    }

    #[test]
    fn unknown_rule_leaves_order() {
        let mut items = catalog();
        assert!(!sort_products_by(&mut items, "brand"));
        assert_eq!(names(&items), ["Shirt", "Laptop", "Socks"]);
        assert!(sort_products_by(&mut items, "ID"));
        assert_eq!(names(&items), ["Laptop", "Socks", "Shirt"]);
    }
}
