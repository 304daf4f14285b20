//! Core data structures for product management
//!
//! This module contains the product record and the ordered collection
//! the rest of the application operates on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Longest search query that is honoured; longer queries are cut to this many characters
pub const MAX_QUERY_CHARS: usize = 50;

/// Largest product ID; matches a signed 64-bit spreadsheet integer column
pub const MAX_ID: u64 = i64::MAX as u64;

/// A single product with its processing time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Hours; always the evaluated value of `time_calculation`
    pub processing_time: f64,
    pub time_calculation: String,
}

/// Ordered collection of products
///
/// Order is insertion (or load) order. The collection does not enforce unique
/// IDs; callers assign them through [`ProductCollection::next_id`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductCollection {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Product {
    pub fn new(id: u64, name: String, processing_time: f64, time_calculation: String) -> Self {
        Self {
            id,
            name,
            processing_time,
            time_calculation,
        }
    }
}

impl ProductCollection {
    /// Create a new empty product collection
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Append a product to the end of the collection
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find the first product with the given ID
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search on product names
    ///
    /// A blank query returns every product. Results keep collection order.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim();
        if query.is_empty() {
            return self.products.clone();
        }

        let needle: String = query.to_lowercase().chars().take(MAX_QUERY_CHARS).collect();

        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Remove the first product with the given ID; unknown IDs are ignored
    pub fn delete(&mut self, id: u64) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Remove every product whose ID is listed
    pub fn delete_multiple(&mut self, ids: &[u64]) {
        let ids: HashSet<u64> = ids.iter().copied().collect();
        self.products.retain(|p| !ids.contains(&p.id));
    }

    /// Replace the first product sharing `product.id`; unknown IDs are ignored
    pub fn update(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Next ID to assign: one past the largest ID present, or 1 when empty
    ///
    /// Deleting the product with the largest ID makes that ID available again.
    /// Returns `None` once the largest ID has reached [`MAX_ID`].
    pub fn next_id(&self) -> Option<u64> {
        let max = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        max.checked_add(1).filter(|id| *id <= MAX_ID)
    }
}

impl From<Vec<Product>> for ProductCollection {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str) -> Product {
        Product::new(id, name.to_string(), 1.0, "1".to_string())
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    fn sample() -> ProductCollection {
        ProductCollection::from(vec![
            product(1, "Продукт A"),
            product(2, "Товар B"),
            product(3, "Продукт C"),
        ])
    }

    #[test]
    fn test_search_blank_query_returns_everything() {
        let collection = sample();
        assert_eq!(collection.search(""), collection.products);
        assert_eq!(collection.search("   "), collection.products);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let collection = sample();
        assert_eq!(ids(&collection.search("продукт")), vec![1, 3]);
        assert_eq!(ids(&collection.search("ПРОДУКТ")), vec![1, 3]);
        assert_eq!(ids(&collection.search("  товар ")), vec![2]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let collection = sample();
        assert!(collection.search("missing").is_empty());
    }

    #[test]
    fn test_search_truncates_long_queries() {
        let name = "x".repeat(MAX_QUERY_CHARS);
        let collection = ProductCollection::from(vec![product(1, &name)]);

        // The 51st character is dropped before matching.
        let query = format!("{}y", name);
        assert_eq!(ids(&collection.search(&query)), vec![1]);

        let cyrillic = "ж".repeat(MAX_QUERY_CHARS);
        let collection = ProductCollection::from(vec![product(7, &cyrillic)]);
        let query = format!("{}ЖЖЖ", cyrillic.to_uppercase());
        assert_eq!(ids(&collection.search(&query)), vec![7]);
    }

    #[test]
    fn test_delete_removes_single_match() {
        let mut collection = sample();
        let removed = collection.delete(2);
        assert_eq!(removed.map(|p| p.id), Some(2));
        assert_eq!(ids(collection.as_slice()), vec![1, 3]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut collection = sample();
        let before = collection.clone();
        assert!(collection.delete(42).is_none());
        assert_eq!(collection, before);
    }

    #[test]
    fn test_delete_only_first_duplicate() {
        let mut collection =
            ProductCollection::from(vec![product(5, "a"), product(5, "b"), product(6, "c")]);
        collection.delete(5);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.products[0].name, "b");
    }

    #[test]
    fn test_delete_multiple() {
        let mut collection = ProductCollection::from(vec![
            product(1, "a"),
            product(2, "b"),
            product(3, "c"),
            product(4, "d"),
        ]);
        collection.delete_multiple(&[2, 4, 99]);
        assert_eq!(ids(collection.as_slice()), vec![1, 3]);

        collection.delete_multiple(&[]);
        assert_eq!(ids(collection.as_slice()), vec![1, 3]);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut collection = sample();
        let replacement = Product::new(2, "Новый".to_string(), 4.5, "2+2.5".to_string());

        assert!(collection.update(replacement.clone()));
        assert_eq!(collection.find(2), Some(&replacement));
        assert_eq!(collection.find(1), Some(&product(1, "Продукт A")));
        assert_eq!(collection.find(3), Some(&product(3, "Продукт C")));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut collection = sample();
        let before = collection.clone();
        assert!(!collection.update(product(9, "ghost")));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(ProductCollection::new().next_id(), Some(1));

        let collection =
            ProductCollection::from(vec![product(5, "a"), product(2, "b"), product(10, "c")]);
        assert_eq!(collection.next_id(), Some(11));
    }

    #[test]
    fn test_next_id_stops_at_max_id() {
        let collection = ProductCollection::from(vec![product(MAX_ID - 1, "a")]);
        assert_eq!(collection.next_id(), Some(MAX_ID));

        let collection = ProductCollection::from(vec![product(MAX_ID, "a")]);
        assert_eq!(collection.next_id(), None);

        let collection = ProductCollection::from(vec![product(u64::MAX, "a")]);
        assert_eq!(collection.next_id(), None);
    }

    #[test]
    fn test_next_id_reuses_deleted_max() {
        let mut collection = sample();
        assert_eq!(collection.next_id(), Some(4));
        collection.delete(3);
        assert_eq!(collection.next_id(), Some(3));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(product(1, "a")).unwrap();
        assert_eq!(json["processingTime"], 1.0);
        assert_eq!(json["timeCalculation"], "1");
    }
}
