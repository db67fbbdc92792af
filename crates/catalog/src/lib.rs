//! Grocer catalog: the static list of grocery items a table browses.
//! Loaded once, validated, then only ever borrowed.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use grocer_core::{GroceryItem, ItemId};
use metrics::{gauge, histogram};
use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Sample catalog compiled into the binary.
const BUILTIN_JSON: &str = include_str!("../data/groceries.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("reading catalog at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("item {id} has a negative price ({price})")]
    NegativePrice { id: ItemId, price: Decimal },
    #[error("item {id} has a non-positive weight ({weight})")]
    NonPositiveWeight { id: ItemId, weight: Decimal },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<GroceryItem>,
    sections: Vec<String>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::timed_load("builtin", || Self::from_json(BUILTIN_JSON))
    }

    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        Self::timed_load(&path.display().to_string(), || {
            let raw = std::fs::read_to_string(path)
                .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
            Self::from_json(&raw)
        })
    }

    fn timed_load(source: &str, load: impl FnOnce() -> Result<Self, CatalogError>) -> Result<Self, CatalogError> {
        let started = std::time::Instant::now();
        let me = load()?;
        histogram!("catalog_load_ms", started.elapsed().as_secs_f64() * 1000.0);
        info!(source, items = me.items.len(), sections = me.sections.len(), "catalog loaded");
        Ok(me)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<GroceryItem> = serde_json::from_str(raw)?;
        Self::from_items(items)
    }

    /// Validate and index `items`. Order is kept as given.
    pub fn from_items(items: Vec<GroceryItem>) -> Result<Self, CatalogError> {
        validate(&items)?;
        let sections = unique_sections(&items);
        gauge!("catalog_items", items.len() as f64);
        debug!(items = items.len(), sections = sections.len(), "catalog validated");
        Ok(Self { items, sections })
    }

    pub fn items(&self) -> &[GroceryItem] { &self.items }

    /// Distinct sections for the section selector.
    pub fn sections(&self) -> &[String] { &self.sections }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

/// Ids must be unique, prices non-negative and weights positive (weight is a divisor).
fn validate(items: &[GroceryItem]) -> Result<(), CatalogError> {
    let mut seen: FxHashSet<ItemId> = FxHashSet::default();
    for it in items {
        if !seen.insert(it.id) {
            return Err(CatalogError::DuplicateId(it.id));
        }
        if it.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice { id: it.id, price: it.price });
        }
        if it.weight <= Decimal::ZERO {
            return Err(CatalogError::NonPositiveWeight { id: it.id, weight: it.weight });
        }
    }
    Ok(())
}

/// Distinct section values in collation order.
pub fn unique_sections(items: &[GroceryItem]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out: Vec<String> = items
        .iter()
        .filter(|it| seen.insert(it.section.as_str()))
        .map(|it| it.section.clone())
        .collect();
    out.sort_by(|a, b| grocer_table::collate::compare(a, b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_catalog_is_valid() {
        let c = Catalog::builtin().unwrap();
        assert_eq!(c.len(), 40);
        assert!(c.sections().contains(&"Dairy".to_string()));
        assert!(c.items().iter().all(|it| it.price_per_weight().is_some()));
    }

    #[test]
    fn sections_are_distinct_and_collated() {
        let raw = json!([
            { "id": 1, "name": "a", "section": "pantry", "price": 1, "weight": 1 },
            { "id": 2, "name": "b", "section": "Bakery", "price": 1, "weight": 1 },
            { "id": 3, "name": "c", "section": "Épicerie", "price": 1, "weight": 1 },
            { "id": 4, "name": "d", "section": "Bakery", "price": 1, "weight": 1 },
        ]);
        let c = Catalog::from_json(&raw.to_string()).unwrap();
        assert_eq!(c.sections(), &["Bakery".to_string(), "Épicerie".to_string(), "pantry".to_string()]);
        // item order untouched
        let ids: Vec<u32> = c.items().iter().map(|it| it.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rejects_bad_records() {
        let dup = json!([
            { "id": 1, "name": "a", "section": "S", "price": 1, "weight": 1 },
            { "id": 1, "name": "b", "section": "S", "price": 1, "weight": 1 },
        ]);
        assert!(matches!(Catalog::from_json(&dup.to_string()), Err(CatalogError::DuplicateId(1))));

        let neg = json!([{ "id": 2, "name": "a", "section": "S", "price": -0.5, "weight": 1 }]);
        assert!(matches!(Catalog::from_json(&neg.to_string()), Err(CatalogError::NegativePrice { id: 2, .. })));

        let zero = json!([{ "id": 3, "name": "a", "section": "S", "price": 1, "weight": 0 }]);
        let e = Catalog::from_json(&zero.to_string()).unwrap_err();
        assert!(matches!(e, CatalogError::NonPositiveWeight { id: 3, .. }));
        assert!(e.to_string().contains("non-positive weight"), "e={}", e);
    }

    #[test]
    fn parse_errors_surface() {
        let e = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(e, CatalogError::Parse(_)));
        let e = Catalog::from_json(r#"[{ "id": 1, "name": "a" }]"#).unwrap_err();
        assert!(e.to_string().starts_with("parsing catalog json"), "e={}", e);
    }
}
