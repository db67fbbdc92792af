//! Grocery table columns.
//!
//! This module provides:
//! - Column specs (labels, widths, the field each column sorts by)
//! - Cell rendering for an item under a given column

#![forbid(unsafe_code)]

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{GroceryItem, SortField};

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSpec {
    pub field: SortField,
    pub label: &'static str,
    pub width: usize,
}

fn col(field: SortField, label: &'static str, width: usize) -> ColumnSpec {
    ColumnSpec { field, label, width }
}

/// Column set in display order. Every column is sortable.
pub fn grocery_columns() -> Vec<ColumnSpec> {
    vec![
        col(SortField::Name, "Name", 28),
        col(SortField::Section, "Section", 16),
        col(SortField::Price, "Price (€)", 10),
        col(SortField::PerWeight, "Price / 100 g (€)", 18),
    ]
}

/// Render the cell for `field`; decimals are shown with two places.
pub fn render_cell(item: &GroceryItem, field: SortField) -> String {
    match field {
        SortField::Name => item.name.clone(),
        SortField::Section => item.section.clone(),
        SortField::Price => money(item.price),
        SortField::PerWeight => match item.price_per_weight() {
            Some(v) => money(v),
            None => "-".to_string(),
        },
    }
}

fn money(v: Decimal) -> String {
    format!("{:.2}", v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
