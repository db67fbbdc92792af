//! Filter stages. Each takes the rows produced by the previous stage and keeps a
//! subsequence in the same order. Records are only ever borrowed.

use grocer_core::{GroceryItem, SectionFilter};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rows flowing between stages: borrowed records in display order.
pub type Rows<'a> = Vec<&'a GroceryItem>;

/// Text columns a search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    #[default]
    Name,
    Section,
}

impl TextField {
    pub fn get(self, item: &GroceryItem) -> &str {
        match self {
            TextField::Name => &item.name,
            TextField::Section => &item.section,
        }
    }
}

/// Inclusive price bounds. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Upper bound used when no maximum price is given.
    pub fn default_max() -> Decimal { Decimal::from(99_999) }

    pub fn new(min: Decimal, max: Decimal) -> Self { Self { min, max } }

    /// Parse the two price inputs the way the filter form does: a blank or invalid
    /// min means 0, a blank or invalid max means [`PriceRange::default_max`].
    pub fn from_inputs(min: &str, max: &str) -> Self {
        let parse = |s: &str| s.trim().parse::<Decimal>().ok().filter(|d| !d.is_zero());
        Self {
            min: parse(min).unwrap_or(Decimal::ZERO),
            max: parse(max).unwrap_or_else(Self::default_max),
        }
    }

    pub fn contains(&self, price: Decimal) -> bool { price >= self.min && price <= self.max }
}

impl Default for PriceRange {
    fn default() -> Self { Self { min: Decimal::ZERO, max: Self::default_max() } }
}

/// Section selector, search text and price bounds, all applied together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub section: SectionFilter,
    pub search: String,
    pub price: PriceRange,
}

impl FilterState {
    /// Section, then search on the name, then price.
    pub fn apply<'a>(&self, rows: Rows<'a>) -> Rows<'a> {
        let rows = filter_by_section(rows, &self.section);
        let rows = filter_by_search(rows, TextField::Name, &self.search);
        filter_by_price_range(rows, self.price.min, self.price.max)
    }
}

pub fn filter_by_section<'a>(mut rows: Rows<'a>, section: &SectionFilter) -> Rows<'a> {
    if let SectionFilter::Only(wanted) = section {
        rows.retain(|it| it.section == *wanted);
    }
    rows
}

/// Case-insensitive substring match. A blank term passes everything through untouched.
pub fn filter_by_search<'a>(mut rows: Rows<'a>, field: TextField, term: &str) -> Rows<'a> {
    if term.trim().is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.retain(|it| field.get(it).to_lowercase().contains(&needle));
    rows
}

pub fn filter_by_price_range<'a>(mut rows: Rows<'a>, min: Decimal, max: Decimal) -> Rows<'a> {
    let range = PriceRange::new(min, max);
    rows.retain(|it| range.contains(it.price));
    rows
}
