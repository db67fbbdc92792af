//! Grocer core types: grocery items, sort directives and section selection.

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod columns;

pub type ItemId = u32;

/// Sentinel section value that matches every item.
pub const ALL_SECTIONS: &str = "all";

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown sort field `{0}` (expected name, section, price or per-weight)")]
    UnknownSortField(String),
    #[error("unknown sort order `{0}` (expected asc or desc)")]
    UnknownSortOrder(String),
    #[error("page size {0} is not one of 10, 25, 50 or 100")]
    PageSize(usize),
}

/// A single grocery item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: ItemId,
    pub name: String,
    pub section: String,
    pub price: Decimal,
    /// Weight in units of 100 g; only ever used as a divisor.
    pub weight: Decimal,
}

impl GroceryItem {
    /// Price divided by weight. `None` when the weight is not positive.
    pub fn price_per_weight(&self) -> Option<Decimal> {
        if self.weight <= Decimal::ZERO {
            return None;
        }
        self.price.checked_div(self.weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Name,
    Section,
    Price,
    PerWeight,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Name, SortField::Section, SortField::Price, SortField::PerWeight];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Section => "section",
            SortField::Price => "price",
            SortField::PerWeight => "per-weight",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "section" => Ok(SortField::Section),
            "price" => Ok(SortField::Price),
            "per-weight" | "price-per-weight" | "weight" => Ok(SortField::PerWeight),
            _ => Err(CoreError::UnknownSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CoreError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// The single active sort: one field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortDirective {
    fn default() -> Self { Self { field: SortField::Name, order: SortOrder::Asc } }
}

impl SortDirective {
    pub fn new(field: SortField, order: SortOrder) -> Self { Self { field, order } }

    /// Same field flips the direction; a new field starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self { field, order: self.order.flipped() }
        } else {
            Self { field, order: SortOrder::Asc }
        }
    }
}

/// Section selector: the "all" sentinel or one exact section value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionFilter {
    #[default]
    All,
    Only(String),
}

impl SectionFilter {
    pub fn matches(&self, section: &str) -> bool {
        match self {
            SectionFilter::All => true,
            SectionFilter::Only(s) => s == section,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SectionFilter::All => ALL_SECTIONS,
            SectionFilter::Only(s) => s.as_str(),
        }
    }
}

impl From<String> for SectionFilter {
    fn from(s: String) -> Self {
        if s == ALL_SECTIONS { SectionFilter::All } else { SectionFilter::Only(s) }
    }
}

impl From<&str> for SectionFilter {
    fn from(s: &str) -> Self { SectionFilter::from(s.to_string()) }
}

impl From<SectionFilter> for String {
    fn from(f: SectionFilter) -> Self {
        match f {
            SectionFilter::All => ALL_SECTIONS.to_string(),
            SectionFilter::Only(s) => s,
        }
    }
}

/// Rows per page, restricted to [`PAGE_SIZE_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub fn get(self) -> usize { self.0 }
}

impl Default for PageSize {
    fn default() -> Self { PageSize(PAGE_SIZE_OPTIONS[0]) }
}

impl TryFrom<usize> for PageSize {
    type Error = CoreError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if PAGE_SIZE_OPTIONS.contains(&n) { Ok(PageSize(n)) } else { Err(CoreError::PageSize(n)) }
    }
}

impl From<PageSize> for usize {
    fn from(p: PageSize) -> Self { p.0 }
}

pub mod prelude {
    pub use super::{
        CoreError, GroceryItem, ItemId, PageSize, SectionFilter, SortDirective, SortField, SortOrder,
        ALL_SECTIONS, PAGE_SIZE_OPTIONS,
    };
}
