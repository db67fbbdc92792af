//! Grocer table: the section → search → price → sort → paginate pipeline over
//! borrowed grocery items, plus the view state that drives it.

#![forbid(unsafe_code)]

use std::time::Instant;

use grocer_core::{GroceryItem, SortDirective};
use metrics::{counter, gauge, histogram};
use serde::Serialize;
use tracing::debug;

pub mod collate;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use filter::{filter_by_price_range, filter_by_search, filter_by_section, FilterState, PriceRange, Rows, TextField};
pub use paginate::{
    clamp_page, page_links, paginate, total_pages, visible_pages, PageBounds, PageLink, PageLinks, PageSummary,
    VisiblePages,
};
pub use sort::{compare_items, sort_items};
pub use state::{Command, TableState};

/// Output of one pipeline pass: every matching row in display order plus the
/// bounds of the current page.
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    pub sorted: Rows<'a>,
    pub bounds: PageBounds,
}

impl<'a> Pipeline<'a> {
    pub fn page(&self) -> &[&'a GroceryItem] { self.bounds.slice(&self.sorted) }

    pub fn matched(&self) -> usize { self.sorted.len() }
}

/// Run every stage for `state` over `items`. Pure: same inputs, same output.
pub fn run<'a>(items: &'a [GroceryItem], state: &TableState) -> Pipeline<'a> {
    let started = Instant::now();
    let filtered = state.filters.apply(items.iter().collect());
    let sorted = sort_items(&filtered, state.sort);
    let bounds = paginate(state.page, state.page_size.get(), sorted.len());
    let visible = bounds.slice(&sorted).len();
    debug!(
        total = items.len(),
        matched = sorted.len(),
        page = bounds.page,
        pages = bounds.total_pages,
        visible,
        "table recomputed"
    );
    counter!("table_recompute_total", 1);
    histogram!("table_recompute_ms", started.elapsed().as_secs_f64() * 1000.0);
    gauge!("table_rows_visible", visible as f64);
    Pipeline { sorted, bounds }
}

/// What a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct TableView<'a> {
    pub rows: Rows<'a>,
    pub sort: SortDirective,
    pub filters: FilterState,
    pub bounds: PageBounds,
    pub summary: PageSummary,
    /// Numbered pages with ellipses, for controls that jump to the ends.
    pub page_links: PageLinks,
    /// Contiguous window of page buttons shown between prev and next.
    pub visible_pages: VisiblePages,
    pub sections: &'a [String],
}

impl TableView<'_> {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn has_prev(&self) -> bool { self.bounds.page > 1 }

    pub fn has_next(&self) -> bool { self.bounds.page < self.bounds.total_pages }

    /// Message shown in place of rows when nothing matches.
    pub fn empty_message(&self) -> Option<String> {
        if !self.is_empty() {
            return None;
        }
        Some(match &self.filters.section {
            grocer_core::SectionFilter::All => "No items found.".to_string(),
            grocer_core::SectionFilter::Only(s) => format!("No items found in {} section.", s),
        })
    }
}

/// A mounted table: borrowed records and sections plus the state it owns.
pub struct GroceryTable<'a> {
    items: &'a [GroceryItem],
    sections: &'a [String],
    state: TableState,
}

impl<'a> GroceryTable<'a> {
    pub fn new(items: &'a [GroceryItem], sections: &'a [String]) -> Self {
        Self::with_state(items, sections, TableState::default())
    }

    /// Start from `state`; its page is clamped to what the filters leave.
    pub fn with_state(items: &'a [GroceryItem], sections: &'a [String], mut state: TableState) -> Self {
        let pages = total_pages(state.filters.apply(items.iter().collect()).len(), state.page_size.get());
        state.page = clamp_page(state.page, pages);
        Self { items, sections, state }
    }

    pub fn state(&self) -> &TableState { &self.state }

    pub fn dispatch(&mut self, cmd: Command) {
        let matched = self.state.filters.apply(self.items.iter().collect()).len();
        self.state.apply(cmd, total_pages(matched, self.state.page_size.get()));
    }

    pub fn view(&self) -> TableView<'a> {
        let Pipeline { sorted, bounds } = run(self.items, &self.state);
        let total = sorted.len();
        TableView {
            rows: bounds.slice(&sorted).to_vec(),
            sort: self.state.sort,
            filters: self.state.filters.clone(),
            bounds,
            summary: bounds.summary(total),
            page_links: page_links(bounds.page, bounds.total_pages, paginate::MAX_PAGE_LINKS),
            visible_pages: visible_pages(bounds.page, bounds.total_pages, paginate::MAX_VISIBLE_PAGES),
            sections: self.sections,
        }
    }
}
