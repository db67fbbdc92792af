//! Table view state and the commands that change it.

use grocer_core::{PageSize, SectionFilter, SortDirective, SortField};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::{FilterState, PriceRange};
use crate::paginate::clamp_page;

/// State-change events issued by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "arg", rename_all = "snake_case")]
pub enum Command {
    SetSection(SectionFilter),
    SetSearch(String),
    SetPriceRange(PriceRange),
    /// Same field as the active sort flips direction; another field sorts ascending.
    SetSort(SortField),
    SetPage(usize),
    NextPage,
    PrevPage,
    SetPageSize(PageSize),
}

/// Everything a table view owns: filters, sort and the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub filters: FilterState,
    pub sort: SortDirective,
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            sort: SortDirective::default(),
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl TableState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self { page_size, ..Self::default() }
    }

    /// Apply one command. `total_pages` is the page count under the current filters
    /// and is used to clamp page moves; every other change resets to page 1.
    pub fn apply(&mut self, cmd: Command, total_pages: usize) {
        match cmd {
            Command::SetSection(section) => {
                self.filters.section = section;
                self.page = 1;
            }
            Command::SetSearch(search) => {
                self.filters.search = search;
                self.page = 1;
            }
            Command::SetPriceRange(range) => {
                self.filters.price = range;
                self.page = 1;
            }
            Command::SetSort(field) => {
                self.sort = self.sort.toggled(field);
                self.page = 1;
            }
            Command::SetPageSize(size) => {
                self.page_size = size;
                self.page = 1;
            }
            Command::SetPage(p) => self.page = clamp_page(p, total_pages),
            Command::NextPage => self.page = clamp_page(self.page.saturating_add(1), total_pages),
            Command::PrevPage => self.page = clamp_page(self.page.saturating_sub(1), total_pages),
        }
        debug!(page = self.page, sort = %self.sort.field, order = ?self.sort.order, "table state updated");
    }
}
