//! Page arithmetic and page-link windows.
//!
//! `paginate` computes bounds for a requested page but never rejects one; callers
//! clamp with [`clamp_page`] when the page changes.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Slots shown by the numbered page control.
pub const MAX_PAGE_LINKS: usize = 7;
/// Width of the compact contiguous page window.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageBounds {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Offset of the first row on the page.
    pub start: usize,
    /// `start + page_size`, saturating; may run past the row count.
    pub end: usize,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate(page: usize, page_size: usize, total: usize) -> PageBounds {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    PageBounds {
        page,
        page_size,
        total_pages: total_pages(total, page_size),
        start,
        end: start.saturating_add(page_size),
    }
}

impl PageBounds {
    /// Rows on this page, clamped to what exists.
    pub fn slice<'s, T>(&self, rows: &'s [T]) -> &'s [T] {
        let end = self.end.min(rows.len());
        let start = self.start.min(end);
        &rows[start..end]
    }

    pub fn summary(&self, total: usize) -> PageSummary {
        if total == 0 || self.start >= total {
            return PageSummary { from: 0, to: 0, total };
        }
        PageSummary { from: self.start + 1, to: self.end.min(total), total }
    }
}

/// The "from-to of total" line under the table. 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} of {}", self.from, self.to, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Page(n) => write!(f, "{}", n),
            PageLink::Ellipsis => f.write_str("..."),
        }
    }
}

pub type PageLinks = SmallVec<[PageLink; MAX_PAGE_LINKS]>;

/// First and last page always, a run around `current`, ellipses for the gaps.
pub fn page_links(current: usize, total_pages: usize, max_visible: usize) -> PageLinks {
    let mut out = PageLinks::new();
    if total_pages <= max_visible {
        out.extend((1..=total_pages).map(PageLink::Page));
        return out;
    }
    out.push(PageLink::Page(1));
    if current > 3 {
        out.push(PageLink::Ellipsis);
    }
    let lo = current.saturating_sub(1).max(2);
    let hi = current.saturating_add(1).min(total_pages - 1);
    out.extend((lo..=hi).map(PageLink::Page));
    if current.saturating_add(2) < total_pages {
        out.push(PageLink::Ellipsis);
    }
    out.push(PageLink::Page(total_pages));
    out
}

pub type VisiblePages = SmallVec<[usize; MAX_VISIBLE_PAGES]>;

/// Contiguous window of at most `max_visible` pages around `current`.
pub fn visible_pages(current: usize, total_pages: usize, max_visible: usize) -> VisiblePages {
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }
    let mut start = current.saturating_sub(2).max(1);
    let mut end = current.saturating_add(2).min(total_pages);
    if current <= 3 {
        end = max_visible;
    } else if current.saturating_add(2) >= total_pages {
        start = total_pages - max_visible + 1;
    }
    (start..=end).collect()
}
