//! Plain-text rendering of a table view.

use std::io::{self, Write};

use grocer_core::columns::{grocery_columns, render_cell};
use grocer_core::SortOrder;
use grocer_table::TableView;

pub fn render_view<W: Write>(out: &mut W, view: &TableView<'_>) -> io::Result<()> {
    let cols = grocery_columns();
    let mut header = String::new();
    for spec in cols.iter() {
        let mut label = spec.label.to_string();
        if view.sort.field == spec.field {
            label.push_str(match view.sort.order { SortOrder::Asc => " ↑", SortOrder::Desc => " ↓" });
        }
        header.push_str(&format!("{:<w$} ", label, w = spec.width));
    }
    writeln!(out, "{}", header.trim_end())?;

    if let Some(msg) = view.empty_message() {
        writeln!(out, "{}", msg)?;
    }
    for it in view.rows.iter() {
        let mut line = String::new();
        for spec in cols.iter() {
            line.push_str(&format!("{:<w$} ", render_cell(it, spec.field), w = spec.width));
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Rows per page: {}   {}   {}",
        view.bounds.page_size,
        view.summary,
        page_control(view)
    )
}

/// `‹ 2 3 [4] 5 6 ›` with the current page bracketed. An arrow with nowhere to
/// go is shown disabled as `(‹)` or `(›)`.
fn page_control(view: &TableView<'_>) -> String {
    let current = view.bounds.page;
    let mut parts: Vec<String> = Vec::with_capacity(view.visible_pages.len() + 2);
    parts.push(if view.has_prev() { "‹" } else { "(‹)" }.to_string());
    parts.extend(view.visible_pages.iter().map(|&n| if n == current { format!("[{}]", n) } else { n.to_string() }));
    parts.push(if view.has_next() { "›" } else { "(›)" }.to_string());
    parts.join(" ")
}

pub fn render_sections<W: Write>(out: &mut W, sections: &[String]) -> io::Result<()> {
    writeln!(out, "all")?;
    for s in sections {
        writeln!(out, "{}", s)?;
    }
    Ok(())
}
