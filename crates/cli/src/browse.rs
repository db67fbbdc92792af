//! Interactive browse loop: one command per line on stdin, a fresh view after each.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use grocer_core::{PageSize, SectionFilter, SortField};
use grocer_table::{Command, GroceryTable, PriceRange};
use tracing::{info, warn};

use crate::render::render_view;
use crate::Output;

pub const USAGE: &str = "commands: section <name|all> | search [text] | price <min> [max] | sort <name|section|price|per-weight> | page <n> | next | prev | rows <10|25|50|100> | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Cmd(Command),
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Result<Option<Input>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((v, r)) => (v, r),
        None => (line.trim(), ""),
    };
    let input = match verb.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "section" => {
            let name = rest.trim();
            if name.is_empty() {
                bail!("section needs a name (or `all`)");
            }
            Input::Cmd(Command::SetSection(SectionFilter::from(name)))
        }
        "search" => Input::Cmd(Command::SetSearch(rest.to_string())),
        "price" => {
            let mut parts = rest.split_whitespace();
            let min = parts.next().unwrap_or("");
            let max = parts.next().unwrap_or("");
            Input::Cmd(Command::SetPriceRange(PriceRange::from_inputs(min, max)))
        }
        "sort" => {
            let field: SortField = rest.trim().parse()?;
            Input::Cmd(Command::SetSort(field))
        }
        "page" => {
            let n: usize = rest.trim().parse().with_context(|| format!("invalid page number `{}`", rest.trim()))?;
            Input::Cmd(Command::SetPage(n))
        }
        "next" | "n" => Input::Cmd(Command::NextPage),
        "prev" | "p" => Input::Cmd(Command::PrevPage),
        "rows" => {
            let n: usize = rest.trim().parse().with_context(|| format!("invalid row count `{}`", rest.trim()))?;
            Input::Cmd(Command::SetPageSize(PageSize::try_from(n)?))
        }
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        other => bail!("unknown command `{}`", other),
    };
    Ok(Some(input))
}

pub fn run<R: BufRead, W: Write>(table: &mut GroceryTable<'_>, input: R, out: &mut W, output: Output) -> Result<()> {
    show(table, out, output)?;
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        match parse_input(&line) {
            Ok(None) => continue,
            Ok(Some(Input::Quit)) => break,
            Ok(Some(Input::Help)) => writeln!(out, "{}", USAGE)?,
            Ok(Some(Input::Cmd(cmd))) => {
                info!(cmd = ?cmd, "browse command");
                table.dispatch(cmd);
                show(table, out, output)?;
            }
            Err(e) => {
                warn!(error = %e, line = %line, "rejected browse input");
                writeln!(out, "error: {}\n{}", e, USAGE)?;
            }
        }
    }
    Ok(())
}

fn show<W: Write>(table: &GroceryTable<'_>, out: &mut W, output: Output) -> Result<()> {
    let view = table.view();
    match output {
        Output::Human => render_view(out, &view)?,
        Output::Json => writeln!(out, "{}", serde_json::to_string(&view)?)?,
    }
    out.flush()?;
    Ok(())
}
