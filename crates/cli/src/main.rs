use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use grocer_catalog::Catalog;
use grocer_core::{PageSize, SectionFilter, SortDirective, SortField, SortOrder};
use grocer_table::{FilterState, GroceryTable, PriceRange, TableState};
use tracing::info;

mod browse;
mod render;

#[derive(Parser, Debug)]
#[command(name = "grocerctl", version, about = "Sort, filter and page through the grocery catalog")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t = Output::Human)]
    output: Output,

    /// Catalog JSON file (default: built-in sample catalog)
    #[arg(long = "data", env = "GROCER_DATA", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Output { Human, Json }

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one page of the filtered, sorted catalog
    Ls(LsArgs),
    /// List the distinct sections
    Sections,
    /// Read commands from stdin and redraw after each one
    Browse {
        /// Rows per page (10, 25, 50 or 100)
        #[arg(long = "rows", env = "GROCER_ROWS", default_value_t = 10)]
        rows: usize,
    },
}

#[derive(Args, Debug)]
struct LsArgs {
    /// Section to show, or `all`
    #[arg(long = "section", default_value = "all")]
    section: String,
    /// Case-insensitive substring of the item name
    #[arg(long = "search", default_value = "")]
    search: String,
    /// Minimum price (blank or invalid means 0)
    #[arg(long = "min", default_value = "")]
    min: String,
    /// Maximum price (blank or invalid means 99999)
    #[arg(long = "max", default_value = "")]
    max: String,
    /// Sort field: name, section, price or per-weight
    #[arg(long = "sort", default_value = "name")]
    sort: SortField,
    /// Sort descending
    #[arg(long = "desc")]
    desc: bool,
    /// Page number (clamped to the available pages)
    #[arg(long = "page", default_value_t = 1)]
    page: usize,
    /// Rows per page (10, 25, 50 or 100)
    #[arg(long = "rows", env = "GROCER_ROWS", default_value_t = 10)]
    rows: usize,
}

impl LsArgs {
    fn to_state(&self) -> Result<TableState> {
        let order = if self.desc { SortOrder::Desc } else { SortOrder::Asc };
        Ok(TableState {
            filters: FilterState {
                section: SectionFilter::from(self.section.as_str()),
                search: self.search.clone(),
                price: PriceRange::from_inputs(&self.min, &self.max),
            },
            sort: SortDirective::new(self.sort, order),
            page: self.page,
            page_size: PageSize::try_from(self.rows)?,
        })
    }
}

fn init_tracing() {
    let env = std::env::var("GROCER_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(data: Option<&PathBuf>) -> Result<Catalog> {
    match data {
        Some(path) => Catalog::open(path).with_context(|| format!("loading catalog from {}", path.display())),
        None => Catalog::builtin().context("loading built-in catalog"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let catalog = load_catalog(cli.data.as_ref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Ls(args) => {
            info!(section = %args.section, search = %args.search, sort = %args.sort, page = args.page, "ls invoked");
            let table = GroceryTable::with_state(catalog.items(), catalog.sections(), args.to_state()?);
            let view = table.view();
            match cli.output {
                Output::Human => render::render_view(&mut out, &view)?,
                Output::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
            }
        }
        Commands::Sections => match cli.output {
            Output::Human => render::render_sections(&mut out, catalog.sections())?,
            Output::Json => writeln!(out, "{}", serde_json::to_string_pretty(catalog.sections())?)?,
        },
        Commands::Browse { rows } => {
            info!(items = catalog.len(), rows, "browse invoked");
            let state = TableState::with_page_size(PageSize::try_from(rows)?);
            let mut table = GroceryTable::with_state(catalog.items(), catalog.sections(), state);
            if cli.output == Output::Human {
                writeln!(out, "{}", browse::USAGE)?;
            }
            let stdin = std::io::stdin();
            browse::run(&mut table, stdin.lock(), &mut out, cli.output)?;
        }
    }
    Ok(())
}
