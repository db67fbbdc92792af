use grocer_core::{GroceryItem, PageSize, SectionFilter, SortDirective, SortField, SortOrder, PAGE_SIZE_OPTIONS};
use grocer_table::{
    filter_by_price_range, filter_by_search, filter_by_section, paginate, run, sort_items, total_pages, Command,
    FilterState, GroceryTable, PriceRange, Rows, TableState, TextField,
};
use rust_decimal::Decimal;

const SECTIONS: [&str; 4] = ["Bakery", "Dairy", "Produce", "Pantry"];
const NAMES: [&str; 6] = ["apple", "Bread", "éclair", "Milk", "bread", "Cheese"];

/// Deterministic catalogue with repeated names, sections and prices so ties are common.
fn catalogue(n: u32) -> Vec<GroceryItem> {
    (1..=n)
        .map(|i| GroceryItem {
            id: i,
            name: format!("{} {}", NAMES[(i as usize * 7) % NAMES.len()], i % 5),
            section: SECTIONS[(i as usize * 3) % SECTIONS.len()].to_string(),
            price: Decimal::new(((i * 37) % 23) as i64 * 25, 2),
            weight: Decimal::from((i % 4) + 1),
        })
        .collect()
}

fn ids(rows: &[&GroceryItem]) -> Vec<u32> { rows.iter().map(|it| it.id).collect() }

fn all_directives() -> Vec<SortDirective> {
    SortField::ALL
        .iter()
        .flat_map(|f| [SortDirective::new(*f, SortOrder::Asc), SortDirective::new(*f, SortOrder::Desc)])
        .collect()
}

#[test]
fn total_pages_matches_ceiling_for_every_size() {
    for p in 1..=13usize {
        for t in 0..=60usize {
            let expected = if t == 0 { 1 } else { (t + p - 1) / p };
            assert_eq!(total_pages(t, p), expected, "t={} p={}", t, p);
            let b = paginate(1, p, t);
            assert_eq!(b.total_pages, expected);
        }
    }
    let none: Vec<u32> = Vec::new();
    assert!(paginate(1, 10, 0).slice(&none).is_empty());
}

#[test]
fn sorting_sorted_input_is_identity() {
    let data = catalogue(80);
    let rows: Rows = data.iter().collect();
    for d in all_directives() {
        let once = sort_items(&rows, d);
        let twice = sort_items(&once, d);
        assert_eq!(ids(&once), ids(&twice), "directive={:?}", d);
    }
}

#[test]
fn descending_reverses_ascending_for_distinct_keys() {
    // distinct prices: one row per price value
    let data: Vec<GroceryItem> = (1..=30)
        .map(|i| GroceryItem {
            id: i,
            name: format!("n{}", i),
            section: "S".into(),
            price: Decimal::new(((i * 17) % 31) as i64 + 1, 1),
            weight: Decimal::ONE,
        })
        .collect();
    let rows: Rows = data.iter().collect();
    for field in [SortField::Price, SortField::Name, SortField::PerWeight] {
        let asc = ids(&sort_items(&rows, SortDirective::new(field, SortOrder::Asc)));
        let mut desc = ids(&sort_items(&rows, SortDirective::new(field, SortOrder::Desc)));
        desc.reverse();
        assert_eq!(asc, desc, "field={:?}", field);
    }
}

#[test]
fn filters_applied_twice_equal_once() {
    let data = catalogue(60);
    let states = [
        FilterState { section: SectionFilter::from("Dairy"), ..FilterState::default() },
        FilterState { search: "BREAD".into(), ..FilterState::default() },
        FilterState { price: PriceRange::new(Decimal::ONE, Decimal::new(350, 2)), ..FilterState::default() },
        FilterState {
            section: SectionFilter::from("Produce"),
            search: "e".into(),
            price: PriceRange::new(Decimal::ZERO, Decimal::from(4)),
        },
    ];
    for f in states.iter() {
        let once = f.apply(data.iter().collect());
        let twice = f.apply(once.clone());
        assert_eq!(ids(&once), ids(&twice), "filters={:?}", f);
    }
}

#[test]
fn pages_concatenate_to_the_full_sorted_sequence() {
    let data = catalogue(97);
    for size in PAGE_SIZE_OPTIONS {
        for d in all_directives() {
            let state = TableState {
                filters: FilterState { search: "e".into(), ..FilterState::default() },
                sort: d,
                ..TableState::with_page_size(PageSize::try_from(size).unwrap())
            };
            let full = run(&data, &state).sorted;
            let pages = total_pages(full.len(), size);
            let mut stitched = Vec::new();
            for page in 1..=pages {
                let p = run(&data, &TableState { page, ..state.clone() });
                stitched.extend(ids(p.page()));
            }
            assert_eq!(stitched, ids(&full), "size={} directive={:?}", size, d);
        }
    }
}

#[test]
fn thirty_seven_rows_at_ten_per_page() {
    let data = catalogue(37);
    let sections: Vec<String> = Vec::new();
    let mut table = GroceryTable::new(&data, &sections);
    table.dispatch(Command::SetPage(4));
    let view = table.view();
    assert_eq!(view.bounds.total_pages, 4);
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.summary.to_string(), "31-37 of 37");
    // stepping past the end stays on the last page
    table.dispatch(Command::NextPage);
    assert_eq!(table.state().page, 4);
}

#[test]
fn empty_search_returns_input_unchanged() {
    let data = catalogue(25);
    let rows = filter_by_search(data.iter().collect(), TextField::Name, "");
    assert_eq!(ids(&rows), (1..=25).collect::<Vec<_>>());
}

#[test]
fn all_sentinel_returns_everything() {
    let data = catalogue(25);
    let rows = filter_by_section(data.iter().collect(), &SectionFilter::from("all"));
    assert_eq!(rows.len(), 25);
}

#[test]
fn inverted_price_range_is_empty_not_an_error() {
    let data = catalogue(25);
    let rows = filter_by_price_range(data.iter().collect(), Decimal::from(5), Decimal::from(3));
    assert!(rows.is_empty());
    let mut table = GroceryTable::new(&data, &[]);
    table.dispatch(Command::SetPriceRange(PriceRange::new(Decimal::from(5), Decimal::from(3))));
    let view = table.view();
    assert!(view.is_empty());
    assert_eq!(view.summary.to_string(), "0-0 of 0");
}

#[test]
fn toggling_price_twice_restores_ascending_order() {
    let data = catalogue(40);
    let mut table = GroceryTable::new(&data, &[]);
    table.dispatch(Command::SetSort(SortField::Price));
    let first = ids(&table.view().rows);
    table.dispatch(Command::SetSort(SortField::Price));
    assert_eq!(table.state().sort.order, SortOrder::Desc);
    table.dispatch(Command::SetSort(SortField::Price));
    assert_eq!(table.state().sort, SortDirective::new(SortField::Price, SortOrder::Asc));
    assert_eq!(ids(&table.view().rows), first);
}

#[test]
fn recompute_is_idempotent() {
    let data = catalogue(50);
    let state = TableState { page: 2, sort: SortDirective::new(SortField::Section, SortOrder::Desc), ..TableState::default() };
    assert_eq!(ids(run(&data, &state).page()), ids(run(&data, &state).page()));
}
