//! Stable ordering of grocery rows for the active sort directive.

use std::cmp::Ordering;

use grocer_core::{GroceryItem, SortDirective, SortField, SortOrder};

use crate::collate::SortKey;
use crate::filter::Rows;

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

/// Compare two items under `directive`.
///
/// Items without a computable price per weight sort after all others in both
/// directions.
pub fn compare_items(a: &GroceryItem, b: &GroceryItem, directive: SortDirective) -> Ordering {
    match directive.field {
        SortField::Name => directed(crate::collate::compare(&a.name, &b.name), directive.order),
        SortField::Section => directed(crate::collate::compare(&a.section, &b.section), directive.order),
        SortField::Price => directed(a.price.cmp(&b.price), directive.order),
        SortField::PerWeight => match (a.price_per_weight(), b.price_per_weight()) {
            (Some(x), Some(y)) => directed(x.cmp(&y), directive.order),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable sort into a new order; `rows` itself is left as it was.
pub fn sort_items<'a>(rows: &[&'a GroceryItem], directive: SortDirective) -> Rows<'a> {
    match directive.field {
        SortField::Name | SortField::Section => {
            // Collation keys are built once per row rather than once per comparison.
            let mut keyed: Vec<(SortKey, &'a GroceryItem)> = rows
                .iter()
                .map(|it| {
                    let text = if directive.field == SortField::Name { &it.name } else { &it.section };
                    (SortKey::new(text), *it)
                })
                .collect();
            keyed.sort_by(|(ka, _), (kb, _)| directed(ka.cmp(kb), directive.order));
            keyed.into_iter().map(|(_, it)| it).collect()
        }
        SortField::Price | SortField::PerWeight => {
            let mut out = rows.to_vec();
            out.sort_by(|a, b| compare_items(a, b, directive));
            out
        }
    }
}
