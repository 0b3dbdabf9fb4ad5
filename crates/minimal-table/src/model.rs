//! Pure render model: computes the header and body structure as plain data
//! so the component stays a thin view over it.

use serde_json::Value;

use crate::field::{Field, HeaderSource};
use crate::item::{display_value, field_value, Item};
use crate::slots::{CellSlotFn, CellSlots, HeaderSlotFn, HeaderSlots};
use crate::sort::sorted_items;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BodyCell {
    pub key: String,
    /// Formatter output when the field has one, raw value text otherwise.
    pub text: String,
    pub classes: Vec<String>,
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BodyRow {
    /// The record this row displays; emitted on row click.
    pub item: Item,
    pub cells: Vec<BodyCell>,
}

/// One body row per item (sorted when `sort_by` is set), one cell per field,
/// both in input order.
pub(crate) fn body_rows(fields: &[Field], items: &[Item], sort_by: Option<&str>) -> Vec<BodyRow> {
    if let Some(key) = sort_by {
        if !fields.iter().any(|field| field.key == key) {
            log::debug!("sort_by key {key:?} does not match any field");
        }
    }

    sorted_items(items, sort_by)
        .into_iter()
        .map(|item| {
            let cells = fields
                .iter()
                .map(|field| {
                    let value = field_value(&item, &field.key).clone();
                    let text = match &field.formatter {
                        Some(format) => format(&value, &field.key, &item),
                        None => display_value(&value),
                    };
                    let classes = match &field.td_class {
                        Some(td_class) => td_class(&value, &field.key, &item)
                            .split_whitespace()
                            .map(str::to_string)
                            .collect(),
                        None => Vec::new(),
                    };
                    BodyCell {
                        key: field.key.clone(),
                        text,
                        classes,
                        value,
                    }
                })
                .collect();
            BodyRow { item, cells }
        })
        .collect()
}

pub(crate) enum CellContent<'a> {
    /// Scoped override; wins over formatter and raw value.
    Slot(&'a CellSlotFn),
    Text(&'a str),
}

pub(crate) fn resolve_cell<'a>(slots: &'a CellSlots, cell: &'a BodyCell) -> CellContent<'a> {
    match slots.get(&cell.key) {
        Some(slot) => CellContent::Slot(slot),
        None => CellContent::Text(&cell.text),
    }
}

pub(crate) enum HeaderContent<'a> {
    /// Scoped override; wins over label and key.
    Slot(&'a HeaderSlotFn),
    Text(&'a str),
}

pub(crate) fn resolve_header<'a>(
    slots: &'a HeaderSlots,
    field: &'a Field,
    source: HeaderSource,
) -> HeaderContent<'a> {
    match slots.get(&field.key) {
        Some(slot) => HeaderContent::Slot(slot),
        None => HeaderContent::Text(field.header_text(source)),
    }
}
