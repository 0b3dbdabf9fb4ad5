use leptos::prelude::*;

use crate::field::{Field, HeaderSource};
use crate::item::Item;
use crate::model::{body_rows, resolve_cell, resolve_header, CellContent, HeaderContent};
use crate::slots::{CellSlots, HeaderSlots, RowSlot};

/// Page size the `per_page` prop declares by default.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Table widget: one header row from the field descriptors, one body row
/// per item, a `row-clicked`-style notification, and optional single-key
/// ascending sort.
///
/// Content precedence per cell: scoped override > formatter > raw value.
/// Per header cell: scoped override > label > key.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <MinimalTable
///         items=items
///         fields=vec![
///             Field::new("name").label("Naam"),
///             Field::new("balance").formatter(formatters::money_cell),
///         ]
///         sort_by="name".to_string()
///         on_row_click=Callback::new(|item: Item| log::info!("{item:?}"))
///     />
/// }
/// ```
#[component]
pub fn MinimalTable(
    /// Rows to render; one record per body row.
    #[prop(into)]
    items: Signal<Vec<Item>>,
    /// Column descriptors, one per column, in display order.
    fields: Vec<Field>,
    /// Which field attribute supplies the header text.
    #[prop(optional)]
    value_field: HeaderSource,
    /// Declared page size; no rendering behavior consumes it.
    #[prop(optional, default = DEFAULT_PER_PAGE)]
    per_page: usize,
    /// Field key to sort rows by, ascending, before rendering.
    #[prop(optional, into)]
    sort_by: MaybeProp<String>,
    /// Drop the cell borders.
    #[prop(optional)]
    borderless: bool,
    /// Condensed row spacing.
    #[prop(optional)]
    small: bool,
    /// Notified with the clicked row's record. Clicks are a no-op when
    /// absent.
    #[prop(optional)]
    on_row_click: Option<Callback<Item>>,
    /// Per-field cell overrides, keyed by field key.
    #[prop(optional)]
    cell_slots: CellSlots,
    /// Per-field header overrides, keyed by field key.
    #[prop(optional)]
    header_slots: HeaderSlots,
    /// Extra content appended to every row, after the field cells.
    #[prop(optional)]
    row_slot: Option<RowSlot>,
) -> impl IntoView {
    // TODO: feed per_page into pagination once the table paginates.
    let _ = per_page;

    let class = table_class(on_row_click.is_some(), borderless, small);

    let header = fields
        .iter()
        .map(|field| {
            let content = match resolve_header(&header_slots, field, value_field) {
                HeaderContent::Slot(slot) => slot(field),
                HeaderContent::Text(text) => text.to_string().into_any(),
            };
            view! { <th>{content}</th> }
        })
        .collect_view();

    let body = move || {
        let sort = sort_by.get();
        body_rows(&fields, &items.get(), sort.as_deref())
            .into_iter()
            .map(|row| {
                let item = row.item;
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| {
                        let cell_class = cell.classes.join(" ");
                        let content = match resolve_cell(&cell_slots, cell) {
                            CellContent::Slot(slot) => slot(&cell.value, &cell.key, &item),
                            CellContent::Text(text) => text.to_string().into_any(),
                        };
                        view! { <td class=cell_class>{content}</td> }
                    })
                    .collect_view();
                let extra = row_slot
                    .as_ref()
                    .map(|slot| view! { <td class="b-table-row-actions">{slot(&item)}</td> });

                view! {
                    <tr
                        role="row"
                        on:click=move |_| {
                            if let Some(listener) = on_row_click {
                                listener.run(item.clone());
                            }
                        }
                    >
                        {cells}
                        {extra}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div>
            <table class=class>
                <thead role="rowgroup">
                    <tr role="row">{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

/// Table element class list. The hover/selectable marker set tracks
/// clickability; the flags each toggle one class.
fn table_class(clickable: bool, borderless: bool, small: bool) -> String {
    let mut classes = vec!["table", "b-table"];
    if clickable {
        classes.extend(["table-hover", "b-table-selectable", "b-table-select-single"]);
    }
    if borderless {
        classes.push("table-borderless");
    }
    if small {
        classes.push("table-sm");
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_classes() {
        assert_eq!(table_class(false, false, false), "table b-table");
    }

    #[test]
    fn test_flags_each_toggle_one_class() {
        assert_eq!(
            table_class(false, true, true),
            "table b-table table-borderless table-sm"
        );
    }

    #[test]
    fn test_clickable_adds_selection_markers() {
        assert_eq!(
            table_class(true, false, false),
            "table b-table table-hover b-table-selectable b-table-select-single"
        );
    }
}
