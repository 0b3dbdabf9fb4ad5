use leptos::prelude::*;
use minimal_table::formatters;
use minimal_table::{
    display_value, field_value, CellSlots, Field, HeaderSlots, HeaderSource, Item, MinimalTable,
    RowSlot,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone, Debug, Serialize)]
struct Person {
    name: String,
    city: String,
    balance: f64,
}

fn person(name: &str, city: &str, balance: f64) -> Person {
    Person {
        name: name.to_string(),
        city: city.to_string(),
        balance,
    }
}

fn rows() -> Vec<Item> {
    [
        person("Xantippe", "Utrecht", 1234.5),
        person("Adam", "Amsterdam", -99.0),
        person("Harry", "Haarlem", 250000.75),
    ]
    .into_iter()
    .filter_map(|p| serde_json::to_value(p).ok())
    .filter_map(|v| v.as_object().cloned())
    .collect()
}

fn fields() -> Vec<Field> {
    vec![
        Field::new("name").label("Name"),
        Field::new("city").label("City"),
        Field::new("balance")
            .label("Balance")
            .formatter(formatters::money_cell)
            .td_class(|value, _, _| {
                if value.as_f64().unwrap_or(0.0) < 0.0 {
                    "cell-negative".to_string()
                } else {
                    String::new()
                }
            }),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let (items, set_items) = signal(rows());
    let (sort_key, set_sort_key) = signal("name".to_string());

    let add_person = move || {
        set_items.update(|rows| {
            let n = rows.len() + 1;
            if let Ok(Value::Object(row)) =
                serde_json::to_value(person(&format!("Guest {n}"), "Unknown", 0.0))
            {
                rows.push(row);
            }
        });
    };

    let cell_slots = CellSlots::new().cell("city", |value: &Value, _: &str, _: &Item| {
        let city = display_value(value);
        view! { <span class="badge">{city}</span> }.into_any()
    });

    let header_slots = HeaderSlots::new().header("balance", |field: &Field| {
        let label = field.header_text(HeaderSource::Label).to_string();
        view! { <span>{label}" (EUR)"</span> }.into_any()
    });

    let actions: RowSlot = Arc::new(|item: &Item| {
        let name = display_value(field_value(item, "name"));
        view! {
            <button
                class="button button--ghost"
                on:click=move |ev| {
                    ev.stop_propagation();
                    log::info!("action for {name}");
                }
            >
                {"open"}
            </button>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"People"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| add_person()>
                        {"Add person"}
                    </button>
                    <select
                        class="page-size-select"
                        on:change=move |ev| set_sort_key.set(event_target_value(&ev))
                        prop:value=move || sort_key.get()
                    >
                        {["name", "city", "balance"].into_iter().map(|key| {
                            view! {
                                <option value=key selected=move || sort_key.get() == key>
                                    {key}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <MinimalTable
                items=items
                fields=fields()
                sort_by=Signal::derive(move || Some(sort_key.get()))
                small=true
                cell_slots=cell_slots
                header_slots=header_slots
                row_slot=actions
                on_row_click=Callback::new(|item: Item| {
                    log::info!("row clicked: {}", display_value(field_value(&item, "name")));
                })
            />
        </div>
    }
}
