//! Minimal table component for Leptos.
//!
//! Renders a header row and body rows from a list of [`Field`] descriptors
//! and a list of [`Item`] records. Supports per-field formatters and cell
//! classes, scoped cell/header overrides, a row-click notification, and
//! optional single-key ascending sort.

pub mod field;
pub mod formatters;
pub mod item;
mod model;
pub mod slots;
pub mod sort;
pub mod table;

pub use field::{Field, FormatterFn, HeaderSource, TdClassFn};
pub use item::{display_value, field_value, Item};
pub use slots::{CellSlots, HeaderSlots, RowSlot};
pub use table::*;
