use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;

use crate::field::Field;
use crate::item::Item;

/// Renders consumer-supplied content in place of a field's default cell.
///
/// Receives the cell's raw value, the field key, and the whole record.
pub type CellSlotFn = Arc<dyn Fn(&Value, &str, &Item) -> AnyView + Send + Sync>;

/// Renders consumer-supplied content in place of a field's header text.
pub type HeaderSlotFn = Arc<dyn Fn(&Field) -> AnyView + Send + Sync>;

/// Extra content appended to every body row, after the field cells.
pub type RowSlot = Arc<dyn Fn(&Item) -> AnyView + Send + Sync>;

/// Per-field cell overrides, keyed by field key.
///
/// An override wins over the field's formatter and the raw value.
#[derive(Clone, Default)]
pub struct CellSlots {
    slots: HashMap<String, CellSlotFn>,
}

impl CellSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override for the cells of `key`.
    pub fn cell<F>(mut self, key: impl Into<String>, slot: F) -> Self
    where
        F: Fn(&Value, &str, &Item) -> AnyView + Send + Sync + 'static,
    {
        self.slots.insert(key.into(), Arc::new(slot));
        self
    }

    pub(crate) fn get(&self, key: &str) -> Option<&CellSlotFn> {
        self.slots.get(key)
    }
}

/// Per-field header overrides, keyed by field key.
///
/// An override wins over the field's label and key text.
#[derive(Clone, Default)]
pub struct HeaderSlots {
    slots: HashMap<String, HeaderSlotFn>,
}

impl HeaderSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override for the header cell of `key`.
    pub fn header<F>(mut self, key: impl Into<String>, slot: F) -> Self
    where
        F: Fn(&Field) -> AnyView + Send + Sync + 'static,
    {
        self.slots.insert(key.into(), Arc::new(slot));
        self
    }

    pub(crate) fn get(&self, key: &str) -> Option<&HeaderSlotFn> {
        self.slots.get(key)
    }
}
