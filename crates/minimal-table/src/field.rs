use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::item::Item;

/// Transforms a raw cell value into its display text.
///
/// Receives the value under the field's key (null when missing), the key
/// itself, and the whole record.
pub type FormatterFn = Arc<dyn Fn(&Value, &str, &Item) -> String + Send + Sync>;

/// Derives extra CSS classes for a cell, whitespace-separated.
pub type TdClassFn = Arc<dyn Fn(&Value, &str, &Item) -> String + Send + Sync>;

/// Which field attribute supplies the header text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderSource {
    /// The field's `label`, falling back to `key` when absent or empty.
    #[default]
    Label,
    /// Always the field's `key`.
    Key,
}

/// Describes one table column.
///
/// # Example
///
/// ```rust,ignore
/// Field::new("balance")
///     .label("Balance")
///     .formatter(formatters::money_cell)
///     .td_class(|value, _, _| {
///         if value.as_f64().unwrap_or(0.0) < 0.0 { "cell-negative".into() } else { String::new() }
///     })
/// ```
#[derive(Clone)]
pub struct Field {
    /// Record attribute this column reads; doubles as default header text.
    pub key: String,
    /// Overrides the header text when present.
    pub label: Option<String>,
    /// Transforms the raw value into cell text.
    pub formatter: Option<FormatterFn>,
    /// Derives the cell's class list.
    pub td_class: Option<TdClassFn>,
}

impl Field {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            formatter: None,
            td_class: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value, &str, &Item) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn td_class<F>(mut self, td_class: F) -> Self
    where
        F: Fn(&Value, &str, &Item) -> String + Send + Sync + 'static,
    {
        self.td_class = Some(Arc::new(td_class));
        self
    }

    /// Header text under the given source.
    pub fn header_text(&self, source: HeaderSource) -> &str {
        match source {
            HeaderSource::Label => self
                .label
                .as_deref()
                .filter(|label| !label.is_empty())
                .unwrap_or(&self.key),
            HeaderSource::Key => &self.key,
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("formatter", &self.formatter.is_some())
            .field("td_class", &self.td_class.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_text_label_overrides_key() {
        let field = Field::new("name").label("Naam");
        assert_eq!(field.header_text(HeaderSource::Label), "Naam");
    }

    #[test]
    fn test_header_text_falls_back_to_key() {
        let field = Field::new("name");
        assert_eq!(field.header_text(HeaderSource::Label), "name");
    }

    #[test]
    fn test_header_text_empty_label_falls_back_to_key() {
        let field = Field::new("name").label("");
        assert_eq!(field.header_text(HeaderSource::Label), "name");
    }

    #[test]
    fn test_header_text_key_source_ignores_label() {
        let field = Field::new("name").label("Naam");
        assert_eq!(field.header_text(HeaderSource::Key), "name");
    }
}
