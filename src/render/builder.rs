//! Typst dict/array builder utilities.
//!
//! Helpers for constructing collection values and formatting their literals.

use crate::value::Value;

/// Builder for Typst dictionary values.
///
/// # Example
///
/// ```
/// use typst_builder::{render_value, DictBuilder, Length};
///
/// let indent = DictBuilder::new()
///     .field("amount", Length::em(2.0))
///     .field("all", true)
///     .build();
/// assert_eq!(render_value(&indent).unwrap(), "(amount: 2em, all: true)");
/// ```
#[derive(Default)]
pub struct DictBuilder {
    fields: Vec<(String, Value)>,
}

impl DictBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Add an optional field (None outputs `none`).
    pub fn field_opt<K, V>(mut self, key: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let value = value.map_or(Value::None, Into::into);
        self.fields.push((key.into(), value));
        self
    }

    /// Add a field with raw Typst code (no conversion).
    pub fn field_raw<K, V>(mut self, key: K, code: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push((key.into(), Value::Raw(code.into())));
        self
    }

    /// Build the dictionary value.
    pub fn build(self) -> Value {
        Value::Dict(self.fields)
    }
}

/// Format rendered items as Typst array literal.
///
/// Handles edge cases:
/// - Empty: `()`
/// - Single: `(item,)` (trailing comma required)
/// - Multiple: `(a, b, c)`
pub fn format_array(items: Vec<String>) -> String {
    match items.len() {
        0 => "()".to_string(),
        1 => format!("({},)", items[0]),
        _ => format!("({})", items.join(", ")),
    }
}

/// Format rendered `key: value` pairs as Typst dictionary literal.
///
/// An empty dictionary is `(:)`, distinct from the empty array.
pub fn format_dict(entries: Vec<String>) -> String {
    if entries.is_empty() {
        "(:)".to_string()
    } else {
        format!("({})", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_formatting() {
        assert_eq!(format_array(vec![]), "()");
        assert_eq!(format_array(vec!["a".into()]), "(a,)");
        assert_eq!(format_array(vec!["a".into(), "b".into()]), "(a, b)");
    }

    #[test]
    fn test_dict_formatting() {
        assert_eq!(format_dict(vec![]), "(:)");
        assert_eq!(format_dict(vec!["a: 1".into()]), "(a: 1)");
    }

    #[test]
    fn test_dict_builder() {
        let value = DictBuilder::new()
            .field("name", "test")
            .field_opt("value", Some(42))
            .field_opt("empty", None::<&str>)
            .field_raw("paint", "red")
            .build();
        assert_eq!(
            value,
            Value::Dict(vec![
                ("name".into(), Value::Str("test".into())),
                ("value".into(), Value::Int(42)),
                ("empty".into(), Value::None),
                ("paint".into(), Value::Raw("red".into())),
            ])
        );
    }
}
