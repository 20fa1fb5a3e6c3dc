//! Ordered keyword parameters.
//!
//! A [`Params`] map keeps parameters in declaration order. Entries can be
//! explicitly [`Param::Unset`]: that marker is distinct from Typst's `none`
//! ([`Value::None`]) and means "leave this parameter out of the call".

use indexmap::IndexMap;

use crate::value::Value;

/// A keyword parameter slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Param {
    /// Not provided; dropped when rendering.
    #[default]
    Unset,
    /// Provided value, rendered even when it equals the Typst default.
    Set(Value),
}

impl Param {
    /// The value, if set.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Whether this is the unset marker.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<V: Into<Value>> From<Option<V>> for Param {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Unset, |v| Self::Set(v.into()))
    }
}

/// Ordered map from identifier-style names to parameter slots.
///
/// Setting a key twice replaces the value in place; the key keeps the
/// position of its first insertion.
///
/// # Example
///
/// ```
/// use typst_builder::{render_params, Length, Params};
///
/// let params = Params::new()
///     .set("first_line_indent", Length::em(1.0))
///     .unset("hanging_indent")
///     .set("justify", true);
/// assert_eq!(
///     render_params(&params).unwrap(),
///     "first-line-indent: 1em, justify: true"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params {
    entries: IndexMap<String, Param>,
}

impl Params {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, Param::Set(value.into()));
        self
    }

    /// Set a parameter when `Some`, otherwise mark it unset.
    pub fn set_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert(key, Param::from(value));
        self
    }

    /// Mark a parameter unset, reserving its position.
    pub fn unset(mut self, key: impl Into<String>) -> Self {
        self.insert(key, Param::Unset);
        self
    }

    /// Insert a slot in place.
    pub fn insert(&mut self, key: impl Into<String>, param: Param) {
        self.entries.insert(key.into(), param);
    }

    /// Look up a slot.
    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries.get(key)
    }

    /// All slots in order, including unset ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Set values in order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(k, p)| p.value().map(|v| (k.as_str(), v)))
    }

    /// Whether no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.values().next().is_none()
    }

    /// Number of slots, including unset ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, Param::Set(value.into()));
        }
        params
    }
}
