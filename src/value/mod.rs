//! Typed parameter values.
//!
//! [`Value`] is everything a wrapper function can pass to a Typst call.
//! Rendering lives in [`crate::render`]; this module only defines the
//! variants and the conversions from Rust types.
//!
//! # Modules
//!
//! - [`units`] - Length, Ratio, Angle, Fraction and their sums
//! - [`flags`] - Combinable flag values (alignment)
//! - `content` - Markup content and labels
//! - `json` - `serde_json::Value` conversion (feature `json`)
//! - `datetime` - `chrono` conversion (feature `datetime`)

mod content;
#[cfg(feature = "datetime")]
mod datetime;
pub mod flags;
#[cfg(feature = "json")]
mod json;
pub mod units;

pub use content::{Content, Label};
pub use flags::{Alignment, Flags};
#[cfg(feature = "json")]
pub use json::json_to_value;
pub use units::{Angle, Fraction, Length, Ratio, Relative};

use crate::call::Call;

/// A value that can be rendered as a Typst literal.
///
/// Variants are listed in rendering priority order: a `Bool` is never treated
/// as text, and `Raw` is the catch-all for code that is already valid Typst.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `true` / `false`.
    Bool(bool),
    /// A string, rendered in double quotes without escaping.
    Str(String),
    /// Combinable flag, pre-resolved to its `A|B` name. `None` if unnamed.
    Flags(Option<String>),
    /// `(a, b, c)`.
    Array(Vec<Value>),
    /// `(key: value, ..)`.
    Dict(Vec<(String, Value)>),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// `none`.
    None,
    /// `auto`.
    Auto,
    /// Typst code emitted verbatim (`1fr`, `red`, `#lorem(20)`).
    Raw(String),
    /// Markup, emitted as a `[...]` block.
    Content(String),
    /// A call rendered in code position.
    Call(Box<Call>),
}

impl Value {
    /// Typst code emitted verbatim.
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }

    /// Markup content.
    pub fn content(markup: impl Into<String>) -> Self {
        Self::Content(markup.into())
    }

    /// Build a dictionary from entries, keeping their order.
    pub fn dict<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from items.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Primitive conversions
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

macro_rules! int_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::array(items)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Self::Array(vec![a.into(), b.into()])
    }
}

impl From<Call> for Value {
    fn from(call: Call) -> Self {
        Self::Call(Box::new(call))
    }
}
