//! Wrappers over Typst's built-in functions.
//!
//! # Modules
//!
//! - [`model`] - Document structure: headings, figures, lists, tables, citations
//! - [`text`] - Text styling and decorations
//! - [`visualize`] - Images and colors
//! - [`layout`] - Pages, spacing, alignment, grids
//!
//! Every wrapper returns a builder. Keyword parameters are set with methods
//! named after the Typst parameter; anything not set is left out of the call.
//! Finish a builder with [`Element::render`] for markup, or nest it inside
//! another call through [`Element::into_call`].
//!
//! # Example
//!
//! ```
//! use typst_builder::library::model::{figure, heading};
//! use typst_builder::library::visualize::image;
//! use typst_builder::library::Element;
//! use typst_builder::{Ratio, Value};
//!
//! let code = heading(Value::content("Results")).level(2).render().unwrap();
//! assert_eq!(code, "#heading(level: 2)[Results]");
//!
//! let code = figure(image("chart.png").width(Ratio::new(70.0)))
//!     .caption(Value::content("Growth."))
//!     .label("fig:growth")
//!     .render()
//!     .unwrap();
//! assert_eq!(
//!     code,
//!     r#"#figure(image("chart.png", width: 70%), caption: [Growth.]) <fig:growth>"#
//! );
//! ```

use crate::call::Call;
use crate::error::Result;
use crate::func::Func;

pub mod layout;
pub mod model;
pub mod text;
pub mod visualize;

/// A library builder that can be turned into a call.
pub trait Element: Sized {
    /// Check the inputs and produce the call.
    fn into_call(self) -> Result<Call>;

    /// Render as markup.
    fn render(self) -> Result<String> {
        self.into_call()?.render()
    }
}

/// Declare a builder struct wrapping a [`Call`].
///
/// These builders have nothing to validate, so they also convert into a
/// [`Value`](crate::Value) directly.
macro_rules! element {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            call: $crate::call::Call,
        }

        impl $name {
            /// Label the element.
            pub fn label(mut self, label: impl Into<$crate::value::Label>) -> Self {
                self.call = self.call.label(label);
                self
            }
        }

        impl $crate::library::Element for $name {
            fn into_call(self) -> $crate::error::Result<$crate::call::Call> {
                Ok(self.call)
            }
        }

        impl From<$name> for $crate::value::Value {
            fn from(element: $name) -> Self {
                Self::from(element.call)
            }
        }
    };
    ($(#[$attr:meta])* $name:ident; choices) => {
        $(#[$attr])*
        ///
        /// Literal-valued parameters are checked when the call is produced, so
        /// nest this builder with
        /// [`Element::into_call`](crate::library::Element::into_call).
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            call: $crate::call::Call,
            choices: $crate::validate::Choices,
        }

        impl $name {
            fn from_call(call: $crate::call::Call) -> Self {
                Self {
                    call,
                    choices: $crate::validate::Choices::default(),
                }
            }

            /// Label the element.
            pub fn label(mut self, label: impl Into<$crate::value::Label>) -> Self {
                self.call = self.call.label(label);
                self
            }
        }

        impl $crate::library::Element for $name {
            fn into_call(self) -> $crate::error::Result<$crate::call::Call> {
                self.choices.check()?;
                Ok(self.call)
            }
        }
    };
}

/// Keyword parameter setters, one per Typst parameter.
///
/// `name: Type` accepts anything convertible into `Type`.
macro_rules! setters {
    ($($(#[$attr:meta])* $name:ident: $ty:ty;)*) => {
        $(
            $(#[$attr])*
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                let value: $ty = value.into();
                self.call = self.call.param(stringify!($name), value);
                self
            }
        )*
    };
}

/// Setters for parameters restricted to a [`LiteralSet`](crate::validate::LiteralSet).
///
/// `name: SET` records the value so [`Element::into_call`] can check it.
/// Pass strings for the named literals, [`Value::Auto`](crate::Value::Auto)
/// or an integer where the set allows them.
macro_rules! choices {
    ($($(#[$attr:meta])* $name:ident: $set:path;)*) => {
        $(
            $(#[$attr])*
            pub fn $name(mut self, value: impl Into<$crate::value::Value>) -> Self {
                let value: $crate::value::Value = value.into();
                self.call = self.call.param(stringify!($name), value.clone());
                self.choices.record(stringify!($name), value, &$set);
                self
            }
        )*
    };
}

/// Identity of a standard function documented under
/// `https://typst.app/docs/reference/{section}{page}`.
macro_rules! standard {
    ($section:literal, $name:literal, $original:literal, $page:literal) => {
        $crate::func::Implement::standard(
            $name,
            $original,
            concat!("https://typst.app/docs/reference/", $section, $page),
        )
    };
}

pub(crate) use choices;
pub(crate) use element;
pub(crate) use setters;
pub(crate) use standard;

/// Every library function with its sub-functions, in documentation order.
pub fn functions() -> Vec<&'static Func> {
    let mut out = Vec::new();
    for func in model::FUNCTIONS
        .iter()
        .chain(text::FUNCTIONS)
        .chain(visualize::FUNCTIONS)
        .chain(layout::FUNCTIONS)
    {
        out.push(*func);
        out.extend(func.attachments().iter().map(|a| a.func()));
    }
    out
}

/// Markdown reference table of every library function.
///
/// # Example
///
/// ```
/// let table = typst_builder::library::reference();
/// assert!(table.starts_with("| Standard | Name | Typst | Documentation |"));
/// assert!(table.contains("| true | figure_caption | figure.caption |"));
/// ```
pub fn reference() -> String {
    let mut lines = vec![
        "| Standard | Name | Typst | Documentation |".to_string(),
        "| --- | --- | --- | --- |".to_string(),
    ];
    lines.extend(functions().iter().map(|func| func.implement().to_string()));
    lines.join("\n")
}
