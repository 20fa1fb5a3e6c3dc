//! # typst-builder
//!
//! Build Typst markup from typed Rust values.
//!
//! Every Typst function call is described by an identity record
//! ([`Implement`]), a [`Func`] handle that can carry sub-functions, and one of
//! five call [`Shape`]s. Values render through [`render_value`], so the code
//! that comes out is always syntactically well formed:
//!
//! - Strings become quoted literals, content becomes `[...]` blocks
//! - Arrays and dictionaries use Typst's `(a, b)` / `(k: v)` forms
//! - Keyword arguments that were never set are left out of the call
//!
//! ## Quick Start
//!
//! ```
//! use typst_builder::library::model::{heading, par, HEADING};
//! use typst_builder::library::Element;
//! use typst_builder::{set_, Document, Params, Value};
//!
//! let mut doc = Document::new();
//! doc.add_set_rule(set_(&HEADING, &Params::new().set("numbering", "1.1")).unwrap());
//! doc.add_content(heading(Value::content("Intro")).level(1).render().unwrap());
//! doc.add_content(par(Value::content("Hello, World!")).justify(true).render().unwrap());
//!
//! assert_eq!(
//!     doc.render(),
//!     "#set heading(numbering: \"1.1\")\n\n\
//!      #heading(level: 1)[Intro]\n\n\
//!      #par(justify: true)[Hello, World!]"
//! );
//! ```
//!
//! ## High-Level API
//!
//! - [`library`]: Wrappers over Typst's built-in functions
//! - [`Document`]: Imports, set rules, show rules and content in one file
//! - [`factory`]: Call shapes for functions the library does not wrap
//!
//! ## Low-Level API
//!
//! - [`mod@call`]: The five call shapes and the [`Call`] builder
//! - [`func`]: Function identity and attachments
//! - [`render`]: Value rendering and keyword normalization
//! - [`validate`]: Input checks run before a call is rendered
//! - [`config`]: Runtime configuration (quantity precision)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod call;
pub mod config;
pub mod document;
pub mod error;
pub mod factory;
pub mod func;
pub mod library;
pub mod params;
pub mod render;
pub mod validate;
pub mod value;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use typst_builder::prelude::*;
///
/// let code = heading(Value::content("Title")).level(1).render().unwrap();
/// assert_eq!(code, "#heading(level: 1)[Title]");
/// ```
///
/// This includes:
/// - Values: `Value`, `Params`, the quantity types and `Label`
/// - Calls: `Call`, `Shape`, `Func`, `Implement`
/// - Documents: `Document`, `SharedDocument` and the statement helpers
/// - The `Element` trait and the common library builders
pub mod prelude {
    // Values
    pub use crate::{
        Alignment, Angle, Content, Fraction, Label, Length, Param, Params, Ratio, Relative, Value,
    };

    // Calls
    pub use crate::{Attachment, Call, Func, Implement, Shape};

    // Documents
    pub use crate::{import_, set_, show_, Document, PackageSpec, SharedDocument};

    // Errors
    pub use crate::{Error, Result};

    // Library
    pub use crate::library::layout::{align, grid, h, page, pagebreak, v};
    pub use crate::library::model::{
        bibliography, cite, emph, figure, footnote, heading, link, outline, par, ref_, strong,
        table,
    };
    pub use crate::library::text::{lorem, raw, text};
    pub use crate::library::visualize::{image, rgb};
    pub use crate::library::Element;
}

// =============================================================================
// Values and rendering
// =============================================================================

pub use params::{Param, Params};
pub use render::{
    format_array, format_dict, render_arg, render_key, render_params, render_value, DictBuilder,
};
#[cfg(feature = "json")]
pub use value::json_to_value;
pub use value::{
    Alignment, Angle, Content, Flags, Fraction, Label, Length, Ratio, Relative, Value,
};

// =============================================================================
// Calls and functions
// =============================================================================

pub use call::{Call, Shape};
pub use func::{Attachment, Func, Implement};
pub use validate::{is_valid, Predicate};

// =============================================================================
// Documents
// =============================================================================

pub use document::{import_, set_, show_, Document, PackageSpec, PackageVersion, SharedDocument};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
