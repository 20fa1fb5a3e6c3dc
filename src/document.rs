//! Document accumulation.
//!
//! A [`Document`] collects already-rendered statements into four sections and
//! writes them out in a fixed order: imports, set rules, show rules, contents.
//!
//! # Example
//!
//! ```
//! use typst_builder::document::{import_, set_, Document, PackageSpec};
//! use typst_builder::library::model::HEADING;
//! use typst_builder::Params;
//!
//! let mut doc = Document::new();
//! doc.add_import(import_(PackageSpec::preview("cetz", 0, 3, 1), &["canvas"]));
//! doc.add_set_rule(set_(&HEADING, &Params::new().set("outlined", true)).unwrap());
//! doc.add_content("= Hello");
//!
//! assert_eq!(
//!     doc.render(),
//!     "#import \"@preview/cetz:0.3.1\": canvas\n\n#set heading(outlined: true)\n\n= Hello"
//! );
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::func::Func;
use crate::params::Params;
use crate::render::render_params;

// =============================================================================
// Document
// =============================================================================

/// Ordered, append-only buckets of rendered statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    imports: Vec<String>,
    set_rules: Vec<String>,
    show_rules: Vec<String>,
    contents: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an import statement. See [`import_`].
    pub fn add_import(&mut self, import: impl Into<String>) {
        self.imports.push(import.into());
    }

    /// Append a set rule. See [`set_`].
    pub fn add_set_rule(&mut self, rule: impl Into<String>) {
        self.set_rules.push(rule.into());
    }

    /// Append a show rule. See [`show_`].
    pub fn add_show_rule(&mut self, rule: impl Into<String>) {
        self.show_rules.push(rule.into());
    }

    /// Append a content block.
    pub fn add_content(&mut self, content: impl Into<String>) {
        self.contents.push(content.into());
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
            && self.set_rules.is_empty()
            && self.show_rules.is_empty()
            && self.contents.is_empty()
    }

    /// Serialize all sections.
    ///
    /// Rules are separated by a newline, contents by a blank line, sections
    /// by a blank line. Empty sections are skipped and trailing whitespace is
    /// trimmed.
    pub fn render(&self) -> String {
        let sections = [
            (&self.imports, "\n"),
            (&self.set_rules, "\n"),
            (&self.show_rules, "\n"),
            (&self.contents, "\n\n"),
        ];

        let mut out = String::new();
        for (entries, sep) in sections {
            if !entries.is_empty() {
                out.push_str(&entries.join(sep));
                out.push_str("\n\n");
            }
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Write the rendered document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.render();
        std::fs::write(path, &text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved document");
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// SharedDocument
// =============================================================================

/// A [`Document`] that can be appended to from several threads.
///
/// Cloning yields another handle to the same document.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument(Arc<Mutex<Document>>);

impl SharedDocument {
    /// Create an empty shared document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an import statement.
    pub fn add_import(&self, import: impl Into<String>) {
        self.0.lock().add_import(import);
    }

    /// Append a set rule.
    pub fn add_set_rule(&self, rule: impl Into<String>) {
        self.0.lock().add_set_rule(rule);
    }

    /// Append a show rule.
    pub fn add_show_rule(&self, rule: impl Into<String>) {
        self.0.lock().add_show_rule(rule);
    }

    /// Append a content block.
    pub fn add_content(&self, content: impl Into<String>) {
        self.0.lock().add_content(content);
    }

    /// Run `f` with exclusive access to the document.
    pub fn with<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// Serialize the current state.
    pub fn render(&self) -> String {
        self.0.lock().render()
    }

    /// Write the current state to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.0.lock().save(path)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Document {
        self.0.lock().clone()
    }
}

impl From<Document> for SharedDocument {
    fn from(doc: Document) -> Self {
        Self(Arc::new(Mutex::new(doc)))
    }
}

// =============================================================================
// Statements
// =============================================================================

/// A semantic version number (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageVersion {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Patch version number.
    pub patch: u32,
}

impl PackageVersion {
    /// Create a new version.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A Typst package reference, displayed as `@namespace/name:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageSpec {
    namespace: String,
    name: String,
    version: PackageVersion,
}

impl PackageSpec {
    /// Create a package reference.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, version: PackageVersion) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            version,
        }
    }

    /// A package from the `@preview` namespace.
    pub fn preview(name: impl Into<String>, major: u32, minor: u32, patch: u32) -> Self {
        Self::new("preview", name, PackageVersion::new(major, minor, patch))
    }

    /// The namespace (`preview` for `@preview/cetz`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The package name (`cetz` for `@preview/cetz`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package version.
    pub fn version(&self) -> PackageVersion {
        self.version
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}/{}:{}", self.namespace, self.name, self.version)
    }
}

/// `#import "source": a, b`, or `#import "source"` when `names` is empty.
///
/// `source` is a file path or a [`PackageSpec`].
pub fn import_(source: impl fmt::Display, names: &[&str]) -> String {
    if names.is_empty() {
        format!("#import \"{source}\"")
    } else {
        format!("#import \"{source}\": {}", names.join(", "))
    }
}

/// `#set name(params)`.
pub fn set_(func: &Func, params: &Params) -> Result<String> {
    Ok(format!("#set {}({})", func.name(), render_params(params)?))
}

/// `#show selector: rule`, or `#show: rule` for an everything-rule.
///
/// `rule` may be a rendered call; one leading `#` is stripped.
pub fn show_(selector: Option<&str>, rule: &str) -> String {
    let rule = rule.strip_prefix('#').unwrap_or(rule);
    match selector {
        Some(selector) => format!("#show {selector}: {rule}"),
        None => format!("#show: {rule}"),
    }
}
