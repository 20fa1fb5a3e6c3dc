//! Function identity and sub-function attachment.
//!
//! Every wrapper is backed by a [`Func`]: an immutable [`Implement`] record
//! saying which Typst function it mirrors, plus named [`Attachment`]s to
//! auxiliary functions (`figure.caption`, `table.cell`, ...).
//!
//! Library functions are `static` items; attachments are non-owning
//! references to other statics.
//!
//! ```
//! use typst_builder::func::{Attachment, Func, Implement};
//!
//! static CAPTION: Func = Func::new(Implement::standard(
//!     "caption",
//!     "figure.caption",
//!     "https://typst.app/docs/reference/model/figure/#definitions-caption",
//! ));
//! static FIGURE_ATTACHMENTS: [Attachment; 1] = [Attachment::new("caption", &CAPTION)];
//! static FIGURE: Func = Func::with_attachments(
//!     Implement::standard("figure", "figure", "https://typst.app/docs/reference/model/figure/"),
//!     &FIGURE_ATTACHMENTS,
//! );
//!
//! assert_eq!(FIGURE.attr("caption").map(Func::name), Some("figure.caption"));
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};

const fn is_private(name: &str) -> bool {
    let bytes = name.as_bytes();
    !bytes.is_empty() && bytes[0] == b'_'
}

// =============================================================================
// Implement
// =============================================================================

/// Identity record of a function.
///
/// `original_name` and `hyperlink` are present exactly when the function is a
/// standard one, i.e. mirrors a Typst built-in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implement {
    is_standard: bool,
    name: Cow<'static, str>,
    original_name: Option<Cow<'static, str>>,
    hyperlink: Option<Cow<'static, str>>,
}

impl Implement {
    /// Create a record, checking the standard flag against the metadata.
    ///
    /// Empty strings count as absent.
    pub fn new(
        is_standard: bool,
        name: &str,
        original_name: Option<&str>,
        hyperlink: Option<&str>,
    ) -> Result<Self> {
        let original_name = Self::check(is_standard, "original_name", original_name)?;
        let hyperlink = Self::check(is_standard, "hyperlink", hyperlink)?;
        Ok(Self {
            is_standard,
            name: Cow::Owned(name.to_string()),
            original_name: original_name.map(|s| Cow::Owned(s.to_string())),
            hyperlink: hyperlink.map(|s| Cow::Owned(s.to_string())),
        })
    }

    fn check<'a>(
        is_standard: bool,
        field: &'static str,
        value: Option<&'a str>,
    ) -> Result<Option<&'a str>> {
        let value = value.filter(|s| !s.is_empty());
        match (is_standard, value) {
            (false, Some(_)) => Err(Error::InvalidImplement {
                field,
                reason: "only standard functions can have",
            }),
            (true, None) => Err(Error::InvalidImplement {
                field,
                reason: "standard functions must have",
            }),
            _ => Ok(value),
        }
    }

    /// A standard function mirroring a Typst built-in.
    ///
    /// # Panics
    ///
    /// If `original_name` or `hyperlink` is empty. In a `static` this is a
    /// compile error.
    pub const fn standard(
        name: &'static str,
        original_name: &'static str,
        hyperlink: &'static str,
    ) -> Self {
        assert!(!original_name.is_empty(), "standard function without a Typst name");
        assert!(!hyperlink.is_empty(), "standard function without a documentation link");
        Self {
            is_standard: true,
            name: Cow::Borrowed(name),
            original_name: Some(Cow::Borrowed(original_name)),
            hyperlink: Some(Cow::Borrowed(hyperlink)),
        }
    }

    /// A user-level function, rendered under its own name.
    pub const fn custom(name: &'static str) -> Self {
        Self {
            is_standard: false,
            name: Cow::Borrowed(name),
            original_name: None,
            hyperlink: None,
        }
    }

    /// A user-level function with a runtime name.
    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            is_standard: false,
            name: Cow::Owned(name.into()),
            original_name: None,
            hyperlink: None,
        }
    }

    /// Whether this mirrors a Typst built-in.
    pub fn is_standard(&self) -> bool {
        self.is_standard
    }

    /// Name on the Rust side.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the Typst built-in.
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    /// Link to the Typst documentation.
    pub fn hyperlink(&self) -> Option<&str> {
        self.hyperlink.as_deref()
    }

    /// Name written in the rendered call.
    pub fn call_name(&self) -> &str {
        self.original_name().unwrap_or(&self.name)
    }
}

/// Markdown reference row: `| standard | name | original | [original](link) |`.
impl fmt::Display for Implement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.original_name(), self.hyperlink()) {
            (Some(original), Some(link)) => write!(
                f,
                "| {} | {} | {original} | [{original}]({link}) |",
                self.is_standard, self.name
            ),
            _ => write!(f, "| {} | {} |  |  |", self.is_standard, self.name),
        }
    }
}

// =============================================================================
// Attachment
// =============================================================================

/// Named, non-owning reference from a function to a sub-function.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    name: Cow<'static, str>,
    func: &'static Func,
}

impl Attachment {
    /// Create an attachment for a static table.
    ///
    /// # Panics
    ///
    /// Panics if `name` starts with `_`. In a `static` initializer this is a
    /// compile-time error.
    pub const fn new(name: &'static str, func: &'static Func) -> Self {
        assert!(!is_private(name), "attachment names must not start with `_`");
        Self {
            name: Cow::Borrowed(name),
            func,
        }
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached function.
    pub fn func(&self) -> &'static Func {
        self.func
    }
}

// =============================================================================
// Func
// =============================================================================

/// A Typst function handle: identity plus attached sub-functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    implement: Implement,
    attachments: Cow<'static, [Attachment]>,
}

impl Func {
    /// A function without attachments.
    pub const fn new(implement: Implement) -> Self {
        Self {
            implement,
            attachments: Cow::Borrowed(&[]),
        }
    }

    /// A function with a static attachment table.
    pub const fn with_attachments(implement: Implement, attachments: &'static [Attachment]) -> Self {
        Self {
            implement,
            attachments: Cow::Borrowed(attachments),
        }
    }

    /// Attach `func` under `name`, or under its own name when `None`.
    ///
    /// Attaching to an existing name replaces it. Names starting with `_`
    /// are reserved and rejected.
    pub fn attach(mut self, func: &'static Func, name: Option<&str>) -> Result<Self> {
        let name = name.unwrap_or_else(|| func.implement.name());
        if is_private(name) {
            return Err(Error::InvalidAttachName(name.to_string()));
        }
        tracing::debug!(parent = self.name(), attachment = name, "attaching function");

        let attachments = self.attachments.to_mut();
        match attachments.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.func = func,
            None => attachments.push(Attachment {
                name: Cow::Owned(name.to_string()),
                func,
            }),
        }
        Ok(self)
    }

    /// The identity record.
    pub fn implement(&self) -> &Implement {
        &self.implement
    }

    /// Name written in the rendered call.
    pub fn name(&self) -> &str {
        self.implement.call_name()
    }

    /// Look up an attached function.
    pub fn attr(&self, name: &str) -> Option<&'static Func> {
        self.attachments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.func)
    }

    /// All attachments in order.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CELL: Func = Func::new(Implement::standard(
        "cell",
        "table.cell",
        "https://typst.app/docs/reference/model/table/#definitions-cell",
    ));
    static HLINE: Func = Func::new(Implement::standard(
        "hline",
        "table.hline",
        "https://typst.app/docs/reference/model/table/#definitions-hline",
    ));
    static HELPER: Func = Func::new(Implement::custom("_helper"));

    fn table() -> Func {
        Func::new(Implement::standard(
            "table",
            "table",
            "https://typst.app/docs/reference/model/table/",
        ))
    }

    #[test]
    fn test_standard_requires_metadata() {
        let err = Implement::new(true, "heading", None, Some("https://typst.app")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidImplement {
                field: "original_name",
                ..
            }
        ));
        assert!(Implement::new(true, "heading", Some("heading"), None).is_err());
        assert!(Implement::new(true, "heading", Some(""), Some("x")).is_err());
    }

    #[test]
    #[should_panic(expected = "without a Typst name")]
    fn test_const_standard_rejects_empty_name() {
        let _ = Implement::standard("heading", "", "https://typst.app");
    }

    #[test]
    #[should_panic(expected = "without a documentation link")]
    fn test_const_standard_rejects_empty_link() {
        let _ = Implement::standard("heading", "heading", "");
    }

    #[test]
    fn test_custom_rejects_metadata() {
        assert!(Implement::new(false, "x", Some("x"), None).is_err());
        assert!(Implement::new(false, "x", None, Some("https://typst.app")).is_err());
        let custom = Implement::new(false, "pad", None, None).unwrap();
        assert_eq!(custom.call_name(), "pad");
        assert!(!custom.is_standard());
    }

    #[test]
    fn test_call_name_prefers_original() {
        let implement = Implement::new(true, "bullet_list", Some("list"), Some("https://typst.app"))
            .unwrap();
        assert_eq!(implement.call_name(), "list");
        assert_eq!(implement.name(), "bullet_list");
    }

    #[test]
    fn test_display_rows() {
        let implement = Implement::standard("emph", "emph", "https://typst.app/docs/reference/model/emph/");
        assert_eq!(
            implement.to_string(),
            "| true | emph | emph | [emph](https://typst.app/docs/reference/model/emph/) |"
        );
        assert_eq!(Implement::custom("pad").to_string(), "| false | pad |  |  |");
    }

    #[test]
    fn test_attach_compose() {
        let table = table()
            .attach(&CELL, Some("cell"))
            .unwrap()
            .attach(&HLINE, None)
            .unwrap();
        assert_eq!(table.attr("cell"), Some(&CELL));
        assert_eq!(table.attr("hline").map(Func::name), Some("table.hline"));
        assert_eq!(table.attr("vline"), None);
        assert_eq!(table.attachments().len(), 2);
    }

    #[test]
    fn test_attach_replaces_same_name() {
        let table = table()
            .attach(&CELL, Some("line"))
            .unwrap()
            .attach(&HLINE, Some("line"))
            .unwrap();
        assert_eq!(table.attachments().len(), 1);
        assert_eq!(table.attr("line"), Some(&HLINE));
    }

    #[test]
    fn test_attach_rejects_private_name() {
        let err = table().attach(&CELL, Some("_cell")).unwrap_err();
        assert!(matches!(err, Error::InvalidAttachName(name) if name == "_cell"));
        assert!(table().attach(&HELPER, None).is_err());
    }
}
