//! Validation guard.
//!
//! Wrappers check their inputs with named predicates before rendering. A
//! failing predicate reports every variable it captured, so the error reads
//! `invalid parameters: style = invalid-style`.
//!
//! ```
//! use typst_builder::validate::{is_citation_style, is_valid};
//! use typst_builder::predicate;
//!
//! let style = "ieee";
//! assert!(is_valid(&[predicate!(style => is_citation_style(style))]).is_ok());
//!
//! let style = "invalid-style";
//! let err = is_valid(&[predicate!(style => is_citation_style(style))]).unwrap_err();
//! assert!(err.to_string().contains("style = invalid-style"));
//! ```

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::render::render_value;
use crate::value::Value;

// =============================================================================
// Predicates
// =============================================================================

/// A zero-argument check together with the variables it reads.
pub struct Predicate<'a> {
    check: Box<dyn Fn() -> bool + 'a>,
    captures: Vec<(&'static str, String)>,
}

impl<'a> Predicate<'a> {
    /// Create a predicate from a check and its `(name, value)` captures.
    ///
    /// Prefer the [`predicate!`](crate::predicate) macro, which records the
    /// captures for you.
    pub fn new(check: impl Fn() -> bool + 'a, captures: Vec<(&'static str, String)>) -> Self {
        Self {
            check: Box::new(check),
            captures,
        }
    }

    /// Evaluate the check.
    pub fn holds(&self) -> bool {
        (self.check)()
    }

    /// Captured variables as `name = value, ...`.
    pub fn captures(&self) -> String {
        self.captures
            .iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("captures", &self.captures)
            .finish_non_exhaustive()
    }
}

/// Build a [`Predicate`] that captures the listed variables by name.
///
/// Each variable must implement `Display`.
///
/// ```
/// use typst_builder::predicate;
///
/// let level = 7;
/// let check = predicate!(level => (1..=6).contains(&level));
/// assert!(!check.holds());
/// assert_eq!(check.captures(), "level = 7");
/// ```
#[macro_export]
macro_rules! predicate {
    ($($var:ident),+ => $check:expr) => {
        $crate::validate::Predicate::new(
            || $check,
            vec![$((stringify!($var), ($var).to_string())),+],
        )
    };
}

/// Evaluate predicates in order, failing on the first that does not hold.
///
/// An empty list always passes.
pub fn is_valid(predicates: &[Predicate<'_>]) -> Result<()> {
    for predicate in predicates {
        if !predicate.holds() {
            let captures = predicate.captures();
            tracing::debug!(%captures, "validation failed");
            return Err(Error::Validation { captures });
        }
    }
    Ok(())
}

// =============================================================================
// Whitelists
// =============================================================================

/// Paper size names accepted by `page(paper: ..)`.
pub static VALID_PAPER_SIZES: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PAPER_SIZES.into_iter().collect());

/// Built-in citation style names accepted by `bibliography` and `cite`.
pub static VALID_CITATION_STYLES: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| CITATION_STYLES.into_iter().collect());

/// Whether `name` is a known paper size.
pub fn is_paper_size(name: &str) -> bool {
    VALID_PAPER_SIZES.contains(name)
}

/// Whether `name` is a built-in citation style.
pub fn is_citation_style(name: &str) -> bool {
    VALID_CITATION_STYLES.contains(name)
}

// =============================================================================
// Literal sets
// =============================================================================

/// The closed set of string literals a parameter accepts, optionally
/// alongside `auto` or an integer.
///
/// ```
/// use typst_builder::validate::LiteralSet;
/// use typst_builder::Value;
///
/// static EDGES: LiteralSet = LiteralSet::new(&["baseline", "descender", "bounds"]);
/// assert!(EDGES.accepts(&Value::from("bounds")));
/// assert!(!EDGES.accepts(&Value::from("top")));
/// assert!(!EDGES.accepts(&Value::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSet {
    names: &'static [&'static str],
    auto: bool,
    int: bool,
}

impl LiteralSet {
    /// Accept exactly these strings.
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self {
            names,
            auto: false,
            int: false,
        }
    }

    /// Also accept `auto`.
    pub const fn or_auto(mut self) -> Self {
        self.auto = true;
        self
    }

    /// Also accept any integer.
    pub const fn or_int(mut self) -> Self {
        self.int = true;
        self
    }

    /// The accepted strings.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Whether `value` is a member.
    pub fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::Str(name) => self.names.contains(&name.as_str()),
            Value::Auto => self.auto,
            Value::Int(_) => self.int,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Choice {
    key: &'static str,
    value: Value,
    set: &'static LiteralSet,
}

/// Literal-valued parameters recorded by a builder, checked when the call is
/// produced.
///
/// Setting the same key again replaces the earlier value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Choices(Vec<Choice>);

impl Choices {
    /// Record `value` for `key`, to be checked against `set`.
    pub fn record(&mut self, key: &'static str, value: Value, set: &'static LiteralSet) {
        self.0.retain(|choice| choice.key != key);
        self.0.push(Choice { key, value, set });
    }

    /// Check every recorded value, in the order they were set.
    pub fn check(&self) -> Result<()> {
        let predicates: Vec<_> = self
            .0
            .iter()
            .map(|choice| {
                let shown = match &choice.value {
                    Value::Str(name) => name.clone(),
                    other => render_value(other).unwrap_or_else(|_| format!("{other:?}")),
                };
                Predicate::new(move || choice.set.accepts(&choice.value), vec![(choice.key, shown)])
            })
            .collect();
        is_valid(&predicates)
    }
}

const PAPER_SIZES: [&str; 107] = [
    "a0",
    "a1",
    "a10",
    "a11",
    "a2",
    "a3",
    "a4",
    "a5",
    "a6",
    "a7",
    "a8",
    "a9",
    "ansi-a",
    "ansi-b",
    "ansi-c",
    "ansi-d",
    "ansi-e",
    "arch-a",
    "arch-b",
    "arch-c",
    "arch-d",
    "arch-e",
    "arch-e1",
    "asia-f4",
    "cn-business-card",
    "din-d3",
    "din-d4",
    "din-d5",
    "din-d6",
    "din-d7",
    "din-d8",
    "eu-business-card",
    "fr-carré",
    "fr-couronne-écriture",
    "fr-couronne-édition",
    "fr-jésus",
    "fr-raisin",
    "fr-tellière",
    "iso-b1",
    "iso-b2",
    "iso-b3",
    "iso-b4",
    "iso-b5",
    "iso-b6",
    "iso-b7",
    "iso-b8",
    "iso-c3",
    "iso-c4",
    "iso-c5",
    "iso-c6",
    "iso-c7",
    "iso-c8",
    "iso-id-1",
    "iso-id-2",
    "iso-id-3",
    "jis-b0",
    "jis-b1",
    "jis-b10",
    "jis-b11",
    "jis-b2",
    "jis-b3",
    "jis-b4",
    "jis-b5",
    "jis-b6",
    "jis-b7",
    "jis-b8",
    "jis-b9",
    "jp-business-card",
    "jp-kiku-4",
    "jp-kiku-5",
    "jp-shiroku-ban-4",
    "jp-shiroku-ban-5",
    "jp-shiroku-ban-6",
    "newspaper-berliner",
    "newspaper-broadsheet",
    "newspaper-compact",
    "presentation-16-9",
    "presentation-4-3",
    "sac-d0",
    "sac-d1",
    "sac-d2",
    "sac-d3",
    "sac-d4",
    "sac-d5",
    "sac-d6",
    "sis-e5",
    "sis-g5",
    "uk-book-a",
    "uk-book-b",
    "uk-brief",
    "uk-crown",
    "uk-draft",
    "uk-foolscap",
    "uk-quarto",
    "us-business-card",
    "us-digest",
    "us-executive",
    "us-foolscap-folio",
    "us-gov-legal",
    "us-gov-letter",
    "us-ledger",
    "us-legal",
    "us-letter",
    "us-oficio",
    "us-statement",
    "us-tabloid",
    "us-trade",
];

const CITATION_STYLES: [&str; 82] = [
    "alphanumeric",
    "american-anthropological-association",
    "american-chemical-society",
    "american-geophysical-union",
    "american-institute-of-aeronautics-and-astronautics",
    "american-institute-of-physics",
    "american-medical-association",
    "american-meteorological-society",
    "american-physics-society",
    "american-physiological-society",
    "american-political-science-association",
    "american-psychological-association",
    "american-society-for-microbiology",
    "american-society-of-civil-engineers",
    "american-society-of-mechanical-engineers",
    "american-sociological-association",
    "angewandte-chemie",
    "annual-reviews",
    "annual-reviews-author-date",
    "associacao-brasileira-de-normas-tecnicas",
    "association-for-computing-machinery",
    "biomed-central",
    "bristol-university-press",
    "british-medical-journal",
    "cell",
    "chicago-author-date",
    "chicago-fullnotes",
    "chicago-notes",
    "copernicus",
    "council-of-science-editors",
    "council-of-science-editors-author-date",
    "current-opinion",
    "deutsche-gesellschaft-für-psychologie",
    "deutsche-sprache",
    "elsevier-harvard",
    "elsevier-vancouver",
    "elsevier-with-titles",
    "frontiers",
    "future-medicine",
    "future-science",
    "gb-7714-2005-numeric",
    "gb-7714-2015-author-date",
    "gb-7714-2015-note",
    "gb-7714-2015-numeric",
    "gost-r-705-2008-numeric",
    "harvard-cite-them-right",
    "ieee",
    "institute-of-electrical-and-electronics-engineers",
    "institute-of-physics-numeric",
    "iso-690-author-date",
    "iso-690-numeric",
    "karger",
    "mary-ann-liebert-vancouver",
    "modern-humanities-research-association",
    "modern-language-association",
    "modern-language-association-8",
    "multidisciplinary-digital-publishing-institute",
    "nature",
    "pensoft",
    "public-library-of-science",
    "royal-society-of-chemistry",
    "sage-vancouver",
    "sist02",
    "spie",
    "springer-basic",
    "springer-basic-author-date",
    "springer-fachzeitschriften-medizin-psychologie",
    "springer-humanities-author-date",
    "springer-lecture-notes-in-computer-science",
    "springer-mathphys",
    "springer-socpsych-author-date",
    "springer-vancouver",
    "taylor-and-francis-chicago-author-date",
    "taylor-and-francis-national-library-of-medicine",
    "the-institution-of-engineering-and-technology",
    "the-lancet",
    "thieme",
    "trends",
    "turabian-author-date",
    "turabian-fullnote-8",
    "vancouver",
    "vancouver-superscript",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passes() {
        assert!(is_valid(&[]).is_ok());
    }

    #[test]
    fn test_first_failure_reports_captures() {
        let style = "invalid-style";
        let level = 3;
        let err = is_valid(&[
            predicate!(level => level > 0),
            predicate!(style, level => is_citation_style(style) && level > 0),
        ])
        .unwrap_err();
        assert!(matches!(&err, Error::Validation { captures } if captures == "style = invalid-style, level = 3"));
        assert!(err.to_string().contains("style = invalid-style"));
    }

    #[test]
    fn test_literal_set_membership() {
        static LINEBREAKS: LiteralSet = LiteralSet::new(&["simple", "optimized"]).or_auto();
        static WEIGHTS: LiteralSet = LiteralSet::new(&["regular", "bold"]).or_int();
        assert!(LINEBREAKS.accepts(&Value::from("simple")));
        assert!(LINEBREAKS.accepts(&Value::Auto));
        assert!(!LINEBREAKS.accepts(&Value::Int(1)));
        assert!(WEIGHTS.accepts(&Value::Int(700)));
        assert!(!WEIGHTS.accepts(&Value::Auto));
        assert!(!WEIGHTS.accepts(&Value::raw("\"bold\"")));
    }

    #[test]
    fn test_choices_report_offending_value() {
        static FORMS: LiteralSet = LiteralSet::new(&["normal", "page"]);
        let mut choices = Choices::default();
        choices.record("form", Value::from("page"), &FORMS);
        assert!(choices.check().is_ok());

        choices.record("form", Value::from("bogus"), &FORMS);
        let err = choices.check().unwrap_err();
        assert_eq!(err.to_string(), "invalid parameters: form = bogus");

        choices.record("form", Value::Auto, &FORMS);
        assert_eq!(choices.check().unwrap_err().to_string(), "invalid parameters: form = auto");
    }

    #[test]
    fn test_stops_at_first_failure() {
        let a = 1;
        let b = 2;
        let err = is_valid(&[predicate!(a => a == 0), predicate!(b => b == 0)]).unwrap_err();
        assert_eq!(err.to_string(), "invalid parameters: a = 1");
    }

    #[test]
    fn test_whitelists() {
        assert!(is_paper_size("a4"));
        assert!(is_paper_size("us-letter"));
        assert!(is_paper_size("fr-jésus"));
        assert!(!is_paper_size("\"a4\""));
        assert!(!is_paper_size("a12"));
        assert!(is_citation_style("ieee"));
        assert!(is_citation_style("gb-7714-2015-numeric"));
        assert!(!is_citation_style("invalid-style"));
        assert_eq!(VALID_PAPER_SIZES.len(), PAPER_SIZES.len());
        assert_eq!(VALID_CITATION_STYLES.len(), CITATION_STYLES.len());
    }
}
