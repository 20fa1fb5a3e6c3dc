//! Pages, spacing, alignment and grids.

use crate::call::{Call, Shape};
use crate::error::Result;
use crate::func::Func;
use crate::library::{element, setters, standard, Element};
use crate::predicate;
use crate::validate::{is_paper_size, is_valid};
use crate::value::{Alignment, Label, Relative, Value};

/// `align`.
pub static ALIGN: Func = Func::new(standard!("layout/", "align", "align", "align/"));
/// `grid`.
pub static GRID: Func = Func::new(standard!("layout/", "grid", "grid", "grid/"));
/// `h`.
pub static HSPACE: Func = Func::new(standard!("layout/", "hspace", "h", "h/"));
/// `pad`.
pub static PAD: Func = Func::new(standard!("layout/", "pad", "pad", "pad/"));
/// `page`.
pub static PAGE: Func = Func::new(standard!("layout/", "page", "page", "page/"));
/// `pagebreak`.
pub static PAGEBREAK: Func = Func::new(standard!("layout/", "pagebreak", "pagebreak", "pagebreak/"));
/// `v`.
pub static VSPACE: Func = Func::new(standard!("layout/", "vspace", "v", "v/"));

/// Primary functions of this module.
pub static FUNCTIONS: &[&Func] = &[&ALIGN, &GRID, &HSPACE, &PAD, &PAGE, &PAGEBREAK, &VSPACE];

// =============================================================================
// Pages
// =============================================================================

/// `page`: page setup, usually used in a set rule.
///
/// The paper name is checked against the known paper sizes when the call is
/// produced.
///
/// ```
/// use typst_builder::library::layout::page;
/// use typst_builder::library::Element;
/// use typst_builder::Length;
///
/// let code = page().paper("a4").margin(Length::cm(2.5)).render().unwrap();
/// assert_eq!(code, r#"#page(paper: "a4", margin: 2.5cm)"#);
/// assert!(page().paper("a12").render().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    call: Call,
    paper: Option<String>,
}

/// A page, optionally wrapping `body` with [`Page::body`].
pub fn page() -> Page {
    Page {
        call: Call::new(&PAGE, Shape::Normal),
        paper: None,
    }
}

impl Page {
    setters! {
        /// Page width.
        width: Value;
        /// Page height.
        height: Value;
        /// Swap width and height.
        flipped: bool;
        /// Margins, a length or a dictionary of sides.
        margin: Value;
        /// Which side is the binding side.
        binding: Value;
        /// Number of columns.
        columns: i64;
        /// Background fill.
        fill: Value;
        /// Page numbering pattern.
        numbering: Value;
        /// Alignment of the page number.
        number_align: Alignment;
        /// Header content.
        header: Value;
        /// Gap between header and body.
        header_ascent: Relative;
        /// Footer content.
        footer: Value;
        /// Gap between footer and body.
        footer_descent: Relative;
        /// Content behind the page.
        background: Value;
        /// Content in front of the page.
        foreground: Value;
    }

    /// Standard paper size name, e.g. `"a4"` or `"us-letter"`.
    pub fn paper(mut self, paper: impl Into<String>) -> Self {
        let paper = paper.into();
        self.call = self.call.param("paper", paper.as_str());
        self.paper = Some(paper);
        self
    }

    /// Content placed on the page.
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.call = self.call.body(body);
        self
    }

    /// Label the page.
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.call = self.call.label(label);
        self
    }
}

impl Element for Page {
    fn into_call(self) -> Result<Call> {
        if let Some(paper) = &self.paper {
            is_valid(&[predicate!(paper => is_paper_size(paper))])?;
        }
        Ok(self.call)
    }
}

element! {
    /// `pagebreak`: a manual page break.
    Pagebreak
}

/// A page break.
pub fn pagebreak() -> Pagebreak {
    Pagebreak {
        call: Call::new(&PAGEBREAK, Shape::Normal),
    }
}

impl Pagebreak {
    setters! {
        /// Skip the break if the page is already empty.
        weak: bool;
        /// `"even"` or `"odd"` to break to that kind of page.
        to: Value;
    }
}

// =============================================================================
// Spacing
// =============================================================================

element! {
    /// `pad`: space around content.
    Pad
}

/// Pad `body`.
pub fn pad(body: impl Into<Value>) -> Pad {
    Pad {
        call: Call::new(&PAD, Shape::Normal).body(body),
    }
}

impl Pad {
    setters! {
        /// Left padding.
        left: Relative;
        /// Top padding.
        top: Relative;
        /// Right padding.
        right: Relative;
        /// Bottom padding.
        bottom: Relative;
        /// Left and right padding.
        x: Relative;
        /// Top and bottom padding.
        y: Relative;
        /// Padding on all sides.
        rest: Relative;
    }
}

element! {
    /// `h` / `v`: horizontal or vertical spacing.
    Spacing
}

/// Horizontal spacing of `amount`, a length, ratio or fraction.
pub fn h(amount: impl Into<Value>) -> Spacing {
    Spacing {
        call: Call::new(&HSPACE, Shape::Normal).body(amount),
    }
}

/// Vertical spacing of `amount`, a length, ratio or fraction.
pub fn v(amount: impl Into<Value>) -> Spacing {
    Spacing {
        call: Call::new(&VSPACE, Shape::Normal).body(amount),
    }
}

impl Spacing {
    setters! {
        /// Collapse at the start or end of a line or region.
        weak: bool;
    }
}

// =============================================================================
// Arrangement
// =============================================================================

element! {
    /// `align`: aligned content.
    Align
}

/// Align `body` by `alignment`.
pub fn align(alignment: Alignment, body: impl Into<Value>) -> Align {
    Align {
        call: Call::new(&ALIGN, Shape::Normal).body(alignment).arg(body),
    }
}

element! {
    /// `grid`: content arranged in a grid.
    Grid
}

/// A grid of `children`.
pub fn grid<I>(children: I) -> Grid
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Grid {
        call: Call::new(&GRID, Shape::PostSeries).args(children),
    }
}

impl Grid {
    setters! {
        /// Column count or sizes.
        columns: Value;
        /// Row sizes.
        rows: Value;
        /// Gap between rows and columns.
        gutter: Value;
        /// Gap between columns.
        column_gutter: Value;
        /// Gap between rows.
        row_gutter: Value;
        /// Cell fill.
        fill: Value;
        /// Cell alignment.
        align: Value;
        /// Cell stroke.
        stroke: Value;
        /// Cell inset.
        inset: Value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Fraction, Length, Ratio};
    use crate::Error;

    #[test]
    fn test_page_paper_validation() {
        let err = page().paper("a12").render().unwrap_err();
        assert!(matches!(&err, Error::Validation { captures } if captures == "paper = a12"));
        let code = page().paper("us-letter").flipped(true).render().unwrap();
        assert_eq!(code, r#"#page(paper: "us-letter", flipped: true)"#);
    }

    #[test]
    fn test_page_without_paper_skips_validation() {
        let code = page().width(Length::cm(10.0)).body(Value::content("x")).render().unwrap();
        assert_eq!(code, "#page(width: 10cm)[x]");
    }

    #[test]
    fn test_pad() {
        let code = pad(Value::content("Hello, world!"))
            .left(Ratio::new(4.0) + Length::pt(0.0))
            .top(Length::pt(2.0))
            .render()
            .unwrap();
        assert_eq!(code, "#pad(left: 4%+0pt, top: 2pt)[Hello, world!]");
    }

    #[test]
    fn test_spacing() {
        assert_eq!(h(Fraction::new(1.0)).render().unwrap(), "#h(1fr)");
        assert_eq!(v(Length::em(0.6)).weak(true).render().unwrap(), "#v(0.6em, weak: true)");
        assert_eq!(pagebreak().weak(true).render().unwrap(), "#pagebreak(weak: true)");
    }

    #[test]
    fn test_align() {
        let code = align(Alignment::CENTER | Alignment::HORIZON, Value::content("Mid"))
            .render()
            .unwrap();
        assert_eq!(code, "#align(center+horizon, [Mid])");
        assert!(!typst::syntax::parse(&code).erroneous());
    }

    #[test]
    fn test_grid() {
        let code = grid([Value::content("a"), Value::content("b")])
            .columns(vec![Fraction::new(1.0), Fraction::new(2.0)])
            .render()
            .unwrap();
        assert_eq!(code, "#grid(columns: (1fr, 2fr), [a], [b])");
    }
}
