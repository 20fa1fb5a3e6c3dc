//! Text styling and decorations.

use crate::call::{Call, Shape};
use crate::func::{Attachment, Func};
use crate::library::{choices, element, setters, standard};
use crate::validate::LiteralSet;
use crate::value::{Alignment, Length, Ratio, Relative, Value};

/// `highlight`.
pub static HIGHLIGHT: Func = Func::new(standard!("text/", "highlight", "highlight", "highlight/"));
/// `linebreak`.
pub static LINEBREAK: Func = Func::new(standard!("text/", "linebreak", "linebreak", "linebreak/"));
/// `lorem`.
pub static LOREM: Func = Func::new(standard!("text/", "lorem", "lorem", "lorem/"));
/// `lower`.
pub static LOWER: Func = Func::new(standard!("text/", "lower", "lower", "lower/"));
/// `overline`.
pub static OVERLINE: Func = Func::new(standard!("text/", "overline", "overline", "overline/"));

/// `raw.line`.
pub static RAW_LINE: Func = Func::new(standard!("text/", "raw_line", "raw.line", "raw/#definitions-line"));
static RAW_ATTACHMENTS: [Attachment; 1] = [Attachment::new("line", &RAW_LINE)];
/// `raw`.
pub static RAW: Func = Func::with_attachments(standard!("text/", "raw", "raw", "raw/"), &RAW_ATTACHMENTS);

/// `smallcaps`.
pub static SMALLCAPS: Func = Func::new(standard!("text/", "smallcaps", "smallcaps", "smallcaps/"));
/// `smartquote`.
pub static SMARTQUOTE: Func = Func::new(standard!("text/", "smartquote", "smartquote", "smartquote/"));
/// `strike`.
pub static STRIKE: Func = Func::new(standard!("text/", "strike", "strike", "strike/"));
/// `sub`.
pub static SUBSCRIPT: Func = Func::new(standard!("text/", "subscript", "sub", "sub/"));
/// `super`.
pub static SUPERSCRIPT: Func = Func::new(standard!("text/", "superscript", "super", "super/"));
/// `text`.
pub static TEXT: Func = Func::new(standard!("text/", "text", "text", "text/"));
/// `underline`.
pub static UNDERLINE: Func = Func::new(standard!("text/", "underline", "underline", "underline/"));
/// `upper`.
pub static UPPER: Func = Func::new(standard!("text/", "upper", "upper", "upper/"));

static STYLES: LiteralSet = LiteralSet::new(&["normal", "italic", "oblique"]);
static WEIGHTS: LiteralSet = LiteralSet::new(&[
    "thin",
    "extralight",
    "light",
    "regular",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
])
.or_int();
static TOP_EDGES: LiteralSet =
    LiteralSet::new(&["ascender", "cap-height", "x-height", "baseline", "bounds"]);
static BOTTOM_EDGES: LiteralSet = LiteralSet::new(&["baseline", "descender", "bounds"]);
static NUMBER_TYPES: LiteralSet = LiteralSet::new(&["lining", "old-style"]).or_auto();
static NUMBER_WIDTHS: LiteralSet = LiteralSet::new(&["proportional", "tabular"]).or_auto();

/// Primary functions of this module.
pub static FUNCTIONS: &[&Func] = &[
    &HIGHLIGHT,
    &LINEBREAK,
    &LOREM,
    &LOWER,
    &OVERLINE,
    &RAW,
    &SMALLCAPS,
    &SMARTQUOTE,
    &STRIKE,
    &SUBSCRIPT,
    &SUPERSCRIPT,
    &TEXT,
    &UNDERLINE,
    &UPPER,
];

// =============================================================================
// text
// =============================================================================

element! {
    /// `text`: customized text.
    ///
    /// ```
    /// use typst_builder::library::text::text;
    /// use typst_builder::library::Element;
    /// use typst_builder::{Length, Value};
    ///
    /// let code = text(Value::content("Hi"))
    ///     .font(vec!["Arial", "Noto Sans CJK SC"])
    ///     .size(Length::zihao("小四").unwrap())
    ///     .render()
    ///     .unwrap();
    /// assert_eq!(code, r#"#text(font: ("Arial", "Noto Sans CJK SC"), size: 12pt)[Hi]"#);
    /// ```
    Text; choices
}

/// Style `body`.
pub fn text(body: impl Into<Value>) -> Text {
    Text::from_call(Call::new(&TEXT, Shape::Normal).body(body))
}

impl Text {
    setters! {
        /// Font family, or a priority list of families.
        font: Value;
        /// Fall back to other fonts for missing glyphs.
        fallback: bool;
        /// Font stretch.
        stretch: Ratio;
        /// Font size.
        size: Length;
        /// Glyph color.
        fill: Value;
        /// Glyph outline.
        stroke: Value;
        /// Extra space between characters.
        tracking: Length;
        /// Space between words.
        spacing: Relative;
        /// Shift relative to the baseline.
        baseline: Length;
        /// Allow overhang of punctuation into the margin.
        overhang: bool;
        /// ISO 639-1/2/3 language code.
        lang: Value;
        /// ISO 3166-1 alpha-2 region code.
        region: Value;
        /// OpenType writing script.
        script: Value;
        /// Text direction, `ltr` or `rtl`.
        dir: Value;
        /// Hyphenate text.
        hyphenate: bool;
        /// Apply kerning.
        kerning: bool;
        /// Apply stylistic alternates.
        alternates: bool;
        /// Apply standard ligatures.
        ligatures: bool;
        /// Draw zeros with a slash.
        slashed_zero: bool;
        /// Render vulgar fractions.
        fractions: bool;
        /// Raw OpenType features.
        features: Value;
    }

    choices! {
        /// `"normal"`, `"italic"` or `"oblique"`.
        style: STYLES;
        /// Weight as an integer or a name such as `"bold"`.
        weight: WEIGHTS;
        /// Top of the frame around the text, e.g. `"cap-height"`.
        top_edge: TOP_EDGES;
        /// `"baseline"`, `"descender"` or `"bounds"`.
        bottom_edge: BOTTOM_EDGES;
        /// `auto`, `"lining"` or `"old-style"`.
        number_type: NUMBER_TYPES;
        /// `auto`, `"proportional"` or `"tabular"`.
        number_width: NUMBER_WIDTHS;
    }
}

// =============================================================================
// Case & generated text
// =============================================================================

element! {
    /// `lorem`: blind text.
    Lorem
}

/// Blind text of `words` words.
pub fn lorem(words: u32) -> Lorem {
    Lorem {
        call: Call::new(&LOREM, Shape::Positional).arg(words),
    }
}

element! {
    /// `lower`: lowercased text or content.
    Lower
}

/// Lowercase `text`.
pub fn lower(text: impl Into<Value>) -> Lower {
    Lower {
        call: Call::new(&LOWER, Shape::Normal).body(text),
    }
}

element! {
    /// `upper`: uppercased text or content.
    Upper
}

/// Uppercase `text`.
pub fn upper(text: impl Into<Value>) -> Upper {
    Upper {
        call: Call::new(&UPPER, Shape::Normal).body(text),
    }
}

element! {
    /// `smallcaps`: small capitals.
    Smallcaps
}

/// Display `body` in small capitals.
pub fn smallcaps(body: impl Into<Value>) -> Smallcaps {
    Smallcaps {
        call: Call::new(&SMALLCAPS, Shape::Normal).body(body),
    }
}

impl Smallcaps {
    setters! {
        /// Also turn uppercase letters into small capitals.
        all: bool;
    }
}

element! {
    /// `smartquote`: a context-aware quote.
    Smartquote
}

/// A smart quote.
pub fn smartquote() -> Smartquote {
    Smartquote {
        call: Call::new(&SMARTQUOTE, Shape::Normal),
    }
}

impl Smartquote {
    setters! {
        /// Double instead of single quote.
        double: bool;
        /// Enable smart quotes.
        enabled: bool;
        /// Use alternative quotes.
        alternative: bool;
        /// Quote characters to use.
        quotes: Value;
    }
}

element! {
    /// `linebreak`: a line break.
    Linebreak
}

/// A line break.
pub fn linebreak() -> Linebreak {
    Linebreak {
        call: Call::new(&LINEBREAK, Shape::Normal),
    }
}

impl Linebreak {
    setters! {
        /// Justify the line before the break.
        justify: bool;
    }
}

// =============================================================================
// Scripts
// =============================================================================

element! {
    /// `sub`: subscript.
    Subscript
}

/// Set `body` in subscript.
pub fn subscript(body: impl Into<Value>) -> Subscript {
    Subscript {
        call: Call::new(&SUBSCRIPT, Shape::Normal).body(body),
    }
}

impl Subscript {
    setters! {
        /// Prefer the font's dedicated glyphs.
        typographic: bool;
        /// Synthesized baseline shift.
        baseline: Length;
        /// Synthesized font size.
        size: Length;
    }
}

element! {
    /// `super`: superscript.
    Superscript
}

/// Set `body` in superscript.
pub fn superscript(body: impl Into<Value>) -> Superscript {
    Superscript {
        call: Call::new(&SUPERSCRIPT, Shape::Normal).body(body),
    }
}

impl Superscript {
    setters! {
        /// Prefer the font's dedicated glyphs.
        typographic: bool;
        /// Synthesized baseline shift.
        baseline: Length;
        /// Synthesized font size.
        size: Length;
    }
}

// =============================================================================
// Decorations
// =============================================================================

element! {
    /// `highlight`: a background highlight.
    Highlight; choices
}

/// Highlight `body`.
pub fn highlight(body: impl Into<Value>) -> Highlight {
    Highlight::from_call(Call::new(&HIGHLIGHT, Shape::Normal).body(body))
}

impl Highlight {
    setters! {
        /// Background color.
        fill: Value;
        /// Border stroke.
        stroke: Value;
        /// Horizontal overhang.
        extent: Length;
        /// Corner radius.
        radius: Relative;
    }

    choices! {
        /// Top edge of the background.
        top_edge: TOP_EDGES;
        /// Bottom edge of the background.
        bottom_edge: BOTTOM_EDGES;
    }
}

element! {
    /// `underline`: a line below text.
    Underline
}

/// Underline `body`.
pub fn underline(body: impl Into<Value>) -> Underline {
    Underline {
        call: Call::new(&UNDERLINE, Shape::Normal).body(body),
    }
}

impl Underline {
    setters! {
        /// Line stroke.
        stroke: Value;
        /// Offset from the baseline.
        offset: Length;
        /// Horizontal overhang.
        extent: Length;
        /// Leave gaps around descenders.
        evade: bool;
        /// Draw behind the text.
        background: bool;
    }
}

element! {
    /// `overline`: a line above text.
    Overline
}

/// Overline `body`.
pub fn overline(body: impl Into<Value>) -> Overline {
    Overline {
        call: Call::new(&OVERLINE, Shape::Normal).body(body),
    }
}

impl Overline {
    setters! {
        /// Line stroke.
        stroke: Value;
        /// Offset from the baseline.
        offset: Length;
        /// Horizontal overhang.
        extent: Length;
        /// Leave gaps around ascenders.
        evade: bool;
        /// Draw behind the text.
        background: bool;
    }
}

element! {
    /// `strike`: a line through text.
    Strike
}

/// Strike through `body`.
pub fn strike(body: impl Into<Value>) -> Strike {
    Strike {
        call: Call::new(&STRIKE, Shape::Normal).body(body),
    }
}

impl Strike {
    setters! {
        /// Line stroke.
        stroke: Value;
        /// Offset from the baseline.
        offset: Length;
        /// Horizontal overhang.
        extent: Length;
        /// Draw behind the text.
        background: bool;
    }
}

// =============================================================================
// Raw
// =============================================================================

element! {
    /// `raw`: verbatim text with optional syntax highlighting.
    Raw
}

/// Raw `text`.
pub fn raw(text: impl Into<String>) -> Raw {
    let text: String = text.into();
    Raw {
        call: Call::new(&RAW, Shape::Normal).body(text),
    }
}

impl Raw {
    setters! {
        /// Display as a block.
        block: bool;
        /// Language for highlighting.
        lang: Value;
        /// Alignment of the lines in a block.
        align: Alignment;
        /// Extra syntax definition files.
        syntaxes: Value;
        /// Theme file.
        theme: Value;
        /// Width of a tab in spaces.
        tab_size: i64;
    }
}

element! {
    /// `raw.line`: one highlighted line of a raw block.
    RawLine
}

/// Line `number` of `count`, with its `text` and highlighted `body`.
pub fn raw_line(number: i64, count: i64, text: impl Into<String>, body: impl Into<Value>) -> RawLine {
    let text: String = text.into();
    RawLine {
        call: Call::new(&RAW_LINE, Shape::Positional)
            .arg(number)
            .arg(count)
            .arg(text)
            .arg(body),
    }
}
