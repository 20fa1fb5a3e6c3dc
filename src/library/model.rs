//! Document structure: headings, paragraphs, figures, lists, tables and
//! bibliography management.

use crate::call::{Call, Shape};
use crate::error::Result;
use crate::func::{Attachment, Func};
use crate::library::{choices, element, setters, standard, Element};
use crate::predicate;
use crate::validate::{is_citation_style, is_valid, Choices, LiteralSet};
use crate::value::{Alignment, Label, Length, Relative, Value};

// =============================================================================
// Functions
// =============================================================================

/// `bibliography`.
pub static BIBLIOGRAPHY: Func = Func::new(standard!("model/", "bibliography", "bibliography", "bibliography/"));
/// `cite`.
pub static CITE: Func = Func::new(standard!("model/", "cite", "cite", "cite/"));
/// `document`.
pub static DOCUMENT: Func = Func::new(standard!("model/", "document", "document", "document/"));
/// `emph`.
pub static EMPH: Func = Func::new(standard!("model/", "emph", "emph", "emph/"));

/// `figure.caption`.
pub static FIGURE_CAPTION: Func =
    Func::new(standard!("model/", "figure_caption", "figure.caption", "figure/#definitions-caption"));
static FIGURE_ATTACHMENTS: [Attachment; 1] = [Attachment::new("caption", &FIGURE_CAPTION)];
/// `figure`.
pub static FIGURE: Func = Func::with_attachments(standard!("model/", "figure", "figure", "figure/"), &FIGURE_ATTACHMENTS);

/// `footnote.entry`.
pub static FOOTNOTE_ENTRY: Func =
    Func::new(standard!("model/", "footnote_entry", "footnote.entry", "footnote/#definitions-entry"));
static FOOTNOTE_ATTACHMENTS: [Attachment; 1] = [Attachment::new("entry", &FOOTNOTE_ENTRY)];
/// `footnote`.
pub static FOOTNOTE: Func =
    Func::with_attachments(standard!("model/", "footnote", "footnote", "footnote/"), &FOOTNOTE_ATTACHMENTS);

/// `heading`.
pub static HEADING: Func = Func::new(standard!("model/", "heading", "heading", "heading/"));
/// `link`.
pub static LINK: Func = Func::new(standard!("model/", "link", "link", "link/"));

/// `list.item`.
pub static BULLET_LIST_ITEM: Func =
    Func::new(standard!("model/", "bullet_list_item", "list.item", "list/#definitions-item"));
static BULLET_LIST_ATTACHMENTS: [Attachment; 1] = [Attachment::new("item", &BULLET_LIST_ITEM)];
/// `list`.
pub static BULLET_LIST: Func =
    Func::with_attachments(standard!("model/", "bullet_list", "list", "list/"), &BULLET_LIST_ATTACHMENTS);

/// `enum.item`.
pub static NUMBERED_LIST_ITEM: Func =
    Func::new(standard!("model/", "numbered_list_item", "enum.item", "enum/#definitions-item"));
static NUMBERED_LIST_ATTACHMENTS: [Attachment; 1] = [Attachment::new("item", &NUMBERED_LIST_ITEM)];
/// `enum`.
pub static NUMBERED_LIST: Func =
    Func::with_attachments(standard!("model/", "numbered_list", "enum", "enum/"), &NUMBERED_LIST_ATTACHMENTS);

/// `numbering`.
pub static NUMBERING: Func = Func::new(standard!("model/", "numbering", "numbering", "numbering/"));

/// `outline.entry`.
pub static OUTLINE_ENTRY: Func =
    Func::new(standard!("model/", "outline_entry", "outline.entry", "outline/#definitions-entry"));
/// `indented`, a method of outline entries.
pub static OUTLINE_INDENTED: Func = Func::new(standard!(
    "model/",
    "outline_indented",
    "indented",
    "outline/#definitions-entry-definitions-indented"
));
/// `prefix`, a method of outline entries.
pub static OUTLINE_PREFIX: Func = Func::new(standard!(
    "model/",
    "outline_prefix",
    "prefix",
    "outline/#definitions-entry-definitions-prefix"
));
/// `inner`, a method of outline entries.
pub static OUTLINE_INNER: Func = Func::new(standard!(
    "model/",
    "outline_inner",
    "inner",
    "outline/#definitions-entry-definitions-inner"
));
/// `body`, a method of outline entries.
pub static OUTLINE_BODY: Func = Func::new(standard!(
    "model/",
    "outline_body",
    "body",
    "outline/#definitions-entry-definitions-body"
));
/// `page`, a method of outline entries.
pub static OUTLINE_PAGE: Func = Func::new(standard!(
    "model/",
    "outline_page",
    "page",
    "outline/#definitions-entry-definitions-page"
));
static OUTLINE_ATTACHMENTS: [Attachment; 6] = [
    Attachment::new("entry", &OUTLINE_ENTRY),
    Attachment::new("indented", &OUTLINE_INDENTED),
    Attachment::new("prefix", &OUTLINE_PREFIX),
    Attachment::new("inner", &OUTLINE_INNER),
    Attachment::new("body", &OUTLINE_BODY),
    Attachment::new("page", &OUTLINE_PAGE),
];
/// `outline`.
pub static OUTLINE: Func =
    Func::with_attachments(standard!("model/", "outline", "outline", "outline/"), &OUTLINE_ATTACHMENTS);

/// `par.line`.
pub static PAR_LINE: Func = Func::new(standard!("model/", "par_line", "par.line", "par/#definitions-line"));
static PAR_ATTACHMENTS: [Attachment; 1] = [Attachment::new("line", &PAR_LINE)];
/// `par`.
pub static PAR: Func = Func::with_attachments(standard!("model/", "par", "par", "par/"), &PAR_ATTACHMENTS);
/// `parbreak`.
pub static PARBREAK: Func = Func::new(standard!("model/", "parbreak", "parbreak", "parbreak/"));
/// `quote`.
pub static QUOTE: Func = Func::new(standard!("model/", "quote", "quote", "quote/"));
/// `ref`.
pub static REF: Func = Func::new(standard!("model/", "ref", "ref", "ref/"));
/// `strong`.
pub static STRONG: Func = Func::new(standard!("model/", "strong", "strong", "strong/"));

/// `table.cell`.
pub static TABLE_CELL: Func = Func::new(standard!("model/", "table_cell", "table.cell", "table/#definitions-cell"));
/// `table.hline`.
pub static TABLE_HLINE: Func = Func::new(standard!("model/", "table_hline", "table.hline", "table/#definitions-hline"));
/// `table.vline`.
pub static TABLE_VLINE: Func = Func::new(standard!("model/", "table_vline", "table.vline", "table/#definitions-vline"));
/// `table.header`.
pub static TABLE_HEADER: Func =
    Func::new(standard!("model/", "table_header", "table.header", "table/#definitions-header"));
/// `table.footer`.
pub static TABLE_FOOTER: Func =
    Func::new(standard!("model/", "table_footer", "table.footer", "table/#definitions-footer"));
static TABLE_ATTACHMENTS: [Attachment; 5] = [
    Attachment::new("cell", &TABLE_CELL),
    Attachment::new("hline", &TABLE_HLINE),
    Attachment::new("vline", &TABLE_VLINE),
    Attachment::new("header", &TABLE_HEADER),
    Attachment::new("footer", &TABLE_FOOTER),
];
/// `table`.
pub static TABLE: Func = Func::with_attachments(standard!("model/", "table", "table", "table/"), &TABLE_ATTACHMENTS);

/// `terms.item`.
pub static TERMS_ITEM: Func = Func::new(standard!("model/", "terms_item", "terms.item", "terms/#definitions-item"));
static TERMS_ATTACHMENTS: [Attachment; 1] = [Attachment::new("item", &TERMS_ITEM)];
/// `terms`.
pub static TERMS: Func = Func::with_attachments(standard!("model/", "terms", "terms", "terms/"), &TERMS_ATTACHMENTS);

/// Primary functions of this module; sub-functions are reached through
/// their attachments.
pub static FUNCTIONS: &[&Func] = &[
    &BIBLIOGRAPHY,
    &CITE,
    &DOCUMENT,
    &EMPH,
    &FIGURE,
    &FOOTNOTE,
    &HEADING,
    &LINK,
    &BULLET_LIST,
    &NUMBERED_LIST,
    &NUMBERING,
    &OUTLINE,
    &PAR,
    &PARBREAK,
    &QUOTE,
    &REF,
    &STRONG,
    &TABLE,
    &TERMS,
];

static CITE_FORMS: LiteralSet = LiteralSet::new(&["normal", "prose", "full", "author", "year"]);
static REF_FORMS: LiteralSet = LiteralSet::new(&["normal", "page"]);
static FIGURE_SCOPES: LiteralSet = LiteralSet::new(&["column", "parent"]);
static PAR_LINEBREAKS: LiteralSet = LiteralSet::new(&["simple", "optimized"]).or_auto();
static PAR_LINE_SCOPES: LiteralSet = LiteralSet::new(&["document", "page"]);

// =============================================================================
// Bibliography & citations
// =============================================================================

/// `bibliography`: a bibliography from one or more `.bib`/`.yml` files.
///
/// The style is checked against the built-in citation styles when the call
/// is produced.
///
/// ```
/// use typst_builder::library::model::bibliography;
/// use typst_builder::library::Element;
///
/// let code = bibliography("refs.bib").style("cell").render().unwrap();
/// assert_eq!(code, r#"#bibliography("refs.bib", style: "cell")"#);
/// assert!(bibliography("refs.bib").style("invalid-style").render().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bibliography {
    call: Call,
    style: Option<String>,
}

/// A bibliography loaded from `path` (one path or an array of paths).
pub fn bibliography(path: impl Into<Value>) -> Bibliography {
    Bibliography {
        call: Call::new(&BIBLIOGRAPHY, Shape::Normal).body(path),
        style: None,
    }
}

impl Bibliography {
    setters! {
        /// Title; `none` hides it.
        title: Value;
        /// Include works that were never cited.
        full: bool;
    }

    /// Citation style name, e.g. `"ieee"`.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        let style = style.into();
        self.call = self.call.param("style", style.as_str());
        self.style = Some(style);
        self
    }

    /// Label the bibliography.
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.call = self.call.label(label);
        self
    }
}

impl Element for Bibliography {
    fn into_call(self) -> Result<Call> {
        if let Some(style) = &self.style {
            is_valid(&[predicate!(style => is_citation_style(style))])?;
        }
        Ok(self.call)
    }
}

/// `cite`: a citation of a bibliography entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Cite {
    call: Call,
    style: Option<String>,
    choices: Choices,
}

/// Cite the entry labelled `key`.
pub fn cite(key: impl Into<Label>) -> Cite {
    let key: Label = key.into();
    Cite {
        call: Call::new(&CITE, Shape::Normal).body(key),
        style: None,
        choices: Choices::default(),
    }
}

impl Cite {
    setters! {
        /// Supplement, e.g. a page number.
        supplement: Value;
    }

    choices! {
        /// Citation form: `"normal"`, `"prose"`, `"full"`, `"author"` or `"year"`.
        form: CITE_FORMS;
    }

    /// Citation style name, or `"auto"` to follow the bibliography.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        let style = style.into();
        let value = if style == "auto" { Value::Auto } else { Value::from(style.as_str()) };
        self.call = self.call.param("style", value);
        self.style = Some(style);
        self
    }
}

impl Element for Cite {
    fn into_call(self) -> Result<Call> {
        if let Some(style) = &self.style {
            is_valid(&[predicate!(style => style == "auto" || is_citation_style(style))])?;
        }
        self.choices.check()?;
        Ok(self.call)
    }
}

// =============================================================================
// Inline markup
// =============================================================================

element! {
    /// `emph`: emphasized content.
    Emph
}

/// Emphasize `body`.
pub fn emph(body: impl Into<Value>) -> Emph {
    Emph {
        call: Call::new(&EMPH, Shape::Normal).body(body),
    }
}

element! {
    /// `strong`: strongly emphasized content.
    Strong
}

/// Strongly emphasize `body`.
pub fn strong(body: impl Into<Value>) -> Strong {
    Strong {
        call: Call::new(&STRONG, Shape::Normal).body(body),
    }
}

impl Strong {
    setters! {
        /// Font weight delta.
        delta: i64;
    }
}

element! {
    /// `link`: a hyperlink or internal link.
    Link
}

/// Link to `dest`: a URL string, a label or a location.
pub fn link(dest: impl Into<Value>) -> Link {
    Link {
        call: Call::new(&LINK, Shape::Positional).arg(dest),
    }
}

impl Link {
    /// Content shown for the link.
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.call = self.call.arg(body);
        self
    }
}

element! {
    /// `ref`: a reference to a label.
    Ref; choices
}

/// Reference the element labelled `target`.
pub fn ref_(target: impl Into<Label>) -> Ref {
    let target: Label = target.into();
    Ref::from_call(Call::new(&REF, Shape::Normal).body(target))
}

impl Ref {
    setters! {
        /// Supplement shown before the number.
        supplement: Value;
    }

    choices! {
        /// `"normal"` or `"page"`.
        form: REF_FORMS;
    }
}

element! {
    /// `quote`: a quotation.
    Quote
}

/// Quote `body`.
pub fn quote(body: impl Into<Value>) -> Quote {
    Quote {
        call: Call::new(&QUOTE, Shape::Normal).body(body),
    }
}

impl Quote {
    setters! {
        /// Display as a block quote.
        block: bool;
        /// Wrap in double quotes.
        quotes: Value;
        /// Attribution, a label or content.
        attribution: Value;
    }
}

// =============================================================================
// Structure
// =============================================================================

element! {
    /// `document`: document metadata, usually used in a set rule.
    DocumentMeta
}

/// Document metadata.
pub fn document() -> DocumentMeta {
    DocumentMeta {
        call: Call::new(&DOCUMENT, Shape::Normal),
    }
}

impl DocumentMeta {
    setters! {
        /// Title.
        title: Value;
        /// Author name or array of names.
        author: Value;
        /// Description.
        description: Value;
        /// Keyword or array of keywords.
        keywords: Value;
        /// Creation date, `auto` or `none`.
        date: Value;
    }
}

element! {
    /// `numbering`: a number formatted by a pattern.
    Numbering
}

/// Format `numbers` with `pattern`, e.g. `"1.a)"`.
pub fn numbering<I>(pattern: impl Into<Value>, numbers: I) -> Numbering
where
    I: IntoIterator<Item = i64>,
{
    Numbering {
        call: Call::new(&NUMBERING, Shape::Normal).body(pattern).args(numbers),
    }
}

element! {
    /// `heading`: a section heading.
    Heading
}

/// A heading with `body` as its title.
pub fn heading(body: impl Into<Value>) -> Heading {
    Heading {
        call: Call::new(&HEADING, Shape::Normal).body(body),
    }
}

impl Heading {
    setters! {
        /// Absolute nesting depth.
        level: i64;
        /// Nesting depth relative to the current one.
        depth: i64;
        /// Starting offset of the level.
        offset: i64;
        /// Numbering pattern or function.
        numbering: Value;
        /// Supplement used when referencing.
        supplement: Value;
        /// Show in the outline.
        outlined: bool;
        /// Show in the PDF bookmarks.
        bookmarked: bool;
        /// Indent of all but the first line.
        hanging_indent: Length;
    }
}

element! {
    /// `par`: a paragraph.
    Par; choices
}

/// A paragraph of `body`.
pub fn par(body: impl Into<Value>) -> Par {
    Par::from_call(Call::new(&PAR, Shape::Normal).body(body))
}

impl Par {
    setters! {
        /// Spacing between lines.
        leading: Length;
        /// Spacing between paragraphs.
        spacing: Length;
        /// Justify text.
        justify: bool;
        /// Indent of the first line, a length or `(amount: .., all: ..)`.
        first_line_indent: Value;
        /// Indent of all but the first line.
        hanging_indent: Length;
    }

    choices! {
        /// `auto`, `"simple"` or `"optimized"`.
        linebreaks: PAR_LINEBREAKS;
    }
}

element! {
    /// `par.line`: line numbering, used in a set rule.
    ParLine; choices
}

/// Line numbering settings.
pub fn par_line() -> ParLine {
    ParLine::from_call(Call::new(&PAR_LINE, Shape::Normal))
}

impl ParLine {
    setters! {
        /// Numbering pattern or function; `none` disables it.
        numbering: Value;
        /// Alignment of the numbers.
        number_align: Alignment;
        /// Margin the numbers appear in: `start`, `end`, `left` or `right`.
        number_margin: Alignment;
        /// Distance between numbers and text.
        number_clearance: Value;
    }

    choices! {
        /// `"document"` or `"page"`.
        numbering_scope: PAR_LINE_SCOPES;
    }
}

element! {
    /// `parbreak`: a paragraph break.
    Parbreak
}

/// A paragraph break.
pub fn parbreak() -> Parbreak {
    Parbreak {
        call: Call::new(&PARBREAK, Shape::Normal),
    }
}

element! {
    /// `outline`: a table of contents.
    Outline
}

/// A table of contents.
pub fn outline() -> Outline {
    Outline {
        call: Call::new(&OUTLINE, Shape::Normal),
    }
}

impl Outline {
    setters! {
        /// Title; `none` hides it.
        title: Value;
        /// What to list, e.g. `heading.where(outlined: true)`.
        target: Value;
        /// Maximum level to include.
        depth: i64;
        /// Indent of nested entries.
        indent: Value;
    }
}

element! {
    /// `outline.entry`: one entry of an outline.
    OutlineEntry
}

/// An outline entry at `level` for `element`.
pub fn outline_entry(level: i64, element: impl Into<Value>) -> OutlineEntry {
    OutlineEntry {
        call: Call::new(&OUTLINE_ENTRY, Shape::Normal).arg(level).arg(element),
    }
}

impl OutlineEntry {
    setters! {
        /// Content between the title and the page number.
        fill: Value;
    }
}

element! {
    /// A method called on an outline entry, typically `it` in a show rule.
    ///
    /// ```
    /// use typst_builder::library::model::{outline_indented, outline_inner, outline_prefix};
    /// use typst_builder::library::Element;
    /// use typst_builder::Value;
    ///
    /// let it = Value::raw("it");
    /// let code = outline_indented(it.clone(), outline_prefix(it.clone()), outline_inner(it))
    ///     .render()
    ///     .unwrap();
    /// assert_eq!(code, "#it.indented(it.prefix(), it.inner())");
    /// ```
    EntryMethod
}

/// `entry.indented(prefix, inner)`: the default indented layout.
pub fn outline_indented(
    entry: impl Into<Value>,
    prefix: impl Into<Value>,
    inner: impl Into<Value>,
) -> EntryMethod {
    EntryMethod {
        call: Call::instance(&OUTLINE_INDENTED, entry).arg(prefix).arg(inner),
    }
}

impl EntryMethod {
    setters! {
        /// Gap between prefix and inner content; only for `indented`.
        gap: Length;
    }
}

/// `entry.prefix()`: the numbering of the entry.
pub fn outline_prefix(entry: impl Into<Value>) -> EntryMethod {
    EntryMethod {
        call: Call::instance(&OUTLINE_PREFIX, entry),
    }
}

/// `entry.inner()`: body, fill and page number.
pub fn outline_inner(entry: impl Into<Value>) -> EntryMethod {
    EntryMethod {
        call: Call::instance(&OUTLINE_INNER, entry),
    }
}

/// `entry.body()`: the body of the entry.
pub fn outline_body(entry: impl Into<Value>) -> EntryMethod {
    EntryMethod {
        call: Call::instance(&OUTLINE_BODY, entry),
    }
}

/// `entry.page()`: the page number of the entry.
pub fn outline_page(entry: impl Into<Value>) -> EntryMethod {
    EntryMethod {
        call: Call::instance(&OUTLINE_PAGE, entry),
    }
}

// =============================================================================
// Figures & footnotes
// =============================================================================

element! {
    /// `figure`: a figure with optional caption.
    Figure; choices
}

/// A figure showing `body`.
pub fn figure(body: impl Into<Value>) -> Figure {
    Figure::from_call(Call::new(&FIGURE, Shape::Normal).body(body))
}

impl Figure {
    setters! {
        /// Float placement: `auto`, `top` or `bottom`.
        placement: Value;
        /// Caption content or a `figure.caption` call.
        caption: Value;
        /// Figure kind used for numbering.
        kind: Value;
        /// Supplement used when referencing.
        supplement: Value;
        /// Numbering pattern or function.
        numbering: Value;
        /// Gap between body and caption.
        gap: Length;
        /// Show in the list of figures.
        outlined: bool;
    }

    choices! {
        /// `"column"` or `"parent"`.
        scope: FIGURE_SCOPES;
    }
}

element! {
    /// `figure.caption`: a figure caption.
    FigureCaption
}

/// A caption for use in [`Figure::caption`].
pub fn figure_caption(body: impl Into<Value>) -> FigureCaption {
    FigureCaption {
        call: Call::new(&FIGURE_CAPTION, Shape::Normal).body(body),
    }
}

impl FigureCaption {
    setters! {
        /// `top` or `bottom`.
        position: Alignment;
        /// Separator between supplement and caption.
        separator: Value;
    }
}

element! {
    /// `footnote`: a footnote.
    Footnote
}

/// A footnote with `body`, or a reference to a labelled footnote.
pub fn footnote(body: impl Into<Value>) -> Footnote {
    Footnote {
        call: Call::new(&FOOTNOTE, Shape::Normal).body(body),
    }
}

impl Footnote {
    setters! {
        /// Numbering pattern or function.
        numbering: Value;
    }
}

element! {
    /// `footnote.entry`: how a footnote is shown in the listing.
    FootnoteEntry
}

/// An entry for the footnote `note`.
pub fn footnote_entry(note: impl Into<Value>) -> FootnoteEntry {
    FootnoteEntry {
        call: Call::new(&FOOTNOTE_ENTRY, Shape::Normal).body(note),
    }
}

impl FootnoteEntry {
    setters! {
        /// Separator between body and footnotes.
        separator: Value;
        /// Space above the separator.
        clearance: Length;
        /// Gap between entries.
        gap: Length;
        /// Indent of each entry.
        indent: Length;
    }
}

// =============================================================================
// Lists
// =============================================================================

element! {
    /// `list`: a bullet list.
    BulletList
}

/// A bullet list of `children`.
pub fn bullet_list<I>(children: I) -> BulletList
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    BulletList {
        call: Call::new(&BULLET_LIST, Shape::PostSeries).args(children),
    }
}

impl BulletList {
    setters! {
        /// Tight spacing.
        tight: bool;
        /// Item marker, or one marker per level.
        marker: Value;
        /// Indent of each item.
        indent: Length;
        /// Space between marker and body.
        body_indent: Length;
        /// Space between items.
        spacing: Length;
    }
}

element! {
    /// `list.item`: a bullet list item.
    BulletListItem
}

/// A bullet list item.
pub fn bullet_list_item(body: impl Into<Value>) -> BulletListItem {
    BulletListItem {
        call: Call::new(&BULLET_LIST_ITEM, Shape::Normal).body(body),
    }
}

element! {
    /// `enum`: a numbered list.
    NumberedList
}

/// A numbered list of `children`.
pub fn numbered_list<I>(children: I) -> NumberedList
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    NumberedList {
        call: Call::new(&NUMBERED_LIST, Shape::PostSeries).args(children),
    }
}

impl NumberedList {
    setters! {
        /// Tight spacing.
        tight: bool;
        /// Numbering pattern or function.
        numbering: Value;
        /// Number of the first item.
        start: i64;
        /// Show the full numbering of nested lists.
        full: bool;
        /// Count down.
        reversed: bool;
        /// Indent of each item.
        indent: Length;
        /// Space between number and body.
        body_indent: Length;
        /// Space between items.
        spacing: Length;
        /// Alignment of the numbers.
        number_align: Alignment;
    }
}

element! {
    /// `enum.item`: a numbered list item.
    NumberedListItem
}

/// A numbered list item.
pub fn numbered_list_item(body: impl Into<Value>) -> NumberedListItem {
    NumberedListItem {
        call: Call::new(&NUMBERED_LIST_ITEM, Shape::Normal).body(body),
    }
}

impl NumberedListItem {
    setters! {
        /// Explicit item number.
        number: i64;
    }
}

element! {
    /// `terms`: a term list.
    Terms
}

/// A term list of `children`, usually [`terms_item`]s.
pub fn terms<I>(children: I) -> Terms
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Terms {
        call: Call::new(&TERMS, Shape::PostSeries).args(children),
    }
}

impl Terms {
    setters! {
        /// Tight spacing.
        tight: bool;
        /// Separator between term and description.
        separator: Value;
        /// Indent of each term.
        indent: Length;
        /// Indent of the description's later lines.
        hanging_indent: Length;
        /// Space between items.
        spacing: Length;
    }
}

element! {
    /// `terms.item`: a term and its description.
    TermsItem
}

/// A term with its description.
pub fn terms_item(term: impl Into<Value>, description: impl Into<Value>) -> TermsItem {
    TermsItem {
        call: Call::new(&TERMS_ITEM, Shape::Positional).arg(term).arg(description),
    }
}

// =============================================================================
// Tables
// =============================================================================

element! {
    /// `table`: a table of cells.
    Table
}

/// A table of `children`: cells, lines, header and footer.
pub fn table<I>(children: I) -> Table
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Table {
        call: Call::new(&TABLE, Shape::PostSeries).args(children),
    }
}

impl Table {
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
        /// Cell fill, a color, array or function.
        fill: Value;
        /// Cell alignment, an alignment, array or function.
        align: Value;
        /// Cell stroke.
        stroke: Value;
        /// Cell inset.
        inset: Value;
    }
}

element! {
    /// `table.cell`: a cell with its own properties.
    TableCell
}

/// A table cell holding `body`.
pub fn table_cell(body: impl Into<Value>) -> TableCell {
    TableCell {
        call: Call::new(&TABLE_CELL, Shape::Normal).body(body),
    }
}

impl TableCell {
    setters! {
        /// Column index.
        x: i64;
        /// Row index.
        y: i64;
        /// Number of columns spanned.
        colspan: i64;
        /// Number of rows spanned.
        rowspan: i64;
        /// Fill.
        fill: Value;
        /// Alignment.
        align: Alignment;
        /// Inset.
        inset: Relative;
        /// Stroke.
        stroke: Value;
        /// Whether the cell may break across pages.
        breakable: bool;
    }
}

element! {
    /// `table.hline`: a horizontal line.
    TableHline
}

/// A horizontal table line.
pub fn table_hline() -> TableHline {
    TableHline {
        call: Call::new(&TABLE_HLINE, Shape::Normal),
    }
}

impl TableHline {
    setters! {
        /// Row above which the line sits.
        y: i64;
        /// First column covered.
        start: i64;
        /// Column after the last one covered.
        end: i64;
        /// Line stroke.
        stroke: Value;
        /// `top` or `bottom` of the row.
        position: Alignment;
    }
}

element! {
    /// `table.vline`: a vertical line.
    TableVline
}

/// A vertical table line.
pub fn table_vline() -> TableVline {
    TableVline {
        call: Call::new(&TABLE_VLINE, Shape::Normal),
    }
}

impl TableVline {
    setters! {
        /// Column before which the line sits.
        x: i64;
        /// First row covered.
        start: i64;
        /// Row after the last one covered.
        end: i64;
        /// Line stroke.
        stroke: Value;
        /// `start` or `end` of the column.
        position: Alignment;
    }
}

element! {
    /// `table.header`: repeated header rows.
    TableHeader
}

/// A table header of `children`.
pub fn table_header<I>(children: I) -> TableHeader
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    TableHeader {
        call: Call::new(&TABLE_HEADER, Shape::PostSeries).args(children),
    }
}

impl TableHeader {
    setters! {
        /// Repeat on every page.
        repeat: bool;
    }
}

element! {
    /// `table.footer`: repeated footer rows.
    TableFooter
}

/// A table footer of `children`.
pub fn table_footer<I>(children: I) -> TableFooter
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    TableFooter {
        call: Call::new(&TABLE_FOOTER, Shape::PostSeries).args(children),
    }
}

impl TableFooter {
    setters! {
        /// Repeat on every page.
        repeat: bool;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Ratio;
    use crate::Error;

    #[test]
    fn test_heading() {
        let code = heading(Value::content("Hello, World!"))
            .level(2)
            .outlined(false)
            .render()
            .unwrap();
        assert_eq!(code, "#heading(level: 2, outlined: false)[Hello, World!]");
    }

    #[test]
    fn test_par_params_keep_call_order() {
        let code = par(Value::content("Text"))
            .justify(true)
            .first_line_indent(Value::dict([
                ("amount", Value::from(Length::em(2.0))),
                ("all", Value::from(true)),
            ]))
            .leading(Length::em(0.8))
            .render()
            .unwrap();
        assert_eq!(
            code,
            "#par(justify: true, first-line-indent: (amount: 2em, all: true), leading: 0.8em)[Text]"
        );
    }

    #[test]
    fn test_bibliography_style_validation() {
        let err = bibliography("refs.bib").style("invalid-style").render().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("style = invalid-style"));

        let code = bibliography(vec!["a.bib", "b.yml"]).full(true).render().unwrap();
        assert_eq!(code, r#"#bibliography(("a.bib", "b.yml"), full: true)"#);
    }

    #[test]
    fn test_cite() {
        let code = cite("smith2024").form("prose").style("auto").render().unwrap();
        assert_eq!(code, r#"#cite(<smith2024>, form: "prose", style: auto)"#);
        let code = cite("smith2024").style("apa").render();
        assert!(code.is_err());
        let code = cite("smith2024")
            .style("american-psychological-association")
            .render()
            .unwrap();
        assert_eq!(code, r#"#cite(<smith2024>, style: "american-psychological-association")"#);
    }

    #[test]
    fn test_figure_with_caption_sub_function() {
        let caption = figure_caption(Value::content("A chart."))
            .position(Alignment::TOP)
            .into_call()
            .unwrap();
        let code = figure(Value::raw("#image(\"chart.png\")"))
            .caption(caption)
            .label("fig:chart")
            .render()
            .unwrap();
        assert_eq!(
            code,
            r#"#figure(image("chart.png"), caption: figure.caption(position: top)[A chart.]) <fig:chart>"#
        );
        assert_eq!(FIGURE.attr("caption"), Some(&FIGURE_CAPTION));
    }

    #[test]
    fn test_reference_and_footnote() {
        assert_eq!(ref_("fig:chart").render().unwrap(), "#ref(<fig:chart>)");
        assert_eq!(
            footnote(Value::content("See source.")).render().unwrap(),
            "#footnote[See source.]"
        );
        assert_eq!(footnote(Label::new("note")).render().unwrap(), "#footnote(<note>)");
    }

    #[test]
    fn test_lists() {
        let items = [Value::raw("#lorem(5)"), Value::raw("#lorem(5)")];
        assert_eq!(
            bullet_list(items.clone()).tight(false).render().unwrap(),
            "#list(tight: false, lorem(5), lorem(5))"
        );
        let items = [
            numbered_list_item(Value::content("one")).number(3),
            numbered_list_item(Value::content("two")),
        ];
        assert_eq!(
            numbered_list(items).start(3).render().unwrap(),
            "#enum(start: 3, enum.item(number: 3)[one], enum.item[two])"
        );
        assert_eq!(BULLET_LIST.attr("item").map(Func::name), Some("list.item"));
    }

    #[test]
    fn test_terms() {
        let code = terms([terms_item(Value::content("Rust"), Value::content("A language."))])
            .render()
            .unwrap();
        assert_eq!(code, "#terms(terms.item([Rust], [A language.]))");
    }

    #[test]
    fn test_table() {
        let children: Vec<Value> = vec![
            table_header([Value::content("A"), Value::content("B")]).into(),
            table_cell(Value::content("1")).colspan(2).into(),
            table_hline().stroke(Value::raw("0.5pt")).into(),
            Value::content("2"),
            Value::content("3"),
        ];
        let code = table(children)
            .columns(vec![Value::raw("1fr"), Value::raw("2fr")])
            .inset(Value::from(Ratio::new(0.0) + Length::pt(5.0)))
            .render()
            .unwrap();
        assert_eq!(
            code,
            "#table(columns: (1fr, 2fr), inset: 0%+5pt, table.header([A], [B]), \
             table.cell(colspan: 2)[1], table.hline(stroke: 0.5pt), [2], [3])"
        );
        let names: Vec<_> = TABLE.attachments().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["cell", "hline", "vline", "header", "footer"]);
    }

    #[test]
    fn test_table_renders_valid_typst() {
        let code = table([Value::content("a"), Value::content("b")])
            .columns(2)
            .render()
            .unwrap();
        assert!(!typst::syntax::parse(&code).erroneous());
    }

    #[test]
    fn test_link_and_quote() {
        assert_eq!(
            link("https://typst.app").render().unwrap(),
            r#"#link("https://typst.app")"#
        );
        assert_eq!(
            link("https://typst.app").body(Value::content("Typst")).render().unwrap(),
            r#"#link("https://typst.app", [Typst])"#
        );
        assert_eq!(
            quote(Value::content("Hi")).block(true).render().unwrap(),
            "#quote(block: true)[Hi]"
        );
        assert_eq!(parbreak().render().unwrap(), "#parbreak()");
        assert_eq!(outline().depth(2).render().unwrap(), "#outline(depth: 2)");
    }

    #[test]
    fn test_literal_params_reject_unknown_names() {
        let err = cite("smith2024").form("bogus").render().unwrap_err();
        assert!(err.to_string().contains("form = bogus"));
        let err = ref_("fig:chart").form("chapter").render().unwrap_err();
        assert!(err.to_string().contains("form = chapter"));
        let err = figure(Value::content("x")).scope("page").render().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        let err = par(Value::content("x")).linebreaks("greedy").render().unwrap_err();
        assert!(err.to_string().contains("linebreaks = greedy"));
        let err = par_line().numbering_scope(Value::Auto).into_call().unwrap_err();
        assert!(err.to_string().contains("numbering_scope = auto"));
    }

    #[test]
    fn test_literal_params_accept_known_names() {
        assert_eq!(
            ref_("fig:chart").form("page").render().unwrap(),
            r#"#ref(<fig:chart>, form: "page")"#
        );
        assert_eq!(
            par(Value::content("x")).linebreaks(Value::Auto).render().unwrap(),
            "#par(linebreaks: auto)[x]"
        );
        // the last value set wins
        let code = figure(Value::content("x"))
            .scope("bogus")
            .scope("parent")
            .render()
            .unwrap();
        assert_eq!(code, r#"#figure(scope: "parent")[x]"#);
    }

    #[test]
    fn test_document_and_numbering() {
        let code = document()
            .title("Report")
            .author(vec!["Ada", "Grace"])
            .render()
            .unwrap();
        assert_eq!(code, r#"#document(title: "Report", author: ("Ada", "Grace"))"#);
        assert_eq!(
            numbering("1.1)", [1, 2]).render().unwrap(),
            r#"#numbering("1.1)", 1, 2)"#
        );
        assert!(FUNCTIONS.iter().any(|f| std::ptr::eq(*f, &NUMBERING)));
    }

    #[test]
    fn test_outline_entry_methods() {
        let it = Value::raw("it");
        let rule = outline_indented(it.clone(), outline_prefix(it.clone()), outline_inner(it.clone()))
            .gap(Length::em(1.0))
            .into_call()
            .unwrap()
            .render_code()
            .unwrap();
        assert_eq!(rule, "it.indented(it.prefix(), it.inner(), gap: 1em)");
        let source = format!("#show outline.entry: it => {rule}");
        assert!(!typst::syntax::parse(&source).erroneous());

        assert_eq!(outline_body(it.clone()).render().unwrap(), "#it.body()");
        assert_eq!(outline_page(it).render().unwrap(), "#it.page()");
        assert_eq!(
            outline_entry(1, Value::raw("#heading[A]")).fill(Value::None).render().unwrap(),
            "#outline.entry(1, heading[A], fill: none)"
        );

        let names: Vec<_> = OUTLINE.attachments().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["entry", "indented", "prefix", "inner", "body", "page"]);
        assert_eq!(OUTLINE.attr("page").map(Func::name), Some("page"));
    }

    #[test]
    fn test_par_line() {
        let code = par_line()
            .numbering("1")
            .numbering_scope("page")
            .number_clearance(Length::pt(8.0))
            .render()
            .unwrap();
        assert_eq!(
            code,
            r#"#par.line(numbering: "1", numbering-scope: "page", number-clearance: 8pt)"#
        );
        assert_eq!(PAR.attr("line"), Some(&PAR_LINE));
    }
}
