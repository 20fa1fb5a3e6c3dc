//! Call shape assembly.
//!
//! Turns a function, its arguments and its keyword parameters into call text.
//! Five shapes cover every wrapper:
//!
//! | Shape         | Output                                   |
//! |---------------|------------------------------------------|
//! | `Normal`      | `#name(params)[body]`, `#name(body, args, params)` |
//! | `Positional`  | `#name(a1, a2)`                          |
//! | `Instance`    | `#receiver.name(args, params)`           |
//! | `PostSeries`  | `#name(params, child1, child2)`          |
//! | `PreSeries`   | `#name(child1, child2, params)`          |
//!
//! Empty parts are omitted: there is never a dangling `, ` in an argument
//! list, and a normal call always keeps its parentheses or block.
//!
//! The free functions produce markup directly. [`Call`] is the owned form:
//! it can be labelled and nested inside another call as a [`Value`].

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::func::Func;
use crate::params::Params;
use crate::render::{render_arg, render_params};
use crate::value::{Label, Value};

/// Layout of the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Optional body, positional args, then keyword params.
    Normal,
    /// Positional args only.
    Positional,
    /// Method call on a receiver.
    Instance,
    /// Params first, then children.
    PostSeries,
    /// Children first, then params.
    PreSeries,
}

// =============================================================================
// Free functions
// =============================================================================

/// `#name(params)[body]` or `#name(body, args, params)`.
///
/// # Example
///
/// ```
/// use typst_builder::call::normal;
/// use typst_builder::library::model::HEADING;
/// use typst_builder::{Params, Value};
///
/// let params = Params::new().set("level", 2);
/// assert_eq!(
///     normal(&HEADING, Some(&Value::content("Intro")), &[], &params).unwrap(),
///     "#heading(level: 2)[Intro]"
/// );
/// ```
pub fn normal(func: &Func, body: Option<&Value>, args: &[Value], params: &Params) -> Result<String> {
    Ok(format!("#{}", normal_code(func, body, args, params)?))
}

/// `#name(a1, a2, ...)`.
pub fn positional(func: &Func, args: &[Value]) -> Result<String> {
    Ok(format!("#{}", positional_code(func, args)?))
}

/// `#receiver.name(args, params)`.
///
/// `receiver` is usually a rendered call; one leading `#` is stripped.
pub fn instance(func: &Func, receiver: &str, args: &[Value], params: &Params) -> Result<String> {
    let receiver = Value::raw(receiver);
    Ok(format!("#{}", instance_code(func, &receiver, args, params)?))
}

/// `#name(params, child1, child2, ...)`.
pub fn post_series(func: &Func, children: &[Value], params: &Params) -> Result<String> {
    Ok(format!("#{}", series_code(func, children, params, true)?))
}

/// `#name(child1, child2, ..., params)`.
pub fn pre_series(func: &Func, children: &[Value], params: &Params) -> Result<String> {
    Ok(format!("#{}", series_code(func, children, params, false)?))
}

// ---------------------------------------------------------------------------
// Code form
// ---------------------------------------------------------------------------

fn render_args(args: &[Value]) -> Result<Vec<String>> {
    args.iter().map(render_arg).collect()
}

fn push_params(parts: &mut Vec<String>, params: &Params) -> Result<()> {
    let params = render_params(params)?;
    if !params.is_empty() {
        parts.push(params);
    }
    Ok(())
}

fn normal_code(func: &Func, body: Option<&Value>, args: &[Value], params: &Params) -> Result<String> {
    let mut parts = Vec::new();
    let mut block = None;
    match body {
        Some(Value::Content(markup)) if args.is_empty() && !markup.starts_with('#') => {
            block = Some(markup.as_str());
        }
        Some(body) => parts.push(render_arg(body)?),
        None => {}
    }
    parts.extend(render_args(args)?);
    push_params(&mut parts, params)?;

    let mut code = func.name().to_string();
    if !parts.is_empty() || block.is_none() {
        code.push('(');
        code.push_str(&parts.join(", "));
        code.push(')');
    }
    if let Some(markup) = block {
        code.push('[');
        code.push_str(markup);
        code.push(']');
    }
    Ok(code)
}

fn positional_code(func: &Func, args: &[Value]) -> Result<String> {
    Ok(format!("{}({})", func.name(), render_args(args)?.join(", ")))
}

fn instance_code(func: &Func, receiver: &Value, args: &[Value], params: &Params) -> Result<String> {
    let mut parts = render_args(args)?;
    push_params(&mut parts, params)?;
    Ok(format!(
        "{}.{}({})",
        render_arg(receiver)?,
        func.name(),
        parts.join(", ")
    ))
}

fn series_code(func: &Func, children: &[Value], params: &Params, params_first: bool) -> Result<String> {
    let children = render_args(children)?;
    let mut parts = Vec::with_capacity(children.len() + 1);
    if params_first {
        push_params(&mut parts, params)?;
        parts.extend(children);
    } else {
        parts.extend(children);
        push_params(&mut parts, params)?;
    }
    Ok(format!("{}({})", func.name(), parts.join(", ")))
}

// =============================================================================
// Call
// =============================================================================

/// An owned, not yet rendered call.
///
/// # Example
///
/// ```
/// use typst_builder::call::{Call, Shape};
/// use typst_builder::library::model::HEADING;
/// use typst_builder::{Label, Value};
///
/// let call = Call::new(&HEADING, Shape::Normal)
///     .body(Value::content("Intro"))
///     .param("numbering", "1.")
///     .label(Label::new("intro"));
/// assert_eq!(call.render().unwrap(), r#"#heading(numbering: "1.")[Intro] <intro>"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    func: Cow<'static, Func>,
    shape: Shape,
    body: Option<Value>,
    args: Vec<Value>,
    params: Params,
    label: Option<Label>,
}

impl Call {
    /// A call to a static function.
    pub fn new(func: &'static Func, shape: Shape) -> Self {
        Self::with_func(Cow::Borrowed(func), shape)
    }

    /// A method call on `receiver`, rendered `receiver.name(..)`.
    pub fn instance(func: &'static Func, receiver: impl Into<Value>) -> Self {
        Self::new(func, Shape::Instance).body(receiver)
    }

    /// A call to a function built at runtime.
    pub fn owned(func: Func, shape: Shape) -> Self {
        Self::with_func(Cow::Owned(func), shape)
    }

    fn with_func(func: Cow<'static, Func>, shape: Shape) -> Self {
        Self {
            func,
            shape,
            body: None,
            args: Vec::new(),
            params: Params::new(),
            label: None,
        }
    }

    /// Set the body of a normal call.
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the receiver of an instance call.
    ///
    /// An instance call rendered without one fails with
    /// [`Error::MissingReceiver`].
    pub fn receiver(self, receiver: impl Into<Value>) -> Self {
        self.body(receiver)
    }

    /// Append a positional argument or series child.
    pub fn arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several positional arguments or series children.
    pub fn args<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set a keyword parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params = self.params.set(key, value);
        self
    }

    /// Set a keyword parameter when `Some`.
    pub fn param_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.params = self.params.set_opt(key, value);
        self
    }

    /// Replace all keyword parameters.
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Attach a label after the rendered markup.
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The called function.
    pub fn func(&self) -> &Func {
        &self.func
    }

    /// The call shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Render as markup: `#...`, followed by ` <label>` when labelled.
    pub fn render(&self) -> Result<String> {
        let code = self.render_code()?;
        Ok(match &self.label {
            Some(label) => format!("#{code} {label}"),
            None => format!("#{code}"),
        })
    }

    /// Render as code, for use inside another call.
    ///
    /// Labels only exist in markup and are not part of the code form.
    pub fn render_code(&self) -> Result<String> {
        let func = self.func.as_ref();
        match self.shape {
            Shape::Normal => normal_code(func, self.body.as_ref(), &self.args, &self.params),
            Shape::Positional => positional_code(func, &self.args),
            Shape::Instance => {
                let receiver = self
                    .body
                    .as_ref()
                    .ok_or_else(|| Error::MissingReceiver(func.name().to_string()))?;
                instance_code(func, receiver, &self.args, &self.params)
            }
            Shape::PostSeries => series_code(func, &self.args, &self.params, true),
            Shape::PreSeries => series_code(func, &self.args, &self.params, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::Implement;
    use crate::value::{Content, Length, Ratio};

    static PAD: Func = Func::new(Implement::custom("pad"));
    static PAGEBREAK: Func = Func::new(Implement::custom("pagebreak"));
    static RGB: Func = Func::new(Implement::custom("rgb"));
    static LIGHTEN: Func = Func::new(Implement::custom("lighten"));
    static TABLE: Func = Func::new(Implement::custom("table"));
    static SUBPAR_GRID: Func = Func::new(Implement::custom("subpar.grid"));
    static STRONG: Func = Func::new(Implement::custom("strong"));

    #[test]
    fn test_normal_trailing_block() {
        let body = Value::content("Hello");
        assert_eq!(normal(&STRONG, Some(&body), &[], &Params::new()).unwrap(), "#strong[Hello]");
        let params = Params::new().set("delta", 300);
        assert_eq!(
            normal(&STRONG, Some(&body), &[], &params).unwrap(),
            "#strong(delta: 300)[Hello]"
        );
    }

    #[test]
    fn test_normal_code_body_is_argument() {
        let body = Value::from(Content::new("#image(\"a.png\")"));
        let params = Params::new().set("left", Ratio::new(4.0) + Length::pt(0.0));
        assert_eq!(
            normal(&PAD, Some(&body), &[], &params).unwrap(),
            "#pad(image(\"a.png\"), left: 4%+0pt)"
        );
        let raw = Value::raw("#lorem(20)");
        assert_eq!(normal(&PAD, Some(&raw), &[], &Params::new()).unwrap(), "#pad(lorem(20))");
    }

    #[test]
    fn test_normal_never_dangles_comma() {
        let body = Value::from("text");
        assert_eq!(normal(&PAD, Some(&body), &[], &Params::new()).unwrap(), "#pad(\"text\")");
        let params = Params::new().unset("left");
        assert_eq!(normal(&PAD, Some(&body), &[], &params).unwrap(), "#pad(\"text\")");
    }

    #[test]
    fn test_normal_without_body() {
        let params = Params::new().set("weak", true);
        assert_eq!(normal(&PAGEBREAK, None, &[], &params).unwrap(), "#pagebreak(weak: true)");
        assert_eq!(normal(&PAGEBREAK, None, &[], &Params::new()).unwrap(), "#pagebreak()");
    }

    #[test]
    fn test_normal_markup_with_args_stays_first() {
        let body = Value::content("a");
        let args = [Value::content("b")];
        assert_eq!(normal(&PAD, Some(&body), &args, &Params::new()).unwrap(), "#pad([a], [b])");
    }

    #[test]
    fn test_positional() {
        let args = [Value::Int(255), Value::Int(255), Value::Int(255), Ratio::new(50.0).into()];
        assert_eq!(positional(&RGB, &args).unwrap(), "#rgb(255, 255, 255, 50%)");
        assert_eq!(positional(&RGB, &[]).unwrap(), "#rgb()");
    }

    #[test]
    fn test_instance() {
        let receiver = positional(&RGB, &[Value::Int(255), Value::Int(255), Value::Int(255)]).unwrap();
        assert_eq!(
            instance(&LIGHTEN, &receiver, &[Ratio::new(50.0).into()], &Params::new()).unwrap(),
            "#rgb(255, 255, 255).lighten(50%)"
        );
    }

    #[test]
    fn test_series_order() {
        let children = [Value::content("1"), Value::content("2")];
        let params = Params::new().set("columns", vec![Value::raw("1fr"), Value::raw("2fr")]);
        assert_eq!(
            post_series(&TABLE, &children, &params).unwrap(),
            "#table(columns: (1fr, 2fr), [1], [2])"
        );
        assert_eq!(
            pre_series(&SUBPAR_GRID, &children, &params).unwrap(),
            "#subpar.grid([1], [2], columns: (1fr, 2fr))"
        );
        assert_eq!(post_series(&TABLE, &children, &Params::new()).unwrap(), "#table([1], [2])");
    }

    #[test]
    fn test_call_matches_free_functions() {
        let call = Call::new(&TABLE, Shape::PostSeries)
            .param("columns", 2)
            .args([Value::content("a"), Value::content("b")]);
        let params = Params::new().set("columns", 2);
        let children = [Value::content("a"), Value::content("b")];
        assert_eq!(call.render().unwrap(), post_series(&TABLE, &children, &params).unwrap());
    }

    #[test]
    fn test_nested_call_renders_code() {
        let color = Call::new(&RGB, Shape::Positional).args([255, 0, 0]);
        let lighter = Call::instance(&LIGHTEN, color).arg(Ratio::new(20.0));
        assert_eq!(lighter.render().unwrap(), "#rgb(255, 0, 0).lighten(20%)");

        let padded = Call::new(&PAD, Shape::Normal)
            .body(lighter)
            .param("left", Length::pt(2.0));
        assert_eq!(
            padded.render().unwrap(),
            "#pad(rgb(255, 0, 0).lighten(20%), left: 2pt)"
        );
    }

    #[test]
    fn test_instance_requires_receiver() {
        let err = Call::new(&LIGHTEN, Shape::Instance)
            .arg(Ratio::new(20.0))
            .render()
            .unwrap_err();
        assert!(matches!(err, Error::MissingReceiver(name) if name == "lighten"));

        let call = Call::instance(&LIGHTEN, Value::raw("#luma(20)"));
        assert_eq!(call.shape(), Shape::Instance);
        assert_eq!(call.render().unwrap(), "#luma(20).lighten()");
    }

    #[test]
    fn test_label_only_in_markup() {
        let call = Call::new(&STRONG, Shape::Normal)
            .body(Value::content("x"))
            .label("key");
        assert_eq!(call.render().unwrap(), "#strong[x] <key>");
        assert_eq!(call.render_code().unwrap(), "strong[x]");
    }

    #[test]
    fn test_owned_func() {
        let func = Func::new(Implement::new(false, "note", None, None).unwrap());
        let call = Call::owned(func, Shape::Positional).arg("hi");
        assert_eq!(call.render().unwrap(), "#note(\"hi\")");
        assert_eq!(call.shape(), Shape::Positional);
    }
}
