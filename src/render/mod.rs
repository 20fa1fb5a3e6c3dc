//! Rendering of values, keys and parameter maps into Typst literals.
//!
//! # Modules
//!
//! - [`builder`] - Dict/Array construction and literal formatting
//!
//! Rendering is pure: equal inputs always produce equal strings.

mod builder;

pub use builder::{format_array, format_dict, DictBuilder};

use crate::error::{Error, Result};
use crate::params::Params;
use crate::value::Value;

/// Render a value as Typst code.
///
/// Variants are checked in this order, first match wins:
///
/// 1. `Bool` → `true` / `false`
/// 2. `Str` → `"..."`, taken as-is (the caller pre-encodes any escaping)
/// 3. `Flags` → lower-cased name with `|` replaced by `+`; unnamed flags fail
/// 4. `Array` / `Dict` → parenthesized, recursively rendered
/// 5. anything else → its plain textual form
///
/// # Example
///
/// ```
/// use typst_builder::{render_value, Value};
///
/// assert_eq!(render_value(&Value::from(vec![1, 2, 3])).unwrap(), "(1, 2, 3)");
/// assert_eq!(render_value(&Value::from("Arial")).unwrap(), r#""Arial""#);
/// ```
pub fn render_value(value: &Value) -> Result<String> {
    let code = match value {
        Value::Bool(b) => b.to_string(),
        Value::Str(s) => format!("\"{s}\""),
        Value::Flags(name) => render_flags(name.as_deref())?,
        Value::Array(items) => format_array(
            items
                .iter()
                .map(render_arg)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Dict(entries) => format_dict(
            entries
                .iter()
                .map(|(k, v)| Ok(format!("{}: {}", render_key(k), render_arg(v)?)))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::None => "none".to_string(),
        Value::Auto => "auto".to_string(),
        Value::Raw(code) => code.clone(),
        Value::Content(markup) => match markup.strip_prefix('#') {
            Some(code) => code.to_string(),
            None => format!("[{markup}]"),
        },
        Value::Call(call) => call.render_code()?,
    };
    Ok(code)
}

/// Render a value in code position: an argument, a keyword value, an array
/// item or a dictionary value.
///
/// Raw code that was produced as markup (`#lorem(20)`) loses exactly one
/// leading `#` so it reads as code inside the argument list.
pub fn render_arg(value: &Value) -> Result<String> {
    match value {
        Value::Raw(code) => Ok(code.strip_prefix('#').unwrap_or(code).to_string()),
        other => render_value(other),
    }
}

/// Map an identifier-style key to Typst's hyphenated convention.
///
/// ```
/// assert_eq!(typst_builder::render_key("first_line_indent"), "first-line-indent");
/// ```
pub fn render_key(key: &str) -> String {
    key.replace('_', "-")
}

/// Render the set entries of a parameter map as `key: value, ...`.
///
/// Unset entries are dropped; the rest keep their order. Returns an empty
/// string when nothing is left.
pub fn render_params(params: &Params) -> Result<String> {
    let pairs = params
        .values()
        .map(|(k, v)| Ok(format!("{}: {}", render_key(k), render_arg(v)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(pairs.join(", "))
}

fn render_flags(name: Option<&str>) -> Result<String> {
    let name = name.ok_or(Error::UnnamedFlag)?;
    Ok(name.to_lowercase().replace('|', "+"))
}

/// Typst float literal: a whole number keeps its `.0` so it stays a float.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        "float.nan".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}float.inf")
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Alignment, Content, Length};

    #[test]
    fn test_bool_before_text() {
        assert_eq!(render_value(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(render_value(&Value::Bool(false)).unwrap(), "false");
    }

    #[test]
    fn test_string_is_quoted_verbatim() {
        assert_eq!(render_value(&Value::from("Hello")).unwrap(), "\"Hello\"");
        assert_eq!(render_value(&Value::from("#image()")).unwrap(), "\"#image()\"");
    }

    #[test]
    fn test_flags() {
        let align = Value::from(Alignment::LEFT | Alignment::TOP);
        assert_eq!(render_value(&align).unwrap(), "left+top");
        assert_eq!(render_value(&Value::from(Alignment::HORIZON)).unwrap(), "horizon");
        assert!(matches!(
            render_value(&Value::from(Alignment::empty())),
            Err(Error::UnnamedFlag)
        ));
    }

    #[test]
    fn test_nested_sequences() {
        let value = Value::from(vec![
            Value::from(vec!["Arial", "Times New Roman"]),
            Value::Int(3),
        ]);
        assert_eq!(
            render_value(&value).unwrap(),
            r#"(("Arial", "Times New Roman"), 3)"#
        );
        assert_eq!(render_value(&Value::from(vec!["only"])).unwrap(), r#"("only",)"#);
    }

    #[test]
    fn test_dict() {
        let value = Value::dict([("first_line_indent", Value::from(Length::em(1.0)))]);
        assert_eq!(render_value(&value).unwrap(), "(first-line-indent: 1em)");
        assert_eq!(render_value(&Value::Dict(vec![])).unwrap(), "(:)");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(render_value(&Value::Int(-4)).unwrap(), "-4");
        assert_eq!(render_value(&Value::Float(2.0)).unwrap(), "2.0");
        assert_eq!(render_value(&Value::Float(0.25)).unwrap(), "0.25");
        assert_eq!(render_value(&Value::None).unwrap(), "none");
        assert_eq!(render_value(&Value::Auto).unwrap(), "auto");
        assert_eq!(render_value(&Value::raw("1fr")).unwrap(), "1fr");
    }

    #[test]
    fn test_content() {
        assert_eq!(render_value(&Content::new("Hi").into()).unwrap(), "[Hi]");
        assert_eq!(render_value(&Content::new("#lorem(5)").into()).unwrap(), "lorem(5)");
    }

    #[test]
    fn test_render_is_deterministic() {
        let value = Value::dict([("a", Value::from(vec![1.5, 2.0])), ("b", Value::from("x"))]);
        assert_eq!(render_value(&value).unwrap(), render_value(&value).unwrap());
    }

    #[test]
    fn test_arg_strips_one_sigil() {
        assert_eq!(render_arg(&Value::raw("#lorem(20)")).unwrap(), "lorem(20)");
        assert_eq!(render_arg(&Value::raw("##x")).unwrap(), "#x");
        assert_eq!(render_arg(&Value::raw("red")).unwrap(), "red");
        assert_eq!(render_value(&Value::raw("#lorem(20)")).unwrap(), "#lorem(20)");
    }

    #[test]
    fn test_nested_raw_code_loses_sigil() {
        let children = Value::from(vec![Value::raw("#lorem(2)")]);
        assert_eq!(render_value(&children).unwrap(), "(lorem(2),)");
        let dict = Value::dict([("fill", Value::raw("#rgb(1, 2, 3)"))]);
        assert_eq!(render_value(&dict).unwrap(), "(fill: rgb(1, 2, 3))");

        let params = Params::new()
            .set("fill", Value::raw("#rgb(1, 2, 3)"))
            .set("children", children);
        let code = render_params(&params).unwrap();
        assert_eq!(code, "fill: rgb(1, 2, 3), children: (lorem(2),)");
        assert!(!typst::syntax::parse(&format!("#table({code})")).erroneous());
    }

    #[test]
    fn test_render_key() {
        assert_eq!(render_key("first_line_indent"), "first-line-indent");
        assert_eq!(render_key("level"), "level");
    }

    #[test]
    fn test_render_params() {
        assert_eq!(render_params(&Params::new()).unwrap(), "");
        let params = Params::new()
            .set("leading", Length::em(1.5))
            .unset("spacing")
            .set("justify", true)
            .set("hanging_indent", Length::pt(0.0));
        assert_eq!(
            render_params(&params).unwrap(),
            "leading: 1.5em, justify: true, hanging-indent: 0pt"
        );
    }

    #[test]
    fn test_render_params_all_unset() {
        let params = Params::new().unset("a").unset("b");
        assert_eq!(render_params(&params).unwrap(), "");
    }
}
