//! JSON → Typst value conversion.

use serde_json::Value as JsonValue;

use super::Value;

/// Convert JSON to a Typst value.
///
/// - `null` → `none`
/// - `boolean` → `Bool`
/// - `number` → `Int` when it fits an `i64`, `Float` otherwise
/// - `string` → `Str`, escaped so any text stays one string literal
/// - `array` → `Array`
/// - `object` → `Dict` (key order as stored by `serde_json`)
pub fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::None,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::Str(escape_str(s)),
        JsonValue::Array(arr) => Value::Array(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Dict(
            obj.iter()
                .map(|(key, value)| (key.clone(), json_to_value(value)))
                .collect(),
        ),
    }
}

/// Escape text for a Typst string literal.
fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        json_to_value(json)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        json_to_value(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(json_to_value(&json!(null)), Value::None);
        assert_eq!(json_to_value(&json!(true)), Value::Bool(true));
        assert_eq!(json_to_value(&json!(42)), Value::Int(42));
        assert_eq!(json_to_value(&json!(1.5)), Value::Float(1.5));
        assert_eq!(json_to_value(&json!("hi")), Value::Str("hi".into()));
    }

    #[test]
    fn test_nested() {
        let value = Value::from(json!({"tags": ["rust", "typst"], "draft": false}));
        assert_eq!(
            value,
            Value::Dict(vec![
                ("draft".into(), Value::Bool(false)),
                (
                    "tags".into(),
                    Value::Array(vec![Value::Str("rust".into()), Value::Str("typst".into())])
                ),
            ])
        );
    }

    #[test]
    fn test_strings_are_escaped() {
        let value = json_to_value(&json!("say \"hi\" \\o/\n"));
        assert_eq!(value, Value::Str(r#"say \"hi\" \\o/\n"#.into()));

        let dict = Value::from(json!({"title": "say \"hi\" \\o/", "bell": "\u{7}"}));
        let code = format!("#metadata({})", crate::render::render_value(&dict).unwrap());
        assert_eq!(code, r#"#metadata((bell: "\u{7}", title: "say \"hi\" \\o/"))"#);
        assert!(!typst::syntax::parse(&code).erroneous());
    }
}
