//! Markup content and labels.

use std::fmt;

use super::Value;

/// A piece of document markup.
///
/// Renders as a content block `[...]`. When the markup is itself a code
/// fragment (starts with `#`, e.g. the output of another call), it renders as
/// that code with the sigil removed so it can sit in argument position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Content(String);

impl Content {
    /// Create content from markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the markup is a code fragment that can be unwrapped.
    pub fn is_code(&self) -> bool {
        self.0.starts_with('#')
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.strip_prefix('#') {
            Some(code) => f.write_str(code),
            None => write!(f, "[{}]", self.0),
        }
    }
}

impl From<Content> for Value {
    fn from(content: Content) -> Self {
        Value::Content(content.0)
    }
}

/// A label for an element, rendered as `<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Create a label.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The label name without angle brackets.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Label> for Value {
    fn from(label: Label) -> Self {
        Value::Raw(label.to_string())
    }
}
