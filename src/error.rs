//! Error type for building Typst source.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while defining, validating or rendering Typst code.
///
/// Construction errors (`InvalidImplement`, `InvalidAttachName`, `InvalidUnit`,
/// `UnknownZihao`) fail when a function or value is defined. `Validation`
/// fails before a call is rendered, `UnnamedFlag` while rendering.
///
/// # Example
///
/// ```ignore
/// match bibliography("refs.bib").style("not-a-style").render() {
///     Ok(code) => doc.add_content(code),
///     Err(Error::Validation { captures }) => eprintln!("bad input: {captures}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Identity record with inconsistent standard flag and metadata.
    #[error("invalid implement record: {reason} `{field}`")]
    InvalidImplement {
        /// Offending field (`original_name` or `hyperlink`).
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Attachment name reserved for private use.
    #[error("invalid attachment name: {0}")]
    InvalidAttachName(String),

    /// Unit tag outside the vocabulary of a quantity type.
    #[error("invalid {kind} unit: '{unit}'")]
    InvalidUnit {
        /// Quantity type name.
        kind: &'static str,
        /// The rejected unit tag.
        unit: String,
    },

    /// Font-size name not in the zihao table.
    #[error("unknown zihao size: '{0}'")]
    UnknownZihao(String),

    /// A validation predicate failed.
    #[error("invalid parameters: {captures}")]
    Validation {
        /// `name = value` list of the variables the predicate captured.
        captures: String,
    },

    /// Method call built without the value it is called on.
    #[error("method call `{0}` has no receiver")]
    MissingReceiver(String),

    /// Flag value without a textual representation.
    #[error("flag value has no name")]
    UnnamedFlag,

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error was raised while defining a function or value.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidImplement { .. }
                | Self::InvalidAttachName(_)
                | Self::InvalidUnit { .. }
                | Self::UnknownZihao(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = Error::Validation {
            captures: "style = invalid-style".into(),
        };
        assert_eq!(err.to_string(), "invalid parameters: style = invalid-style");
        assert!(!err.is_construction());
    }

    #[test]
    fn test_missing_receiver_message() {
        let err = Error::MissingReceiver("lighten".into());
        assert_eq!(err.to_string(), "method call `lighten` has no receiver");
        assert!(!err.is_construction());
    }

    #[test]
    fn test_construction_kinds() {
        let err = Error::InvalidUnit {
            kind: "length",
            unit: "px".into(),
        };
        assert_eq!(err.to_string(), "invalid length unit: 'px'");
        assert!(err.is_construction());
        assert!(Error::InvalidAttachName("_x".into()).is_construction());
    }
}
