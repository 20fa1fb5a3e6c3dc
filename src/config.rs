//! Number formatting for rendered quantities.
//!
//! Quantities (`1.25em`, `33.33%`) print their magnitude with at most
//! [`Config::float_precision`] decimals. A [`Config`] value formats numbers
//! directly through [`Config::format_number`]; the rendering functions use the
//! process-wide one returned by [`get`].
//!
//! # Initialization order
//!
//! The process-wide configuration is fixed the first time it is read. Call
//! [`ConfigBuilder::init`] before rendering anything: once a quantity has
//! been rendered, the default is locked in and `init` returns `false`.
//!
//! ```
//! use typst_builder::config::Config;
//!
//! let config = Config { float_precision: 3 };
//! assert_eq!(config.format_number(1.0 / 3.0), "0.333");
//! assert_eq!(Config::default().format_number(2.50), "2.5");
//! ```

use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Quantity formatting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of decimals. Trailing zeros are always trimmed.
    pub float_precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { float_precision: 2 }
    }
}

impl Config {
    /// Format `value` with this precision.
    ///
    /// Trailing zeros and a dangling `.` are removed, and negative zero
    /// prints as `0`.
    pub fn format_number(&self, value: f64) -> String {
        let precision = self.float_precision;
        let text = format!("{value:.precision$}");
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text.as_str()
        };
        match text {
            "-0" => "0".to_string(),
            other => other.to_string(),
        }
    }
}

/// Builder for the process-wide [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    float_precision: Option<usize>,
}

impl ConfigBuilder {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of decimals for quantity values. Default: 2.
    ///
    /// ```
    /// use typst_builder::config::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new().float_precision(3).build();
    /// assert_eq!(config.format_number(0.1234), "0.123");
    /// ```
    pub fn float_precision(mut self, precision: usize) -> Self {
        self.float_precision = Some(precision);
        self
    }

    /// The configuration without installing it.
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            float_precision: self.float_precision.unwrap_or(defaults.float_precision),
        }
    }

    /// Install the configuration for the whole process.
    ///
    /// Must run before the first render. Returns `false` and leaves the
    /// active configuration untouched if one is already in place, including
    /// the default fixed by an earlier render.
    pub fn init(self) -> bool {
        let config = self.build();
        let installed = CONFIG.set(config).is_ok();
        if !installed {
            tracing::debug!(
                requested = config.float_precision,
                active = get().float_precision,
                "configuration already fixed, ignoring init"
            );
        }
        installed
    }
}

/// Install the default configuration. Same as `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// The process-wide configuration.
///
/// The first call fixes it: the default is installed unless
/// [`ConfigBuilder::init`] ran earlier.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(ConfigBuilder::new().build(), Config::default());
        assert_eq!(ConfigBuilder::new().float_precision(4).build().float_precision, 4);
    }

    #[test]
    fn test_format_number_uses_own_precision() {
        let coarse = Config { float_precision: 1 };
        let fine = Config { float_precision: 4 };
        assert_eq!(coarse.format_number(1.26), "1.3");
        assert_eq!(fine.format_number(1.26), "1.26");
        assert_eq!(fine.format_number(2.0), "2");
        assert_eq!(coarse.format_number(-0.01), "0");
        assert_eq!(Config { float_precision: 0 }.format_number(12.7), "13");
    }

    #[test]
    fn test_init_after_first_read_is_ignored() {
        let active = *get();
        assert!(!ConfigBuilder::new().float_precision(7).init());
        assert_eq!(*get(), active);
    }
}
