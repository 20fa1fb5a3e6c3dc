//! Physical quantities: lengths, ratios, angles and fractions.
//!
//! Quantities are `(value, unit)` pairs with a fixed unit vocabulary per type.
//! Adding or subtracting quantities builds a [`Relative`]: an ordered sum of
//! signed terms rendered the way Typst writes them (`10pt-20%+20pt`).
//!
//! # Example
//!
//! ```
//! use typst_builder::{Length, Ratio};
//!
//! let inset = Length::pt(10.0) - (Ratio::new(20.0) - Length::pt(20.0));
//! assert_eq!(inset.to_string(), "10pt-20%+20pt");
//! ```

use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::Value;
use crate::error::{Error, Result};

const LENGTH_UNITS: [&str; 5] = ["pt", "mm", "cm", "em", "in"];
const ANGLE_UNITS: [&str; 2] = ["deg", "rad"];

/// Match a unit tag against a vocabulary, returning the static spelling.
fn resolve_unit(kind: &'static str, allowed: &[&'static str], unit: &str) -> Result<&'static str> {
    allowed
        .iter()
        .find(|candidate| **candidate == unit)
        .copied()
        .ok_or_else(|| Error::InvalidUnit {
            kind,
            unit: unit.to_string(),
        })
}

/// Format a quantity number with the process-wide precision.
pub(crate) fn format_number(value: f64) -> String {
    crate::config::get().format_number(value)
}

// =============================================================================
// Term
// =============================================================================

/// One signed term of a quantity expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Signed magnitude.
    pub value: f64,
    /// Unit suffix (`pt`, `%`, `deg`, ...).
    pub unit: &'static str,
}

impl Term {
    const fn negated(self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

// =============================================================================
// Length / Ratio / Angle / Fraction
// =============================================================================

/// A size or distance, possibly expressed with contextual units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(Term);

impl Length {
    /// Create a length, validating the unit tag (`pt`, `mm`, `cm`, `em`, `in`).
    pub fn new(value: f64, unit: &str) -> Result<Self> {
        let unit = resolve_unit("length", &LENGTH_UNITS, unit)?;
        Ok(Self(Term { value, unit }))
    }

    /// Points.
    pub const fn pt(value: f64) -> Self {
        Self(Term { value, unit: "pt" })
    }

    /// Millimeters.
    pub const fn mm(value: f64) -> Self {
        Self(Term { value, unit: "mm" })
    }

    /// Centimeters.
    pub const fn cm(value: f64) -> Self {
        Self(Term { value, unit: "cm" })
    }

    /// Font-relative em units.
    pub const fn em(value: f64) -> Self {
        Self(Term { value, unit: "em" })
    }

    /// Inches.
    pub const fn inch(value: f64) -> Self {
        Self(Term { value, unit: "in" })
    }

    /// Chinese font size by name (`"小四"` is 12pt).
    pub fn zihao(name: &str) -> Result<Self> {
        let points = match name {
            "一号" => 26.0,
            "小一" => 24.0,
            "二号" => 22.0,
            "小二" => 18.0,
            "三号" => 16.0,
            "小三" => 15.0,
            "四号" => 14.0,
            "小四" => 12.0,
            "五号" => 10.5,
            "小五" => 9.0,
            "六号" => 7.5,
            "小六" => 6.5,
            _ => return Err(Error::UnknownZihao(name.to_string())),
        };
        Ok(Self::pt(points))
    }

    /// The numeric value.
    pub const fn value(&self) -> f64 {
        self.0.value
    }

    /// The unit tag.
    pub const fn unit(&self) -> &'static str {
        self.0.unit
    }
}

/// A ratio of a whole, written as a number followed by `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(Term);

impl Ratio {
    /// Create a ratio from a percentage (`Ratio::new(50.0)` is `50%`).
    pub const fn new(percent: f64) -> Self {
        Self(Term {
            value: percent,
            unit: "%",
        })
    }

    /// The percentage.
    pub const fn value(&self) -> f64 {
        self.0.value
    }
}

/// An angle in degrees or radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle(Term);

impl Angle {
    /// Create an angle, validating the unit tag (`deg`, `rad`).
    pub fn new(value: f64, unit: &str) -> Result<Self> {
        let unit = resolve_unit("angle", &ANGLE_UNITS, unit)?;
        Ok(Self(Term { value, unit }))
    }

    /// Degrees.
    pub const fn deg(value: f64) -> Self {
        Self(Term { value, unit: "deg" })
    }

    /// Radians.
    pub const fn rad(value: f64) -> Self {
        Self(Term { value, unit: "rad" })
    }

    /// The numeric value.
    pub const fn value(&self) -> f64 {
        self.0.value
    }

    /// The unit tag.
    pub const fn unit(&self) -> &'static str {
        self.0.unit
    }
}

/// The fraction of remaining space, written `1fr`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction(Term);

impl Fraction {
    /// Create a fraction.
    pub const fn new(value: f64) -> Self {
        Self(Term { value, unit: "fr" })
    }
}

// =============================================================================
// Relative
// =============================================================================

/// An ordered sum of quantity terms (`10pt+20%`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relative {
    terms: Vec<Term>,
}

impl Relative {
    /// The terms in order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    fn join(mut self, rhs: Relative, negate: bool) -> Relative {
        self.terms.extend(
            rhs.terms
                .into_iter()
                .map(|term| if negate { term.negated() } else { term }),
        );
        self
    }
}

impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms.iter();
        let Some(first) = terms.next() else {
            return f.write_str("0pt");
        };
        write!(f, "{first}")?;
        for term in terms {
            if term.value < 0.0 {
                write!(f, "-{}", term.negated())?;
            } else {
                write!(f, "+{term}")?;
            }
        }
        Ok(())
    }
}

impl Neg for Relative {
    type Output = Relative;

    fn neg(self) -> Relative {
        Relative {
            terms: self.terms.into_iter().map(Term::negated).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared impls for single quantities
// ---------------------------------------------------------------------------

macro_rules! quantity {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl Neg for $ty {
                type Output = $ty;

                fn neg(self) -> $ty {
                    $ty(self.0.negated())
                }
            }

            impl From<$ty> for Value {
                fn from(quantity: $ty) -> Self {
                    Value::Raw(quantity.to_string())
                }
            }
        )*
    };
}

quantity!(Length, Ratio, Angle, Fraction);

macro_rules! summable {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Relative {
                fn from(quantity: $ty) -> Self {
                    Relative { terms: vec![quantity.0] }
                }
            }

            impl<T: Into<Relative>> Add<T> for $ty {
                type Output = Relative;

                fn add(self, rhs: T) -> Relative {
                    Relative::from(self).join(rhs.into(), false)
                }
            }

            impl<T: Into<Relative>> Sub<T> for $ty {
                type Output = Relative;

                fn sub(self, rhs: T) -> Relative {
                    Relative::from(self).join(rhs.into(), true)
                }
            }
        )*
    };
}

summable!(Length, Ratio, Angle);

impl<T: Into<Relative>> Add<T> for Relative {
    type Output = Relative;

    fn add(self, rhs: T) -> Relative {
        self.join(rhs.into(), false)
    }
}

impl<T: Into<Relative>> Sub<T> for Relative {
    type Output = Relative;

    fn sub(self, rhs: T) -> Relative {
        self.join(rhs.into(), true)
    }
}

impl From<Relative> for Value {
    fn from(relative: Relative) -> Self {
        Value::Raw(relative.to_string())
    }
}
