//! Combinable flag values.
//!
//! Typst combines some enumerations with `+` (`top + left`). A flag type
//! reports the names of its set members joined by `|`; the renderer turns
//! that into Typst's `+` syntax.

use std::ops::BitOr;

use super::Value;

/// A bit-flag type whose combinations have a textual name.
pub trait Flags {
    /// Upper-case member names joined by `|` (`TOP|LEFT`).
    ///
    /// Returns `None` when no named member is set.
    fn name(&self) -> Option<String>;
}

/// Alignment along the horizontal and/or vertical axis.
///
/// ```
/// use typst_builder::{render_value, Alignment, Value};
///
/// let value = Value::from(Alignment::LEFT | Alignment::TOP);
/// assert_eq!(render_value(&value).unwrap(), "left+top");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment(u16);

impl Alignment {
    /// Start of the text direction.
    pub const START: Self = Self(1);
    /// Left edge.
    pub const LEFT: Self = Self(1 << 1);
    /// Horizontal center.
    pub const CENTER: Self = Self(1 << 2);
    /// Right edge.
    pub const RIGHT: Self = Self(1 << 3);
    /// End of the text direction.
    pub const END: Self = Self(1 << 4);
    /// Top edge.
    pub const TOP: Self = Self(1 << 5);
    /// Vertical center.
    pub const HORIZON: Self = Self(1 << 6);
    /// Bottom edge.
    pub const BOTTOM: Self = Self(1 << 7);

    const MEMBERS: [(Self, &'static str); 8] = [
        (Self::START, "START"),
        (Self::LEFT, "LEFT"),
        (Self::CENTER, "CENTER"),
        (Self::RIGHT, "RIGHT"),
        (Self::END, "END"),
        (Self::TOP, "TOP"),
        (Self::HORIZON, "HORIZON"),
        (Self::BOTTOM, "BOTTOM"),
    ];

    /// No alignment; has no name and fails to render.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether every member of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Alignment {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Flags for Alignment {
    fn name(&self) -> Option<String> {
        let names: Vec<_> = Self::MEMBERS
            .iter()
            .filter(|(member, _)| self.contains(*member))
            .map(|(_, name)| *name)
            .collect();
        (!names.is_empty()).then(|| names.join("|"))
    }
}

impl From<Alignment> for Value {
    fn from(alignment: Alignment) -> Self {
        Value::Flags(alignment.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name() {
        assert_eq!(Alignment::CENTER.name().as_deref(), Some("CENTER"));
    }

    #[test]
    fn test_combined_name_follows_member_order() {
        let align = Alignment::BOTTOM | Alignment::RIGHT;
        assert_eq!(align.name().as_deref(), Some("RIGHT|BOTTOM"));
    }

    #[test]
    fn test_empty_has_no_name() {
        assert_eq!(Alignment::empty().name(), None);
        assert_eq!(Value::from(Alignment::empty()), Value::Flags(None));
    }
}
