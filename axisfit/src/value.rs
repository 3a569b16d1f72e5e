// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values that can appear as axis ticks.

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;

use crate::format::format_number;

/// A single data value.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    /// A numeric value (dates are carried as numbers too).
    Number(f64),
    /// A text value.
    Text(Arc<str>),
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

/// A category or tick value.
///
/// Binned fields produce [`TickValue::Range`] categories. Their labels are drawn with a
/// range marker between the bounds, which needs one extra character of room.
#[derive(Clone, Debug, PartialEq)]
pub enum TickValue {
    /// A plain value.
    Scalar(Datum),
    /// A contiguous range of values.
    Range {
        /// Lower bound.
        low: Datum,
        /// Upper bound.
        high: Datum,
    },
}

impl TickValue {
    /// A numeric scalar.
    pub fn number(value: f64) -> Self {
        Self::Scalar(Datum::Number(value))
    }

    /// A text scalar.
    pub fn text(value: &str) -> Self {
        Self::Scalar(Datum::from(value))
    }

    /// A range between two values.
    pub fn range(low: impl Into<Datum>, high: impl Into<Datum>) -> Self {
        Self::Range {
            low: low.into(),
            high: high.into(),
        }
    }

    /// Returns `true` for [`TickValue::Range`].
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Number of characters needed to draw `label` for this value.
    ///
    /// Ranges get one extra character for the range marker.
    pub(crate) fn label_chars(&self, label: &str) -> usize {
        label.chars().count() + usize::from(self.is_range())
    }
}

impl fmt::Display for TickValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(d) => fmt::Display::fmt(d, f),
            Self::Range { low, high } => write!(f, "{low}\u{2026}{high}"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn range_display_joins_bounds_with_ellipsis() {
        let r = TickValue::range(10.0, 20.0);
        assert_eq!(r.to_string(), "10\u{2026}20");
        assert!(r.is_range());
    }

    #[test]
    fn range_labels_need_an_extra_character() {
        let r = TickValue::range(1.0, 5.0);
        let s = TickValue::text("1\u{2026}5");
        assert_eq!(r.label_chars("1\u{2026}5"), 4);
        assert_eq!(s.label_chars("1\u{2026}5"), 3);
    }
}
