// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Representative tick sampling for numeric fields.
//!
//! Width estimation for a numeric axis needs to know what its labels will look like
//! before the real scale exists. A [`TickSampler`] produces a handful of ticks the
//! renderer would plausibly draw; the widest formatted one sizes the axis.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::field::{FieldStats, Transform};

/// Produces representative tick values for a numeric field.
pub trait TickSampler: Send + Sync {
    /// Returns roughly `divisions` tick values covering the field's extent.
    fn sample(&self, field: &dyn FieldStats, divisions: usize) -> Vec<f64>;
}

/// The default sampler: "nice" linear steps, or powers of ten for log fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct NiceTickSampler;

impl TickSampler for NiceTickSampler {
    fn sample(&self, field: &dyn FieldStats, divisions: usize) -> Vec<f64> {
        let Some((min, max)) = field.numeric_range() else {
            return Vec::new();
        };
        if field.transform() == Some(Transform::Log) && min > 0.0 && max > 0.0 {
            return log_ticks(min, max);
        }
        nice_ticks(min, max, divisions)
    }
}

/// Ticks on a "nice" step that cover `[min, max]`.
pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let first = (min / step).floor();
    let last = (max / step).ceil();
    let n = (last - first).clamp(0.0, 10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    let n = n as u32;
    // Multiplying the integer index avoids accumulating step error.
    (0..=n).map(|i| (first + f64::from(i)) * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powi(exponent(raw.log10().floor()));
    let ratio = raw / base;
    let mantissa = if ratio >= 7.5 {
        10.0
    } else if ratio >= 3.5 {
        5.0
    } else if ratio >= 1.5 {
        2.0
    } else {
        1.0
    };
    mantissa * base
}

/// Powers of ten from below `min` to above `max`.
fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let lo = exponent(lo.log10().floor());
    let hi = exponent(hi.log10().ceil());
    (lo..=hi).map(|e| 10_f64.powi(e)).collect()
}

fn exponent(e: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float exponents of finite f64 values fit comfortably in i32"
    )]
    {
        e.clamp(-400.0, 400.0) as i32
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::field::FieldSummary;

    #[test]
    fn nice_ticks_cover_the_extent() {
        let t = nice_ticks(0.0, 3_500_000.0, 5);
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(3_500_000.0));
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn nice_ticks_handle_degenerate_ranges() {
        assert_eq!(nice_ticks(3.0, 3.0, 5), alloc::vec![3.0]);
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn reversed_extent_is_normalized() {
        assert_eq!(nice_ticks(10.0, 0.0, 5), nice_ticks(0.0, 10.0, 5));
    }

    #[test]
    fn log_fields_sample_powers_of_ten() {
        let f = FieldSummary::numeric("pop", "Population", 3.0, 4500.0)
            .with_transform(Transform::Log);
        let t = NiceTickSampler.sample(&f, 5);
        assert_eq!(t, alloc::vec![1.0, 10.0, 100.0, 1000.0, 10_000.0]);
    }

    #[test]
    fn fields_without_a_range_sample_nothing() {
        let f = FieldSummary::categorical("c", "C", [crate::TickValue::text("a")]);
        assert!(NiceTickSampler.sample(&f, 5).is_empty());
    }
}
