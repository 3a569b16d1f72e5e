// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size estimates for axis labels.
//!
//! Layout runs before any text is shaped, so label widths are estimated from
//! character counts and an average glyph width (see [`AxisMetrics::char_width`]).

extern crate alloc;

use alloc::string::ToString;

use crate::field::{FieldStats, Transform};
use crate::metrics::AxisMetrics;
use crate::scale::TickSampler;
use crate::value::TickValue;

/// Truncates a pixel measure toward zero, saturating at the `i32` bounds.
pub(crate) fn to_px(v: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; truncation is the intended rounding"
    )]
    {
        v as i32
    }
}

/// Clamps a signed pixel measure to a non-negative one.
pub(crate) fn to_extent(v: i32) -> u32 {
    v.max(0).unsigned_abs()
}

/// Nominal tick count: every category, or a fixed count for numeric axes.
///
/// Never returns zero.
pub(crate) fn count_ticks(
    fields: &[impl AsRef<dyn FieldStats>],
    categorical: bool,
    metrics: &AxisMetrics,
) -> i32 {
    let n = if categorical {
        fields.iter().map(|f| f.as_ref().categories().len()).sum::<usize>()
    } else {
        metrics.nominal_numeric_ticks
    };
    i32::try_from(n.max(1)).unwrap_or(i32::MAX)
}

/// Width of the widest label the axis will draw.
pub(crate) fn max_category_width(
    fields: &[impl AsRef<dyn FieldStats>],
    categorical: bool,
    metrics: &AxisMetrics,
    sampler: &dyn TickSampler,
) -> i32 {
    if fields.is_empty() {
        return 0;
    }
    let mut max_chars = 1;
    for f in fields {
        let f = f.as_ref();
        if categorical {
            for c in f.categories() {
                max_chars = max_chars.max(c.label_chars(&f.format(c)));
            }
        } else {
            for v in sampler.sample(f, metrics.numeric_sample_divisions) {
                let tick = TickValue::number(v);
                max_chars = max_chars.max(tick.label_chars(&f.format(&tick)));
            }
            // Renderers often add fractional ticks even on integer data.
            max_chars = max_chars.max(metrics.min_numeric_label_chars);
        }
    }
    chars_to_px(max_chars, metrics)
}

/// Width of the widest of the given tick values, by their display form.
pub(crate) fn max_tick_width(ticks: &[TickValue], metrics: &AxisMetrics) -> i32 {
    let max_chars = ticks
        .iter()
        .map(|t| t.label_chars(&t.to_string()))
        .fold(1, usize::max);
    chars_to_px(max_chars, metrics)
}

fn chars_to_px(chars: usize, metrics: &AxisMetrics) -> i32 {
    to_px(chars as f64 * metrics.char_width)
}

/// Whether numeric values are best shown in millions.
pub(crate) fn in_millions(
    fields: &[impl AsRef<dyn FieldStats>],
    categorical: bool,
    metrics: &AxisMetrics,
) -> bool {
    !categorical
        && fields.iter().any(|f| {
            let f = f.as_ref();
            !f.is_date()
                && f.numeric_range()
                    .is_some_and(|(min, max)| max - min > metrics.millions_threshold)
        })
}

/// Whether the axis's primary field is log transformed.
pub(crate) fn is_log(fields: &[impl AsRef<dyn FieldStats>]) -> bool {
    fields
        .first()
        .is_some_and(|f| f.as_ref().transform() == Some(Transform::Log))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::field::FieldSummary;
    use crate::scale::NiceTickSampler;

    fn one(f: FieldSummary) -> Vec<Arc<dyn FieldStats>> {
        vec![Arc::new(f) as Arc<dyn FieldStats>]
    }

    #[test]
    fn categorical_ticks_sum_over_fields() {
        let m = AxisMetrics::default();
        let fields: Vec<Arc<dyn FieldStats>> = vec![
            Arc::new(FieldSummary::categorical("a", "A", ["x", "y"].map(TickValue::text))),
            Arc::new(FieldSummary::categorical("b", "B", ["z"].map(TickValue::text))),
        ];
        assert_eq!(count_ticks(&fields, true, &m), 3);
        assert_eq!(count_ticks(&fields, false, &m), 10);
    }

    #[test]
    fn empty_categories_still_count_one_tick() {
        let m = AxisMetrics::default();
        let fields = one(FieldSummary::categorical("a", "A", Vec::new()));
        assert_eq!(count_ticks(&fields, true, &m), 1);
        let none: Vec<Arc<dyn FieldStats>> = Vec::new();
        assert_eq!(count_ticks(&none, true, &m), 1);
    }

    #[test]
    fn category_width_uses_longest_label() {
        let m = AxisMetrics::default();
        let fields = one(FieldSummary::categorical(
            "c",
            "C",
            ["ab", "abcdef", "abc"].map(TickValue::text),
        ));
        // 6 chars * 6.5 = 39
        assert_eq!(max_category_width(&fields, true, &m, &NiceTickSampler), 39);
    }

    #[test]
    fn range_categories_get_an_extra_character() {
        let m = AxisMetrics::default();
        let fields = one(FieldSummary::categorical(
            "bin",
            "Bin",
            [TickValue::range(10.0, 20.0)],
        ));
        // "10…20" is 5 chars, plus one for the range.
        assert_eq!(max_category_width(&fields, true, &m, &NiceTickSampler), 39);
    }

    #[test]
    fn numeric_width_reserves_three_characters() {
        let m = AxisMetrics::default();
        let fields = one(FieldSummary::numeric("x", "X", 0.0, 5.0));
        // Ticks 0..5 are one char each; the floor of 3 applies: 3 * 6.5 = 19.5 -> 19.
        assert_eq!(max_category_width(&fields, false, &m, &NiceTickSampler), 19);
    }

    #[test]
    fn numeric_width_follows_sampled_ticks() {
        let m = AxisMetrics::default();
        let fields = one(FieldSummary::numeric("x", "X", 0.0, 3_500_000.0));
        // "3500000" is 7 chars.
        assert_eq!(max_category_width(&fields, false, &m, &NiceTickSampler), 45);
    }

    #[test]
    fn no_fields_means_no_width() {
        let m = AxisMetrics::default();
        let none: Vec<Arc<dyn FieldStats>> = Vec::new();
        assert_eq!(max_category_width(&none, true, &m, &NiceTickSampler), 0);
    }

    #[test]
    fn millions_require_a_wide_non_date_numeric_axis() {
        let m = AxisMetrics::default();
        let wide = one(FieldSummary::numeric("x", "X", 0.0, 3_500_000.0));
        assert!(in_millions(&wide, false, &m));
        assert!(!in_millions(&wide, true, &m));

        let narrow = one(FieldSummary::numeric("x", "X", 0.0, 2_000_000.0));
        assert!(!in_millions(&narrow, false, &m));

        let dates = one(FieldSummary::numeric("t", "T", 0.0, 1e12).with_date(true));
        assert!(!in_millions(&dates, false, &m));
    }

    #[test]
    fn log_is_read_from_the_first_field() {
        let fields: Vec<Arc<dyn FieldStats>> = vec![
            Arc::new(FieldSummary::numeric("a", "A", 1.0, 10.0)),
            Arc::new(FieldSummary::numeric("b", "B", 1.0, 10.0).with_transform(Transform::Log)),
        ];
        assert!(!is_log(&fields));
        let log = one(FieldSummary::numeric("b", "B", 1.0, 10.0).with_transform(Transform::Log));
        assert!(is_log(&log));
    }

    #[test]
    fn tick_width_measures_display_form() {
        let m = AxisMetrics::default();
        let ticks = vec![TickValue::text("abcd"), TickValue::range(1.0, 2.0)];
        // "abcd" = 4, "1…2" = 3 + 1 = 4 -> 26
        assert_eq!(max_tick_width(&ticks, &m), 26);
        assert_eq!(to_extent(-3), 0);
        assert_eq!(to_extent(7), 7);
    }
}
