// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for axis layout.

use axisfit::{AxisSpec, FieldSummary, TickValue};
use proptest::prelude::*;

/// Distinct labels, so positions can be recovered from values.
fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 1..60).prop_map(|v| {
        v.into_iter()
            .enumerate()
            .map(|(i, s)| format!("{s}{i}"))
            .collect()
    })
}

fn categorical(labels: &[String]) -> FieldSummary {
    FieldSummary::categorical("cat", "Category", labels.iter().map(|s| TickValue::text(s)))
}

proptest! {
    #[test]
    fn empty_axes_never_take_space(space in -100.0_f64..5000.0, fill in any::<bool>()) {
        let h = AxisSpec::categorical("x").build().layout_horizontally(space, fill);
        let v = AxisSpec::numeric("y").build().layout_vertically(space);
        for layout in [h, v] {
            let g = layout.geometry();
            prop_assert!(!layout.axis().exists());
            prop_assert_eq!(g.size, 0);
            prop_assert_eq!(g.left_gutter + g.right_gutter + g.top_gutter + g.bottom_gutter, 0);
        }
    }

    #[test]
    fn categorical_labels_rotate_exactly_when_crowded(
        labels in labels(),
        space in 1.0_f64..3000.0,
        fill in any::<bool>(),
    ) {
        let axis = AxisSpec::categorical("x").with_field(categorical(&labels)).build();
        let label_width = f64::from(axis.max_category_width());
        let mut tick_width = label_width + 5.0;
        if tick_width > space * 0.5 {
            tick_width = (space * 0.5).trunc();
        }
        // Edge-filling axes lose one tick's width to the end labels.
        let available = if fill { space - tick_width } else { space };
        let crowded = available < tick_width * labels.len() as f64;

        let g = axis.layout_horizontally(space, fill).geometry().clone();
        prop_assert_eq!(g.rotated_ticks, crowded);
        if !crowded {
            prop_assert!(g.tick_values.is_none());
        }
        prop_assert_eq!(g.top_gutter + g.bottom_gutter, 0);
    }

    #[test]
    fn skipped_ticks_are_an_even_subsequence(labels in labels(), space in 1.0_f64..3000.0) {
        let values: Vec<TickValue> = labels.iter().map(|s| TickValue::text(s)).collect();
        let layout = AxisSpec::categorical("y")
            .with_field(categorical(&labels))
            .build()
            .layout_vertically(space);
        if let Some(ticks) = &layout.geometry().tick_values {
            prop_assert!(ticks.len() < values.len() || values.len() == 1);
            prop_assert_eq!(&ticks[0], &values[0]);
            if ticks.len() > 1 {
                let step = values.iter().position(|v| v == &ticks[1]).unwrap();
                prop_assert!(step >= 2);
                for (i, t) in ticks.iter().enumerate() {
                    prop_assert_eq!(t, &values[i * step]);
                }
            }
        }
    }

    #[test]
    fn layout_is_deterministic(
        labels in labels(),
        space in 1.0_f64..3000.0,
        fill in any::<bool>(),
    ) {
        let spec = AxisSpec::categorical("x").with_field(categorical(&labels));
        let a = spec.clone().build().layout_horizontally(space, fill);
        let b = spec.build().layout_horizontally(space, fill);
        prop_assert_eq!(a.geometry(), b.geometry());
    }

    #[test]
    fn categorical_axes_are_never_in_millions(
        min in -1_000_000_000_i64..1_000_000_000,
        span in 0_i64..10_000_000_000,
    ) {
        // Integral values keep `max - min` exact.
        let (lo, hi) = (min as f64, (min + span) as f64);
        let field = || FieldSummary::numeric("v", "Value", lo, hi);
        prop_assert!(!AxisSpec::categorical("x").with_field(field()).build().in_millions());
        let numeric = AxisSpec::numeric("x").with_field(field()).build();
        prop_assert_eq!(numeric.in_millions(), span > 2_000_000);
    }

    #[test]
    fn numeric_axes_never_rotate(max in 1.0_f64..1e9, space in 1.0_f64..3000.0) {
        let layout = AxisSpec::numeric("x")
            .with_field(FieldSummary::numeric("v", "Value", 0.0, max))
            .build()
            .layout_horizontally(space, false);
        prop_assert!(!layout.geometry().rotated_ticks);
        prop_assert!(layout.geometry().tick_values.is_none());
    }

    #[test]
    fn pinned_tick_counts_survive_layout(
        count in 1_u32..100,
        max in 1.0_f64..1e9,
        space in 1.0_f64..3000.0,
    ) {
        let spec = AxisSpec::numeric("x")
            .with_field(FieldSummary::numeric("v", "Value", 0.0, max))
            .with_tick_count(count);
        let h = spec.clone().build().layout_horizontally(space, true);
        let v = spec.build().layout_vertically(space);
        prop_assert_eq!(h.geometry().tick_count, Some(count));
        prop_assert_eq!(v.geometry().tick_count, Some(count));
    }
}
