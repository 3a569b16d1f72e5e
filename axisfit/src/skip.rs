// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thinning categorical tick labels to fit.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::field::FieldStats;
use crate::metrics::AxisMetrics;
use crate::value::TickValue;

/// Every Nth category, so that labels land roughly [`AxisMetrics::label_spacing`] apart.
///
/// Returns `None` when every category fits (a skip of less than 2).
pub(crate) fn skipping_tick_values(
    fields: &[impl AsRef<dyn FieldStats>],
    space: f64,
    count: i32,
    metrics: &AxisMetrics,
) -> Option<Vec<TickValue>> {
    let skip = skip_frequency(space, count, metrics)?;
    Some(
        fields
            .iter()
            .flat_map(|f| f.as_ref().categories())
            .step_by(skip)
            .cloned()
            .collect(),
    )
}

fn skip_frequency(space: f64, count: i32, metrics: &AxisMetrics) -> Option<usize> {
    let space_per_tick = space / f64::from(count);
    let skip = (metrics.label_spacing / space_per_tick).round();
    // No space at all gives an infinite skip; treat that like negative space.
    if !skip.is_finite() || skip < 2.0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "finite and at least 2; saturates for absurdly small spaces"
    )]
    let skip = skip as usize;
    Some(skip)
}
