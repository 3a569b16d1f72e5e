// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning constants for axis layout.
//!
//! The defaults are empirical: they assume a ~10px sans-serif label font and produce
//! the same geometry as earlier releases. Adjust them to recalibrate for other fonts.

/// Layout constants used when sizing an axis.
///
/// Pixel values are in the chart's coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMetrics {
    /// Average rendered width of one label character.
    pub char_width: f64,
    /// Padding added to the widest label to get a tick's width.
    pub tick_margin: i32,
    /// Categorical labels are thinned to roughly one per this many pixels.
    pub label_spacing: f64,
    /// Minimum spacing between ticks on a vertical numeric axis.
    pub vertical_tick_spacing: i32,
    /// Numeric extents wider than this are displayed in millions.
    pub millions_threshold: f64,
    /// Space reserved for the axis title, when there is one.
    pub title_height: i32,
    /// Thickness of a horizontal axis with unrotated labels (excluding title).
    pub horizontal_base_size: i32,
    /// Extra thickness for tick marks below rotated labels.
    pub rotated_tick_allowance: i32,
    /// Right gutter when rotated labels fill to the edge.
    pub rotated_right_gutter: i32,
    /// How far rotated labels are shifted right of their tick.
    pub rotated_overhang: i32,
    /// Gutter above and below a vertical axis.
    pub vertical_gutter: i32,
    /// Thickness for tick marks and the gap to the title on a vertical axis.
    pub vertical_tick_allowance: i32,
    /// Numeric labels always reserve at least this many characters.
    pub min_numeric_label_chars: usize,
    /// Divisions requested when sampling numeric ticks for width estimation.
    pub numeric_sample_divisions: usize,
    /// Nominal tick count for a numeric axis.
    pub nominal_numeric_ticks: usize,
    /// Requested tick counts at or above this are treated as "automatic".
    pub max_requested_ticks: u32,
}

impl Default for AxisMetrics {
    fn default() -> Self {
        Self {
            char_width: 6.5,
            tick_margin: 5,
            label_spacing: 20.0,
            vertical_tick_spacing: 16,
            millions_threshold: 2e6,
            title_height: 16,
            horizontal_base_size: 20,
            rotated_tick_allowance: 16,
            rotated_right_gutter: 10,
            rotated_overhang: 8,
            vertical_gutter: 5,
            vertical_tick_allowance: 10,
            min_numeric_label_chars: 3,
            numeric_sample_divisions: 5,
            nominal_numeric_ticks: 10,
            max_requested_ticks: 100,
        }
    }
}
