// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout: fitting labels into the available space.
//!
//! A horizontal axis first tries to lay labels out side by side. If they would
//! overlap, a categorical axis rotates them by 45° and thins them out; a numeric axis
//! requests fewer ticks instead. A vertical axis stacks labels, so it only thins
//! (categorical) or requests fewer ticks (numeric), and its thickness follows the
//! widest label it keeps.
//!
//! Both algorithms also report gutters: space outside the plot area that labels at
//! the ends of the axis spill into.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::SQRT_2;

use kurbo::Insets;
use tracing::debug;

use crate::axis::{Axis, AxisOrient};
use crate::measure::{count_ticks, max_tick_width, to_extent, to_px};
use crate::skip::skipping_tick_values;
use crate::value::TickValue;

/// Geometry computed for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisGeometry {
    /// Whether tick labels are drawn at an angle. Only categorical axes rotate.
    pub rotated_ticks: bool,
    /// If set, only these ticks are shown; otherwise every default tick is.
    pub tick_values: Option<Vec<TickValue>>,
    /// Tick count to request from the renderer; `None` lets it choose.
    pub tick_count: Option<u32>,
    /// Thickness of the axis, perpendicular to its direction.
    pub size: u32,
    /// Space needed left of the plot (horizontal axes).
    pub left_gutter: u32,
    /// Space needed right of the plot (horizontal axes).
    pub right_gutter: u32,
    /// Space needed above the plot (vertical axes).
    pub top_gutter: u32,
    /// Space needed below the plot (vertical axes).
    pub bottom_gutter: u32,
}

impl AxisGeometry {
    /// The gutters as insets (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub fn insets(&self) -> Insets {
        Insets::new(
            f64::from(self.left_gutter),
            f64::from(self.top_gutter),
            f64::from(self.right_gutter),
            f64::from(self.bottom_gutter),
        )
    }
}

/// An axis together with its computed geometry.
#[derive(Clone, Debug)]
pub struct AxisLayout {
    axis: Axis,
    geometry: AxisGeometry,
}

impl AxisLayout {
    /// The axis that was laid out.
    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    /// The computed geometry.
    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    /// Splits the layout into its axis and geometry.
    pub fn into_parts(self) -> (Axis, AxisGeometry) {
        (self.axis, self.geometry)
    }
}

impl Axis {
    /// Lays the axis out along its orientation.
    ///
    /// `fill_to_edge` only applies to horizontal axes.
    pub fn layout(
        self,
        orient: AxisOrient,
        available_space: f64,
        fill_to_edge: bool,
    ) -> AxisLayout {
        if orient.is_horizontal() {
            self.layout_horizontally(available_space, fill_to_edge)
        } else {
            self.layout_vertically(available_space)
        }
    }

    /// Lays the axis out horizontally within `available_space`.
    ///
    /// With `fill_to_edge`, the first and last ticks sit on the plot edges rather than
    /// in the middle of their bands. Numeric axes always fill to the edge.
    pub fn layout_horizontally(self, available_space: f64, fill_to_edge: bool) -> AxisLayout {
        let mut geometry = self.unlaid_geometry();
        if !self.exists() {
            return AxisLayout {
                axis: self,
                geometry,
            };
        }
        let m = self.metrics;
        let title_height = self.title_height();

        let mut available = available_space;
        let mut tick_width = self.label_width().saturating_add(m.tick_margin);
        if f64::from(tick_width) > available * 0.5 {
            tick_width = to_px(available * 0.5);
        }
        let tick_count = count_ticks(&self.fields, self.categorical, &m);

        let fill_to_edge = fill_to_edge || !self.categorical;
        // End labels overhang the first and last ticks.
        if fill_to_edge {
            available -= f64::from(tick_width);
        }

        let space_for_one_tick = to_px(available / f64::from(tick_count));
        let crowded = available < f64::from(tick_width) * f64::from(tick_count);

        if self.categorical && crowded {
            geometry.rotated_ticks = true;
            geometry.tick_values = skipping_tick_values(&self.fields, available, tick_count, &m);
            // At 45° a label's height and width are both its length over √2.
            let tick_height = to_px(f64::from(tick_width) / SQRT_2);
            geometry.size = to_extent(
                tick_height
                    .saturating_add(m.rotated_tick_allowance)
                    .saturating_add(title_height),
            );
            let (left, right) = if fill_to_edge {
                (
                    tick_height.saturating_sub(m.rotated_overhang),
                    m.rotated_right_gutter,
                )
            } else {
                let half_band = space_for_one_tick / 2;
                (
                    tick_height
                        .saturating_sub(m.rotated_overhang)
                        .saturating_sub(half_band),
                    m.rotated_right_gutter.saturating_sub(half_band),
                )
            };
            geometry.left_gutter = to_extent(left);
            geometry.right_gutter = to_extent(right);
            debug!(
                scale = self.scale_name(),
                tick_width,
                tick_count,
                available,
                skipped = geometry.tick_values.is_some(),
                "rotating crowded tick labels"
            );
        } else {
            geometry.size = to_extent(self.simple_horizontal_size());
            let half_tick = tick_width / 2;
            let gutter = if fill_to_edge {
                half_tick
            } else {
                half_tick.saturating_sub(space_for_one_tick / 2)
            };
            geometry.left_gutter = to_extent(gutter);
            geometry.right_gutter = geometry.left_gutter;

            if crowded && self.tick_count.is_none() {
                // Only numeric axes get here: ask for fewer, wider-spaced ticks.
                let spacing = tick_width.saturating_add(m.tick_margin);
                let reduced = to_extent(to_px(available / f64::from(spacing)));
                debug!(
                    scale = self.scale_name(),
                    from = tick_count,
                    to = reduced,
                    "reducing horizontal tick count"
                );
                geometry.tick_count = Some(reduced);
            }
        }

        AxisLayout {
            axis: self,
            geometry,
        }
    }

    /// Lays the axis out vertically within `available_space`.
    pub fn layout_vertically(self, available_space: f64) -> AxisLayout {
        let mut geometry = self.unlaid_geometry();
        if !self.exists() {
            return AxisLayout {
                axis: self,
                geometry,
            };
        }
        let m = self.metrics;
        let tick_count = count_ticks(&self.fields, self.categorical, &m);

        // Labels at the ends may spill a little above and below the plot.
        geometry.top_gutter = to_extent(m.vertical_gutter);
        geometry.bottom_gutter = to_extent(m.vertical_gutter);
        let available = available_space - 2.0 * f64::from(m.vertical_gutter);

        if self.categorical {
            geometry.tick_values = skipping_tick_values(&self.fields, available, tick_count, &m);
            if let Some(ticks) = &geometry.tick_values {
                debug!(
                    scale = self.scale_name(),
                    from = tick_count,
                    to = ticks.len(),
                    "skipping vertical tick labels"
                );
            }
        } else {
            let spacing = f64::from(m.vertical_tick_spacing);
            if spacing * f64::from(tick_count) > available && self.tick_count.is_none() {
                let reduced = to_extent(to_px(available / spacing));
                debug!(
                    scale = self.scale_name(),
                    from = tick_count,
                    to = reduced,
                    "reducing vertical tick count"
                );
                geometry.tick_count = Some(reduced);
            }
        }

        let label_width = match &geometry.tick_values {
            Some(ticks) => max_tick_width(ticks, &m),
            None => self.label_width(),
        };
        geometry.size = to_extent(
            label_width
                .saturating_add(self.title_height())
                .saturating_add(m.vertical_tick_allowance),
        );

        AxisLayout {
            axis: self,
            geometry,
        }
    }

    /// Geometry before layout: everything zero, with any pinned tick count.
    fn unlaid_geometry(&self) -> AxisGeometry {
        AxisGeometry {
            tick_count: self.tick_count,
            ..AxisGeometry::default()
        }
    }
}
