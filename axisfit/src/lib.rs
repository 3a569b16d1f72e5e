// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis geometry for chart layout.
//!
//! Given the fields bound to a chart axis and the space available for it, this crate
//! works out:
//! - the axis **title** (derived from field labels unless given explicitly),
//! - whether numeric values read better **in millions**, and whether the axis is **log**,
//! - which **tick values** to show and how many ticks to request,
//! - whether tick labels must be **rotated** to avoid overlapping,
//! - the axis **size** (thickness) and the **gutters** the plot needs on each side.
//!
//! The flow is two-phase: an [`AxisSpec`] is resolved into an [`Axis`] with
//! [`AxisSpec::build`], and the axis is then consumed by a single layout call
//! ([`Axis::layout_horizontally`], [`Axis::layout_vertically`] or [`Axis::layout`]),
//! yielding an [`AxisLayout`].
//!
//! Field data is supplied through the [`FieldStats`] trait; [`FieldSummary`] is a simple
//! in-memory implementation. Nothing here shapes text or draws; label sizes are
//! estimated from character counts (see [`AxisMetrics`]).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod field;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod measure;
mod metrics;
mod scale;
mod skip;
mod title;
mod value;

pub use axis::{Axis, AxisFields, AxisOrient, AxisSpec};
pub use field::{FieldStats, FieldSummary, Transform};
pub use format::format_number;
pub use layout::{AxisGeometry, AxisLayout};
pub use metrics::AxisMetrics;
pub use scale::{NiceTickSampler, TickSampler};
pub use value::{Datum, TickValue};
