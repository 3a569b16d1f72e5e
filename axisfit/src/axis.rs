// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis descriptors.
//!
//! An axis goes through two phases:
//! - an [`AxisSpec`] collects the bound fields and caller overrides, and
//!   [`AxisSpec::build`] resolves it into an [`Axis`] (title, millions, log);
//! - an [`Axis`] is consumed by exactly one layout call (see [`crate::AxisLayout`]),
//!   which computes its geometry for the space available.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use smallvec::SmallVec;

use crate::field::FieldStats;
use crate::measure::{self, to_extent};
use crate::metrics::AxisMetrics;
use crate::scale::{NiceTickSampler, TickSampler};
use crate::title::resolve_title;

/// Fields bound to one axis. Most axes have one or two.
pub type AxisFields = SmallVec<[Arc<dyn FieldStats>; 2]>;

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// Returns `true` for [`AxisOrient::Top`] and [`AxisOrient::Bottom`].
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Inputs for one axis: bound fields plus caller overrides.
#[derive(Clone)]
pub struct AxisSpec {
    /// Dimension this axis shows (e.g. `"x"`); the scale is named after it.
    pub dimension: String,
    /// Fields bound to the axis, in order.
    pub fields: AxisFields,
    /// Whether the axis shows discrete categories.
    pub categorical: bool,
    /// Explicit title.
    ///
    /// `None` derives the title from the fields; `Some("")` suppresses it.
    pub title: Option<String>,
    /// Explicit tick count. Values at or above
    /// [`AxisMetrics::max_requested_ticks`] mean "automatic".
    pub tick_count: Option<u32>,
    /// Layout constants.
    pub metrics: AxisMetrics,
    /// Sampler used to estimate numeric label widths.
    pub sampler: Arc<dyn TickSampler>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("dimension", &self.dimension)
            .field("fields", &FieldNames(&self.fields))
            .field("categorical", &self.categorical)
            .field("title", &self.title)
            .field("tick_count", &self.tick_count)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl AxisSpec {
    /// Creates an axis spec with no fields, a derived title and default metrics.
    pub fn new(dimension: impl Into<String>, categorical: bool) -> Self {
        Self {
            dimension: dimension.into(),
            fields: AxisFields::new(),
            categorical,
            title: None,
            tick_count: None,
            metrics: AxisMetrics::default(),
            sampler: Arc::new(NiceTickSampler),
        }
    }

    /// Convenience for a categorical axis.
    pub fn categorical(dimension: impl Into<String>) -> Self {
        Self::new(dimension, true)
    }

    /// Convenience for a numeric axis.
    pub fn numeric(dimension: impl Into<String>) -> Self {
        Self::new(dimension, false)
    }

    /// Binds a field.
    pub fn with_field(self, field: impl FieldStats + 'static) -> Self {
        self.with_shared_field(Arc::new(field))
    }

    /// Binds an already shared field.
    pub fn with_shared_field(mut self, field: Arc<dyn FieldStats>) -> Self {
        self.fields.push(field);
        self
    }

    /// Binds several shared fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Arc<dyn FieldStats>>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Sets an explicit title. An empty title means "no title".
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Suppresses the title.
    pub fn without_title(self) -> Self {
        self.with_title("")
    }

    /// Pins the tick count; layout will not override it.
    pub fn with_tick_count(mut self, tick_count: u32) -> Self {
        self.tick_count = Some(tick_count);
        self
    }

    /// Sets the layout constants.
    pub fn with_metrics(mut self, metrics: AxisMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the numeric tick sampler.
    pub fn with_sampler(mut self, sampler: impl TickSampler + 'static) -> Self {
        self.sampler = Arc::new(sampler);
        self
    }

    /// Resolves the title and display flags, producing an axis ready for layout.
    pub fn build(self) -> Axis {
        let title = resolve_title(self.title.as_deref(), &self.fields);
        let in_millions = measure::in_millions(&self.fields, self.categorical, &self.metrics);
        let is_log = measure::is_log(&self.fields);
        let tick_count = self
            .tick_count
            .filter(|n| *n < self.metrics.max_requested_ticks);
        let scale_name = alloc::format!("scale_{}", self.dimension);
        tracing::trace!(
            scale = %scale_name,
            title = ?title,
            categorical = self.categorical,
            in_millions,
            is_log,
            "resolved axis"
        );
        Axis {
            scale_name,
            title,
            fields: self.fields,
            categorical: self.categorical,
            in_millions,
            is_log,
            tick_count,
            metrics: self.metrics,
            sampler: self.sampler,
        }
    }
}

/// A resolved axis, awaiting layout.
///
/// Layout consumes the axis, so each axis is laid out exactly once.
#[derive(Clone)]
pub struct Axis {
    scale_name: String,
    title: Option<String>,
    pub(crate) fields: AxisFields,
    pub(crate) categorical: bool,
    in_millions: bool,
    is_log: bool,
    pub(crate) tick_count: Option<u32>,
    pub(crate) metrics: AxisMetrics,
    sampler: Arc<dyn TickSampler>,
}

impl core::fmt::Debug for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Axis")
            .field("scale_name", &self.scale_name)
            .field("title", &self.title)
            .field("fields", &FieldNames(&self.fields))
            .field("categorical", &self.categorical)
            .field("in_millions", &self.in_millions)
            .field("is_log", &self.is_log)
            .field("tick_count", &self.tick_count)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Axis {
    /// An axis exists only if it has fields to show.
    pub fn exists(&self) -> bool {
        !self.fields.is_empty()
    }

    /// The display title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Name of the scale this axis renders.
    pub fn scale_name(&self) -> &str {
        &self.scale_name
    }

    /// Whether the axis shows discrete categories.
    pub fn is_categorical(&self) -> bool {
        self.categorical
    }

    /// Whether values should be displayed divided by a million.
    ///
    /// Always `false` for categorical axes.
    pub fn in_millions(&self) -> bool {
        self.in_millions
    }

    /// Whether the first bound field is log transformed.
    pub fn is_log(&self) -> bool {
        self.is_log
    }

    /// Fields bound to the axis.
    pub fn fields(&self) -> &[Arc<dyn FieldStats>] {
        &self.fields
    }

    /// The tick count pinned by the caller, if any.
    pub fn requested_tick_count(&self) -> Option<u32> {
        self.tick_count
    }

    /// Estimated width of the widest label.
    pub fn max_category_width(&self) -> u32 {
        to_extent(self.label_width())
    }

    /// Space needed for the title.
    pub fn estimated_title_height(&self) -> u32 {
        to_extent(self.title_height())
    }

    /// Thickness of this axis laid out horizontally with unrotated labels.
    pub fn estimated_simple_size_when_horizontal(&self) -> u32 {
        to_extent(self.simple_horizontal_size())
    }

    pub(crate) fn label_width(&self) -> i32 {
        measure::max_category_width(
            &self.fields,
            self.categorical,
            &self.metrics,
            self.sampler.as_ref(),
        )
    }

    pub(crate) fn title_height(&self) -> i32 {
        if self.title.is_some() {
            self.metrics.title_height
        } else {
            0
        }
    }

    pub(crate) fn simple_horizontal_size(&self) -> i32 {
        if self.exists() {
            self.metrics
                .horizontal_base_size
                .saturating_add(self.title_height())
        } else {
            0
        }
    }
}

/// Debug helper listing field names.
struct FieldNames<'a>(&'a [Arc<dyn FieldStats>]);

impl core::fmt::Debug for FieldNames<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|field| field.name()))
            .finish()
    }
}
