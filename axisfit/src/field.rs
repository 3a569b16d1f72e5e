// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field statistics consumed by axis layout.
//!
//! Axis layout never looks at raw rows. It only needs a summary of each bound field:
//! its categories, numeric extent, labels and a formatter. [`FieldStats`] is that
//! summary; [`FieldSummary`] is a plain in-memory implementation.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::value::{Datum, TickValue};

/// A transform applied to a field before it is scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// No transform.
    Linear,
    /// Logarithmic.
    Log,
    /// Square root.
    Root,
}

/// Statistics about a field bound to an axis.
///
/// Statistics are read-only during layout, so axes can be laid out on any thread.
pub trait FieldStats: Send + Sync {
    /// The field name. Names starting with `'` are constants, not data.
    fn name(&self) -> &str;

    /// The display label.
    fn label(&self) -> &str;

    /// Whether the field was generated internally (and should not be titled).
    fn is_synthetic(&self) -> bool;

    /// Whether the field holds dates.
    fn is_date(&self) -> bool;

    /// The distinct categories, in display order.
    fn categories(&self) -> &[TickValue];

    /// The `(min, max)` numeric extent, if the field has one.
    fn numeric_range(&self) -> Option<(f64, f64)>;

    /// Formats a value of this field as a label.
    fn format(&self, value: &TickValue) -> String;

    /// The label the field had before any summary was applied.
    fn original_label(&self) -> Option<&str> {
        None
    }

    /// The transform applied to the field.
    fn transform(&self) -> Option<Transform> {
        None
    }
}

/// An in-memory [`FieldStats`] implementation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSummary {
    name: String,
    label: String,
    original_label: Option<String>,
    categories: Vec<TickValue>,
    range: Option<(f64, f64)>,
    transform: Option<Transform>,
    date: bool,
    synthetic: bool,
}

impl FieldSummary {
    /// A field with discrete categories.
    ///
    /// If every category is a number, the numeric range is derived from them.
    pub fn categorical(
        name: impl Into<String>,
        label: impl Into<String>,
        categories: impl IntoIterator<Item = TickValue>,
    ) -> Self {
        let categories: Vec<TickValue> = categories.into_iter().collect();
        let range = numeric_extent(&categories);
        Self {
            name: name.into(),
            label: label.into(),
            original_label: None,
            categories,
            range,
            transform: None,
            date: false,
            synthetic: false,
        }
    }

    /// A continuous numeric field spanning `min..=max`.
    pub fn numeric(name: impl Into<String>, label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            original_label: None,
            categories: Vec::new(),
            range: Some((min, max)),
            transform: None,
            date: false,
            synthetic: false,
        }
    }

    /// Sets the pre-summary label.
    pub fn with_original_label(mut self, label: impl Into<String>) -> Self {
        self.original_label = Some(label.into());
        self
    }

    /// Sets the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Marks the field as holding dates.
    pub fn with_date(mut self, date: bool) -> Self {
        self.date = date;
        self
    }

    /// Marks the field as internally generated.
    pub fn with_synthetic(mut self, synthetic: bool) -> Self {
        self.synthetic = synthetic;
        self
    }
}

impl FieldStats for FieldSummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    fn is_date(&self) -> bool {
        self.date
    }

    fn categories(&self) -> &[TickValue] {
        &self.categories
    }

    fn numeric_range(&self) -> Option<(f64, f64)> {
        self.range
    }

    fn format(&self, value: &TickValue) -> String {
        value.to_string()
    }

    fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }

    fn transform(&self) -> Option<Transform> {
        self.transform
    }
}

fn numeric_extent(categories: &[TickValue]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for c in categories {
        let TickValue::Scalar(Datum::Number(v)) = c else {
            return None;
        };
        if v.is_finite() {
            min = min.min(*v);
            max = max.max(*v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
