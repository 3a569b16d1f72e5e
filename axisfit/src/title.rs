// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis titles derived from the bound fields.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::field::FieldStats;

/// Separator between titles of multiple fields.
pub(crate) const TITLE_SEPARATOR: &str = ", ";

/// Resolves the axis title.
///
/// An explicit title wins; an explicit empty title means "no title".
pub(crate) fn resolve_title<F>(explicit: Option<&str>, fields: &[F]) -> Option<String>
where
    F: AsRef<dyn FieldStats>,
{
    match explicit {
        Some("") => None,
        Some(title) => Some(String::from(title)),
        None => title_from_fields(fields),
    }
}

/// Joins the distinct labels of the displayable fields.
///
/// When several labels share fewer pre-summary labels (e.g. `Sum(Sales)` and
/// `Mean(Sales)` both came from `Sales`), the shorter pre-summary list is used.
fn title_from_fields<F>(fields: &[F]) -> Option<String>
where
    F: AsRef<dyn FieldStats>,
{
    let mut labels = OrderedSet::default();
    let mut originals = OrderedSet::default();
    for f in fields {
        let f: &dyn FieldStats = f.as_ref();
        if f.is_synthetic() || f.name().starts_with('\'') {
            continue;
        }
        labels.insert(f.label());
        originals.insert(f.original_label().unwrap_or(f.label()));
    }
    let chosen = if originals.len() < labels.len() {
        originals
    } else {
        labels
    };
    if chosen.is_empty() {
        None
    } else {
        Some(chosen.items.join(TITLE_SEPARATOR))
    }
}

/// Distinct strings in first-seen order.
#[derive(Default)]
struct OrderedSet<'a> {
    seen: HashSet<&'a str>,
    items: Vec<&'a str>,
}

impl<'a> OrderedSet<'a> {
    fn insert(&mut self, s: &'a str) {
        if self.seen.insert(s) {
            self.items.push(s);
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::boxed::Box;
    use alloc::vec;

    use super::*;
    use crate::field::FieldSummary;

    fn fields(list: Vec<FieldSummary>) -> Vec<Box<dyn FieldStats>> {
        list.into_iter()
            .map(|f| Box::new(f) as Box<dyn FieldStats>)
            .collect()
    }

    #[test]
    fn labels_are_deduplicated_in_order() {
        let fs = fields(vec![
            FieldSummary::numeric("b", "Beta", 0.0, 1.0),
            FieldSummary::numeric("a", "Alpha", 0.0, 1.0),
            FieldSummary::numeric("b2", "Beta", 0.0, 1.0),
        ]);
        assert_eq!(resolve_title(None, &fs).as_deref(), Some("Beta, Alpha"));
    }

    #[test]
    fn original_labels_are_preferred_when_fewer() {
        let fs = fields(vec![
            FieldSummary::numeric("s", "Sum(Sales)", 0.0, 1.0).with_original_label("Sales"),
            FieldSummary::numeric("m", "Mean(Sales)", 0.0, 1.0).with_original_label("Sales"),
        ]);
        assert_eq!(resolve_title(None, &fs).as_deref(), Some("Sales"));
    }

    #[test]
    fn original_labels_are_ignored_when_not_fewer() {
        let fs = fields(vec![
            FieldSummary::numeric("s", "Sum(Sales)", 0.0, 1.0).with_original_label("Sales"),
            FieldSummary::numeric("p", "Profit", 0.0, 1.0),
        ]);
        assert_eq!(
            resolve_title(None, &fs).as_deref(),
            Some("Sum(Sales), Profit")
        );
    }

    #[test]
    fn synthetic_and_constant_fields_are_skipped() {
        let fs = fields(vec![
            FieldSummary::numeric("#count", "Count", 0.0, 1.0).with_synthetic(true),
            FieldSummary::numeric("'const'", "const", 0.0, 1.0),
        ]);
        assert_eq!(resolve_title(None, &fs), None);
    }

    #[test]
    fn explicit_title_wins() {
        let fs = fields(vec![FieldSummary::numeric("a", "Alpha", 0.0, 1.0)]);
        assert_eq!(resolve_title(Some("Custom"), &fs).as_deref(), Some("Custom"));
        assert_eq!(resolve_title(Some(""), &fs), None);
    }
}
