// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default number formatting for tick labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Formats a number the way a default tick label shows it.
///
/// Whole numbers print without a fractional part. Other values keep at most three
/// fractional digits, with trailing zeros removed.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return String::from("NaN");
    }
    if v.is_infinite() {
        return String::from(if v > 0.0 { "\u{221e}" } else { "-\u{221e}" });
    }
    if v == 0.0 {
        return String::from("0");
    }
    if v % 1.0 == 0.0 {
        return format!("{v:.0}");
    }
    let mut out = format!("{v:.3}");
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    if out == "-0" {
        out = String::from("0");
    }
    out
}
