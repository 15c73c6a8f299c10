// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact value formatting for tick and data labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `value` as a compact label.
///
/// - `|value| >= 1_000_000`: millions with one decimal and an `M` suffix (`2.0M`).
/// - `|value| >= 1_000`: thousands with one decimal and a `k` suffix (`1.5k`).
/// - integral values: plain integer (`42`).
/// - anything else: one decimal (`3.1`).
///
/// The tier is chosen from the unrounded magnitude, so `999.95` stays in the plain tier
/// and prints as `1000.0`. Decimal rounding uses the `{:.1}` formatter, which rounds the
/// exact binary value and breaks exact ties to even.
///
/// ```
/// use iochart_geometry::format_value;
///
/// assert_eq!(format_value(1500.0), "1.5k");
/// assert_eq!(format_value(2_000_000.0), "2.0M");
/// assert_eq!(format_value(42.0), "42");
/// assert_eq!(format_value(3.14159), "3.1");
/// ```
pub fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value == 0.0 {
        // Covers `-0.0`, which would otherwise print as `-0`.
        String::from("0")
    } else if value.floor() == value {
        format!("{value}")
    } else {
        format!("{value:.1}")
    }
}
