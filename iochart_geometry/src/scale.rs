// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear value scale for line and column charts.
//!
//! A [`LinearScale`] is built from a list of values and a [`ChartFrame`]. The domain always
//! contains zero so that bar and line baselines are representable, and grid lines are
//! chosen at "nice" round steps (1, 2, or 5 times a power of ten).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::frame::{ChartFrame, Padding};

/// Target number of grid intervals across the domain.
pub const GRID_TARGET_COUNT: usize = 5;

/// Grid values are rounded to this many decimal places to drop float noise.
const GRID_ROUNDING: f64 = 1e10;

/// Upper bound on emitted grid lines.
const MAX_GRID_LINES: usize = 10_000;

/// A linear mapping from a zero-inclusive value domain into a padded viewport.
///
/// The scale stores only immutable parameters; [`LinearScale::scale_y`] and
/// [`LinearScale::scale_x`] are pure functions of those parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    grid_lines: Vec<f64>,
    step: f64,
    frame: ChartFrame,
}

impl LinearScale {
    /// Builds a scale for `values` inside `frame`, targeting [`GRID_TARGET_COUNT`] grid
    /// intervals.
    ///
    /// Non-finite values are ignored. The domain is `[min(0, values), max(0, values)]`,
    /// widened to `[-1, 1]` when it would otherwise be empty.
    pub fn new(values: &[f64], frame: ChartFrame) -> Self {
        Self::with_target_count(values, frame, GRID_TARGET_COUNT)
    }

    /// Builds a scale with a custom target number of grid intervals (at least 1).
    pub fn with_target_count(values: &[f64], frame: ChartFrame, target_count: usize) -> Self {
        let (mut min, mut max) = zero_inclusive_extent(values);
        if min == max {
            tracing::debug!(value = min, "widening degenerate scale domain by ±1");
            min -= 1.0;
            max += 1.0;
        }

        let step = nice_step(raw_step(min, max, target_count.max(1)));
        let grid_lines = grid_values(min, max, step);
        tracing::trace!(
            min,
            max,
            step,
            grid_lines = grid_lines.len(),
            "computed linear scale"
        );

        Self {
            min,
            max,
            grid_lines,
            step,
            frame,
        }
    }

    /// Lower bound of the domain (always `<= 0`).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain (always `>= 0`).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Domain span, `max - min` (always `> 0`, and infinite when the span exceeds `f64::MAX`).
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Spacing between consecutive grid lines.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Grid line values in ascending order.
    pub fn grid_lines(&self) -> &[f64] {
        &self.grid_lines
    }

    /// The frame this scale maps into.
    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    /// Padding around the inner plot area.
    pub fn padding(&self) -> &Padding {
        &self.frame.padding
    }

    /// Width of the inner plot area.
    pub fn inner_width(&self) -> f64 {
        self.frame.inner_width()
    }

    /// Height of the inner plot area.
    pub fn inner_height(&self) -> f64 {
        self.frame.inner_height()
    }

    /// The inner plot area in viewport coordinates.
    pub fn inner_rect(&self) -> Rect {
        self.frame.inner_rect()
    }

    /// Returns `true` when the domain strictly straddles zero.
    pub fn straddles_zero(&self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }

    /// Maps a value to a viewport y coordinate.
    ///
    /// Larger values plot higher: `min` maps to the bottom of the inner area and `max` to
    /// the top. Values outside the domain are not clamped.
    pub fn scale_y(&self, value: f64) -> f64 {
        let top = self.frame.padding.top;
        let height = self.inner_height();
        top + height - self.fraction(value) * height
    }

    /// Position of `value` along the domain, `0` at `min` and `1` at `max`.
    fn fraction(&self, value: f64) -> f64 {
        let range = self.range();
        if range.is_finite() {
            (value - self.min) / range
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    /// Maps a category index to a viewport x coordinate.
    ///
    /// With more than one category the first sits flush left and the last flush right.
    /// A single category (or none) is centered in the inner area.
    pub fn scale_x(&self, index: usize, total: usize) -> f64 {
        let left = self.frame.padding.left;
        let width = self.inner_width();
        if total <= 1 {
            return left + width / 2.0;
        }
        left + index as f64 * (width / (total - 1) as f64)
    }

    /// Maps `(index, value)` to a viewport point.
    pub fn point(&self, index: usize, total: usize, value: f64) -> Point {
        Point::new(self.scale_x(index, total), self.scale_y(value))
    }
}

fn zero_inclusive_extent(values: &[f64]) -> (f64, f64) {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    let mut skipped = 0_usize;
    for &v in values {
        if !v.is_finite() {
            skipped += 1;
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if skipped > 0 {
        tracing::debug!(skipped, "ignoring non-finite values in scale domain");
    }
    (min, max)
}

/// Snaps a raw step to `1`, `2`, `5`, or `10` times its power of ten.
///
/// The residual `raw / 10^floor(log10(raw))` snaps to 1 when `<= 1.5`, 2 when `<= 3.5`,
/// 5 when `<= 7.5`, and 10 otherwise; threshold values snap down. Returns `0.0` for
/// non-finite or non-positive input.
///
/// ```
/// use iochart_geometry::nice_step;
///
/// assert_eq!(nice_step(1780.0), 2000.0);
/// assert_eq!(nice_step(0.4), 0.5);
/// assert_eq!(nice_step(0.08), 0.1);
/// ```
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 lies well inside the i32 range"
    )]
    let power = raw.log10().floor() as i32;
    let magnitude = pow10(power);
    let residual = raw / magnitude;
    let nice = if residual <= 1.5 {
        1.0
    } else if residual <= 3.5 {
        2.0
    } else if residual <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `10^power`, staying non-zero down into the subnormal range.
fn pow10(power: i32) -> f64 {
    if power < -300 {
        10_f64.powi(power + 300) / 1e300
    } else {
        10_f64.powi(power)
    }
}

/// `(max - min) / count` without overflowing when the span exceeds `f64::MAX`.
///
/// A single interval over such a span is not representable, so it is split in two.
fn raw_step(min: f64, max: f64, count: usize) -> f64 {
    let n = count as f64;
    let raw = max / n - min / n;
    if raw.is_finite() {
        raw
    } else {
        max / (2.0 * n) - min / (2.0 * n)
    }
}

fn grid_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step == 0.0 {
        return alloc::vec![min, max];
    }
    let start = (min / step).ceil() * step;
    let mut out = Vec::new();
    for i in 0..MAX_GRID_LINES {
        let v = round_grid(grid_value(start, step, i), step);
        if v > max {
            break;
        }
        out.push(v);
    }
    out
}

/// `start + index * step`, halved and doubled back when the direct sum overflows.
fn grid_value(start: f64, step: f64, index: usize) -> f64 {
    let i = index as f64;
    let v = start + step * i;
    if v.is_finite() {
        v
    } else {
        2.0 * (start / 2.0 + step / 2.0 * i)
    }
}

fn round_grid(v: f64, step: f64) -> f64 {
    // Residue of `start + k * step` cancelling to zero; also normalizes `-0.0`.
    if v.abs() < step * 1e-9 {
        return 0.0;
    }
    // Decimal rounding only means something for steps it can resolve, and for values
    // small enough that scaling by `GRID_ROUNDING` stays finite.
    let r = if step < 1.0 / GRID_ROUNDING || v.abs() >= 1e15 {
        v
    } else {
        (v * GRID_ROUNDING).round() / GRID_ROUNDING
    };
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const EPS: f64 = 1e-9;

    fn is_nice(step: f64) -> bool {
        let residual = step / pow10(step.log10().floor() as i32);
        [1.0, 2.0, 5.0, 10.0]
            .iter()
            .any(|n| (residual - n).abs() < 0.01)
    }

    #[test]
    fn domain_always_contains_zero() {
        let frame = ChartFrame::CARTESIAN;
        for values in [
            &[5.0, 10.0][..],
            &[-5.0, -10.0][..],
            &[-3.0, 7.0][..],
            &[0.25][..],
        ] {
            let s = LinearScale::new(values, frame);
            assert!(s.min() <= 0.0 && s.max() >= 0.0, "{values:?} -> {s:?}");
            assert!(s.range() > 0.0, "{values:?} -> {s:?}");
        }
    }

    #[test]
    fn all_zero_values_widen_to_unit_range() {
        let s = LinearScale::new(&[0.0, 0.0], ChartFrame::CARTESIAN);
        assert_eq!(s.min(), -1.0);
        assert_eq!(s.max(), 1.0);
        assert_eq!(s.range(), 2.0);
    }

    #[test]
    fn empty_values_still_produce_a_scale() {
        let s = LinearScale::new(&[], ChartFrame::CARTESIAN);
        assert_eq!((s.min(), s.max()), (-1.0, 1.0));
        assert!(!s.grid_lines().is_empty());
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let s = LinearScale::new(&[f64::NAN, 10.0, f64::INFINITY], ChartFrame::CARTESIAN);
        assert_eq!((s.min(), s.max()), (0.0, 10.0));
    }

    #[test]
    fn scale_y_maps_domain_endpoints_to_inner_edges() {
        let frame = ChartFrame::CARTESIAN;
        let s = LinearScale::new(&[4500.0, -2100.0, 6800.0], frame);
        let top = frame.padding.top;
        assert!((s.scale_y(s.min()) - (top + s.inner_height())).abs() < EPS);
        assert!((s.scale_y(s.max()) - top).abs() < EPS);
        assert!(s.scale_y(100.0) < s.scale_y(50.0), "larger values plot higher");
    }

    #[test]
    fn scale_x_spreads_and_centers() {
        let frame = ChartFrame::CARTESIAN;
        let s = LinearScale::new(&[1.0, 2.0, 3.0, 4.0], frame);
        let left = frame.padding.left;
        assert_eq!(s.scale_x(0, 4), left);
        assert!((s.scale_x(3, 4) - (left + s.inner_width())).abs() < EPS);
        assert_eq!(s.scale_x(0, 1), left + s.inner_width() / 2.0);
        assert_eq!(s.scale_x(0, 0), left + s.inner_width() / 2.0);
    }

    #[test]
    fn nice_step_thresholds_snap_down() {
        assert_eq!(nice_step(1.5), 1.0);
        assert_eq!(nice_step(1.51), 2.0);
        assert_eq!(nice_step(3.5), 2.0);
        assert_eq!(nice_step(3.6), 5.0);
        assert_eq!(nice_step(7.5), 5.0);
        assert_eq!(nice_step(7.6), 10.0);
        assert_eq!(nice_step(0.0), 0.0);
        assert_eq!(nice_step(f64::NAN), 0.0);
    }

    #[test]
    fn grid_steps_are_nice() {
        for values in [
            &[4500.0, -2100.0, 6800.0, -800.0][..],
            &[42.0][..],
            &[0.003, 0.017][..],
            &[123_456.0][..],
            &[-0.5][..],
        ] {
            let s = LinearScale::new(values, ChartFrame::CARTESIAN);
            assert!(is_nice(s.step()), "step {} for {values:?}", s.step());
        }
    }

    #[test]
    fn grid_lines_cover_domain_at_step_multiples() {
        let s = LinearScale::new(&[4500.0, -2100.0, 6800.0, -800.0], ChartFrame::CARTESIAN);
        // range 8900 / 5 = 1780 -> residual 1.78 -> step 2000.
        assert_eq!(s.step(), 2000.0);
        assert_eq!(s.grid_lines(), &[-2000.0, 0.0, 2000.0, 4000.0, 6000.0]);
    }

    #[test]
    fn grid_lines_include_max_when_on_step() {
        let s = LinearScale::new(&[0.0], ChartFrame::CARTESIAN);
        // Widened [-1, 1]: 2 / 5 = 0.4 -> step 0.5.
        assert_eq!(s.step(), 0.5);
        assert_eq!(s.grid_lines(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn grid_lines_are_rounded() {
        let s = LinearScale::new(&[0.3], ChartFrame::CARTESIAN);
        // 0.3 / 5 = 0.06 -> step 0.05; 0.05 * 3 would be 0.15000000000000002 unrounded.
        assert_eq!(s.step(), 0.05);
        assert_eq!(s.grid_lines(), &[0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3]);
    }

    #[test]
    fn custom_target_count() {
        let s = LinearScale::with_target_count(&[100.0], ChartFrame::CARTESIAN, 10);
        assert_eq!(s.step(), 10.0);
        assert_eq!(s.grid_lines().len(), 11);
        let clamped = LinearScale::with_target_count(&[100.0], ChartFrame::CARTESIAN, 0);
        assert_eq!(clamped.step(), 100.0);
    }

    #[test]
    fn span_wider_than_f64_max_stays_finite() {
        let s = LinearScale::new(&[1.7e308, -1.7e308], ChartFrame::CARTESIAN);
        // 3.4e308 / 5 = 6.8e307 -> residual 6.8 -> step 5e307.
        assert_eq!(s.step(), 5e307);
        assert!(s.grid_lines().len() > 2, "{:?}", s.grid_lines());
        assert!(s.grid_lines().contains(&0.0), "{:?}", s.grid_lines());
        assert!(s.grid_lines().iter().all(|v| v.is_finite()));
        assert!(s.grid_lines().iter().all(|v| (s.min()..=s.max()).contains(v)));
        assert_eq!(s.grid_lines().len(), 7);
        assert!((s.scale_y(0.0) - 175.0).abs() < EPS);
        assert!((s.scale_y(s.max()) - 30.0).abs() < EPS);
        assert!((s.scale_y(s.min()) - 320.0).abs() < EPS);
    }

    #[test]
    fn subnormal_domain_gets_a_nice_step() {
        let s = LinearScale::new(&[1e-320], ChartFrame::CARTESIAN);
        assert!(s.step() > 0.0);
        assert!(is_nice(s.step()), "step {}", s.step());
        assert!(s.grid_lines().len() > 2, "{:?}", s.grid_lines());
        assert_eq!(s.grid_lines()[0], 0.0);
        assert!(s.grid_lines().iter().all(|v| *v <= s.max()));
    }

    #[test]
    fn straddle_detection() {
        let frame = ChartFrame::CARTESIAN;
        assert!(LinearScale::new(&[-1.0, 1.0], frame).straddles_zero());
        assert!(!LinearScale::new(&[1.0, 2.0], frame).straddles_zero());
        assert!(!LinearScale::new(&[-1.0, -2.0], frame).straddles_zero());
    }
}
