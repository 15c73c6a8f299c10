// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie slice geometry.
//!
//! Slices are laid out clockwise (in screen space) starting at 12 o'clock, in input order,
//! and are angularly contiguous: each slice starts exactly where the previous one ended.
//! Angles are in radians, measured from the positive x axis with y pointing down.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt::Write;

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::color::Palette;
use crate::frame::PieFrame;
use crate::series::SeriesItem;

/// Angle of the first slice's leading edge (12 o'clock).
const START_ANGLE: f64 = -FRAC_PI_2;

/// Label anchor distance from the center, as a fraction of the radius.
const CENTROID_RADIUS: f64 = 0.6;

/// Percentage label distance from the center, as a fraction of the radius.
const PERCENT_LABEL_RADIUS: f64 = 0.72;

/// Slices smaller than this fraction of the total get no percentage label.
const MIN_LABELED_FRACTION: f64 = 0.05;

/// Sweeps within this distance of a full turn are drawn as a full circle.
const FULL_CIRCLE_EPSILON: f64 = 1e-12;

/// One slice of a pie.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Angle where the slice begins.
    pub start_angle: f64,
    /// Angle where the slice ends (`>= start_angle`).
    pub end_angle: f64,
    /// Fraction of the total this slice represents, in `[0, 1]`.
    pub percentage: f64,
    /// Resolved display color.
    pub color: String,
    /// Category name.
    pub name: String,
    /// Original signed value (negative values are drawn as empty slices).
    pub value: f64,
    /// Closed SVG path data for the slice.
    pub path: String,
    /// Label anchor at 60% of the radius along the mid-angle.
    pub centroid: Point,
}

impl PieSlice {
    /// Angular extent of the slice.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle bisecting the slice.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }

    /// Whether the slice is large enough to carry a percentage label.
    pub fn has_percent_label(&self) -> bool {
        self.percentage >= MIN_LABELED_FRACTION
    }

    /// Percentage label text, rounded to a whole percent (`"42%"`).
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.percentage * 100.0).round())
    }

    /// Anchor for the percentage label, at 72% of the radius along the mid-angle.
    pub fn percent_label_position(&self, center: Point, radius: f64) -> Point {
        polar(center, radius * PERCENT_LABEL_RADIUS, self.mid_angle())
    }

    /// Translation that pulls the slice `distance` pixels out along its mid-angle.
    pub fn explode_offset(&self, distance: f64) -> Vec2 {
        let angle = self.mid_angle();
        Vec2::new(distance * angle.cos(), distance * angle.sin())
    }

    /// Returns `true` if `pt` lies inside this slice of a pie at `center` with `radius`.
    pub fn contains(&self, center: Point, radius: f64, pt: Point) -> bool {
        let d = pt - center;
        if d.hypot2() > radius * radius || self.sweep() <= 0.0 {
            return false;
        }
        if self.sweep() >= TAU - FULL_CIRCLE_EPSILON {
            return true;
        }
        let mut angle = d.atan2();
        // Bring the angle into `[start, start + 2π)`.
        while angle < self.start_angle {
            angle += TAU;
        }
        while angle >= self.start_angle + TAU {
            angle -= TAU;
        }
        angle < self.end_angle
    }
}

/// Computes pie slices from parallel `names`, `values`, and `colors` slices.
///
/// Negative (and non-finite) values are treated as zero when allocating angles, but the
/// original value is kept on the slice. Returns an empty list when the total is zero:
/// there is nothing to draw. If the inputs differ in length, the extra entries of the
/// longer ones are ignored.
///
/// ```
/// use iochart_geometry::pie_slices;
/// use kurbo::Point;
///
/// let slices = pie_slices(&["a", "b"], &[1.0, 3.0], &["red", "blue"], Point::new(50.0, 50.0), 40.0);
/// assert_eq!(slices.len(), 2);
/// assert_eq!(slices[0].percentage, 0.25);
/// assert_eq!(slices[0].end_angle, slices[1].start_angle);
///
/// assert!(pie_slices(&["z"], &[0.0], &["red"], Point::ZERO, 10.0).is_empty());
/// ```
pub fn pie_slices<N, C>(
    names: &[N],
    values: &[f64],
    colors: &[C],
    center: Point,
    radius: f64,
) -> Vec<PieSlice>
where
    N: AsRef<str>,
    C: AsRef<str>,
{
    let len = names.len().min(values.len()).min(colors.len());
    if len != values.len() || len != names.len() || len != colors.len() {
        tracing::debug!(
            names = names.len(),
            values = values.len(),
            colors = colors.len(),
            "pie inputs differ in length; truncating"
        );
    }
    let values = &values[..len];

    let mut unit = 1.0;
    let mut total: f64 = values.iter().copied().map(allocatable).sum();
    if total == 0.0 {
        tracing::debug!(slices = len, "pie total is zero; nothing to draw");
        return Vec::new();
    }
    if !total.is_finite() {
        // Sum overflowed; measure every value in units of the largest one instead.
        unit = values.iter().copied().map(allocatable).fold(0.0, f64::max);
        total = values.iter().map(|&v| allocatable(v) / unit).sum();
        tracing::debug!(unit, "pie total overflows; rescaling");
    }

    let mut slices = Vec::with_capacity(len);
    let mut current = START_ANGLE;
    for ((name, &value), color) in names.iter().zip(values).zip(colors) {
        let percentage = allocatable(value) / unit / total;
        let sweep = percentage * TAU;
        let start_angle = current;
        let end_angle = start_angle + sweep;

        slices.push(PieSlice {
            start_angle,
            end_angle,
            percentage,
            color: String::from(color.as_ref()),
            name: String::from(name.as_ref()),
            value,
            path: arc_path(center, radius, start_angle, end_angle),
            centroid: polar(center, radius * CENTROID_RADIUS, start_angle + sweep / 2.0),
        });

        current = end_angle;
    }
    slices
}

/// Computes pie slices for a series, resolving colors through `palette`.
pub fn pie_from_series(series: &[SeriesItem], palette: &Palette, frame: &PieFrame) -> Vec<PieSlice> {
    let names: Vec<&str> = series.iter().map(|item| item.name.as_str()).collect();
    let values: Vec<f64> = series.iter().map(|item| item.value).collect();
    let colors: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(i, item)| palette.resolve(i, item.color.as_deref()))
        .collect();
    pie_slices(&names, &values, &colors, frame.center, frame.radius)
}

fn allocatable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Builds `M center L end A r r 0 large 0 start Z`.
///
/// The arc runs from the end-angle point back to the start-angle point with sweep flag `0`.
/// A full turn has coincident endpoints, which SVG renders as nothing, so it is emitted as
/// two half-circle arcs instead.
fn arc_path(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let sweep = end_angle - start_angle;
    let from = polar(center, radius, end_angle);
    let to = polar(center, radius, start_angle);
    let mut d = String::new();
    // Writing into a `String` cannot fail.
    let _ = write!(d, "M {} {} L {} {}", center.x, center.y, from.x, from.y);
    if sweep >= TAU - FULL_CIRCLE_EPSILON {
        let opposite = polar(center, radius, end_angle - PI);
        let _ = write!(
            d,
            " A {radius} {radius} 0 1 0 {} {} A {radius} {radius} 0 1 0 {} {}",
            opposite.x, opposite.y, to.x, to.y
        );
    } else {
        let large_arc = u8::from(sweep > PI);
        let _ = write!(
            d,
            " A {radius} {radius} 0 {large_arc} 0 {} {}",
            to.x, to.y
        );
    }
    d.push_str(" Z");
    d
}
