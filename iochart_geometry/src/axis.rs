// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label and grid line placement.
//!
//! An [`AxisLayout`] derives everything a cartesian chart needs around its data from a
//! [`LinearScale`]: category labels along the bottom, value labels down the left, one
//! horizontal grid line per grid value, and (when the domain straddles zero) a baseline.
//! All outputs are recomputed on demand; nothing is cached.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::format::format_value;
use crate::scale::LinearScale;

/// Default distance from the bottom of the plot area to the X label baseline.
const X_LABEL_OFFSET: f64 = 24.0;

/// Default distance from the left edge of the plot area to the Y label anchor.
const Y_LABEL_OFFSET: f64 = 10.0;

/// A category label below the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct XAxisLabel {
    /// Category index.
    pub index: usize,
    /// Anchor point (horizontally centered on the category).
    pub position: Point,
    /// Label text, truncated if a limit is configured.
    pub text: String,
}

/// A value label left of the plot area, one per grid line.
#[derive(Clone, Debug, PartialEq)]
pub struct YAxisLabel {
    /// Grid value this label names.
    pub value: f64,
    /// Anchor point (right-aligned, vertically centered on the grid line).
    pub position: Point,
    /// Formatted value.
    pub text: String,
}

/// A horizontal grid line spanning the inner plot width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Grid value.
    pub value: f64,
    /// Line segment in viewport coordinates.
    pub line: Line,
}

impl GridLine {
    /// Viewport y coordinate of the line.
    pub fn y(&self) -> f64 {
        self.line.p0.y
    }
}

/// Derived axis geometry for a [`LinearScale`] and its category labels.
///
/// Padding is taken from the scale's frame.
#[derive(Clone, Debug)]
pub struct AxisLayout<'a> {
    scale: &'a LinearScale,
    labels: Vec<String>,
    x_label_offset: f64,
    y_label_offset: f64,
    max_label_chars: Option<usize>,
}

impl<'a> AxisLayout<'a> {
    /// Creates an axis layout with one category label per data point.
    pub fn new<S: AsRef<str>>(scale: &'a LinearScale, labels: &[S]) -> Self {
        Self {
            scale,
            labels: labels.iter().map(|l| String::from(l.as_ref())).collect(),
            x_label_offset: X_LABEL_OFFSET,
            y_label_offset: Y_LABEL_OFFSET,
            max_label_chars: None,
        }
    }

    /// Sets the distance below the plot area for X labels.
    pub fn with_x_label_offset(mut self, offset: f64) -> Self {
        self.x_label_offset = offset;
        self
    }

    /// Sets the distance left of the plot area for Y labels.
    pub fn with_y_label_offset(mut self, offset: f64) -> Self {
        self.y_label_offset = offset;
        self
    }

    /// Truncates X labels longer than `max` characters (see [`truncate_label`]).
    pub fn with_max_label_chars(mut self, max: Option<usize>) -> Self {
        self.max_label_chars = max;
        self
    }

    /// The scale this layout is derived from.
    pub fn scale(&self) -> &LinearScale {
        self.scale
    }

    /// One label per category, at `scale_x(index, total)`.
    pub fn x_labels(&self) -> Vec<XAxisLabel> {
        let total = self.labels.len();
        let y = self.scale.padding().top + self.scale.inner_height() + self.x_label_offset;
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| XAxisLabel {
                index,
                position: Point::new(self.scale.scale_x(index, total), y),
                text: match self.max_label_chars {
                    Some(max) => truncate_label(label, max),
                    None => label.clone(),
                },
            })
            .collect()
    }

    /// One label per grid value, at `scale_y(value)`.
    pub fn y_labels(&self) -> Vec<YAxisLabel> {
        let x = self.scale.padding().left - self.y_label_offset;
        self.scale
            .grid_lines()
            .iter()
            .map(|&value| YAxisLabel {
                value,
                position: Point::new(x, self.scale.scale_y(value)),
                text: format_value(value),
            })
            .collect()
    }

    /// One horizontal line per grid value, spanning the inner width.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let x0 = self.scale.padding().left;
        let x1 = x0 + self.scale.inner_width();
        self.scale
            .grid_lines()
            .iter()
            .map(|&value| {
                let y = self.scale.scale_y(value);
                GridLine {
                    value,
                    line: Line::new((x0, y), (x1, y)),
                }
            })
            .collect()
    }

    /// Y coordinate of the zero baseline, present only when `min < 0 < max`.
    pub fn zero_line(&self) -> Option<f64> {
        self.scale
            .straddles_zero()
            .then(|| self.scale.scale_y(0.0))
    }
}

/// Shortens `label` to at most `max` characters, ending in `…` when cut.
///
/// ```
/// use iochart_geometry::truncate_label;
///
/// assert_eq!(truncate_label("September", 6), "Septe…");
/// assert_eq!(truncate_label("May", 6), "May");
/// ```
pub fn truncate_label(label: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if label.chars().count() <= max {
        return String::from(label);
    }
    let mut out: String = label.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::frame::ChartFrame;

    const EPS: f64 = 1e-9;

    fn quarterly() -> LinearScale {
        LinearScale::new(&[4500.0, -2100.0, 6800.0, -800.0], ChartFrame::CARTESIAN)
    }

    #[test]
    fn x_labels_follow_scale_x_below_plot() {
        let scale = quarterly();
        let axis = AxisLayout::new(&scale, &["Q1", "Q2", "Q3", "Q4"]);
        let labels = axis.x_labels();
        assert_eq!(labels.len(), 4);
        for l in &labels {
            assert_eq!(l.position.x, scale.scale_x(l.index, 4));
            assert_eq!(l.position.y, 30.0 + 290.0 + 24.0);
        }
        assert_eq!(labels[2].text, "Q3");
    }

    #[test]
    fn y_labels_and_grid_lines_match_grid_values() {
        let scale = quarterly();
        let axis = AxisLayout::new(&scale, &["Q1", "Q2", "Q3", "Q4"]);
        let y_labels = axis.y_labels();
        let grid = axis.grid_lines();
        assert_eq!(y_labels.len(), scale.grid_lines().len());
        assert_eq!(grid.len(), scale.grid_lines().len());

        let texts: Vec<&str> = y_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["-2.0k", "0", "2.0k", "4.0k", "6.0k"]);
        for (label, line) in y_labels.iter().zip(&grid) {
            assert_eq!(label.position.x, 50.0);
            assert!((label.position.y - line.y()).abs() < EPS);
            assert_eq!(line.line.p0.x, 60.0);
            assert_eq!(line.line.p1.x, 570.0);
        }
    }

    #[test]
    fn zero_line_only_when_domain_straddles_zero() {
        let scale = quarterly();
        let axis = AxisLayout::new(&scale, &["Q1", "Q2", "Q3", "Q4"]);
        let zero = axis.zero_line().expect("domain straddles zero");
        assert!(zero.is_finite());
        assert!((zero - scale.scale_y(0.0)).abs() < EPS);

        let positive = LinearScale::new(&[3.0, 9.0], ChartFrame::CARTESIAN);
        assert_eq!(AxisLayout::new(&positive, &["a", "b"]).zero_line(), None);

        let negative = LinearScale::new(&[-3.0, -9.0], ChartFrame::CARTESIAN);
        assert_eq!(AxisLayout::new(&negative, &["a", "b"]).zero_line(), None);
    }

    #[test]
    fn offsets_and_truncation_are_configurable() {
        let scale = quarterly();
        let axis = AxisLayout::new(&scale, &["January", "Feb"])
            .with_x_label_offset(20.0)
            .with_y_label_offset(4.0)
            .with_max_label_chars(Some(6));
        let x = axis.x_labels();
        assert_eq!(x[0].text, "Janua\u{2026}");
        assert_eq!(x[1].text, "Feb");
        assert_eq!(x[0].position.y, 30.0 + 290.0 + 20.0);
        assert_eq!(axis.y_labels()[0].position.x, 56.0);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_label("Zürich-Nord", 8), "Zürich-\u{2026}");
        assert_eq!(truncate_label("exactly8", 8), "exactly8");
        assert_eq!(truncate_label("abc", 1), "\u{2026}");
    }

    #[test]
    fn zero_width_truncates_to_nothing() {
        assert_eq!(truncate_label("abc", 0), "");
        assert_eq!(truncate_label("", 0), "");
    }
}
