// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart layout: data points, the connecting polyline, and the shaded area under it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::color::Palette;
use crate::scale::LinearScale;
use crate::series::SeriesItem;

/// A positioned data point.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    /// Position in the series.
    pub index: usize,
    /// Viewport position.
    pub position: Point,
    /// Resolved display color.
    pub color: String,
    /// Category name.
    pub name: String,
    /// Data value.
    pub value: f64,
}

/// Positioned points for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    points: Vec<LinePoint>,
    floor_y: f64,
}

impl LineLayout {
    /// Positions each item at `(scale_x(i, n), scale_y(value))`.
    pub fn new(scale: &LinearScale, series: &[SeriesItem], palette: &Palette) -> Self {
        let total = series.len();
        let points = series
            .iter()
            .enumerate()
            .map(|(index, item)| LinePoint {
                index,
                position: scale.point(index, total, item.value),
                color: palette.resolve(index, item.color.as_deref()),
                name: item.name.clone(),
                value: item.value,
            })
            .collect();
        Self {
            points,
            floor_y: scale.scale_y(scale.min()),
        }
    }

    /// The positioned points, in series order.
    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    /// Whether there are enough points to draw a line (more than one).
    pub fn has_line(&self) -> bool {
        self.points.len() > 1
    }

    /// Open polyline through every point.
    pub fn polyline(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, p) in self.points.iter().enumerate() {
            if i == 0 {
                path.move_to(p.position);
            } else {
                path.line_to(p.position);
            }
        }
        path
    }

    /// Closed area between the polyline and the bottom of the domain.
    ///
    /// Empty when there are fewer than two points.
    pub fn area(&self) -> BezPath {
        let mut path = BezPath::new();
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return path;
        };
        if !self.has_line() {
            return path;
        }
        path.move_to((first.position.x, self.floor_y));
        for p in &self.points {
            path.line_to(p.position);
        }
        path.line_to((last.position.x, self.floor_y));
        path.close_path();
        path
    }

    /// Total length of the polyline.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| {
                let d = w[1].position - w[0].position;
                d.x.hypot(d.y)
            })
            .sum()
    }
}
