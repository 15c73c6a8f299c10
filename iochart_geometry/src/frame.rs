// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport and padding inputs.
//!
//! Charts are laid out in a fixed logical viewport (the SVG `viewBox`). Padding carves the
//! inner plot area out of that viewport; axis labels live in the padding.

use kurbo::{Point, Rect, Size};

/// Pixel insets from each edge of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the left edge.
    pub left: f64,
}

impl Padding {
    /// Creates padding from explicit insets (CSS order: top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates padding with the same inset on every edge.
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Returns the inner plot rectangle for a viewport of the given size.
    ///
    /// No validation is performed: padding larger than the viewport yields an inverted
    /// rectangle.
    pub fn inner_rect(&self, view: Size) -> Rect {
        Rect::new(
            self.left,
            self.top,
            view.width - self.right,
            view.height - self.bottom,
        )
    }
}

/// A viewport plus the padding around its inner plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    /// Logical viewport size.
    pub view: Size,
    /// Insets around the inner plot area.
    pub padding: Padding,
}

impl ChartFrame {
    /// The 600×360 frame used by line and column charts.
    pub const CARTESIAN: Self = Self {
        view: Size::new(600.0, 360.0),
        padding: Padding::new(30.0, 30.0, 40.0, 60.0),
    };

    /// Creates a frame from a viewport size and padding.
    pub const fn new(view: Size, padding: Padding) -> Self {
        Self { view, padding }
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Width of the inner plot area.
    pub fn inner_width(&self) -> f64 {
        self.view.width - self.padding.left - self.padding.right
    }

    /// Height of the inner plot area.
    pub fn inner_height(&self) -> f64 {
        self.view.height - self.padding.top - self.padding.bottom
    }

    /// The inner plot area in viewport coordinates.
    pub fn inner_rect(&self) -> Rect {
        self.padding.inner_rect(self.view)
    }
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self::CARTESIAN
    }
}

/// Square viewport, center, and radius for pie charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieFrame {
    /// Logical viewport size.
    pub view: Size,
    /// Pie center in viewport coordinates.
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
}

impl PieFrame {
    /// The 360×360 frame used by pie charts: centered, radius 140.
    pub const DEFAULT: Self = Self {
        view: Size::new(360.0, 360.0),
        center: Point::new(180.0, 180.0),
        radius: 140.0,
    };

    /// Creates a pie frame centered in a square viewport of side `view_size`.
    pub fn centered(view_size: f64, radius: f64) -> Self {
        Self {
            view: Size::new(view_size, view_size),
            center: Point::new(view_size * 0.5, view_size * 0.5),
            radius,
        }
    }

    /// Sets the outer radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl Default for PieFrame {
    fn default() -> Self {
        Self::DEFAULT
    }
}
