// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column (vertical bar) layout.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::color::Palette;
use crate::scale::LinearScale;
use crate::series::SeriesItem;

/// One bar, anchored at the zero line.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Position in the series.
    pub index: usize,
    /// Bar rectangle; positive values extend up from zero, negative values down.
    pub rect: Rect,
    /// Resolved display color.
    pub color: String,
    /// Category name.
    pub name: String,
    /// Data value.
    pub value: f64,
    /// Anchor for the value label, above the bar's top edge.
    pub value_label: Point,
    /// Anchor for the category label, below the plot area.
    pub category_label: Point,
}

/// Bar sizing and label placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnLayout {
    /// Horizontal gap between adjacent bars.
    pub gap: f64,
    /// Smallest bar width.
    pub min_bar_width: f64,
    /// Largest bar width.
    pub max_bar_width: f64,
    /// Distance from a bar's top edge up to its value label.
    pub value_label_offset: f64,
    /// Distance from the bottom of the plot area down to category labels.
    pub category_label_offset: f64,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            gap: 8.0,
            min_bar_width: 12.0,
            max_bar_width: 50.0,
            value_label_offset: 8.0,
            category_label_offset: 20.0,
        }
    }
}

impl ColumnLayout {
    /// Sets the gap between bars.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the bar width limits.
    pub fn with_bar_width(mut self, min: f64, max: f64) -> Self {
        self.min_bar_width = min;
        self.max_bar_width = max;
        self
    }

    /// Bar width for `count` bars across the scale's inner width.
    ///
    /// The even share of the space left after gaps, clamped to the configured limits.
    pub fn bar_width(&self, scale: &LinearScale, count: usize) -> f64 {
        let n = count.max(1) as f64;
        let available = scale.inner_width() - self.gap * (n - 1.0);
        (available / n)
            .max(self.min_bar_width)
            .min(self.max_bar_width)
    }

    /// The zero line bars grow from, spanning the inner width.
    pub fn baseline(&self, scale: &LinearScale) -> Line {
        let y = scale.scale_y(0.0);
        let x0 = scale.padding().left;
        Line::new((x0, y), (x0 + scale.inner_width(), y))
    }

    /// Lays out one bar per series item, centered as a group in the inner width.
    pub fn bars(&self, scale: &LinearScale, series: &[SeriesItem], palette: &Palette) -> Vec<Bar> {
        let n = series.len();
        let width = self.bar_width(scale, n);
        let group = n as f64 * width + n.saturating_sub(1) as f64 * self.gap;
        let start_x = scale.padding().left + (scale.inner_width() - group) / 2.0;
        let zero_y = scale.scale_y(0.0);
        let label_y =
            scale.padding().top + scale.inner_height() + self.category_label_offset;

        series
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let x = start_x + index as f64 * (width + self.gap);
                let value_y = scale.scale_y(item.value);
                let top = if item.value >= 0.0 { value_y } else { zero_y };
                let height = (value_y - zero_y).abs();
                let center_x = x + width / 2.0;
                Bar {
                    index,
                    rect: Rect::new(x, top, x + width, top + height),
                    color: palette.resolve(index, item.color.as_deref()),
                    name: item.name.clone(),
                    value: item.value,
                    value_label: Point::new(center_x, top - self.value_label_offset),
                    category_label: Point::new(center_x, label_y),
                }
            })
            .collect()
    }
}
