// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series data and chart options.
//!
//! This is the boundary where caller data enters the engine. Geometry functions assume
//! finite values; [`ChartOptions::validated_series`] is where that is enforced.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::color::Palette;

/// One named data point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesItem {
    /// Category name, used for axis and legend labels.
    pub name: String,
    /// Data value.
    pub value: f64,
    /// Optional explicit color; overrides the palette when non-empty.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<String>,
}

impl SeriesItem {
    /// Creates an item without an explicit color.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }

    /// Sets an explicit color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The closed set of supported chart kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartKind {
    /// Points joined by a line over a shaded area.
    Line,
    /// Vertical bars anchored at zero.
    Column,
    /// Slices of a circle proportional to each value.
    Pie,
}

impl ChartKind {
    /// Lowercase name, matching the [`FromStr`] spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Column => "column",
            Self::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized chart kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart type: {0:?}")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "column" => Ok(Self::Column),
            "pie" => Ok(Self::Pie),
            other => Err(UnknownChartKind(String::from(other))),
        }
    }
}

/// Reasons a series cannot be charted at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    /// The series has no items.
    #[error("no data to display")]
    Empty,
    /// Every item has a non-finite value.
    #[error("invalid data provided")]
    NoFiniteValues,
}

/// A chart request: kind, optional title, and data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartOptions {
    /// Which chart to draw.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ChartKind,
    /// Optional title shown above the chart.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    /// Data points in display order.
    pub series: Vec<SeriesItem>,
}

impl ChartOptions {
    /// Creates options without a title.
    pub fn new(kind: ChartKind, series: Vec<SeriesItem>) -> Self {
        Self {
            kind,
            title: None,
            series,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the items with finite values, in order.
    ///
    /// Fails with [`SeriesError::Empty`] for an empty series and with
    /// [`SeriesError::NoFiniteValues`] when no item survives filtering.
    pub fn validated_series(&self) -> Result<Vec<SeriesItem>, SeriesError> {
        if self.series.is_empty() {
            return Err(SeriesError::Empty);
        }
        let valid: Vec<SeriesItem> = self
            .series
            .iter()
            .filter(|item| item.value.is_finite())
            .cloned()
            .collect();
        let dropped = self.series.len() - valid.len();
        if dropped > 0 {
            tracing::debug!(dropped, kind = self.kind.as_str(), "dropping non-finite items");
        }
        if valid.is_empty() {
            return Err(SeriesError::NoFiniteValues);
        }
        Ok(valid)
    }
}

/// A legend row: a name and its resolved color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    /// Category name.
    pub name: String,
    /// Resolved display color.
    pub color: String,
}

/// Builds legend entries for `series`, resolving colors through `palette`.
pub fn legend_items(series: &[SeriesItem], palette: &Palette) -> Vec<LegendEntry> {
    series
        .iter()
        .enumerate()
        .map(|(i, item)| LegendEntry {
            name: item.name.clone(),
            color: palette.resolve(i, item.color.as_deref()),
        })
        .collect()
}
