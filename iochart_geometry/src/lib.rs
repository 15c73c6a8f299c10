// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry engine for simple line, column, and pie charts.
//!
//! Every chart in this crate is drawn from the same data shape, a list of
//! [`SeriesItem`]s, and all of the interesting work is turning those numbers
//! into pixels:
//! - [`LinearScale`] maps values into a padded viewport and picks "nice" grid lines.
//! - [`pie_slices`] computes contiguous slice angles, SVG arc paths, and label anchors.
//! - [`AxisLayout`] places tick labels, grid lines, and the zero baseline.
//! - [`ColumnLayout`] and [`LineLayout`] turn a scale and a series into bars and paths.
//! - [`Palette`] and [`format_value`] finish the labeling.
//!
//! Everything is a pure function of its inputs: the same series and viewport always
//! produce bit-identical geometry, and nothing is cached between calls. Rendering
//! (SVG emission, hover state, animation) belongs to the caller.
//!
//! ```
//! use iochart_geometry::{AxisLayout, ChartFrame, LinearScale};
//!
//! let scale = LinearScale::new(&[4500.0, -2100.0, 6800.0, -800.0], ChartFrame::CARTESIAN);
//! assert!(scale.min() <= -2100.0 && scale.max() >= 6800.0);
//!
//! let axis = AxisLayout::new(&scale, &["Q1", "Q2", "Q3", "Q4"]);
//! assert!(axis.zero_line().is_some());
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod color;
mod column;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod line;
mod pie;
mod scale;
mod series;

pub use axis::{AxisLayout, GridLine, XAxisLabel, YAxisLabel, truncate_label};
pub use color::{Palette, color_to_hex};
pub use column::{Bar, ColumnLayout};
pub use format::format_value;
pub use frame::{ChartFrame, Padding, PieFrame};
pub use line::{LineLayout, LinePoint};
pub use pie::{PieSlice, pie_from_series, pie_slices};
pub use scale::{GRID_TARGET_COUNT, LinearScale, nice_step};
pub use series::{
    ChartKind, ChartOptions, LegendEntry, SeriesError, SeriesItem, UnknownChartKind,
    legend_items,
};
