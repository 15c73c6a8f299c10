// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Charts rendered when no options file is given.

use iochart_geometry::{ChartKind, ChartOptions, SeriesItem};

fn series(items: &[(&str, f64)]) -> Vec<SeriesItem> {
    items
        .iter()
        .map(|&(name, value)| SeriesItem::new(name, value))
        .collect()
}

pub(crate) fn builtin() -> Vec<ChartOptions> {
    vec![
        ChartOptions::new(
            ChartKind::Line,
            series(&[
                ("Jan", 4200.0),
                ("Feb", 5800.0),
                ("Mar", 3100.0),
                ("Apr", 7400.0),
                ("May", 6200.0),
                ("Jun", 8900.0),
                ("Jul", 7600.0),
            ]),
        )
        .with_title("Monthly Revenue"),
        ChartOptions::new(
            ChartKind::Column,
            series(&[
                ("APAC", 12400.0),
                ("EMEA", 8700.0),
                ("LATAM", 5200.0),
                ("NA", 15600.0),
                ("ANZ", 3100.0),
            ]),
        )
        .with_title("Sales by Region"),
        ChartOptions::new(
            ChartKind::Pie,
            series(&[
                ("Product A", 35.0),
                ("Product B", 25.0),
                ("Product C", 20.0),
                ("Product D", 12.0),
                ("Other", 8.0),
            ]),
        )
        .with_title("Market Share"),
        ChartOptions::new(ChartKind::Column, Vec::new()).with_title("Empty Dataset"),
        ChartOptions::new(
            ChartKind::Column,
            series(&[("Q1", 4500.0), ("Q2", -2100.0), ("Q3", 6800.0), ("Q4", -800.0)]),
        )
        .with_title("Profit / Loss"),
        ChartOptions::new(ChartKind::Line, series(&[("Today", 42.0)]))
            .with_title("Single Observation"),
        ChartOptions::new(ChartKind::Pie, series(&[("Today", 42.0)])).with_title("Whole Pie"),
        ChartOptions::new(
            ChartKind::Pie,
            series(&[("North", 0.0), ("South", 0.0), ("West", 0.0)]),
        )
        .with_title("Nothing Sold"),
        ChartOptions::new(
            ChartKind::Pie,
            (1..=8)
                .map(|i| SeriesItem::new(format!("Team {i}"), f64::from(i)))
                .collect(),
        )
        .with_title("Palette Cycling"),
    ]
}
