// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns [`ChartOptions`] into a standalone SVG document.
//!
//! Each chart is stacked vertically: an optional title, the plot, then a legend with one
//! swatch per category.

use iochart_geometry::{
    AxisLayout, ChartFrame, ChartKind, ChartOptions, ColumnLayout, LegendEntry, LineLayout,
    LinearScale, Palette, PieFrame, SeriesError, SeriesItem, color_to_hex, format_value,
    legend_items, pie_from_series, truncate_label,
};
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

use crate::svg::{Paint, SvgDocument, TextAnchor, TextStyle};

const BACKGROUND: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const TEXT: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
const MUTED_TEXT: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
const GRID: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
const ZERO_LINE: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);

const TITLE_HEIGHT: f64 = 32.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const LEGEND_ITEM_WIDTH: f64 = 120.0;
const LEGEND_SWATCH: f64 = 10.0;
const FONT_SIZE: f64 = 11.0;

/// Category labels longer than this are shortened on line charts.
const LINE_LABEL_CHARS: usize = 8;
/// Category labels longer than this are shortened on column charts.
const COLUMN_LABEL_CHARS: usize = 6;

/// Renders `options` with `palette`.
///
/// Invalid or empty data renders a placeholder message instead of a plot.
pub(crate) fn render_chart(options: &ChartOptions, palette: &Palette) -> String {
    let series = match options.validated_series() {
        Ok(series) => series,
        Err(err) => {
            tracing::warn!(kind = %options.kind, %err, "rendering placeholder");
            return placeholder(options.kind, options.title.as_deref(), &err);
        }
    };

    match options.kind {
        ChartKind::Line => line_chart(options.title.as_deref(), &series, palette),
        ChartKind::Column => column_chart(options.title.as_deref(), &series, palette),
        ChartKind::Pie => pie_chart(options.title.as_deref(), &series, palette),
    }
}

/// Plot area size for a chart kind.
fn plot_size(kind: ChartKind) -> Size {
    match kind {
        ChartKind::Line | ChartKind::Column => ChartFrame::CARTESIAN.view,
        ChartKind::Pie => PieFrame::DEFAULT.view,
    }
}

fn legend_columns(width: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "plot widths are small positive numbers"
    )]
    let columns = (width / LEGEND_ITEM_WIDTH) as usize;
    columns.max(1)
}

fn legend_rows(count: usize, width: f64) -> usize {
    count.div_ceil(legend_columns(width))
}

/// Starts a document with room for the title, the plot, and `legend_len` legend entries.
///
/// Returns the document, with a group open at the plot offset, and that offset.
fn begin(plot: Size, title: Option<&str>, legend_len: usize) -> (SvgDocument, Vec2) {
    let title_height = if title.is_some() { TITLE_HEIGHT } else { 0.0 };
    let legend_height = legend_rows(legend_len, plot.width) as f64 * LEGEND_ROW_HEIGHT;
    let view = Size::new(plot.width, title_height + plot.height + legend_height);

    let mut doc = SvgDocument::new(view);
    let background = color_to_hex(BACKGROUND);
    doc.rect(view.to_rect(), Paint::fill(&background));
    if let Some(title) = title {
        let text = color_to_hex(TEXT);
        doc.text(
            Point::new(view.width / 2.0, TITLE_HEIGHT / 2.0),
            &title.to_uppercase(),
            TextStyle::new(14.0, TextAnchor::Middle, &text).bold(),
        );
    }
    let offset = Vec2::new(0.0, title_height);
    doc.begin_group(offset);
    (doc, offset)
}

fn draw_legend(doc: &mut SvgDocument, entries: &[LegendEntry], top: f64, width: f64) {
    let per_row = legend_columns(width);
    let text = color_to_hex(TEXT);
    for (i, entry) in entries.iter().enumerate() {
        let row = (i / per_row) as f64;
        let col = (i % per_row) as f64;
        let y = top + row * LEGEND_ROW_HEIGHT + LEGEND_ROW_HEIGHT / 2.0;
        let x = 10.0 + col * LEGEND_ITEM_WIDTH;
        doc.rect(
            Rect::from_center_size((x + LEGEND_SWATCH / 2.0, y), (LEGEND_SWATCH, LEGEND_SWATCH)),
            Paint::fill(&entry.color),
        );
        doc.text(
            Point::new(x + LEGEND_SWATCH + 6.0, y),
            &truncate_label(&entry.name, 14),
            TextStyle::new(FONT_SIZE, TextAnchor::Start, &text),
        );
    }
}

/// Closes the plot group and appends the legend below it.
fn finish(
    mut doc: SvgDocument,
    plot: Size,
    offset: Vec2,
    series: &[SeriesItem],
    palette: &Palette,
) -> String {
    doc.end_group();
    draw_legend(
        &mut doc,
        &legend_items(series, palette),
        offset.y + plot.height,
        plot.width,
    );
    doc.to_svg_string()
}

/// Grid lines and Y labels shared by the cartesian charts.
fn draw_value_axis(doc: &mut SvgDocument, axis: &AxisLayout<'_>) {
    let grid = color_to_hex(GRID);
    let muted = color_to_hex(MUTED_TEXT);
    for line in axis.grid_lines() {
        doc.line(line.line, &grid, 1.0, true);
    }
    for label in axis.y_labels() {
        doc.text(
            label.position,
            &label.text,
            TextStyle::new(FONT_SIZE, TextAnchor::End, &muted),
        );
    }
}

fn line_chart(title: Option<&str>, series: &[SeriesItem], palette: &Palette) -> String {
    let frame = ChartFrame::CARTESIAN;
    let (mut doc, offset) = begin(frame.view, title, series.len());

    let values: Vec<f64> = series.iter().map(|s| s.value).collect();
    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    let scale = LinearScale::new(&values, frame);
    let axis = AxisLayout::new(&scale, &names).with_max_label_chars(Some(LINE_LABEL_CHARS));
    draw_value_axis(&mut doc, &axis);
    let muted = color_to_hex(MUTED_TEXT);
    for label in axis.x_labels() {
        doc.text(
            label.position,
            &label.text,
            TextStyle::new(FONT_SIZE, TextAnchor::Middle, &muted),
        );
    }

    let layout = LineLayout::new(&scale, series, palette);
    let stroke = palette.resolve(0, None);
    if layout.has_line() {
        doc.path(&layout.area(), Paint::fill(&stroke).with_fill_opacity(0.12));
        doc.path(&layout.polyline(), Paint::stroke(&stroke, 2.0));
    }
    let background = color_to_hex(BACKGROUND);
    for point in layout.points() {
        doc.circle(
            point.position,
            4.0,
            Paint::fill(&background).with_stroke(&point.color, 2.0),
        );
    }

    finish(doc, frame.view, offset, series, palette)
}

fn column_chart(title: Option<&str>, series: &[SeriesItem], palette: &Palette) -> String {
    let frame = ChartFrame::CARTESIAN;
    let (mut doc, offset) = begin(frame.view, title, series.len());

    let values: Vec<f64> = series.iter().map(|s| s.value).collect();
    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    let scale = LinearScale::new(&values, frame);
    let axis = AxisLayout::new(&scale, &names);
    draw_value_axis(&mut doc, &axis);

    let columns = ColumnLayout::default();
    let text = color_to_hex(TEXT);
    let muted = color_to_hex(MUTED_TEXT);
    for bar in columns.bars(&scale, series, palette) {
        doc.rect(bar.rect, Paint::fill(&bar.color));
        doc.text(
            bar.value_label,
            &format_value(bar.value),
            TextStyle::new(FONT_SIZE, TextAnchor::Middle, &text),
        );
        doc.text(
            bar.category_label,
            &truncate_label(&bar.name, COLUMN_LABEL_CHARS),
            TextStyle::new(FONT_SIZE, TextAnchor::Middle, &muted),
        );
    }
    let zero = color_to_hex(ZERO_LINE);
    doc.line(columns.baseline(&scale), &zero, 1.0, false);

    finish(doc, frame.view, offset, series, palette)
}

fn pie_chart(title: Option<&str>, series: &[SeriesItem], palette: &Palette) -> String {
    let frame = PieFrame::DEFAULT;
    let slices = pie_from_series(series, palette, &frame);
    if slices.is_empty() {
        return placeholder(ChartKind::Pie, title, &SeriesError::Empty);
    }

    let (mut doc, offset) = begin(frame.view, title, series.len());
    let background = color_to_hex(BACKGROUND);
    for slice in &slices {
        doc.path_data(
            &slice.path,
            Paint::fill(&slice.color).with_stroke(&background, 2.0),
        );
    }
    for slice in slices.iter().filter(|s| s.has_percent_label()) {
        doc.text(
            slice.percent_label_position(frame.center, frame.radius),
            &slice.percent_label(),
            TextStyle::new(FONT_SIZE, TextAnchor::Middle, &background).bold(),
        );
    }

    finish(doc, frame.view, offset, series, palette)
}

/// A plot-sized box with a centered message.
fn placeholder(kind: ChartKind, title: Option<&str>, err: &SeriesError) -> String {
    let plot = plot_size(kind);
    let (mut doc, _) = begin(plot, title, 0);
    let grid = color_to_hex(GRID);
    let muted = color_to_hex(MUTED_TEXT);
    doc.rect(
        plot.to_rect().inset(-8.0),
        Paint::default().with_stroke(&grid, 1.0),
    );
    doc.text(
        Point::new(plot.width / 2.0, plot.height / 2.0),
        &capitalize(&err.to_string()),
        TextStyle::new(13.0, TextAnchor::Middle, &muted),
    );
    doc.end_group();
    doc.to_svg_string()
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(kind: ChartKind, items: &[(&str, f64)]) -> ChartOptions {
        ChartOptions::new(
            kind,
            items
                .iter()
                .map(|&(name, value)| SeriesItem::new(name, value))
                .collect(),
        )
    }

    #[test]
    fn column_chart_draws_bars_labels_and_legend() {
        let opts = options(
            ChartKind::Column,
            &[("Q1", 4500.0), ("Q2", -2100.0), ("Q3", 6800.0), ("Q4", -800.0)],
        )
        .with_title("Profit / Loss");
        let svg = render_chart(&opts, &Palette::DEFAULT);
        assert!(svg.contains("PROFIT / LOSS"), "{svg}");
        assert!(svg.contains(">4.5k</text>"), "{svg}");
        assert!(svg.contains(">-2.1k</text>"), "{svg}");
        // Four bars plus four legend swatches plus the background.
        assert_eq!(svg.matches("<rect").count(), 9, "{svg}");
    }

    #[test]
    fn line_chart_with_one_point_has_no_polyline() {
        let opts = options(ChartKind::Line, &[("Today", 42.0)]);
        let svg = render_chart(&opts, &Palette::DEFAULT);
        assert_eq!(svg.matches("<circle").count(), 1, "{svg}");
        assert_eq!(svg.matches("<path").count(), 0, "{svg}");
        assert!(svg.contains(r#"<circle cx="315""#), "{svg}");
    }

    #[test]
    fn line_chart_points_are_hollow_without_zero_line() {
        let opts = options(ChartKind::Line, &[("a", -1.0), ("b", 1.0)]);
        let svg = render_chart(&opts, &Palette::DEFAULT);
        assert!(!svg.contains("#9ca3af"), "{svg}");
        assert_eq!(svg.matches("<circle").count(), 2, "{svg}");
        assert!(
            svg.contains(r##"r="4" fill="#ffffff" stroke="#2563eb" stroke-width="2""##),
            "{svg}"
        );
        assert!(
            svg.contains(r##"r="4" fill="#ffffff" stroke="#10b981" stroke-width="2""##),
            "{svg}"
        );
    }

    #[test]
    fn line_chart_truncates_long_categories() {
        let opts = options(ChartKind::Line, &[("September", 1.0), ("October", 2.0)]);
        let svg = render_chart(&opts, &Palette::DEFAULT);
        assert!(svg.contains(">Septemb\u{2026}</text>"), "{svg}");
        assert_eq!(svg.matches("<path").count(), 2, "{svg}");
    }

    #[test]
    fn pie_chart_labels_large_slices_only() {
        let opts = options(ChartKind::Pie, &[("big", 97.0), ("tiny", 3.0)]);
        let svg = render_chart(&opts, &Palette::DEFAULT);
        assert_eq!(svg.matches("<path").count(), 2, "{svg}");
        assert!(svg.contains(">97%</text>"), "{svg}");
        assert!(!svg.contains(">3%</text>"), "{svg}");
    }

    #[test]
    fn empty_and_invalid_data_render_placeholders() {
        let empty = render_chart(&options(ChartKind::Column, &[]), &Palette::DEFAULT);
        assert!(empty.contains(">No data to display</text>"), "{empty}");

        let invalid = render_chart(
            &options(ChartKind::Line, &[("a", f64::NAN)]),
            &Palette::DEFAULT,
        );
        assert!(invalid.contains(">Invalid data provided</text>"), "{invalid}");

        let zero_pie = render_chart(
            &options(ChartKind::Pie, &[("a", 0.0), ("b", 0.0)]),
            &Palette::DEFAULT,
        );
        assert!(zero_pie.contains(">No data to display</text>"), "{zero_pie}");
        assert!(!zero_pie.contains("<path"), "{zero_pie}");
    }

    #[test]
    fn legend_wraps_into_rows() {
        assert_eq!(legend_rows(0, 600.0), 0);
        assert_eq!(legend_rows(5, 600.0), 1);
        assert_eq!(legend_rows(6, 600.0), 2);
        assert_eq!(legend_rows(4, 360.0), 2);
    }
}
