// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `iochart_demo`.

use kurbo::{BezPath, Line, Point, Rect, Size, Vec2};

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Text styling for [`SvgDocument::text`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct TextStyle<'a> {
    pub(crate) font_size: f64,
    pub(crate) anchor: TextAnchor,
    pub(crate) fill: &'a str,
    pub(crate) bold: bool,
}

impl<'a> TextStyle<'a> {
    pub(crate) fn new(font_size: f64, anchor: TextAnchor, fill: &'a str) -> Self {
        Self {
            font_size,
            anchor,
            fill,
            bold: false,
        }
    }

    pub(crate) fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Fill and stroke for shapes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Paint<'a> {
    pub(crate) fill: Option<&'a str>,
    pub(crate) fill_opacity: Option<f64>,
    pub(crate) stroke: Option<&'a str>,
    pub(crate) stroke_width: f64,
}

impl<'a> Paint<'a> {
    pub(crate) fn fill(color: &'a str) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub(crate) fn stroke(color: &'a str, width: f64) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            ..Self::default()
        }
    }

    pub(crate) fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    pub(crate) fn with_stroke(mut self, color: &'a str, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
}

/// An SVG document built element by element, in paint order.
#[derive(Debug)]
pub(crate) struct SvgDocument {
    view: Size,
    body: String,
}

impl SvgDocument {
    pub(crate) fn new(view: Size) -> Self {
        Self {
            view,
            body: String::new(),
        }
    }

    pub(crate) fn rect(&mut self, rect: Rect, paint: Paint<'_>) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        write_paint_attrs(&mut self.body, paint);
        self.body.push_str("/>\n");
    }

    pub(crate) fn line(&mut self, line: Line, stroke: &str, width: f64, dashed: bool) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        ));
        write_paint_attrs(&mut self.body, Paint::stroke(stroke, width));
        if dashed {
            self.body.push_str(r#" stroke-dasharray="4 4""#);
        }
        self.body.push_str("/>\n");
    }

    /// Emits a `<path>` from raw path data.
    pub(crate) fn path_data(&mut self, d: &str, paint: Paint<'_>) {
        self.body.push_str(&format!(r#"<path d="{}""#, escape_xml(d)));
        write_paint_attrs(&mut self.body, paint);
        self.body.push_str("/>\n");
    }

    pub(crate) fn path(&mut self, path: &BezPath, paint: Paint<'_>) {
        self.path_data(&path.to_svg(), paint);
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, paint: Paint<'_>) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            center.x, center.y, radius
        ));
        write_paint_attrs(&mut self.body, paint);
        self.body.push_str("/>\n");
    }

    pub(crate) fn text(&mut self, pos: Point, text: &str, style: TextStyle<'_>) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle""#,
            pos.x, pos.y, style.font_size
        ));
        self.body.push_str(match style.anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        if style.bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        write_paint_attrs(&mut self.body, Paint::fill(style.fill));
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    /// Opens a translated group; close it with [`Self::end_group`].
    pub(crate) fn begin_group(&mut self, offset: Vec2) {
        self.body.push_str(&format!(
            r#"<g transform="translate({} {})">"#,
            offset.x, offset.y
        ));
        self.body.push('\n');
    }

    pub(crate) fn end_group(&mut self) {
        self.body.push_str("</g>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {} {}" width="{}" height="{}" font-family="sans-serif">"#,
            self.view.width, self.view.height, self.view.width, self.view.height
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn write_paint_attrs(out: &mut String, paint: Paint<'_>) {
    out.push_str(&format!(r#" fill="{}""#, escape_xml(paint.fill.unwrap_or("none"))));
    if let Some(o) = paint.fill_opacity {
        out.push_str(&format!(r#" fill-opacity="{o}""#));
    }
    if let Some(stroke) = paint.stroke
        && paint.stroke_width > 0.0
    {
        out.push_str(&format!(
            r#" stroke="{}" stroke-width="{}""#,
            escape_xml(stroke),
            paint.stroke_width
        ));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text_and_attributes() {
        let mut doc = SvgDocument::new(Size::new(10.0, 10.0));
        doc.text(
            Point::new(1.0, 2.0),
            "R&D <\"Q1\">",
            TextStyle::new(12.0, TextAnchor::Middle, "#111"),
        );
        doc.rect(Rect::new(0.0, 0.0, 1.0, 1.0), Paint::fill("url(\"x\")"));
        let svg = doc.to_svg_string();
        assert!(svg.contains("R&amp;D &lt;&quot;Q1&quot;&gt;"), "{svg}");
        assert!(svg.contains(r#"fill="url(&quot;x&quot;)""#), "{svg}");
    }

    #[test]
    fn stroke_is_omitted_without_width() {
        let mut doc = SvgDocument::new(Size::new(10.0, 10.0));
        doc.circle(Point::new(5.0, 5.0), 2.0, Paint::fill("#fff").with_stroke("#000", 0.0));
        let svg = doc.to_svg_string();
        assert!(svg.contains(r##"<circle cx="5" cy="5" r="2" fill="#fff"/>"##), "{svg}");
    }

    #[test]
    fn groups_translate_their_content() {
        let mut doc = SvgDocument::new(Size::new(10.0, 10.0));
        doc.begin_group(Vec2::new(0.0, 28.0));
        doc.line(Line::new((0.0, 1.0), (5.0, 1.0)), "#ccc", 1.0, true);
        doc.end_group();
        let svg = doc.to_svg_string();
        assert!(svg.contains(r#"<g transform="translate(0 28)">"#), "{svg}");
        assert!(svg.contains(r#"stroke-dasharray="4 4"/>"#), "{svg}");
        assert!(svg.contains("</g>\n</svg>"), "{svg}");
    }

    #[test]
    fn document_has_view_box_of_frame() {
        let doc = SvgDocument::new(Size::new(600.0, 360.0));
        let svg = doc.to_svg_string();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 360""#));
        assert!(svg.ends_with("</svg>\n"));
    }
}
