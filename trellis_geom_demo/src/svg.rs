// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `trellis_geom_demo`.

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

#[derive(Debug)]
pub(crate) struct SvgScene {
    view_box: Rect,
    body: String,
}

impl SvgScene {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, fill: Color) {
        let d = path.to_svg();
        self.body
            .push_str(&format!(r#"<path d="{d}" fill="{}"/>"#, css_color(fill)));
        self.body.push('\n');
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, stroke: Color, width: f64) {
        let d = path.to_svg();
        self.body.push_str(&format!(
            r#"<path d="{d}" fill="none" stroke="{}" stroke-width="{width}"/>"#,
            css_color(stroke)
        ));
        self.body.push('\n');
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, stroke: Color, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{width}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            css_color(stroke)
        ));
        self.body.push('\n');
    }

    pub(crate) fn text(&mut self, pos: Point, font_size: f64, fill: Color, text: &str) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{font_size}" fill="{}">{}</text>"#,
            pos.x,
            pos.y,
            css_color(fill),
            escape_xml(text)
        ));
        self.body.push('\n');
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view_box;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
                "\n{}</svg>\n"
            ),
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height(),
            self.body
        )
    }
}

fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

fn escape_xml(s: &str) -> String {
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
