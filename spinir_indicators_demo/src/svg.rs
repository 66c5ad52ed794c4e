// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `spinir_indicators_demo`.

use kurbo::Size;
use peniko::Color;
use spinir_core::Drawable;

// Flattening tolerance for lowering arcs; plenty for a contact sheet.
const TOLERANCE: f64 = 0.05;

const PAD: f64 = 10.0;
const LABEL_BAND: f64 = 18.0;

/// A single row of equally sized cells, one drawable per cell, with a label
/// underneath each.
#[derive(Debug)]
pub(crate) struct SvgSheet {
    cell: Size,
    entries: Vec<(String, Drawable)>,
}

impl SvgSheet {
    pub(crate) fn new(cell: Size) -> Self {
        Self {
            cell,
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, label: impl Into<String>, drawable: Drawable) {
        self.entries.push((label.into(), drawable));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let width = PAD + (self.cell.width + PAD) * self.entries.len() as f64;
        let height = PAD + self.cell.height + LABEL_BAND + PAD;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        ));
        out.push('\n');

        // The drawables themselves never carry a background; the sheet paints
        // one so light-on-dark indicator colors stay visible.
        out.push_str(&format!(
            r##"<rect x="0" y="0" width="{width}" height="{height}" fill="#1f2430"/>"##
        ));
        out.push('\n');

        for (i, (label, drawable)) in self.entries.iter().enumerate() {
            let x = PAD + (self.cell.width + PAD) * i as f64;
            let d = drawable.to_bez_path(TOLERANCE).to_svg();

            out.push_str(&format!(r#"<g transform="translate({x} {PAD})">"#));
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(&mut out, "fill", drawable.fill());
            if let Some(stroke) = drawable.stroke() {
                write_paint_attr(&mut out, "stroke", Some(stroke));
                out.push_str(&format!(r#" stroke-width="{}""#, drawable.stroke_width()));
            }
            out.push_str("/></g>\n");

            out.push_str(&format!(
                r##"<text x="{}" y="{}" font-size="11" text-anchor="middle" fill="#c8ccd4">{}</text>"##,
                x + self.cell.width / 2.0,
                PAD + self.cell.height + 13.0,
                escape_xml(label)
            ));
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    let (value, opacity) = match color {
        Some(color) => svg_color(color),
        None => ("none".to_string(), None),
    };
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
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
