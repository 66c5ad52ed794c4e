// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable [`Drawable`] value handed to rendering surfaces.

use kurbo::BezPath;
use peniko::Color;

use crate::path::Path;

/// One path plus the paint attributes to draw it with.
///
/// A drawable carries either a solid fill or a stroke, never both; the
/// constructors keep the other slot unset. It never carries a background
/// paint — the owning surface decides what, if anything, sits behind the
/// shape. Values are frozen on construction; the animation controller that
/// receives one can only read it.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    path: Path,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
    background: Option<Color>,
}

impl Drawable {
    /// Stroke width used unless a rule overrides it.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Creates a drawable whose enclosed area is painted solid.
    pub fn filled(path: Path, color: Color) -> Self {
        Self {
            path,
            fill: Some(color),
            stroke: None,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            background: None,
        }
    }

    /// Creates a drawable whose outline is painted at
    /// [`DEFAULT_STROKE_WIDTH`](Self::DEFAULT_STROKE_WIDTH).
    pub fn stroked(path: Path, color: Color) -> Self {
        Self {
            path,
            fill: None,
            stroke: Some(color),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            background: None,
        }
    }

    /// Overrides the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Returns the path geometry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the fill color, if this drawable is filled.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Returns the stroke color, if this drawable is stroked.
    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    /// Returns the stroke width. Only meaningful when [`stroke`](Self::stroke)
    /// is set.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Returns the background paint, which is always absent.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Lowers the path to cubic Béziers; see [`Path::to_bez_path`].
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        self.path.to_bez_path(tolerance)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    fn dot() -> Path {
        let mut b = Path::builder();
        b.arc((5.0, 5.0), 5.0, 0.0, core::f64::consts::TAU, false);
        b.build()
    }

    #[test]
    fn filled_leaves_stroke_unset() {
        let d = Drawable::filled(dot(), css::RED);
        assert_eq!(d.fill(), Some(css::RED));
        assert_eq!(d.stroke(), None);
        assert_eq!(d.background(), None);
    }

    #[test]
    fn stroked_defaults_to_width_two() {
        let d = Drawable::stroked(dot(), css::BLUE);
        assert_eq!(d.fill(), None);
        assert_eq!(d.stroke(), Some(css::BLUE));
        assert_eq!(d.stroke_width(), 2.0);
        assert_eq!(d.background(), None);
    }

    #[test]
    fn stroke_width_override() {
        let d = Drawable::stroked(dot(), css::BLUE).with_stroke_width(30.0);
        assert_eq!(d.stroke_width(), 30.0);
    }

    #[test]
    fn identical_inputs_build_equal_values() {
        let a = Drawable::filled(dot(), css::REBECCA_PURPLE);
        let b = Drawable::filled(dot(), css::REBECCA_PURPLE);
        assert_eq!(a, b);
    }
}
