// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable indicator drawable specification.

use kurbo::Size;
use peniko::Color;
use peniko::color::palette::css;
use spinir_core::Drawable;

use crate::shape::IndicatorShape;

/// A reusable description of one indicator drawable.
///
/// Construct with [`new`](Self::new), chain `with_*` overrides, then call
/// [`drawable`](Self::drawable) as often as needed; every call builds a fresh
/// value. The default paint is white, the color indicator surfaces default to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorSpec {
    /// Shape variant to build.
    pub shape: IndicatorShape,
    /// Target bounding size.
    pub size: Size,
    /// Paint bound to the variant's fill or stroke slot.
    pub color: Color,
}

impl IndicatorSpec {
    /// Creates a spec with a white paint.
    pub fn new(shape: IndicatorShape, size: Size) -> Self {
        Self {
            shape,
            size,
            color: css::WHITE,
        }
    }

    /// Sets the paint color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds the drawable for this spec.
    pub fn drawable(&self) -> Drawable {
        self.shape.drawable(self.size, self.color)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_to_white() {
        let spec = IndicatorSpec::new(IndicatorShape::Ring, Size::new(40.0, 40.0));
        assert_eq!(spec.drawable().stroke(), Some(css::WHITE));
    }

    #[test]
    fn matches_the_direct_entry_point() {
        let size = Size::new(32.0, 32.0);
        let spec = IndicatorSpec::new(IndicatorShape::Pacman, size).with_color(css::ORANGE);
        assert_eq!(
            spec.drawable(),
            IndicatorShape::Pacman.drawable(size, css::ORANGE)
        );
    }
}
