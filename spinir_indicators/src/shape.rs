// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed indicator shape family and its geometry rules.
//!
//! Every rule works in the caller's length units with a y-down origin at the
//! top left of the bounding box. Circular rules center on
//! `(width / 2, height / 2)` and derive their radius from the width. Arc
//! angles and direction flags are recorded verbatim in the emitted segments,
//! so consumers see the exact construction, not a flattened approximation.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI, TAU};

use kurbo::{Point, Size};
use peniko::Color;
use spinir_core::{Drawable, Path};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The closed family of loading-indicator shapes.
///
/// Most variants are circular and expect a square bounding size; non-square
/// sizes are not rejected, the radius simply comes from the width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorShape {
    /// A solid disc.
    Circle,
    /// A solid circular segment closed over the top of the disc.
    CircleSemi,
    /// A stroked full circle.
    Ring,
    /// Two opposing ring arcs over the top and bottom, gaps at the sides.
    RingTwoHalfVertical,
    /// Two opposing ring arcs over the left and right, gaps at the top and
    /// bottom.
    RingTwoHalfHorizontal,
    /// A stroked three-quarter ring with the gap over the top.
    RingThirdFour,
    /// A solid rectangle covering the bounding box.
    Rectangle,
    /// A solid upward-pointing triangle.
    Triangle,
    /// A solid capsule covering the bounding box (corner radius of half the
    /// width).
    Line,
    /// A half-radius circle stroked at half the width; the heavy stroke
    /// composites into a disc with a wedge notch.
    Pacman,
}

impl IndicatorShape {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Circle,
        Self::CircleSemi,
        Self::Ring,
        Self::RingTwoHalfVertical,
        Self::RingTwoHalfHorizontal,
        Self::RingThirdFour,
        Self::Rectangle,
        Self::Triangle,
        Self::Line,
        Self::Pacman,
    ];

    /// Builds the drawable for this shape at `size`, painted with `color`.
    ///
    /// Pure and total: identical inputs always yield structurally equal
    /// drawables, and degenerate sizes compute through to degenerate paths
    /// instead of failing.
    pub fn drawable(self, size: Size, color: Color) -> Drawable {
        match self {
            Self::Circle => circle(size, color),
            Self::CircleSemi => circle_semi(size, color),
            Self::Ring => ring(size, color),
            Self::RingTwoHalfVertical => ring_two_half_vertical(size, color),
            Self::RingTwoHalfHorizontal => ring_two_half_horizontal(size, color),
            Self::RingThirdFour => ring_third_four(size, color),
            Self::Rectangle => rectangle(size, color),
            Self::Triangle => triangle(size, color),
            Self::Line => line(size, color),
            Self::Pacman => pacman(size, color),
        }
    }
}

fn center(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}

fn circle(size: Size, color: Color) -> Drawable {
    let mut path = Path::builder();
    path.arc(center(size), size.width / 2.0, 0.0, TAU, false);
    Drawable::filled(path.build(), color)
}

fn circle_semi(size: Size, color: Color) -> Drawable {
    let mut path = Path::builder();
    path.arc(center(size), size.width / 2.0, -FRAC_PI_6, -5.0 * FRAC_PI_6, false);
    path.close();
    Drawable::filled(path.build(), color)
}

fn ring(size: Size, color: Color) -> Drawable {
    let mut path = Path::builder();
    path.arc(center(size), size.width / 2.0, 0.0, TAU, false);
    Drawable::stroked(path.build(), color)
}

fn ring_two_half_vertical(size: Size, color: Color) -> Drawable {
    let radius = size.width / 2.0;
    let mut path = Path::builder();
    path.arc(center(size), radius, -3.0 * FRAC_PI_4, -FRAC_PI_4, true);
    // The gap move lands exactly on the second arc's start point.
    path.move_to((
        size.width / 2.0 - radius * FRAC_PI_4.cos(),
        size.height / 2.0 + radius * FRAC_PI_4.sin(),
    ));
    path.arc(center(size), radius, -5.0 * FRAC_PI_4, -7.0 * FRAC_PI_4, false);
    Drawable::stroked(path.build(), color)
}

fn ring_two_half_horizontal(size: Size, color: Color) -> Drawable {
    let radius = size.width / 2.0;
    let mut path = Path::builder();
    path.arc(center(size), radius, 3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4, true);
    path.move_to((
        size.width / 2.0 + radius * FRAC_PI_4.cos(),
        size.height / 2.0 - radius * FRAC_PI_4.sin(),
    ));
    path.arc(center(size), radius, -FRAC_PI_4, FRAC_PI_4, true);
    Drawable::stroked(path.build(), color)
}

fn ring_third_four(size: Size, color: Color) -> Drawable {
    let mut path = Path::builder();
    path.arc(center(size), size.width / 2.0, -3.0 * FRAC_PI_4, -FRAC_PI_4, false);
    Drawable::stroked(path.build(), color)
}

fn rectangle(size: Size, color: Color) -> Drawable {
    let mut path = Path::builder();
    path.move_to((0.0, 0.0));
    path.line_to((size.width, 0.0));
    path.line_to((size.width, size.height));
    path.line_to((0.0, size.height));
    // Left unclosed; fills close the outline implicitly.
    Drawable::filled(path.build(), color)
}

fn triangle(size: Size, color: Color) -> Drawable {
    let offset_y = size.height / 4.0;
    let mut path = Path::builder();
    path.move_to((0.0, size.height - offset_y));
    path.line_to((size.width / 2.0, size.height / 2.0 - offset_y));
    path.line_to((size.width, size.height - offset_y));
    path.close();
    Drawable::filled(path.build(), color)
}

fn line(size: Size, color: Color) -> Drawable {
    let radius = size.width / 2.0;
    let (w, h) = (size.width, size.height);
    let mut path = Path::builder();
    path.move_to((radius, 0.0));
    path.line_to((w - radius, 0.0));
    path.arc((w - radius, radius), radius, -FRAC_PI_2, 0.0, true);
    path.line_to((w, h - radius));
    path.arc((w - radius, h - radius), radius, 0.0, FRAC_PI_2, true);
    path.line_to((radius, h));
    path.arc((radius, h - radius), radius, FRAC_PI_2, PI, true);
    path.line_to((0.0, radius));
    path.arc((radius, radius), radius, PI, 3.0 * FRAC_PI_2, true);
    path.close();
    Drawable::filled(path.build(), color)
}

// The heavy stroke is what reads as the disc; the geometry is kept exactly as
// the indicator family ships it rather than rebuilt as a filled pie.
fn pacman(size: Size, color: Color) -> Drawable {
    let mut path = Path::builder();
    path.arc(center(size), size.width / 4.0, 0.0, TAU, true);
    Drawable::stroked(path.build(), color).with_stroke_width(size.width / 2.0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;
    use peniko::color::palette::css;
    use spinir_core::PathSegment;

    use super::*;

    const SQUARE: Size = Size::new(40.0, 40.0);

    #[test]
    fn every_variant_produces_a_non_empty_path() {
        for shape in IndicatorShape::ALL {
            let d = shape.drawable(SQUARE, css::WHITE);
            assert!(!d.path().is_empty(), "{shape:?} built an empty path");
        }
    }

    #[test]
    fn exactly_one_paint_slot_is_set() {
        for shape in IndicatorShape::ALL {
            let d = shape.drawable(SQUARE, css::WHITE);
            assert!(
                d.fill().is_some() != d.stroke().is_some(),
                "{shape:?} must fill or stroke, not both"
            );
            assert_eq!(d.background(), None);
        }
    }

    #[test]
    fn identical_inputs_are_idempotent() {
        for shape in IndicatorShape::ALL {
            let first = shape.drawable(SQUARE, css::TEAL);
            let second = shape.drawable(SQUARE, css::TEAL);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn zero_size_computes_through() {
        for shape in IndicatorShape::ALL {
            let d = shape.drawable(Size::ZERO, css::WHITE);
            assert!(!d.path().is_empty(), "{shape:?} must stay well-formed");
        }
    }

    #[test]
    fn circle_is_one_filled_full_arc() {
        let d = IndicatorShape::Circle.drawable(SQUARE, css::RED);
        assert_eq!(d.fill(), Some(css::RED));
        assert_eq!(d.stroke(), None);

        let &[PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        }] = d.path().segments()
        else {
            panic!("expected a single arc, got {:?}", d.path().segments());
        };
        assert_eq!(center, Point::new(20.0, 20.0));
        assert_eq!(radius, 20.0);
        assert_eq!(start_angle, 0.0);
        assert_eq!(end_angle, TAU);
        assert!(!clockwise, "the disc arc runs counter-clockwise");
    }

    #[test]
    fn ring_strokes_the_circle_geometry() {
        let circle = IndicatorShape::Circle.drawable(SQUARE, css::BLUE);
        let ring = IndicatorShape::Ring.drawable(SQUARE, css::BLUE);

        assert_eq!(ring.path(), circle.path());
        assert_eq!(ring.fill(), None);
        assert_eq!(ring.stroke(), Some(css::BLUE));
        assert_eq!(ring.stroke_width(), 2.0);
    }

    #[test]
    fn circle_semi_closes_a_counter_clockwise_arc() {
        let d = IndicatorShape::CircleSemi.drawable(SQUARE, css::WHITE);
        assert!(d.fill().is_some());

        let &[
            PathSegment::Arc {
                start_angle,
                end_angle,
                clockwise,
                ..
            },
            PathSegment::Close,
        ] = d.path().segments()
        else {
            panic!("expected arc + close, got {:?}", d.path().segments());
        };
        assert_eq!(start_angle, -FRAC_PI_6);
        assert_eq!(end_angle, -5.0 * FRAC_PI_6);
        assert!(!clockwise, "the segment arc runs counter-clockwise");
    }

    #[test]
    fn ring_two_half_vertical_splits_at_exact_angles() {
        let d = IndicatorShape::RingTwoHalfVertical.drawable(SQUARE, css::WHITE);
        assert_eq!(d.stroke_width(), 2.0);

        let expected_gap = Point::new(
            20.0 - 20.0 * FRAC_PI_4.cos(),
            20.0 + 20.0 * FRAC_PI_4.sin(),
        );
        let expected = [
            PathSegment::Arc {
                center: Point::new(20.0, 20.0),
                radius: 20.0,
                start_angle: -3.0 * FRAC_PI_4,
                end_angle: -FRAC_PI_4,
                clockwise: true,
            },
            PathSegment::MoveTo(expected_gap),
            PathSegment::Arc {
                center: Point::new(20.0, 20.0),
                radius: 20.0,
                start_angle: -5.0 * FRAC_PI_4,
                end_angle: -7.0 * FRAC_PI_4,
                clockwise: false,
            },
        ];
        assert_eq!(d.path().segments(), expected);
    }

    #[test]
    fn ring_two_half_horizontal_splits_at_exact_angles() {
        let d = IndicatorShape::RingTwoHalfHorizontal.drawable(SQUARE, css::WHITE);
        assert_eq!(d.stroke_width(), 2.0);

        let expected_gap = Point::new(
            20.0 + 20.0 * FRAC_PI_4.cos(),
            20.0 - 20.0 * FRAC_PI_4.sin(),
        );
        let expected = [
            PathSegment::Arc {
                center: Point::new(20.0, 20.0),
                radius: 20.0,
                start_angle: 3.0 * FRAC_PI_4,
                end_angle: 5.0 * FRAC_PI_4,
                clockwise: true,
            },
            PathSegment::MoveTo(expected_gap),
            PathSegment::Arc {
                center: Point::new(20.0, 20.0),
                radius: 20.0,
                start_angle: -FRAC_PI_4,
                end_angle: FRAC_PI_4,
                clockwise: true,
            },
        ];
        assert_eq!(d.path().segments(), expected);
    }

    #[test]
    fn ring_third_four_leaves_the_top_quarter_open() {
        let d = IndicatorShape::RingThirdFour.drawable(SQUARE, css::WHITE);
        assert_eq!(d.stroke_width(), 2.0);

        let &[PathSegment::Arc {
            start_angle,
            end_angle,
            clockwise,
            ..
        }] = d.path().segments()
        else {
            panic!("expected a single arc, got {:?}", d.path().segments());
        };
        assert_eq!(start_angle, -3.0 * FRAC_PI_4);
        assert_eq!(end_angle, -FRAC_PI_4);
        assert!(!clockwise, "the long way around is counter-clockwise");
    }

    #[test]
    fn rectangle_outline_is_unclosed() {
        let d = IndicatorShape::Rectangle.drawable(Size::new(50.0, 20.0), css::WHITE);
        assert!(d.fill().is_some());

        let expected = [
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(50.0, 0.0)),
            PathSegment::LineTo(Point::new(50.0, 20.0)),
            PathSegment::LineTo(Point::new(0.0, 20.0)),
        ];
        assert_eq!(d.path().segments(), expected);
    }

    #[test]
    fn triangle_sits_a_quarter_height_up() {
        let d = IndicatorShape::Triangle.drawable(Size::new(30.0, 30.0), css::WHITE);
        assert!(d.fill().is_some());

        let expected = [
            PathSegment::MoveTo(Point::new(0.0, 22.5)),
            PathSegment::LineTo(Point::new(15.0, 7.5)),
            PathSegment::LineTo(Point::new(30.0, 22.5)),
            PathSegment::Close,
        ];
        assert_eq!(d.path().segments(), expected);
    }

    #[test]
    fn line_is_a_filled_capsule() {
        let d = IndicatorShape::Line.drawable(Size::new(20.0, 60.0), css::WHITE);
        assert!(d.fill().is_some());

        let segments = d.path().segments();
        assert_eq!(segments[0], PathSegment::MoveTo(Point::new(10.0, 0.0)));
        assert_eq!(*segments.last().unwrap(), PathSegment::Close);

        let corner_arcs: std::vec::Vec<_> = segments
            .iter()
            .filter_map(|segment| match *segment {
                PathSegment::Arc {
                    radius, clockwise, ..
                } => Some((radius, clockwise)),
                _ => None,
            })
            .collect();
        assert_eq!(corner_arcs.len(), 4);
        assert!(
            corner_arcs.iter().all(|&(r, cw)| r == 10.0 && cw),
            "corner radius is half the width, swept clockwise"
        );

        let bounds = d.to_bez_path(1e-3).bounding_box();
        assert!((bounds.x0 - 0.0).abs() < 1e-2, "{bounds:?}");
        assert!((bounds.y0 - 0.0).abs() < 1e-2, "{bounds:?}");
        assert!((bounds.x1 - 20.0).abs() < 1e-2, "{bounds:?}");
        assert!((bounds.y1 - 60.0).abs() < 1e-2, "{bounds:?}");
    }

    #[test]
    fn pacman_keeps_the_heavy_stroke_formula() {
        let d = IndicatorShape::Pacman.drawable(Size::new(60.0, 60.0), css::YELLOW);
        assert_eq!(d.fill(), None);
        assert_eq!(d.stroke(), Some(css::YELLOW));
        assert_eq!(d.stroke_width(), 30.0);

        let &[PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        }] = d.path().segments()
        else {
            panic!("expected a single arc, got {:?}", d.path().segments());
        };
        assert_eq!(center, Point::new(30.0, 30.0));
        assert_eq!(radius, 15.0);
        assert_eq!(start_angle, 0.0);
        assert_eq!(end_angle, TAU);
        assert!(clockwise, "the notch arc runs clockwise");
    }

    #[test]
    fn shapes_and_drawables_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IndicatorShape>();
        assert_send_sync::<Drawable>();
    }
}
