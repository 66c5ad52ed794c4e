// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments and the frozen [`Path`] value.

use core::f64::consts::TAU;

use kurbo::{Arc, BezPath, Point, Vec2};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// One segment of an indicator outline.
///
/// Arc angles are in radians, with 0 along the positive x-axis. On the y-down
/// surface these drawables target, increasing angles appear clockwise;
/// `clockwise: true` selects the increasing-angle sweep from `start_angle` to
/// `end_angle`, `false` the decreasing one. Angles are stored exactly as the
/// producing rule gave them, not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Starts a new subpath at the given point.
    MoveTo(Point),
    /// Draws a straight line to the given point.
    LineTo(Point),
    /// Draws a circular arc around `center`.
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Sweep direction; see the type-level docs.
        clockwise: bool,
    },
    /// Closes the current subpath.
    Close,
}

// Four inline segments cover everything but the capsule outline, which
// spills to the heap.
type Segments = SmallVec<[PathSegment; 4]>;

/// An immutable, ordered sequence of [`PathSegment`]s.
///
/// Built through [`PathBuilder`]; a `Path` is never observable in a
/// half-built state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Segments,
}

impl Path {
    /// Creates a builder for a new path.
    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    /// Returns the segments in construction order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Lowers the path to cubic Béziers for renderers that consume them.
    ///
    /// Moves, lines, and closes map one to one. An arc first connects to its
    /// start point — with a straight line when a current point exists,
    /// otherwise by starting a subpath — and is then flattened to cubics
    /// within `tolerance`. An angle delta of magnitude `2π` or more lowers to
    /// a full circle.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut bez = BezPath::new();
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;

        for segment in self.segments() {
            match *segment {
                PathSegment::MoveTo(p) => {
                    bez.move_to(p);
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathSegment::LineTo(p) => {
                    if current.is_some() {
                        bez.line_to(p);
                    } else {
                        bez.move_to(p);
                        subpath_start = Some(p);
                    }
                    current = Some(p);
                }
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let sweep = arc_sweep(start_angle, end_angle, clockwise);
                    let start = point_on_circle(center, radius, start_angle);
                    if current.is_some() {
                        bez.line_to(start);
                    } else {
                        bez.move_to(start);
                        subpath_start = Some(start);
                    }
                    let arc = Arc::new(center, (radius, radius), start_angle, sweep, 0.0);
                    arc.to_cubic_beziers(tolerance, |p1, p2, p3| bez.curve_to(p1, p2, p3));
                    current = Some(point_on_circle(center, radius, start_angle + sweep));
                }
                PathSegment::Close => {
                    bez.close_path();
                    current = subpath_start;
                }
            }
        }

        bez
    }
}

/// Maps a `(start, end, clockwise)` arc description to a signed sweep.
///
/// Clockwise arcs sweep in (0, 2π], counter-clockwise in [−2π, 0); deltas of
/// magnitude 2π or more are a full circle in the requested direction.
fn arc_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    let delta = end_angle - start_angle;
    if delta >= TAU || delta <= -TAU {
        return if clockwise { TAU } else { -TAU };
    }
    if clockwise {
        if delta < 0.0 { delta + TAU } else { delta }
    } else if delta > 0.0 {
        delta - TAU
    } else {
        delta
    }
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + radius * Vec2::new(angle.cos(), angle.sin())
}

/// Accumulates [`PathSegment`]s and freezes them into a [`Path`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Segments,
}

impl PathBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new subpath at `point`.
    pub fn move_to(&mut self, point: impl Into<Point>) {
        self.segments.push(PathSegment::MoveTo(point.into()));
    }

    /// Draws a line to `point`.
    pub fn line_to(&mut self, point: impl Into<Point>) {
        self.segments.push(PathSegment::LineTo(point.into()));
    }

    /// Draws a circular arc; see [`PathSegment::Arc`] for the angle
    /// convention.
    pub fn arc(
        &mut self,
        center: impl Into<Point>,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        self.segments.push(PathSegment::Arc {
            center: center.into(),
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
    }

    /// Closes the current subpath.
    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// Freezes the accumulated segments into an immutable [`Path`].
    pub fn build(self) -> Path {
        Path {
            segments: self.segments,
        }
    }
}
