// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable IR for loading-indicator shapes.
//!
//! This crate is the small value layer underneath `spinir_indicators`:
//! - A [`Path`] is an ordered list of [`PathSegment`]s (moves, lines, circular
//!   arcs, closes), built through [`PathBuilder`] and frozen on build.
//! - A [`Drawable`] pairs one path with its paint attributes (solid fill *or*
//!   stroke, plus a stroke width).
//!
//! Arcs keep their center/radius/angle form rather than being pre-flattened,
//! so consumers that care about exact angles (animation controllers, tests)
//! can read them back verbatim. Renderers that want cubics call
//! [`Path::to_bez_path`].
//!
//! Coordinates are y-down with the origin at the top left, matching the
//! surfaces these drawables are handed to.

#![no_std]

extern crate alloc;

mod drawable;
#[cfg(not(feature = "std"))]
mod float;
mod path;

pub use drawable::Drawable;
pub use path::{Path, PathBuilder, PathSegment};
