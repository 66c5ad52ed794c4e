// Copyright 2026 the SpinIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading-indicator shapes for `spinir_core`.
//!
//! This crate maps each member of a closed family of ten indicator shapes to
//! an immutable [`spinir_core::Drawable`], given a bounding size and a paint
//! color. The computation is a pure value pipeline invoked per request:
//! pick the variant's rule, build its path, attach the variant's fill or
//! stroke policy. Nothing is retained between calls, so the entry points are
//! safe to use from any thread.
//!
//! Animation timing, color cycling, and surface management belong to the
//! caller; this crate only describes what to draw.

#![no_std]

#[cfg(not(feature = "std"))]
mod float;
mod indicator_spec;
mod shape;

pub use indicator_spec::IndicatorSpec;
pub use shape::IndicatorShape;
