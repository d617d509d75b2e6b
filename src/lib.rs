#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! An escape-time fractal takes a point on the complex plane and
//! repeatedly applies a recurrence to it, measuring how quickly that
//! number goes to infinity.  This "velocity" is the number used to
//! render the image: points that never leave are painted black, and
//! points that escape are painted according to how long they held
//! out and how hard they finally left.
//!
//! This crate knows three recurrences.  The Mandelbrot set feeds the
//! plane-mapped point in as the constant; the Julia sets feed it in
//! as the starting value and carry their constant in the scene; and
//! the Burning Ship folds each iterate into the positive quadrant
//! before squaring, which does strange and wonderful things to the
//! geometry.
//!
//! The pipeline runs pixel to plane ([`planes`]), plane to escape
//! measurement ([`escape`]), measurement to color ([`color`]),
//! assembled over the whole grid sequentially or in parallel by the
//! `render` module, and finally serialized as a binary PPM ([`ppm`]).

pub mod color;
pub mod error;
pub mod escape;
pub mod planes;
pub mod ppm;
pub mod render;

pub use crate::error::RenderError;
pub use crate::escape::Variant;
pub use crate::planes::View;
pub use crate::ppm::write_ppm;
pub use crate::render::{render, render_threaded, Scene};
