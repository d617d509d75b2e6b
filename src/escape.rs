// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.
//!
//! Every fractal this crate knows how to draw is the same experiment
//! run with slightly different rules: take a point, apply `z = z*z +
//! c` over and over, and watch whether the value runs off to
//! infinity.  The variants differ only in which role the plane-mapped
//! point plays (the iterated value, or the added constant) and in
//! whether the value is folded into the positive quadrant before each
//! squaring.  Those two switches are the whole of the polymorphism,
//! so they live in a small enum and one match, and the loop itself is
//! written exactly once.

use num::Complex;

/// The squared bailout radius.  Once `|z|²` reaches this, the orbit
/// has escaped and no further iteration can bring it back.  Radius 4
/// rather than the textbook 2: the extra headroom is what makes the
/// logarithmic smoothing in the color pass come out without visible
/// banding, and the few extra iterations it costs are noise.
pub const BAILOUT_SQ: f32 = 16.0;

/// Which recurrence to iterate, and how to read the plane-mapped
/// point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Variant {
    /// `z` starts at the origin and the mapped point is the constant.
    Mandelbrot,
    /// The mapped point is the starting `z`; the constant is fixed
    /// for the whole scene and carried here.
    Julia(Complex<f32>),
    /// Mandelbrot's setup, but each iterate is folded to
    /// `(|Re z|, |Im z|)` before squaring.
    BurningShip,
}

impl Variant {
    /// The Burning Ship is conventionally drawn with the imaginary
    /// axis flipped, so the ship floats upright.  The plane mapping
    /// honors this.
    pub fn flips_im_axis(&self) -> bool {
        match self {
            Variant::BurningShip => true,
            _ => false,
        }
    }
}

/// What happened to one point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeResult {
    /// How many iterations completed before the orbit escaped, or the
    /// cap itself if it never did.  Always in `[0, limit]`.
    pub iterations: usize,
    /// `|z|²` at the moment of escape.  Only meaningful when
    /// `iterations < limit`; a bounded point has nothing useful here.
    pub final_magnitude_sq: f32,
}

/// Iterate one point until it escapes or the cap runs out.  Total
/// over its whole input domain: there is no way to make this fail,
/// only to make it take `limit` steps.
///
/// Each pass checks the cap first and the bailout second, so a point
/// that is both at the cap and outside the radius reports as bounded.
pub fn iterate(variant: &Variant, point: Complex<f32>, limit: usize) -> EscapeResult {
    let (mut z, c, fold) = match *variant {
        Variant::Mandelbrot => (Complex::new(0.0, 0.0), point, false),
        Variant::Julia(c) => (point, c, false),
        Variant::BurningShip => (Complex::new(0.0, 0.0), point, true),
    };

    let mut iterations = 0;
    loop {
        if iterations == limit {
            return EscapeResult {
                iterations,
                final_magnitude_sq: z.norm_sqr(),
            };
        }
        let magnitude_sq = z.norm_sqr();
        if magnitude_sq >= BAILOUT_SQ {
            return EscapeResult {
                iterations,
                final_magnitude_sq: magnitude_sq,
            };
        }
        if fold {
            z = Complex::new(z.re.abs(), z.im.abs());
        }
        z = z * z + c;
        iterations += 1;
    }
}
