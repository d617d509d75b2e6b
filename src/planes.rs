//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a region of the complex plane described by its center point
//! and a magnification.  The center-and-zoom form is what you want
//! when you spend your time nudging a camera around the set; the
//! corners fall out of the arithmetic.
use num::Complex;

/// The region of the complex plane a grid of pixels will be mapped
/// onto: a center point and a magnification.
#[derive(Copy, Clone, Debug)]
pub struct View {
    /// The real coordinate under the center pixel.
    pub center_x: f64,
    /// The imaginary coordinate under the center pixel.
    pub center_y: f64,
    /// Magnification.  At 1.0 the short axis of the image spans four
    /// units of the complex plane; doubling it halves the span.
    /// Must be positive.
    pub zoom: f64,
}

/// Describes the x, y of a point in a region.  x runs left to right,
/// y runs top to bottom, because that is how image buffers are laid
/// out whether we like it or not.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps points from one into
/// the other.  Constructed once per image; the per-pixel work is two
/// multiplications and two additions.

#[derive(Debug)]
pub struct PlaneMapper {
    view: View,
    // Complex-plane units per pixel along both axes.
    scale: f64,
    // The pixel that sits on the view's center, as floats.
    half_width: f64,
    half_height: f64,
    // +1.0 normally, -1.0 for conventions that flip the imaginary
    // axis (the Burning Ship is drawn that way).
    im_sign: f64,
}

impl PlaneMapper where {
    /// Constructor.  Takes the view, the integral plane's width and
    /// height, and whether the imaginary axis runs upward or
    /// downward.  The scale is pinned to the short axis so that the
    /// interesting region survives any aspect ratio.
    pub fn new(view: View, width: usize, height: usize, flip_im: bool) -> PlaneMapper {
        let short_axis = width.min(height) as f64;
        PlaneMapper {
            view,
            scale: 4.0 / (view.zoom * short_axis),
            half_width: (width / 2) as f64,
            half_height: (height / 2) as f64,
            im_sign: if flip_im { -1.0 } else { 1.0 },
        }
    }

    /// Given a pixel on the integral cartesian plane, map that to the
    /// point at the same position on the complex cartesian plane.
    /// All of the arithmetic stays in f64; callers narrow to f32 when
    /// they enter the iteration loop, and not a moment sooner.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.view.center_x + ((pixel.0 as f64) - self.half_width) * self.scale,
            self.view.center_y + self.im_sign * ((pixel.1 as f64) - self.half_height) * self.scale,
        )
    }
}
