// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the whole pipeline over a grid of pixels.
//!
//! Every pixel is its own little universe: it is mapped onto the
//! complex plane and iterated, and the resulting color lands in a
//! buffer slot nobody else will ever touch.  No pixel reads another
//! pixel's result, which makes the parallel version almost
//! embarrassingly simple.  The buffer is split into bands of whole
//! rows, each band is handed to a scoped thread, and because the
//! bands are disjoint slices there is nothing to lock and nothing to
//! contend over.  The sequential and threaded paths share the same
//! per-row worker, so their output is identical to the byte.

use crate::color::shade;
use crate::error::RenderError;
use crate::escape::{iterate, Variant};
use crate::planes::{Pixel, PlaneMapper, View};
use itertools::iproduct;
use num::Complex;
use tracing::debug;

/// One full description of a single image: what to iterate, where to
/// look, how large, and how patient to be.  Immutable once built.
#[derive(Copy, Clone, Debug)]
pub struct Scene {
    /// The recurrence to iterate.
    pub variant: Variant,
    /// The region of the complex plane under the pixel grid.
    pub view: View,
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// The iteration cap for every pixel.
    pub max_iter: usize,
}

impl Scene {
    /// Validate the parameters and build a scene.  A zero-sized axis
    /// or a zoom at or below zero cannot describe an image and is
    /// rejected here, once, so the render paths never have to ask.
    pub fn new(
        variant: Variant,
        view: View,
        width: usize,
        height: usize,
        max_iter: usize,
    ) -> Result<Scene, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidScene(format!(
                "image size {}x{} has an empty axis",
                width, height
            )));
        }
        if view.zoom <= 0.0 {
            return Err(RenderError::InvalidScene(format!(
                "zoom must be positive, not {}",
                view.zoom
            )));
        }
        Ok(Scene {
            variant,
            view,
            width,
            height,
            max_iter,
        })
    }

    /// The number of bytes a rendered buffer occupies: one RGB triple
    /// per pixel.
    pub fn buffer_len(&self) -> usize {
        self.width * self.height * 3
    }
}

/// Render `rows` worth of pixels starting at row `top` into `band`.
/// The band's length decides how many rows it holds; it is always a
/// whole number of rows.
fn render_rows(scene: &Scene, mapper: &PlaneMapper, top: usize, band: &mut [u8]) {
    let rows = band.len() / (scene.width * 3);
    for (row, column) in iproduct!(0..rows, 0..scene.width) {
        let point = mapper.pixel_to_point(&Pixel(column, top + row));
        let sample = iterate(
            &scene.variant,
            Complex::new(point.re as f32, point.im as f32),
            scene.max_iter,
        );
        let rgb = shade(&sample, scene.max_iter);
        let offset = (row * scene.width + column) * 3;
        band[offset] = rgb[0];
        band[offset + 1] = rgb[1];
        band[offset + 2] = rgb[2];
    }
}

/// Render a scene on the calling thread.  Useful on its own for small
/// images, and as the reference the threaded path is measured
/// against.
pub fn render(scene: &Scene) -> Vec<u8> {
    let mapper = PlaneMapper::new(
        scene.view,
        scene.width,
        scene.height,
        scene.variant.flips_im_axis(),
    );
    let mut pixels = vec![0 as u8; scene.buffer_len()];
    render_rows(scene, &mapper, 0, &mut pixels);
    pixels
}

/// Render a scene across `threads` scoped threads, each owning a
/// disjoint band of rows.  A thread count of zero is read as one.
/// The output is bit-identical to [`render`]; only the wall clock
/// changes.
pub fn render_threaded(scene: &Scene, threads: usize) -> Vec<u8> {
    let threads = if threads == 0 { 1 } else { threads };
    let mapper = PlaneMapper::new(
        scene.view,
        scene.width,
        scene.height,
        scene.variant.flips_im_axis(),
    );
    debug!(
        width = scene.width,
        height = scene.height,
        threads,
        "rendering in row bands"
    );

    let mut pixels = vec![0 as u8; scene.buffer_len()];
    let rows_per_band = scene.height / threads + 1;
    {
        let mapper = &mapper;
        let bands: Vec<&mut [u8]> = pixels.chunks_mut(rows_per_band * scene.width * 3).collect();
        crossbeam::scope(|spawner| {
            for (i, band) in bands.into_iter().enumerate() {
                spawner.spawn(move |_| {
                    render_rows(scene, mapper, i * rows_per_band, band);
                });
            }
        })
        .unwrap();
    }
    pixels
}
