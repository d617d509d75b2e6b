//! Writes pixel buffers to disk as binary PPM.
//!
//! PPM's P6 flavor is about the simplest image container that other
//! software still recognizes: an ASCII header naming the dimensions
//! and the channel maximum, then the raw bytes.  The header this
//! module emits is fixed at `P6\n{width} {height}\n255\n`, newlines
//! and all, so that files are reproducible byte for byte and trivial
//! to check in tests.  Anything fancier than PPM is a job for an
//! external converter.

use crate::error::RenderError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize a rendered buffer to `path`.  The buffer must hold
/// exactly one RGB triple per pixel, rows top to bottom.  A failure
/// to create or fill the file comes back as
/// [`RenderError::ImageWrite`] with the path attached, so a caller
/// working through several scenes can name the one it lost.
pub fn write_ppm(path: &Path, pixels: &[u8], width: usize, height: usize) -> Result<(), RenderError> {
    assert!(pixels.len() == width * height * 3);
    write_raw(path, pixels, width, height).map_err(|cause| RenderError::ImageWrite {
        path: path.to_path_buf(),
        cause,
    })
}

fn write_raw(path: &Path, pixels: &[u8], width: usize, height: usize) -> Result<(), std::io::Error> {
    let output = File::create(path)?;
    let mut output = BufWriter::new(output);
    write!(output, "P6\n{} {}\n255\n", width, height)?;
    output.write_all(pixels)?;
    output.flush()?;
    Ok(())
}
