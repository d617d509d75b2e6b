//! The error type shared by scene construction and the image writer.

use failure::Fail;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while describing or writing an image.
/// The iteration and coloring code is total and contributes nothing
/// here.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The scene parameters cannot describe an image.
    #[fail(display = "invalid scene: {}", _0)]
    InvalidScene(String),

    /// The output file could not be created or written.  A failure
    /// here only loses the one image; callers rendering several
    /// scenes carry on with the rest.
    #[fail(display = "could not write {:?}: {}", path, cause)]
    ImageWrite {
        /// The destination we tried to write.
        path: PathBuf,
        /// The io failure underneath.
        #[fail(cause)]
        cause: io::Error,
    },
}
