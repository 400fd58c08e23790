//! Image codec seam
//!
//! Persisting pixel data is an external collaborator concern: the store only
//! needs "given raw pixel data and a path, write a file". The trait below is
//! that interface; [`RawCodec`] is the default implementation, which dumps
//! the bytes as-is and leaves any encoding to the producer of the data.

use std::fs;
use std::path::Path;

use crate::Result;

/// Raw pixel data handed to the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Create image data from raw bytes.
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Persists image data to a file.
pub trait ImageCodec {
    /// Write `image` to `path`.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be written.
    fn persist(&self, image: &ImageData, path: &Path) -> Result<()>;
}

/// Default codec: writes the pixel bytes verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCodec;

impl ImageCodec for RawCodec {
    fn persist(&self, image: &ImageData, path: &Path) -> Result<()> {
        fs::write(path, image.pixels())?;
        Ok(())
    }
}
