//! Raw frame data captured from a video source.

use crate::error::CoreError;

/// Bytes per pixel in a packed RGBA buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// A single captured video frame as tightly packed 8-bit RGBA.
///
/// Frames are ephemeral: one exists only for the duration of a single
/// analysis tick and is never persisted or mutated.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Wrap a pixel buffer, checking that the byte length matches the
    /// declared dimensions (`width * height * 4`).
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::Validation(format!(
                "Frame dimensions must be non-zero, got {width}x{height}"
            )));
        }

        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(CoreError::Validation(format!(
                "Frame buffer length {} does not match {width}x{height} RGBA ({expected} bytes)",
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a frame filled with a single RGBA color. Handy for tests and
    /// synthetic sources.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, CoreError> {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * BYTES_PER_PIXEL);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The packed RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
