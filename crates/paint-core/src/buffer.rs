//! Decoded pixel buffers.
//!
//! [`PixelBuffer`] is the hand-off point between the image decoding
//! collaborator and the color extractor. It owns interleaved 8-bit samples
//! in **row-major** order, top-to-bottom:
//!
//! ```text
//! RGB:  [R G B R G B ...]      <- Row 0
//! RGBA: [R G B A R G B A ...]  <- Row 0
//! ```
//!
//! Construction validates that the buffer is non-empty and that its length
//! matches `width * height * channels`, so downstream code can index
//! without further checks.

use crate::color::Rgb8;
use crate::error::{Error, Result};

/// Decoded 8-bit image, RGB or RGBA.
///
/// # Example
///
/// ```rust
/// use paint_core::{PixelBuffer, Rgb8};
///
/// let buf = PixelBuffer::filled(4, 2, Rgb8::new(200, 10, 10)).unwrap();
/// assert_eq!(buf.pixel_count(), 8);
/// assert_eq!(buf.pixel(3, 1), Rgb8::new(200, 10, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer from interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if either dimension is zero
    /// - [`Error::BufferSizeMismatch`] if `data.len() != width * height * 3`
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::with_channels(width, height, 3, data)
    }

    /// Creates a buffer from interleaved RGBA bytes.
    ///
    /// Alpha is kept so quantizers can ignore transparent pixels.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::with_channels(width, height, 4, data)
    }

    /// Creates an RGB buffer filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Result<Self> {
        let count = checked_len(width, height, 3)?;
        let data = color.to_array().iter().copied().cycle().take(count).collect();
        Self::from_rgb(width, height, data)
    }

    /// Creates an RGB buffer from a slice of pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb8]) -> Result<Self> {
        let data = pixels.iter().flat_map(|p| p.to_array()).collect();
        Self::from_rgb(width, height, data)
    }

    fn with_channels(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let expected = checked_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// 3 for RGB, 4 for RGBA.
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Total number of pixels. Always non-zero.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        Rgb8::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Iterates over `(color, alpha)` for every pixel in memory order.
    ///
    /// RGB buffers report alpha 255.
    pub fn pixels(&self) -> impl Iterator<Item = (Rgb8, u8)> + '_ {
        let rgba = self.channels == 4;
        self.data.chunks_exact(self.channels as usize).map(move |px| {
            let alpha = if rgba { px[3] } else { 255 };
            (Rgb8::new(px[0], px[1], px[2]), alpha)
        })
    }

    /// Iterates over every `step`-th pixel. A `step` of 0 is treated as 1.
    pub fn sampled(&self, step: usize) -> impl Iterator<Item = (Rgb8, u8)> + '_ {
        self.pixels().step_by(step.max(1))
    }
}

fn checked_len(width: u32, height: u32, channels: u8) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "image has no pixels"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows"))
}
