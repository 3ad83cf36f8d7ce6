//! Quantization collaborator interface.
//!
//! The extractor never looks at pixels itself. It asks a [`Quantizer`] for
//! a dominant color plus an ordered palette and only screens and weights
//! what comes back. This keeps the weighting logic testable with fixed
//! colors:
//!
//! ```rust
//! use paint_core::{PixelBuffer, Result, Rgb8};
//! use paint_extract::{Quantized, Quantizer};
//!
//! let stub = |_: &PixelBuffer, _: usize| -> Result<Quantized> {
//!     Ok(Quantized::new(Rgb8::new(10, 10, 10), vec![Rgb8::new(200, 200, 200)]))
//! };
//! let pixels = PixelBuffer::filled(1, 1, Rgb8::BLACK).unwrap();
//! let q = stub.quantize(&pixels, 5).unwrap();
//! assert_eq!(q.dominant, Rgb8::new(10, 10, 10));
//! ```

use paint_core::{PixelBuffer, Result, Rgb8};

/// Output of a quantizer: the most prevalent color and ordered candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantized {
    /// Single most visually prevalent color.
    pub dominant: Rgb8,
    /// Candidates, most prevalent first. May include the dominant color.
    pub palette: Vec<Rgb8>,
}

impl Quantized {
    /// Creates a quantization result.
    pub fn new(dominant: Rgb8, palette: Vec<Rgb8>) -> Self {
        Self { dominant, palette }
    }
}

/// Reduces a pixel buffer to a dominant color and a palette.
///
/// Implementations must be deterministic: the same buffer and `max_colors`
/// always yield the same result. Failures are reported as
/// [`paint_core::Error::QuantizationFailure`].
pub trait Quantizer: Send + Sync {
    /// Quantizes `pixels` into at most `max_colors` palette entries.
    fn quantize(&self, pixels: &PixelBuffer, max_colors: usize) -> Result<Quantized>;
}

impl<F> Quantizer for F
where
    F: Fn(&PixelBuffer, usize) -> Result<Quantized> + Send + Sync,
{
    fn quantize(&self, pixels: &PixelBuffer, max_colors: usize) -> Result<Quantized> {
        self(pixels, max_colors)
    }
}
