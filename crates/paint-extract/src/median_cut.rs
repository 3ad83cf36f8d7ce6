//! Modified median cut quantization (MMCQ).
//!
//! The default [`Quantizer`]. Pixels are reduced to 5 bits per channel and
//! histogrammed into a 32x32x32 grid. Boxes over that grid are split at the
//! population median of their longest axis:
//!
//! 1. Split by pixel count until 75% of the requested colors exist.
//! 2. Split by `count * volume` for the rest, so large sparse regions still
//!    get a representative.
//!
//! The palette is ordered by `count * volume`, largest first, and the
//! dominant color is the first palette entry. Boxes are refit to their
//! populated cells after every split, so every box in the final palette
//! holds at least one pixel.
//!
//! Everything here is integer arithmetic over a fixed histogram, so output
//! is fully deterministic, including when the histogram is built in
//! parallel.

use crate::config::ExtractConfig;
use crate::quantize::{Quantized, Quantizer};
use paint_core::{Error, PixelBuffer, Result, Rgb8};
use rayon::prelude::*;
use tracing::{debug, trace};

const SIGBITS: u32 = 5;
const RSHIFT: u32 = 8 - SIGBITS;
const SIDE: usize = 1 << SIGBITS;
const HIST_SIZE: usize = 1 << (3 * SIGBITS);
const MAX_ITERATIONS: usize = 1000;
const FRACT_BY_POPULATION: f64 = 0.75;
const CHUNK_PIXELS: usize = 1 << 16;
const WHITE_CUTOFF: u8 = 250;

#[inline]
fn hist_index(r: usize, g: usize, b: usize) -> usize {
    (r << (2 * SIGBITS)) | (g << SIGBITS) | b
}

/// Median cut quantizer.
///
/// # Example
///
/// ```rust
/// use paint_core::{PixelBuffer, Rgb8};
/// use paint_extract::{MedianCut, Quantizer};
///
/// let pixels = PixelBuffer::filled(8, 8, Rgb8::new(120, 60, 30)).unwrap();
/// let q = MedianCut::new().with_quality(1).quantize(&pixels, 5).unwrap();
/// assert_eq!(q.palette.len(), 1);
/// assert_eq!(q.dominant, q.palette[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedianCut {
    quality: usize,
    min_alpha: u8,
    ignore_white: bool,
}

impl Default for MedianCut {
    fn default() -> Self {
        Self::from_config(&ExtractConfig::default())
    }
}

impl MedianCut {
    /// Creates a quantizer with default sampling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a quantizer using the sampling fields of `config`.
    pub fn from_config(config: &ExtractConfig) -> Self {
        Self {
            quality: config.quality.max(1),
            min_alpha: config.min_alpha,
            ignore_white: config.ignore_white,
        }
    }

    /// Samples every `quality`-th pixel. 1 uses every pixel.
    pub fn with_quality(mut self, quality: usize) -> Self {
        self.quality = quality.max(1);
        self
    }

    /// Ignores pixels whose alpha is below `min_alpha`.
    pub fn with_min_alpha(mut self, min_alpha: u8) -> Self {
        self.min_alpha = min_alpha;
        self
    }

    /// Ignores near-white pixels when `true`.
    pub fn with_ignore_white(mut self, ignore_white: bool) -> Self {
        self.ignore_white = ignore_white;
        self
    }

    #[inline]
    fn accepts(&self, rgb: Rgb8, alpha: u8) -> bool {
        if alpha < self.min_alpha {
            return false;
        }
        !(self.ignore_white && rgb.r > WHITE_CUTOFF && rgb.g > WHITE_CUTOFF && rgb.b > WHITE_CUTOFF)
    }

    /// Builds the 5-bit histogram of sampled pixels.
    ///
    /// Chunks hold a whole number of sampling strides, so the parallel
    /// result samples exactly the pixels a sequential pass would.
    fn histogram(&self, pixels: &PixelBuffer) -> Vec<u32> {
        let channels = pixels.channels() as usize;
        let step = self.quality;
        let chunk_bytes = CHUNK_PIXELS.saturating_mul(step).saturating_mul(channels);

        pixels
            .data()
            .par_chunks(chunk_bytes)
            .map(|chunk| {
                let mut hist = vec![0u32; HIST_SIZE];
                for px in chunk.chunks_exact(channels).step_by(step) {
                    let rgb = Rgb8::new(px[0], px[1], px[2]);
                    let alpha = if channels == 4 { px[3] } else { 255 };
                    if self.accepts(rgb, alpha) {
                        let idx = hist_index(
                            (rgb.r >> RSHIFT) as usize,
                            (rgb.g >> RSHIFT) as usize,
                            (rgb.b >> RSHIFT) as usize,
                        );
                        hist[idx] += 1;
                    }
                }
                hist
            })
            .reduce(
                || vec![0u32; HIST_SIZE],
                |mut acc, part| {
                    acc.iter_mut().zip(part).for_each(|(a, p)| *a += p);
                    acc
                },
            )
    }
}

impl Quantizer for MedianCut {
    fn quantize(&self, pixels: &PixelBuffer, max_colors: usize) -> Result<Quantized> {
        if max_colors == 0 {
            return Err(Error::invalid_parameter("max_colors", max_colors));
        }

        let hist = self.histogram(pixels);
        let Some(root) = VBox::fit(&hist, [0, SIDE - 1, 0, SIDE - 1, 0, SIDE - 1]) else {
            return Err(Error::quantization(format!(
                "no usable pixels in {}x{} image",
                pixels.width(),
                pixels.height()
            )));
        };
        debug!(
            count = root.count,
            max_colors,
            quality = self.quality,
            "median cut: histogram built"
        );

        let mut boxes = vec![root];
        let by_population = (FRACT_BY_POPULATION * max_colors as f64).ceil() as usize;
        split_boxes(&mut boxes, by_population, &hist, |b| b.count as u64);
        split_boxes(&mut boxes, max_colors, &hist, |b| b.count as u64 * b.volume() as u64);

        // Stable: ties keep split order.
        boxes.sort_by_key(|b| std::cmp::Reverse(b.count as u64 * b.volume() as u64));

        let palette: Vec<Rgb8> = boxes.iter().map(|b| b.average(&hist)).collect();
        trace!(?palette, "median cut: palette");

        Ok(Quantized::new(palette[0], palette))
    }
}

/// Repeatedly splits the box with the largest `key` until `target` boxes
/// exist or nothing can be split.
fn split_boxes<K>(boxes: &mut Vec<VBox>, target: usize, hist: &[u32], key: K)
where
    K: Fn(&VBox) -> u64,
{
    for _ in 0..MAX_ITERATIONS {
        if boxes.len() >= target {
            return;
        }
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_splittable())
            .max_by_key(|(i, b)| (key(b), std::cmp::Reverse(*i)))
            .map(|(i, _)| i);
        let Some(idx) = candidate else {
            return;
        };

        let vbox = boxes.remove(idx);
        match vbox.split(hist) {
            Some((a, b)) => {
                boxes.push(a);
                boxes.push(b);
            }
            None => {
                boxes.insert(idx, vbox);
                return;
            }
        }
    }
}

/// Axis-aligned box over the histogram grid, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VBox {
    lo: [usize; 3],
    hi: [usize; 3],
    count: u32,
}

impl VBox {
    /// Shrinks `[r1, r2, g1, g2, b1, b2]` to the populated cells inside it.
    /// Returns `None` if the region is empty.
    fn fit(hist: &[u32], bounds: [usize; 6]) -> Option<Self> {
        let mut lo = [SIDE; 3];
        let mut hi = [0usize; 3];
        let mut count = 0u32;
        for r in bounds[0]..=bounds[1] {
            for g in bounds[2]..=bounds[3] {
                for b in bounds[4]..=bounds[5] {
                    let n = hist[hist_index(r, g, b)];
                    if n == 0 {
                        continue;
                    }
                    count += n;
                    for (axis, v) in [r, g, b].into_iter().enumerate() {
                        lo[axis] = lo[axis].min(v);
                        hi[axis] = hi[axis].max(v);
                    }
                }
            }
        }
        (count > 0).then_some(Self { lo, hi, count })
    }

    #[inline]
    fn width(&self, axis: usize) -> usize {
        self.hi[axis] - self.lo[axis] + 1
    }

    #[inline]
    fn volume(&self) -> usize {
        self.width(0) * self.width(1) * self.width(2)
    }

    #[inline]
    fn is_splittable(&self) -> bool {
        self.count > 1 && self.volume() > 1
    }

    fn bounds(&self) -> [usize; 6] {
        [self.lo[0], self.hi[0], self.lo[1], self.hi[1], self.lo[2], self.hi[2]]
    }

    fn cells(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        (self.lo[0]..=self.hi[0]).flat_map(move |r| {
            (self.lo[1]..=self.hi[1])
                .flat_map(move |g| (self.lo[2]..=self.hi[2]).map(move |b| [r, g, b]))
        })
    }

    /// Population-weighted mean color, in 8-bit space.
    fn average(&self, hist: &[u32]) -> Rgb8 {
        let mult = (1u32 << RSHIFT) as f64;
        let mut sum = [0f64; 3];
        let mut total = 0u64;
        for cell in self.cells() {
            let n = hist[hist_index(cell[0], cell[1], cell[2])] as u64;
            if n == 0 {
                continue;
            }
            total += n;
            for axis in 0..3 {
                sum[axis] += n as f64 * (cell[axis] as f64 + 0.5) * mult;
            }
        }
        if total == 0 {
            let mid = |axis: usize| (mult * (self.lo[axis] + self.hi[axis] + 1) as f64 / 2.0) as u8;
            return Rgb8::new(mid(0), mid(1), mid(2));
        }
        let avg = |axis: usize| (sum[axis] / total as f64).min(255.0) as u8;
        Rgb8::new(avg(0), avg(1), avg(2))
    }

    /// Splits at the population median of the widest axis.
    ///
    /// Both halves are refit, so they are non-empty and strictly smaller.
    fn split(&self, hist: &[u32]) -> Option<(VBox, VBox)> {
        if !self.is_splittable() {
            return None;
        }

        let axis = if self.width(0) >= self.width(1) && self.width(0) >= self.width(2) {
            0
        } else if self.width(1) >= self.width(2) {
            1
        } else {
            2
        };
        let n = self.width(axis);
        if n < 2 {
            return None;
        }

        let mut slices = vec![0u64; n];
        for cell in self.cells() {
            slices[cell[axis] - self.lo[axis]] += hist[hist_index(cell[0], cell[1], cell[2])] as u64;
        }
        let partial: Vec<u64> = slices
            .iter()
            .scan(0u64, |acc, &s| {
                *acc += s;
                Some(*acc)
            })
            .collect();
        let total = partial[n - 1];

        let k = partial.iter().position(|&p| 2 * p > total)?;
        let left = k as i64;
        let right = (n - 1 - k) as i64;
        let mut d = if left <= right {
            (n as i64 - 2).min((2 * k as i64 + right) / 2)
        } else {
            0i64.max((2 * (k as i64 - 1) - left) / 2)
        };
        while d < 0 || partial[d as usize] == 0 {
            d += 1;
        }
        let mut cut = d as usize;
        while total == partial[cut] && cut > 0 && partial[cut - 1] != 0 {
            cut -= 1;
        }
        if cut >= n - 1 {
            return None;
        }

        let mut first = self.bounds();
        let mut second = self.bounds();
        first[2 * axis + 1] = self.lo[axis] + cut;
        second[2 * axis] = self.lo[axis] + cut + 1;

        let a = VBox::fit(hist, first)?;
        let b = VBox::fit(hist, second)?;
        trace!(axis, cut, left = a.count, right = b.count, "median cut: split");
        Some((a, b))
    }
}
