//! CIE XYZ and L\*a\*b\* conversion.
//!
//! XYZ is scaled so that the reference white has `Y = 100`. The reference
//! white is D65 (`X = 95.047, Y = 100.0, Z = 108.883`), the same white the
//! sRGB primaries are defined against, so no chromatic adaptation is needed.
//!
//! The RGB -> XYZ matrix is the IEC 61966-2-1 sRGB matrix rounded to four
//! decimals. Those exact coefficients are part of the output contract:
//! paint match percentages are derived from distances computed with them.
//!
//! # Example
//!
//! ```rust
//! use paint_core::Rgb8;
//! use paint_color::{lab_to_rgb, rgb_to_lab};
//!
//! let lab = rgb_to_lab(Rgb8::WHITE);
//! assert!((lab.l - 100.0).abs() < 0.01);
//! assert_eq!(lab_to_rgb(lab), Rgb8::WHITE);
//! ```

use crate::srgb;
use glam::{DMat3, DVec3};
use paint_core::{HexColor, Result, Rgb8};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// D65 reference white in XYZ, `Y = 100`.
pub const D65_WHITE: DVec3 = DVec3::new(95.047, 100.0, 108.883);

/// Linear sRGB -> XYZ coefficients, row-major.
const RGB_TO_XYZ_ROWS: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

const EPSILON: f64 = 0.008856;
const KAPPA_SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

static RGB_TO_XYZ: LazyLock<DMat3> =
    LazyLock::new(|| DMat3::from_cols_array_2d(&RGB_TO_XYZ_ROWS).transpose());

static XYZ_TO_RGB: LazyLock<DMat3> = LazyLock::new(|| RGB_TO_XYZ.inverse());

/// A color in CIE L\*a\*b\*.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (white)
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

impl Lab {
    /// Creates a Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    fn to_vec(self) -> DVec3 {
        DVec3::new(self.l, self.a, self.b)
    }
}

/// Converts an 8-bit sRGB color to XYZ (`Y` in 0..=100).
pub fn rgb_to_xyz(rgb: Rgb8) -> DVec3 {
    let linear = DVec3::new(
        srgb::decode_u8(rgb.r),
        srgb::decode_u8(rgb.g),
        srgb::decode_u8(rgb.b),
    ) * 100.0;
    *RGB_TO_XYZ * linear
}

/// Converts XYZ (`Y` in 0..=100) to L\*a\*b\* against [`D65_WHITE`].
pub fn xyz_to_lab(xyz: DVec3) -> Lab {
    let n = xyz / D65_WHITE;
    let (fx, fy, fz) = (f(n.x), f(n.y), f(n.z));
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Inverse of [`xyz_to_lab`].
pub fn lab_to_xyz(lab: Lab) -> DVec3 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    DVec3::new(f_inv(fx), f_inv(fy), f_inv(fz)) * D65_WHITE
}

/// Converts an 8-bit sRGB color to L\*a\*b\*.
#[inline]
pub fn rgb_to_lab(rgb: Rgb8) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Converts L\*a\*b\* back to 8-bit sRGB, clamping out-of-gamut values.
pub fn lab_to_rgb(lab: Lab) -> Rgb8 {
    let linear = *XYZ_TO_RGB * lab_to_xyz(lab) / 100.0;
    Rgb8::new(
        srgb::encode_u8(linear.x),
        srgb::encode_u8(linear.y),
        srgb::encode_u8(linear.z),
    )
}

/// Parses `#RRGGBB` and converts it to L\*a\*b\*.
///
/// # Errors
///
/// Returns [`paint_core::Error::InvalidColorFormat`] for malformed input.
pub fn hex_to_lab(hex: &str) -> Result<Lab> {
    Ok(rgb_to_lab(HexColor::parse(hex)?.rgb()))
}

/// Euclidean distance between two Lab values.
#[inline]
pub(crate) fn lab_distance(a: Lab, b: Lab) -> f64 {
    a.to_vec().distance(b.to_vec())
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > EPSILON {
        cube
    } else {
        (t - OFFSET) / KAPPA_SLOPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_and_white() {
        let black = rgb_to_lab(Rgb8::BLACK);
        assert_abs_diff_eq!(black.l, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(black.a, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(black.b, 0.0, epsilon = 1e-9);

        let white = rgb_to_lab(Rgb8::WHITE);
        assert_abs_diff_eq!(white.l, 100.0, epsilon = 0.01);
        assert_abs_diff_eq!(white.a, 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(white.b, 0.0, epsilon = 0.05);
    }

    #[test]
    fn test_known_red() {
        // Reference values for pure sRGB red under D65.
        let red = rgb_to_lab(Rgb8::new(255, 0, 0));
        assert_abs_diff_eq!(red.l, 53.24, epsilon = 0.05);
        assert_abs_diff_eq!(red.a, 80.09, epsilon = 0.1);
        assert_abs_diff_eq!(red.b, 67.20, epsilon = 0.1);
    }

    #[test]
    fn test_grey_is_neutral() {
        for v in [18u8, 64, 128, 200] {
            let lab = rgb_to_lab(Rgb8::new(v, v, v));
            assert!(lab.a.abs() < 0.05 && lab.b.abs() < 0.05, "grey {} -> {:?}", v, lab);
        }
    }

    #[test]
    fn test_lightness_monotonic_on_greys() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let l = rgb_to_lab(Rgb8::new(v, v, v)).l;
            assert!(l > prev, "L not increasing at {}", v);
            prev = l;
        }
    }

    #[test]
    fn test_rgb_lab_roundtrip() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = Rgb8::new(r, g, b);
                    let back = lab_to_rgb(rgb_to_lab(rgb));
                    assert!(
                        back.r.abs_diff(r) <= 1 && back.g.abs_diff(g) <= 1 && back.b.abs_diff(b) <= 1,
                        "{} -> {}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hex_to_lab_matches_rgb() {
        let lab = hex_to_lab("#FF6347").unwrap();
        assert_eq!(lab, rgb_to_lab(Rgb8::new(255, 99, 71)));
        assert!(hex_to_lab("tomato").is_err());
    }
}
