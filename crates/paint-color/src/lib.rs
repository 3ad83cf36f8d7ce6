//! # paint-color
//!
//! Colorimetric transforms and distances used to compare photo colors with
//! paint chips.
//!
//! # Pipeline
//!
//! ```text
//! Rgb8 --/255--> sRGB [0,1] --EOTF--> linear --x100, M--> XYZ --D65--> Lab
//! ```
//!
//! - [`srgb`] - piecewise sRGB transfer function (IEC 61966-2-1)
//! - [`lab`] - XYZ and CIE L\*a\*b\* conversion with the D65 reference white
//! - [`distance`] - RGB Euclidean distance, CIE76 ΔE and match percentage
//!
//! All functions are pure and total over 8-bit input. Math runs in `f64`
//! so percentages computed here agree with other double
//! precision implementations of the same formulas.
//!
//! # Usage
//!
//! ```rust
//! use paint_color::{delta_e76, hex_to_lab, match_percentage};
//!
//! let a = hex_to_lab("#FF0000").unwrap();
//! let b = hex_to_lab("#ff0000").unwrap();
//! assert_eq!(delta_e76(a, b), 0.0);
//! assert_eq!(match_percentage(delta_e76(a, b)), 100);
//! ```
//!
//! # Dependencies
//!
//! - [`paint-core`] - color value types and errors
//! - [`glam`] - 3x3 matrix math for RGB/XYZ
//!
//! # Used By
//!
//! - `paint-extract` - duplicate screening in RGB
//! - `paint-match` - perceptual ranking in Lab

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod distance;
pub mod lab;
pub mod srgb;

pub use distance::{delta_e76, match_percentage, rgb_distance, MATCH_SLOPE};
pub use lab::{hex_to_lab, lab_to_rgb, lab_to_xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab, Lab, D65_WHITE};
