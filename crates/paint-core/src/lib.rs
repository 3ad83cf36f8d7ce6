//! # paint-core
//!
//! Core types for matching wall photos against paint catalogs.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`Rgb8`] - 8-bit sRGB triple, the unit of pixel math
//! - [`HexColor`] - `#rrggbb` form used everywhere outside pixel math
//! - [`ExtractedColor`] - representative color with a percentage weight
//! - [`PixelBuffer`] - decoded image pixels handed to the extractor
//! - [`Error`], [`ErrorKind`] - failure taxonomy for the whole pipeline
//!
//! ## Crate Structure
//!
//! ```text
//! paint-core (this crate)
//!    ^
//!    |
//!    +-- paint-color (sRGB -> Lab, distances)
//!    +-- paint-extract (dominant color reduction)
//!    +-- paint-match (catalog ranking, result store)
//!    +-- paint-cli (decoding, catalog files, output)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use paint_core::{HexColor, Rgb8};
//!
//! let hex: HexColor = "#FF6347".parse().unwrap();
//! assert_eq!(hex.rgb(), Rgb8::new(255, 99, 71));
//! assert_eq!(hex.to_string(), "#ff6347");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod color;
pub mod error;

pub use buffer::PixelBuffer;
pub use color::{ExtractedColor, HexColor, Rgb8};
pub use error::{Error, ErrorKind, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use paint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::color::{ExtractedColor, HexColor, Rgb8};
    pub use crate::error::{Error, ErrorKind, Result};
}
