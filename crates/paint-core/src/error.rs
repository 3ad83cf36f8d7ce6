//! Error types for the color matching pipeline.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure mode of extraction and matching:
//! - Invalid input (zero-sized buffers, malformed hex for an extracted color)
//! - Quantization failures reported by the palette collaborator
//! - Malformed catalog entries (recovered inside the matcher, surfaced only
//!   through validation reports and logs)
//! - I/O and parse errors from catalog/config loaders
//!
//! Callers that need to tell "could not read your photo" apart from
//! "no results" should branch on [`Error::kind`].
//!
//! # Usage
//!
//! ```rust
//! use paint_core::{Error, ErrorKind};
//!
//! let err = Error::invalid_dimensions(0, 480, "image has no pixels");
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! assert!(err.to_string().contains("0x480"));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// Stable across variant additions; use this rather than matching on
/// variants when deciding how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Upstream contract violation. Fatal for the request.
    InvalidInput,
    /// The quantizer could not produce a dominant color or palette.
    QuantizationFailure,
    /// A single catalog entry could not be parsed.
    MalformedCatalogEntry,
    /// File system error while loading catalogs or configs.
    Io,
    /// Structured data (YAML/JSON) could not be parsed.
    Parse,
}

/// Errors that can occur while extracting or matching colors.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel buffer has zero width or height, or would overflow.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Pixel data length does not match `width * height * channels`.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        got: usize,
    },

    /// A hex string is not of the form `#RRGGBB`.
    #[error("invalid color format: {value:?}")]
    InvalidColorFormat {
        /// The offending input
        value: String,
    },

    /// A configuration value is out of range.
    #[error("invalid parameter: {parameter} = {value}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Rejected value
        value: String,
    },

    /// The quantization collaborator failed.
    ///
    /// Terminal for the image: no partial palette is synthesized.
    #[error("quantization failed: {reason}")]
    QuantizationFailure {
        /// Failure description from the quantizer
        reason: String,
    },

    /// Catalog entry with an unparseable hex value.
    #[error("malformed catalog entry {vendor}/{code}: {hex:?}")]
    MalformedCatalogEntry {
        /// Vendor the entry belongs to
        vendor: String,
        /// Entry code
        code: String,
        /// Raw hex value
        hex: String,
    },

    /// I/O error while reading catalog or config files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured data could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidColorFormat`] error.
    #[inline]
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
        }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Creates an [`Error::QuantizationFailure`] error.
    #[inline]
    pub fn quantization(reason: impl Into<String>) -> Self {
        Self::QuantizationFailure {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::MalformedCatalogEntry`] error.
    #[inline]
    pub fn malformed_entry(
        vendor: impl Into<String>,
        code: impl Into<String>,
        hex: impl Into<String>,
    ) -> Self {
        Self::MalformedCatalogEntry {
            vendor: vendor.into(),
            code: code.into(),
            hex: hex.into(),
        }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns the coarse [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensions { .. }
            | Self::BufferSizeMismatch { .. }
            | Self::InvalidColorFormat { .. }
            | Self::InvalidParameter { .. } => ErrorKind::InvalidInput,
            Self::QuantizationFailure { .. } => ErrorKind::QuantizationFailure,
            Self::MalformedCatalogEntry { .. } => ErrorKind::MalformedCatalogEntry,
            Self::Io(_) => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }

    /// Returns `true` if the photo itself could not be turned into colors.
    #[inline]
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidInput | ErrorKind::QuantizationFailure
        )
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput | ErrorKind::QuantizationFailure => {
                "Could not read colors from your photo. Please try a different image."
            }
            ErrorKind::MalformedCatalogEntry => "A paint catalog entry is invalid.",
            ErrorKind::Io | ErrorKind::Parse => "The paint catalog could not be loaded.",
        }
    }
}
