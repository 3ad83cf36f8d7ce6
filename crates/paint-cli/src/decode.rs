//! Photo decoding into [`PixelBuffer`].
//!
//! PNG and JPEG are detected by signature, not extension. Everything is
//! normalized to 8-bit RGB or RGBA; grayscale is expanded and 16-bit
//! samples keep their high byte.

use anyhow::{bail, Context, Result};
use paint_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Supported photo containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Png,
    Jpeg,
}

impl PhotoFormat {
    /// Identifies a container from its first bytes.
    pub fn sniff(header: &[u8]) -> Option<Self> {
        if header.starts_with(&PNG_SIGNATURE) {
            Some(Self::Png)
        } else if header.starts_with(&JPEG_SIGNATURE) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }
}

/// Decodes a PNG or JPEG file.
pub fn load_photo(path: &Path) -> Result<PixelBuffer> {
    let mut header = [0u8; 8];
    let n = File::open(path)
        .and_then(|mut f| f.read(&mut header))
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let format = match PhotoFormat::sniff(&header[..n]) {
        Some(format) => format,
        None => bail!("Unsupported image format: {}", path.display()),
    };

    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let buffer = match format {
        PhotoFormat::Png => decode_png(BufReader::new(file)),
        PhotoFormat::Jpeg => decode_jpeg(BufReader::new(file)),
    }
    .with_context(|| format!("Failed to decode: {}", path.display()))?;

    debug!(
        path = %path.display(),
        ?format,
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        "decoded photo"
    );
    Ok(buffer)
}

fn decode_png<R: std::io::BufRead + std::io::Seek>(reader: R) -> Result<PixelBuffer> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let buf_size = reader
        .output_buffer_size()
        .context("cannot determine output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let buffer = match info.color_type {
        png::ColorType::Rgb => PixelBuffer::from_rgb(info.width, info.height, data.to_vec())?,
        png::ColorType::Rgba => PixelBuffer::from_rgba(info.width, info.height, data.to_vec())?,
        png::ColorType::Grayscale => {
            let rgb: Vec<u8> = data.iter().flat_map(|&g| [g, g, g]).collect();
            PixelBuffer::from_rgb(info.width, info.height, rgb)?
        }
        png::ColorType::GrayscaleAlpha => {
            let rgba: Vec<u8> = data
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect();
            PixelBuffer::from_rgba(info.width, info.height, rgba)?
        }
        other => bail!("unsupported PNG color type {:?}", other),
    };
    Ok(buffer)
}

fn decode_jpeg<R: std::io::Read>(reader: R) -> Result<PixelBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder.decode()?;
    let info = decoder.info().context("missing JPEG info")?;
    let (width, height) = (u32::from(info.width), u32::from(info.height));

    let rgb = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l16| [l16[0], l16[0], l16[0]])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let k = 1.0 - f32::from(cmyk[3]) / 255.0;
                let ch = |v: u8| ((1.0 - f32::from(v) / 255.0) * k * 255.0).round() as u8;
                [ch(cmyk[0]), ch(cmyk[1]), ch(cmyk[2])]
            })
            .collect(),
    };
    Ok(PixelBuffer::from_rgb(width, height, rgb)?)
}
