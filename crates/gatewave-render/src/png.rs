//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same figure always encodes to
//! byte-identical output.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::RenderResult;
use crate::raster::PixelBuffer;

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files, slower encode.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Larger files, faster encode.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA pixel buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> RenderResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamp chunks.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba8())?;

    Ok(())
}

/// Write an RGBA pixel buffer to a PNG file.
pub fn write_rgba(buffer: &PixelBuffer, path: &Path, config: &PngConfig) -> RenderResult<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(buffer, writer, config)
}

/// Compute the BLAKE3 hash of exported bytes.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a Vec<u8> and return the hash.
pub fn write_rgba_to_vec_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> RenderResult<(Vec<u8>, String)> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}
