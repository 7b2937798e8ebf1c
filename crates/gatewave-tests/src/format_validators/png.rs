//! PNG file format validator.

use super::FormatError;

/// Information extracted from a PNG file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bit depth (1, 2, 4, 8, or 16).
    pub bit_depth: u8,
    /// Color type (0=grayscale, 2=RGB, 3=indexed, 4=grayscale+alpha, 6=RGBA).
    pub color_type: u8,
    /// Interlace method (0 = none, 1 = Adam7).
    pub interlace_method: u8,
}

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Validate the PNG signature and IHDR chunk.
pub fn validate_png(data: &[u8]) -> Result<PngInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 8 + 8 + 13; // signature + chunk header + IHDR data

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "PNG",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                MIN_HEADER_SIZE
            ),
        ));
    }
    if data[0..8] != PNG_SIGNATURE {
        return Err(FormatError::at_offset("PNG", "Invalid PNG signature", 0));
    }

    let chunk_length = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
    if &data[12..16] != b"IHDR" {
        return Err(FormatError::at_offset("PNG", "First chunk must be IHDR", 12));
    }
    if chunk_length != 13 {
        return Err(FormatError::at_offset(
            "PNG",
            format!("IHDR chunk must be 13 bytes, got {}", chunk_length),
            8,
        ));
    }

    let ihdr = &data[16..29];
    let width = u32::from_be_bytes([ihdr[0], ihdr[1], ihdr[2], ihdr[3]]);
    let height = u32::from_be_bytes([ihdr[4], ihdr[5], ihdr[6], ihdr[7]]);
    if width == 0 || height == 0 {
        return Err(FormatError::new(
            "PNG",
            format!("Invalid dimensions: {}x{}", width, height),
        ));
    }
    if !data.ends_with(b"IEND\xAE\x42\x60\x82") {
        return Err(FormatError::new("PNG", "Missing IEND chunk"));
    }

    Ok(PngInfo {
        width,
        height,
        bit_depth: ihdr[8],
        color_type: ihdr[9],
        interlace_method: ihdr[12],
    })
}

/// Decodes an 8-bit RGBA PNG into `(width, height, pixels)`.
pub fn decode_rgba(data: &[u8]) -> Result<(u32, u32, Vec<u8>), FormatError> {
    let decoder = ::png::Decoder::new(data);
    let mut reader = decoder
        .read_info()
        .map_err(|e| FormatError::new("PNG", e.to_string()))?;
    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut pixels)
        .map_err(|e| FormatError::new("PNG", e.to_string()))?;
    if frame.color_type != ::png::ColorType::Rgba || frame.bit_depth != ::png::BitDepth::Eight {
        return Err(FormatError::new(
            "PNG",
            format!("expected 8-bit RGBA, got {:?} {:?}", frame.color_type, frame.bit_depth),
        ));
    }
    pixels.truncate(frame.buffer_size());
    Ok((frame.width, frame.height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = ::png::Encoder::new(&mut out, width, height);
            encoder.set_color(::png::ColorType::Rgba);
            encoder.set_depth(::png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&vec![255; (width * height * 4) as usize])
                .unwrap();
        }
        out
    }

    #[test]
    fn test_validate_and_decode() {
        let data = encode(4, 3);
        let info = validate_png(&data).unwrap();
        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(info.color_type, 6);
        assert_eq!(info.bit_depth, 8);

        let (w, h, pixels) = decode_rgba(&data).unwrap();
        assert_eq!((w, h), (4, 3));
        assert_eq!(pixels.len(), 48);
    }

    #[test]
    fn test_rejects_bad_signature() {
        let mut data = encode(2, 2);
        data[1] = b'X';
        let err = validate_png(&data).unwrap_err();
        assert_eq!(err.offset, Some(0));
    }

    #[test]
    fn test_rejects_truncated() {
        let data = encode(2, 2);
        assert!(validate_png(&data[..20]).is_err());
        assert!(validate_png(&data[..data.len() - 4]).is_err());
    }
}
