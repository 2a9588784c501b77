use anyhow::{Context, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// Fixed 8-byte PNG signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// An 8-bit RGBA color. Channel range is enforced by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// IHDR fields in chunk order. Serialized big-endian into the 13-byte
/// header payload.
struct Ihdr {
    width: u32,
    height: u32,
    bit_depth: u8,
    color_type: u8,
    compression_method: u8,
    filter_method: u8,
    interlace_method: u8,
}

impl Ihdr {
    /// Truecolor with alpha, 8 bits per channel, no interlacing.
    fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: 8,
            color_type: 6,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }

    fn payload(&self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = self.bit_depth;
        out[9] = self.color_type;
        out[10] = self.compression_method;
        out[11] = self.filter_method;
        out[12] = self.interlace_method;
        out
    }
}

/// A single PNG chunk: 4-byte ASCII tag plus payload. The serialized form
/// carries a big-endian length prefix and a trailing CRC-32 computed over
/// tag and payload (the length field is excluded).
struct Chunk<'a> {
    tag: [u8; 4],
    payload: &'a [u8],
}

impl<'a> Chunk<'a> {
    fn new(tag: [u8; 4], payload: &'a [u8]) -> Self {
        Self { tag, payload }
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(self.payload);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.tag);
        hasher.update(self.payload);
        out.extend_from_slice(&hasher.finalize().to_be_bytes());
    }
}

/// Encode a solid-color RGBA image as a complete PNG byte stream.
///
/// The output is deterministic for a given input and uses exactly three
/// chunks (IHDR, IDAT, IEND) with zlib-compressed scanlines, each prefixed
/// with filter type 0.
pub fn encode(width: u32, height: u32, color: Rgba) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        anyhow::bail!("image dimensions must be positive, got {width}x{height}");
    }

    let ihdr = Ihdr::rgba8(width, height);

    // One filter byte per row followed by `width` RGBA pixels.
    let row_len = 1 + 4 * width as usize;
    let mut row = Vec::with_capacity(row_len);
    row.push(0u8);
    for _ in 0..width {
        row.extend_from_slice(&color.channels());
    }

    let mut raw = Vec::with_capacity(row_len * height as usize);
    for _ in 0..height {
        raw.extend_from_slice(&row);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&raw)
        .context("Failed to compress scanline data")?;
    let idat = encoder.finish().context("Failed to finish zlib stream")?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 12 + 13 + 12 + idat.len() + 12);
    out.extend_from_slice(&PNG_SIGNATURE);
    Chunk::new(*b"IHDR", &ihdr.payload()).write_to(&mut out);
    Chunk::new(*b"IDAT", &idat).write_to(&mut out);
    Chunk::new(*b"IEND", &[]).write_to(&mut out);

    Ok(out)
}
