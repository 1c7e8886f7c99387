//! NDS banner icon decoder
//!
//! The banner block of a `.nds` file carries a 32x32 indexed-color
//! icon: 16 tiles of 8x8 pixels at 4 bits per pixel, followed by a
//! 16-entry RGB555 palette. The block's offset is stored as a
//! little-endian u32 at byte `0x68` of the ROM header.
//!
//! Decoding is best-effort: a missing banner, a zero offset, or a
//! short read all yield `None`, never an error. The icon is only a
//! decoration for detail views.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use image::RgbaImage;

/// Icon edge length in pixels.
pub const ICON_SIZE: u32 = 32;

/// Header offset of the little-endian banner block offset.
const BANNER_POINTER_OFFSET: u64 = 0x68;

/// Offset of the tile pixel data within the banner block.
const PIXEL_DATA_OFFSET: u64 = 0x20;
/// 16 tiles x 8x8 pixels x 4bpp.
const PIXEL_DATA_LEN: usize = 512;

/// Offset of the palette within the banner block.
const PALETTE_OFFSET: u64 = 0x220;
/// 16 entries x 2 bytes (RGB555).
const PALETTE_LEN: usize = 32;

const TILE_DIM: usize = 8;
const TILES_PER_ROW: usize = 4;

/// A decoded 32x32 RGBA banner icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerIcon {
    rgba: Vec<u8>,
}

impl BannerIcon {
    /// Raw RGBA8 pixels, row-major, `32 * 32 * 4` bytes.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Convert into an [`image::RgbaImage`] for scaling or export.
    pub fn into_image(self) -> RgbaImage {
        RgbaImage::from_raw(ICON_SIZE, ICON_SIZE, self.rgba)
            .expect("banner icon buffer is always 32x32x4")
    }
}

/// Read and decode the banner icon of the ROM at `path`.
///
/// Returns `None` if the file has no banner (zero offset) or if any
/// read falls short.
pub fn read_icon(path: &Path) -> Option<BannerIcon> {
    let mut file = File::open(path).ok()?;

    let mut offset_bytes = [0u8; 4];
    file.seek(SeekFrom::Start(BANNER_POINTER_OFFSET)).ok()?;
    file.read_exact(&mut offset_bytes).ok()?;
    let banner_offset = u32::from_le_bytes(offset_bytes) as u64;
    if banner_offset == 0 {
        return None;
    }

    let mut pixels = [0u8; PIXEL_DATA_LEN];
    file.seek(SeekFrom::Start(banner_offset + PIXEL_DATA_OFFSET))
        .ok()?;
    file.read_exact(&mut pixels).ok()?;

    let mut palette = [0u8; PALETTE_LEN];
    file.seek(SeekFrom::Start(banner_offset + PALETTE_OFFSET))
        .ok()?;
    file.read_exact(&mut palette).ok()?;

    Some(decode_icon(&pixels, &palette))
}

/// Decode tile-indexed 4bpp pixel data against an RGB555 palette.
///
/// Palette index 0 is fully transparent regardless of its stored
/// color; indices 1-15 are fully opaque.
pub fn decode_icon(pixels: &[u8; PIXEL_DATA_LEN], palette_bytes: &[u8; PALETTE_LEN]) -> BannerIcon {
    let mut palette = [[0u8; 4]; 16];
    for (i, entry) in palette.iter_mut().enumerate() {
        let raw = u16::from_le_bytes([palette_bytes[i * 2], palette_bytes[i * 2 + 1]]);
        let r = (raw & 0x1F) as u8;
        let g = ((raw >> 5) & 0x1F) as u8;
        let b = ((raw >> 10) & 0x1F) as u8;
        *entry = [
            scale_5bit(r),
            scale_5bit(g),
            scale_5bit(b),
            if i == 0 { 0 } else { 255 },
        ];
    }

    let size = ICON_SIZE as usize;
    let mut rgba = vec![0u8; size * size * 4];
    for (byte_index, &byte) in pixels.iter().enumerate() {
        // Two pixels per byte: low nibble first, then high nibble.
        for (half, index) in [(0, byte & 0x0F), (1, byte >> 4)] {
            let pixel_index = byte_index * 2 + half;
            let tile = pixel_index / (TILE_DIM * TILE_DIM);
            let within = pixel_index % (TILE_DIM * TILE_DIM);
            let x = (tile % TILES_PER_ROW) * TILE_DIM + within % TILE_DIM;
            let y = (tile / TILES_PER_ROW) * TILE_DIM + within / TILE_DIM;
            let out = (y * size + x) * 4;
            rgba[out..out + 4].copy_from_slice(&palette[index as usize]);
        }
    }

    BannerIcon { rgba }
}

/// Rescale a 5-bit color channel to 8 bits.
fn scale_5bit(c: u8) -> u8 {
    (c as u16 * 255 / 31) as u8
}
