//! Uncompressed true-color TGA decoding

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ImageError;

/// Size of the fixed TGA header preceding the optional image ID field.
pub const TGA_HEADER_LEN: usize = 18;

/// A decoded TGA image: tightly packed RGB, 3 bytes per pixel, rows in the
/// bottom-to-top order the file stores them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgaImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// RGB pixel data, `width * height * 3` bytes
    pub pixels: Vec<u8>,
}

impl TgaImage {
    /// Expected length of [`pixels`](Self::pixels) in bytes.
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// Decode an uncompressed true-color TGA file held in memory.
///
/// Accepts image type 2 with no color map at 24 or 32 bits per pixel and
/// rejects everything else before any pixel allocation. The file's BGR(A)
/// byte order becomes RGB in the output; 32-bpp input is down-converted by
/// discarding the alpha byte of each pixel.
pub fn decode(bytes: &[u8]) -> Result<TgaImage, ImageError> {
    if bytes.len() < TGA_HEADER_LEN {
        return Err(ImageError::Truncated);
    }

    let id_len = bytes[0] as usize;
    let color_map_type = bytes[1];
    let image_type = bytes[2];

    if image_type != 2 {
        return Err(ImageError::UnsupportedImageType(image_type));
    }
    if color_map_type != 0 {
        return Err(ImageError::ColorMapped(color_map_type));
    }

    let width = u16::from_le_bytes([bytes[12], bytes[13]]) as u32;
    let height = u16::from_le_bytes([bytes[14], bytes[15]]) as u32;

    let bpp = bytes[16];
    if bpp != 24 && bpp != 32 {
        return Err(ImageError::UnsupportedBitDepth(bpp));
    }
    let components = (bpp / 8) as usize;

    // Pixel data follows the fixed header and the optional image ID field.
    let data_start = TGA_HEADER_LEN + id_len;
    let data_len = width as usize * height as usize * components;
    let data = bytes
        .get(data_start..data_start + data_len)
        .ok_or(ImageError::Truncated)?;

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in data.chunks_exact(components) {
        // BGR(A) -> RGB; a fourth (alpha) byte is dropped.
        pixels.push(pixel[2]);
        pixels.push(pixel[1]);
        pixels.push(pixel[0]);
    }

    Ok(TgaImage {
        width,
        height,
        pixels,
    })
}

/// Resolves texture names against a fixed asset root directory.
///
/// Samples name their textures relative to the asset directory rather than
/// the process working directory, so the root is configured once at startup.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Create a resolver rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load and decode a TGA file by name, resolved under the asset root.
    pub fn load_tga(&self, name: &str) -> Result<TgaImage, ImageError> {
        let path = self.root.join(name);
        log::debug!("loading TGA {}", path.display());
        let bytes = fs::read(&path)?;
        decode(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an in-memory TGA file with the given pixel bytes already in the
    /// file's BGR(A) order.
    fn make_tga(width: u16, height: u16, bpp: u8, id: &[u8], data: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; TGA_HEADER_LEN];
        bytes[0] = id.len() as u8;
        bytes[1] = 0; // no color map
        bytes[2] = 2; // uncompressed true-color
        bytes[12..14].copy_from_slice(&width.to_le_bytes());
        bytes[14..16].copy_from_slice(&height.to_le_bytes());
        bytes[16] = bpp;
        bytes[17] = 0; // descriptor
        bytes.extend_from_slice(id);
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn test_decode_24bpp_swaps_blue_and_red() {
        // One pixel stored as BGR = (10, 20, 30); decoded RGB must be (30, 20, 10).
        let bytes = make_tga(1, 1, 24, &[], &[10, 20, 30]);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.width, 1);
        assert_eq!(image.height, 1);
        assert_eq!(image.pixels, [30, 20, 10]);
    }

    #[test]
    fn test_decode_24bpp_buffer_size() {
        let data = vec![0u8; 4 * 3 * 3];
        let bytes = make_tga(4, 3, 24, &[], &data);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixels.len(), 4 * 3 * 3);
        assert_eq!(image.pixels.len(), image.byte_len());
    }

    #[test]
    fn test_decode_32bpp_discards_alpha() {
        // Two pixels stored as BGRA; alpha must not appear in the output.
        let bytes = make_tga(2, 1, 32, &[], &[1, 2, 3, 255, 4, 5, 6, 128]);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixels.len(), 2 * 3);
        assert_eq!(image.pixels, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_decode_32bpp_matches_24bpp_conversion() {
        let bgr: &[u8] = &[9, 8, 7, 60, 50, 40];
        let bgra: &[u8] = &[9, 8, 7, 200, 60, 50, 40, 10];
        let from_24 = decode(&make_tga(2, 1, 24, &[], bgr)).unwrap();
        let from_32 = decode(&make_tga(2, 1, 32, &[], bgra)).unwrap();
        assert_eq!(from_24.pixels, from_32.pixels);
    }

    #[test]
    fn test_decode_skips_image_id_field() {
        let bytes = make_tga(1, 1, 24, b"sample-id", &[10, 20, 30]);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixels, [30, 20, 10]);
    }

    #[test]
    fn test_decode_preserves_row_order() {
        // 1x2 image: file stores the bottom row first and the decoder must
        // not flip it.
        let bottom = [0, 0, 255]; // red in BGR
        let top = [255, 0, 0]; // blue in BGR
        let mut data = Vec::new();
        data.extend_from_slice(&bottom);
        data.extend_from_slice(&top);
        let image = decode(&make_tga(1, 2, 24, &[], &data)).unwrap();
        assert_eq!(&image.pixels[0..3], [255, 0, 0]); // bottom row, now RGB red
        assert_eq!(&image.pixels[3..6], [0, 0, 255]); // top row, now RGB blue
    }

    #[test]
    fn test_rejects_wrong_image_type() {
        let mut bytes = make_tga(1, 1, 24, &[], &[0, 0, 0]);
        bytes[2] = 10; // run-length encoded
        match decode(&bytes) {
            Err(ImageError::UnsupportedImageType(10)) => {}
            other => panic!("expected UnsupportedImageType, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_color_mapped_image() {
        let mut bytes = make_tga(1, 1, 24, &[], &[0, 0, 0]);
        bytes[1] = 1;
        match decode(&bytes) {
            Err(ImageError::ColorMapped(1)) => {}
            other => panic!("expected ColorMapped, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unsupported_bit_depth() {
        for bpp in [8u8, 15, 16] {
            let bytes = make_tga(1, 1, bpp, &[], &[0, 0, 0]);
            match decode(&bytes) {
                Err(ImageError::UnsupportedBitDepth(b)) => assert_eq!(b, bpp),
                other => panic!("expected UnsupportedBitDepth, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_short_header() {
        assert!(matches!(decode(&[0u8; 10]), Err(ImageError::Truncated)));
        assert!(matches!(decode(&[]), Err(ImageError::Truncated)));
    }

    #[test]
    fn test_rejects_truncated_pixel_data() {
        // Header claims 2x2 at 24 bpp but only one pixel follows.
        let bytes = make_tga(2, 2, 24, &[], &[1, 2, 3]);
        assert!(matches!(decode(&bytes), Err(ImageError::Truncated)));
    }

    #[test]
    fn test_zero_sized_image_decodes_empty() {
        let image = decode(&make_tga(0, 0, 24, &[], &[])).unwrap();
        assert!(image.pixels.is_empty());
        assert_eq!(image.byte_len(), 0);
    }
}
