//! TGA texture loading
//!
//! Supports only the uncompressed true-color subset of the Truevision TGA
//! format (image type 2, no color map, 24 or 32 bits per pixel), which is
//! what the sample textures use. Decoded images are tightly packed RGB with
//! 3 bytes per pixel; rows are kept in the bottom-to-top order the file
//! stores them in, and the file's BGR(A) channel order is swapped to RGB(A)
//! during decode, with the alpha byte of 32-bpp input discarded.

mod error;
mod tga;

pub use error::ImageError;
pub use tga::{decode, AssetDir, TgaImage, TGA_HEADER_LEN};
