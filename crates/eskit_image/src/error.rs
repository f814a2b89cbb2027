//! Image loading error types

use std::fmt;
use std::io;

/// Error type for TGA loading and decoding.
#[derive(Debug)]
pub enum ImageError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// File ended before the header or pixel data was complete
    Truncated,
    /// TGA image type byte was not 2 (uncompressed true-color)
    UnsupportedImageType(u8),
    /// Image carries a color map, which the loader does not support
    ColorMapped(u8),
    /// Bits per pixel was neither 24 nor 32
    UnsupportedBitDepth(u8),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Io(err) => write!(f, "image IO error: {}", err),
            ImageError::Truncated => write!(f, "image data is truncated"),
            ImageError::UnsupportedImageType(ty) => {
                write!(f, "unsupported TGA image type {} (expected 2)", ty)
            }
            ImageError::ColorMapped(ty) => {
                write!(f, "unsupported TGA color map type {} (expected 0)", ty)
            }
            ImageError::UnsupportedBitDepth(bpp) => {
                write!(f, "unsupported TGA bit depth {} (expected 24 or 32)", bpp)
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ImageError {
    fn from(err: io::Error) -> Self {
        ImageError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let err = ImageError::Io(io_err);
        let msg = format!("{}", err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn test_format_error_display() {
        assert!(format!("{}", ImageError::UnsupportedImageType(10)).contains("type 10"));
        assert!(format!("{}", ImageError::ColorMapped(1)).contains("color map"));
        assert!(format!("{}", ImageError::UnsupportedBitDepth(16)).contains("16"));
        assert!(format!("{}", ImageError::Truncated).contains("truncated"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(ImageError::Io(io_err).source().is_some());
        assert!(ImageError::Truncated.source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: ImageError = io_err.into();
        match err {
            ImageError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("expected Io variant"),
        }
    }
}
