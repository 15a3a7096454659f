/// Pixel channel layout of a [`Surface`](crate::Surface)'s backing bytes.
///
/// Channel order is always blue-first, matching the on-disk layout used by
/// Truevision TGA true-color images. This is a closed set: there is no
/// `Unknown` member, since an unrecognized `(bytes_per_pixel, alpha_bits)`
/// pair is represented by `None` from [`PixelFormat::from_bpp_and_alpha`]
/// rather than a sentinel variant.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PixelFormat {
    /// 4 bytes per pixel, 8-bit alpha. In-memory order: `[B, G, R, A]`.
    Bgra8888,
    /// 4 bytes per pixel, no alpha (the 4th byte is unused padding). In-memory order: `[B, G, R, 0]`.
    Bgrx8888,
    /// 2 bytes per pixel, 1-bit alpha, packed little-endian as `a rrrrr ggggg bbbbb`.
    Bgra5551,
    /// 2 bytes per pixel, no alpha, packed little-endian as `0 rrrrr ggggg bbbbb`.
    Bgr555,
    /// 3 bytes per pixel, no alpha. In-memory order: `[B, G, R]`.
    Bgr888,
}

impl PixelFormat {
    /// Returns the number of bytes a single pixel of this format occupies.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra8888 => 4,
            PixelFormat::Bgrx8888 => 4,
            PixelFormat::Bgra5551 => 2,
            PixelFormat::Bgr555 => 2,
            PixelFormat::Bgr888 => 3,
        }
    }

    /// Returns the number of bits of this format that carry alpha.
    pub const fn alpha_bits(self) -> u8 {
        match self {
            PixelFormat::Bgra8888 => 8,
            PixelFormat::Bgrx8888 => 0,
            PixelFormat::Bgra5551 => 1,
            PixelFormat::Bgr555 => 0,
            PixelFormat::Bgr888 => 0,
        }
    }

    /// Picks the pixel format that a TGA true-color image with the given
    /// byte depth and alpha-bit count describes.
    ///
    /// Returns `None` for any `(bytes_per_pixel, alpha_bits)` pair that does
    /// not correspond to one of the five supported layouts, matching the
    /// `pickPixelFormatForTrueColorImage` fallback in the original codec.
    pub const fn from_bpp_and_alpha(bytes_per_pixel: usize, alpha_bits: u8) -> Option<Self> {
        match (bytes_per_pixel, alpha_bits) {
            (3, 0) => Some(PixelFormat::Bgr888),
            (4, 8) => Some(PixelFormat::Bgra8888),
            (4, 0) => Some(PixelFormat::Bgrx8888),
            (2, 1) => Some(PixelFormat::Bgra5551),
            (2, 0) => Some(PixelFormat::Bgr555),
            _ => None,
        }
    }
}

/// Orientation of the first stored pixel relative to the image rectangle.
///
/// Encoded on disk in the low two bits of the TGA image descriptor byte
/// (bits 4-5); see [`Origin::from_descriptor_bits`] /
/// [`Origin::to_descriptor_bits`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Origin {
    /// First stored pixel is the bottom-left corner of the image (descriptor bits `00`).
    BottomLeft,
    /// First stored pixel is the bottom-right corner of the image (descriptor bits `01`).
    BottomRight,
    /// First stored pixel is the top-left corner of the image (descriptor bits `10`).
    TopLeft,
    /// First stored pixel is the top-right corner of the image (descriptor bits `11`).
    TopRight,
}

impl Origin {
    /// Decodes the two image-origin bits of a TGA image descriptor byte.
    pub const fn from_descriptor_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Origin::BottomLeft,
            0b01 => Origin::BottomRight,
            0b10 => Origin::TopLeft,
            _ => Origin::TopRight,
        }
    }

    /// Encodes this origin as the two image-origin bits of a TGA image descriptor byte.
    pub const fn to_descriptor_bits(self) -> u8 {
        match self {
            Origin::BottomLeft => 0b00,
            Origin::BottomRight => 0b01,
            Origin::TopLeft => 0b10,
            Origin::TopRight => 0b11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_per_pixel_matches_alpha_layout() {
        assert_eq!(PixelFormat::Bgra8888.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Bgra8888.alpha_bits(), 8);
        assert_eq!(PixelFormat::Bgrx8888.alpha_bits(), 0);
        assert_eq!(PixelFormat::Bgr888.bytes_per_pixel(), 3);
    }

    #[test]
    fn from_bpp_and_alpha_covers_all_formats() {
        assert_eq!(PixelFormat::from_bpp_and_alpha(3, 0), Some(PixelFormat::Bgr888));
        assert_eq!(PixelFormat::from_bpp_and_alpha(4, 8), Some(PixelFormat::Bgra8888));
        assert_eq!(PixelFormat::from_bpp_and_alpha(4, 0), Some(PixelFormat::Bgrx8888));
        assert_eq!(PixelFormat::from_bpp_and_alpha(2, 1), Some(PixelFormat::Bgra5551));
        assert_eq!(PixelFormat::from_bpp_and_alpha(2, 0), Some(PixelFormat::Bgr555));
        assert_eq!(PixelFormat::from_bpp_and_alpha(4, 1), None);
        assert_eq!(PixelFormat::from_bpp_and_alpha(1, 0), None);
    }

    #[test]
    fn origin_descriptor_bits_round_trip() {
        for origin in [
            Origin::BottomLeft,
            Origin::BottomRight,
            Origin::TopLeft,
            Origin::TopRight,
        ] {
            assert_eq!(Origin::from_descriptor_bits(origin.to_descriptor_bits()), origin);
        }
    }
}
