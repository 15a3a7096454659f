/// An 8-bit-per-channel RGBA color, the rasterizer's unit of input.
///
/// `Color` is independent of [`PixelFormat`](crate::PixelFormat): every
/// drawing operation accepts a `Color` and the per-format pixel writer
/// decides how to pack it (dropping or requantizing channels as needed).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Color {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// Alpha channel, 0-255.
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from red, green, blue and alpha channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black (R: 0, G: 0, B: 0).
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Red (R: 255, G: 0, B: 0).
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green (R: 0, G: 255, B: 0).
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Blue (R: 0, G: 0, B: 255).
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Yellow (R: 255, G: 255, B: 0).
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Magenta (R: 255, G: 0, B: 255).
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Cyan (R: 0, G: 255, B: 255).
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// White (R: 255, G: 255, B: 255).
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Gray (R: 128, G: 128, B: 128).
    pub const GRAY: Self = Self::rgb(128, 128, 128);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::BLACK, Color::rgba(0, 0, 0, 255));
        assert_eq!(Color::WHITE, Color::rgba(255, 255, 255, 255));
    }
}
