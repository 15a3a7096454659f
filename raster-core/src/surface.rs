use crate::{error::SurfaceError, pixel_format::Origin, pixel_format::PixelFormat};

/// A surface's backing bytes, either owned by the surface or borrowed from
/// the caller.
///
/// This replaces the allocator-handle/`isOwner()` flag of the original
/// implementation: ownership is a type-level distinction rather than a
/// runtime-checked pointer.
#[derive(Debug)]
enum Backing<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a mut [u8]),
}

impl Backing<'_> {
    fn as_slice(&self) -> &[u8] {
        match self {
            Backing::Owned(v) => v,
            Backing::Borrowed(s) => s,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Backing::Owned(v) => v,
            Backing::Borrowed(s) => s,
        }
    }
}

/// A 2-D pixel buffer with a fixed pixel format, origin, width, height and
/// pitch.
///
/// `size = height * pitch` always holds; `pitch` may exceed
/// `width * bpp()` to accommodate row alignment, and every reader must
/// index through [`Surface::pitch`] rather than assuming packed rows.
///
/// A `Surface` constructed with [`Surface::new_owned`] or
/// [`Surface::from_owned_bytes`] owns its backing `Vec<u8>` and frees it on
/// drop, like any other Rust value. A `Surface` constructed with
/// [`Surface::from_bytes`] borrows a caller-provided buffer; dropping it has
/// no effect on that buffer.
#[derive(Debug)]
pub struct Surface<'a> {
    backing: Backing<'a>,
    origin: Origin,
    pixel_format: PixelFormat,
    width: usize,
    height: usize,
    pitch: usize,
}

impl<'a> Surface<'a> {
    /// Allocates a new, zeroed surface with `pitch = width * bytes_per_pixel`.
    pub fn new_owned(
        pixel_format: PixelFormat,
        origin: Origin,
        width: usize,
        height: usize,
    ) -> Result<Self, SurfaceError> {
        let pitch = width * pixel_format.bytes_per_pixel();
        Self::new_owned_with_pitch(pixel_format, origin, width, height, pitch)
    }

    /// Allocates a new, zeroed surface with an explicit pitch, which must be
    /// at least `width * bytes_per_pixel`.
    pub fn new_owned_with_pitch(
        pixel_format: PixelFormat,
        origin: Origin,
        width: usize,
        height: usize,
        pitch: usize,
    ) -> Result<Self, SurfaceError> {
        Self::check_dimensions(pixel_format, width, height, pitch)?;
        let data = vec![0u8; height * pitch];
        log::trace!(
            "allocated {}x{} {:?} surface ({} bytes)",
            width,
            height,
            pixel_format,
            data.len()
        );
        Ok(Self {
            backing: Backing::Owned(data),
            origin,
            pixel_format,
            width,
            height,
            pitch,
        })
    }

    /// Takes ownership of an existing byte buffer as a surface's pixel data,
    /// e.g. the image-data region copied out of a decoded TGA file.
    pub fn from_owned_bytes(
        pixel_format: PixelFormat,
        origin: Origin,
        width: usize,
        height: usize,
        pitch: usize,
        data: Vec<u8>,
    ) -> Result<Self, SurfaceError> {
        Self::check_dimensions(pixel_format, width, height, pitch)?;
        let expected = height * pitch;
        if data.len() < expected {
            return Err(SurfaceError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            backing: Backing::Owned(data),
            origin,
            pixel_format,
            width,
            height,
            pitch,
        })
    }

    /// Builds a non-owning surface over a caller-provided mutable buffer.
    /// Dropping the returned `Surface` does not free `data`.
    pub fn from_bytes(
        pixel_format: PixelFormat,
        origin: Origin,
        width: usize,
        height: usize,
        pitch: usize,
        data: &'a mut [u8],
    ) -> Result<Self, SurfaceError> {
        Self::check_dimensions(pixel_format, width, height, pitch)?;
        let expected = height * pitch;
        if data.len() < expected {
            return Err(SurfaceError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            backing: Backing::Borrowed(data),
            origin,
            pixel_format,
            width,
            height,
            pitch,
        })
    }

    fn check_dimensions(
        pixel_format: PixelFormat,
        width: usize,
        height: usize,
        pitch: usize,
    ) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroSize);
        }
        let bytes_per_pixel = pixel_format.bytes_per_pixel();
        if pitch < width * bytes_per_pixel {
            return Err(SurfaceError::PitchTooSmall {
                width,
                bytes_per_pixel,
                pitch,
            });
        }
        Ok(())
    }

    /// The surface's pixel format.
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// The surface's origin.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per scan line, which may exceed `width * bpp()`.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Bytes per pixel of this surface's pixel format.
    pub fn bpp(&self) -> usize {
        self.pixel_format.bytes_per_pixel()
    }

    /// Total backing size in bytes: `height * pitch`.
    pub fn size(&self) -> usize {
        self.height * self.pitch
    }

    /// Whether this surface owns its backing bytes.
    pub fn is_owned(&self) -> bool {
        matches!(self.backing, Backing::Owned(_))
    }

    /// The raw backing bytes, in scan order.
    pub fn as_bytes(&self) -> &[u8] {
        self.backing.as_slice()
    }

    /// The raw backing bytes, mutably, in scan order.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.backing.as_mut_slice()
    }

    /// A read-only view suitable for handing to a non-owning consumer (e.g.
    /// a debug previewer) without exposing mutation or ownership.
    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView {
            data: self.as_bytes(),
            pixel_format: self.pixel_format,
            origin: self.origin,
            width: self.width,
            height: self.height,
            pitch: self.pitch,
        }
    }
}

/// A read-only view of a [`Surface`]'s contents, for consumers that must
/// never write to or free the surface.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceView<'a> {
    /// The raw backing bytes, in scan order.
    pub data: &'a [u8],
    /// The surface's pixel format.
    pub pixel_format: PixelFormat,
    /// The surface's origin.
    pub origin: Origin,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Bytes per scan line.
    pub pitch: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_owned_has_expected_size() {
        let s = Surface::new_owned(PixelFormat::Bgra8888, Origin::TopLeft, 4, 3).unwrap();
        assert_eq!(s.pitch(), 16);
        assert_eq!(s.size(), 48);
        assert!(s.is_owned());
        assert_eq!(s.as_bytes().len(), 48);
    }

    #[test]
    fn zero_size_rejected() {
        let err = Surface::new_owned(PixelFormat::Bgr888, Origin::TopLeft, 0, 4).unwrap_err();
        assert!(matches!(err, SurfaceError::ZeroSize));
    }

    #[test]
    fn pitch_too_small_rejected() {
        let err = Surface::new_owned_with_pitch(PixelFormat::Bgr888, Origin::TopLeft, 4, 4, 11).unwrap_err();
        assert!(matches!(err, SurfaceError::PitchTooSmall { .. }));
    }

    #[test]
    fn from_bytes_is_non_owning() {
        let mut buf = vec![0u8; 16];
        let s = Surface::from_bytes(PixelFormat::Bgra8888, Origin::TopLeft, 2, 2, 8, &mut buf).unwrap();
        assert!(!s.is_owned());
    }

    #[test]
    fn from_bytes_rejects_undersized_buffer() {
        let mut buf = vec![0u8; 4];
        let err = Surface::from_bytes(PixelFormat::Bgra8888, Origin::TopLeft, 2, 2, 8, &mut buf).unwrap_err();
        assert!(matches!(err, SurfaceError::BufferTooSmall { .. }));
    }

    #[test]
    fn view_mirrors_surface_attributes() {
        let s = Surface::new_owned(PixelFormat::Bgr555, Origin::BottomLeft, 3, 2).unwrap();
        let v = s.view();
        assert_eq!(v.width, 3);
        assert_eq!(v.height, 2);
        assert_eq!(v.pixel_format, PixelFormat::Bgr555);
        assert_eq!(v.origin, Origin::BottomLeft);
        assert_eq!(v.data.len(), s.size());
    }
}
