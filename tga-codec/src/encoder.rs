use std::fs::File;
use std::io::Write;
use std::path::Path;

use raster_core::Surface;

use crate::error::TgaError;
use crate::footer::TgaFooter;
use crate::header::TgaHeader;

/// Whether an encoded file should carry a TGA 2.0 footer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FileType {
    /// Original Format (1.0): header followed by image data, no footer.
    Original,
    /// New Format (2.0): header, image data, then a footer carrying the
    /// [`crate::footer::SIGNATURE`].
    New,
}

/// Encodes `surface` as a true-color (image type 2) TGA file and writes it
/// to `path`.
pub fn write_file(
    surface: &Surface<'_>,
    file_type: FileType,
    path: impl AsRef<Path>,
) -> Result<(), TgaError> {
    let path = path.as_ref();
    let mut bytes = Vec::with_capacity(surface.size() + 44);
    write_surface(surface, 2, file_type, &mut bytes)?;

    let mut file = File::create(path).map_err(|err| {
        log::error!("failed to open {} for writing: {err}", path.display());
        TgaError::FailedToOpenFile(err)
    })?;
    file.write_all(&bytes).map_err(|err| {
        log::error!("failed to write {}: {err}", path.display());
        TgaError::FailedToWriteFile(err)
    })
}

/// Encodes `surface` into `out`, appending the header, image data and
/// (for [`FileType::New`]) footer.
///
/// Only `image_type == 2` (uncompressed true-color) is supported.
pub fn write_surface(
    surface: &Surface<'_>,
    image_type: u8,
    file_type: FileType,
    out: &mut Vec<u8>,
) -> Result<(), TgaError> {
    // Unreachable from any `Surface` built via its public constructors, which
    // already reject zero width/height (`SurfaceError::ZeroSize`); kept as
    // defense-in-depth for any future non-validating construction path.
    if surface.size() == 0 {
        log::error!("cannot encode a zero-size surface as a TGA file");
        return Err(TgaError::InvalidArgument("surface has zero size".into()));
    }
    if image_type != 2 {
        log::error!("unsupported TGA image type {image_type}, only true-color (2) is encoded");
        return Err(TgaError::UnsupportedImageType(image_type));
    }

    let header = TgaHeader::for_surface(surface, image_type)?;
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(surface.as_bytes());

    if file_type == FileType::New {
        let footer = TgaFooter {
            extension_area_offset: 0,
            developer_directory_offset: 0,
        };
        out.extend_from_slice(&footer.to_bytes());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::{Origin, PixelFormat};

    #[test]
    fn unsupported_image_type_is_rejected() {
        let surface = Surface::new_owned(PixelFormat::Bgr888, Origin::TopLeft, 1, 1).unwrap();
        let mut out = Vec::new();
        let err = write_surface(&surface, 9, FileType::Original, &mut out).unwrap_err();
        assert!(matches!(err, TgaError::UnsupportedImageType(9)));
    }

    #[test]
    fn writes_header_then_pixels_for_original_format() {
        let surface = Surface::new_owned(PixelFormat::Bgr888, Origin::TopLeft, 2, 2).unwrap();
        let mut out = Vec::new();
        write_surface(&surface, 2, FileType::Original, &mut out).unwrap();
        assert_eq!(out.len(), crate::header::HEADER_LEN + surface.size());
        assert_eq!(&out[crate::header::HEADER_LEN..], surface.as_bytes());
    }

    #[test]
    fn new_format_appends_a_footer() {
        let surface = Surface::new_owned(PixelFormat::Bgra8888, Origin::TopLeft, 2, 2).unwrap();
        let mut out = Vec::new();
        write_surface(&surface, 2, FileType::New, &mut out).unwrap();
        let (offset, footer) = TgaFooter::find(&out).unwrap();
        assert_eq!(offset, crate::header::HEADER_LEN + surface.size());
        assert_eq!(footer.extension_area_offset, 0);
        assert_eq!(footer.developer_directory_offset, 0);
    }
}
