use std::fs::File;
use std::io::Read;
use std::path::Path;

use raster_core::{PixelFormat, Surface};

use crate::error::TgaError;
use crate::footer::TgaFooter;
use crate::header::{TgaHeader, HEADER_LEN};

/// A decoded TGA file: the header, an optional 2.0 footer, and byte offsets
/// into the file's own bytes for the image ID, color map and image data.
///
/// The offsets mirror the retrieved-offset fields of the original loader,
/// expressed as `Option<usize>` instead of a sentinel `-1`.
#[derive(Debug)]
pub struct TgaImage {
    bytes: Vec<u8>,
    pub header: TgaHeader,
    pub footer: Option<TgaFooter>,
    image_id_offset: Option<usize>,
    color_map_data_offset: Option<usize>,
    image_data_offset: usize,
    footer_offset: Option<usize>,
}

impl TgaImage {
    /// Reads and parses the TGA file at `path`.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, TgaError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|err| {
            log::error!("failed to stat {}: {err}", path.display());
            TgaError::FailedToStatFile(err)
        })?;
        let mut file = File::open(path).map_err(|err| {
            log::error!("failed to open {}: {err}", path.display());
            TgaError::FailedToOpenFile(err)
        })?;
        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut bytes).map_err(|err| {
            log::error!("failed to read {}: {err}", path.display());
            TgaError::FailedToReadFile(err)
        })?;
        Self::from_bytes(bytes)
    }

    /// Parses an in-memory TGA byte stream, taking ownership of `bytes`.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TgaError> {
        if bytes.is_empty() {
            log::error!("cannot parse a TGA file from an empty byte buffer");
            return Err(TgaError::InvalidFileFormat("file is empty".into()));
        }

        let (footer_offset, footer) = match TgaFooter::find(&bytes) {
            Some((offset, footer)) => (Some(offset), Some(footer)),
            None => (None, None),
        };

        let header = TgaHeader::parse(&bytes)?;

        let mut cursor = HEADER_LEN;
        let image_id_offset = if header.id_length > 0 {
            let offset = cursor;
            cursor += header.id_length as usize;
            Some(offset)
        } else {
            None
        };

        let color_map_data_offset = if header.color_map_type == 1 {
            let offset = cursor;
            // The original loader advances by `count * entrySize` verbatim,
            // without dividing the (bit-valued) entry size by 8. We preserve
            // that arithmetic for offset compatibility; color-mapped images
            // are never decoded into a surface regardless.
            cursor += header.color_map_length as usize * header.color_map_entry_size as usize;
            Some(offset)
        } else {
            None
        };

        let image_data_offset = cursor;
        if image_data_offset > bytes.len() {
            log::error!(
                "image ID / color map fields run past the end of the file ({} > {})",
                image_data_offset,
                bytes.len()
            );
            return Err(TgaError::InvalidFileFormat(
                "image ID / color map fields run past the end of the file".into(),
            ));
        }
        let data_end = footer_offset.unwrap_or(bytes.len());
        if image_data_offset > data_end {
            log::error!(
                "image data offset {} runs past the start of the footer at {}",
                image_data_offset,
                data_end
            );
            return Err(TgaError::InvalidFileFormat(
                "image data offset runs past the start of the footer".into(),
            ));
        }

        if footer.is_none() {
            log::trace!("no New Format footer signature found; treating as Original Format (1.0)");
        }

        Ok(Self {
            bytes,
            header,
            footer,
            image_id_offset,
            color_map_data_offset,
            image_data_offset,
            footer_offset,
        })
    }

    /// Whether this file carried a valid 2.0 footer (New Format) rather than
    /// being an Original Format (1.0) file.
    pub fn is_new_format(&self) -> bool {
        self.footer.is_some()
    }

    /// The raw image-id bytes, if the header declared any (`id_length > 0`).
    pub fn image_id(&self) -> Option<&[u8]> {
        let offset = self.image_id_offset?;
        let end = offset + self.header.id_length as usize;
        Some(&self.bytes[offset..end])
    }

    /// The raw color map bytes, if the header declared a color map
    /// (`color_map_type == 1`).
    pub fn color_map_data(&self) -> Option<&[u8]> {
        let offset = self.color_map_data_offset?;
        let end = self.image_data_offset;
        Some(&self.bytes[offset..end])
    }

    /// The raw image data bytes, up to the footer (if present) or the end of
    /// the file.
    pub fn image_data(&self) -> &[u8] {
        let end = self.footer_offset.unwrap_or(self.bytes.len());
        &self.bytes[self.image_data_offset..end]
    }

    /// Builds a [`Surface`] from this file's image data.
    ///
    /// Only true-color images (`header.image_type == 2`) are supported; the
    /// surface's pixel format is picked from `(bpp, alpha_bits)` via
    /// [`PixelFormat::from_bpp_and_alpha`].
    pub fn create_surface(&self) -> Result<Surface<'static>, TgaError> {
        if self.header.image_type != 2 {
            log::error!("unsupported TGA image type {}, only true-color (2) is decoded", self.header.image_type);
            return Err(TgaError::UnsupportedImageType(self.header.image_type));
        }

        let width = self.header.width as usize;
        let height = self.header.height as usize;
        // Matches the original's `round(pixelDepth / 8.0)`: every supported
        // pixel depth (15, 16, 24, 32) lands on the same value either way.
        let bpp = (self.header.pixel_depth as usize + 7) / 8;
        let pixel_format = PixelFormat::from_bpp_and_alpha(bpp, self.header.alpha_bits).ok_or_else(|| {
            log::error!(
                "no pixel format for {} bytes per pixel with {} alpha bits",
                bpp,
                self.header.alpha_bits
            );
            TgaError::InvalidFileFormat(format!(
                "no pixel format for {} bytes per pixel with {} alpha bits",
                bpp, self.header.alpha_bits
            ))
        })?;

        let pitch = bpp * width;
        let image_data = self.image_data();
        let required = pitch * height;
        if image_data.len() < required {
            log::error!(
                "image data is {} bytes, expected at least {}",
                image_data.len(),
                required
            );
            return Err(TgaError::InvalidFileFormat(format!(
                "image data is {} bytes, expected at least {}",
                image_data.len(),
                required
            )));
        }

        let data = image_data[..required].to_vec();
        Surface::from_owned_bytes(pixel_format, self.header.origin, width, height, pitch, data)
            .map_err(TgaError::FailedToCreateSurface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{write_surface, FileType};
    use raster_core::Origin;

    fn sample_surface() -> Surface<'static> {
        let mut surface =
            Surface::new_owned(PixelFormat::Bgra8888, Origin::TopLeft, 2, 2).unwrap();
        let bytes = surface.as_bytes_mut();
        bytes[0..4].copy_from_slice(&[10, 20, 30, 255]);
        bytes[4..8].copy_from_slice(&[40, 50, 60, 255]);
        bytes[8..12].copy_from_slice(&[70, 80, 90, 255]);
        bytes[12..16].copy_from_slice(&[100, 110, 120, 255]);
        surface
    }

    #[test]
    fn v1_header_round_trips_into_an_image() {
        let surface = sample_surface();
        let mut buf = Vec::new();
        write_surface(&surface, 2, FileType::Original, &mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_LEN + surface.size());

        let image = TgaImage::from_bytes(buf).unwrap();
        assert!(!image.is_new_format());
        assert_eq!(image.header.width, 2);
        assert_eq!(image.header.height, 2);
        assert_eq!(image.header.image_type, 2);
        assert_eq!(image.header.pixel_depth, 32);
        assert_eq!(image.header.alpha_bits, 8);
        assert_eq!(image.image_data(), surface.as_bytes());
    }

    #[test]
    fn v2_footer_is_detected() {
        let surface = sample_surface();
        let mut buf = Vec::new();
        write_surface(&surface, 2, FileType::New, &mut buf).unwrap();
        assert_eq!(
            buf.len(),
            HEADER_LEN + surface.size() + crate::footer::FOOTER_LEN
        );

        let image = TgaImage::from_bytes(buf).unwrap();
        assert!(image.is_new_format());
        assert_eq!(image.image_data(), surface.as_bytes());
    }

    #[test]
    fn decodes_a_64x64_bgr888_image() {
        let surface = Surface::new_owned(PixelFormat::Bgr888, Origin::TopLeft, 64, 64).unwrap();
        let mut buf = Vec::new();
        write_surface(&surface, 2, FileType::New, &mut buf).unwrap();

        let image = TgaImage::from_bytes(buf).unwrap();
        let decoded = image.create_surface().unwrap();
        assert_eq!(decoded.pixel_format(), PixelFormat::Bgr888);
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 64);
    }

    #[test]
    fn rejects_unsupported_image_type() {
        let surface = sample_surface();
        let mut buf = Vec::new();
        write_surface(&surface, 2, FileType::Original, &mut buf).unwrap();
        // Flip the image-type byte (offset 2) to 1 (color-mapped).
        buf[2] = 1;
        let image = TgaImage::from_bytes(buf).unwrap();
        let err = image.create_surface().unwrap_err();
        assert!(matches!(err, TgaError::UnsupportedImageType(1)));
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let err = TgaImage::from_bytes(Vec::new()).unwrap_err();
        assert!(matches!(err, TgaError::InvalidFileFormat(_)));
    }

    #[test]
    fn round_trips_through_an_actual_file() {
        let surface = sample_surface();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.tga");
        crate::encoder::write_file(&surface, FileType::New, &path).unwrap();

        let image = TgaImage::load_file(&path).unwrap();
        let decoded = image.create_surface().unwrap();
        assert_eq!(decoded.as_bytes(), surface.as_bytes());
    }

    #[test]
    fn missing_file_reports_stat_failure() {
        let err = TgaImage::load_file("/nonexistent/path/does-not-exist.tga").unwrap_err();
        assert!(matches!(err, TgaError::FailedToStatFile(_)));
    }
}
