use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use raster_core::{Origin, Surface};

use crate::error::TgaError;

/// Size in bytes of the fixed TGA header that precedes the image ID, color
/// map and image data.
pub const HEADER_LEN: usize = 18;

/// The fixed 18-byte header at the start of every TGA file.
///
/// Field names follow the Truevision spec rather than the generic `fieldN`
/// naming a straight byte dump would give you: `image_type` rather than
/// "field 3", `color_map_entry_size` rather than "field 8".
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: u8,
    pub color_map_first_entry_index: u16,
    pub color_map_length: u16,
    pub color_map_entry_size: u8,
    pub offset_x: u16,
    pub offset_y: u16,
    pub width: u16,
    pub height: u16,
    pub pixel_depth: u8,
    pub alpha_bits: u8,
    pub origin: Origin,
}

impl TgaHeader {
    /// Parses the 18-byte header from the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, TgaError> {
        if bytes.len() < HEADER_LEN {
            return Err(TgaError::InvalidFileFormat(format!(
                "file is {} bytes, too short for an {}-byte TGA header",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let mut cursor = Cursor::new(&bytes[..HEADER_LEN]);
        let id_length = cursor.read_u8().map_err(TgaError::FailedToReadFile)?;
        let color_map_type = cursor.read_u8().map_err(TgaError::FailedToReadFile)?;
        let image_type = cursor.read_u8().map_err(TgaError::FailedToReadFile)?;
        let color_map_first_entry_index = cursor
            .read_u16::<LittleEndian>()
            .map_err(TgaError::FailedToReadFile)?;
        let color_map_length = cursor
            .read_u16::<LittleEndian>()
            .map_err(TgaError::FailedToReadFile)?;
        let color_map_entry_size = cursor.read_u8().map_err(TgaError::FailedToReadFile)?;
        let offset_x = cursor
            .read_u16::<LittleEndian>()
            .map_err(TgaError::FailedToReadFile)?;
        let offset_y = cursor
            .read_u16::<LittleEndian>()
            .map_err(TgaError::FailedToReadFile)?;
        let width = cursor
            .read_u16::<LittleEndian>()
            .map_err(TgaError::FailedToReadFile)?;
        let height = cursor
            .read_u16::<LittleEndian>()
            .map_err(TgaError::FailedToReadFile)?;
        let pixel_depth = cursor.read_u8().map_err(TgaError::FailedToReadFile)?;
        let descriptor = cursor.read_u8().map_err(TgaError::FailedToReadFile)?;

        Ok(Self {
            id_length,
            color_map_type,
            image_type,
            color_map_first_entry_index,
            color_map_length,
            color_map_entry_size,
            offset_x,
            offset_y,
            width,
            height,
            pixel_depth,
            alpha_bits: descriptor & 0b0000_1111,
            origin: Origin::from_descriptor_bits((descriptor & 0b0011_0000) >> 4),
        })
    }

    /// Builds a header describing `surface`, for the given TGA `image_type`.
    /// `id_length`, the color map fields and the pixel offset are always
    /// zero; this codec never writes an image ID, a color map or a
    /// non-origin pixel offset.
    pub fn for_surface(surface: &Surface<'_>, image_type: u8) -> Result<Self, TgaError> {
        let width = u16::try_from(surface.width())
            .map_err(|_| TgaError::InvalidArgument("surface width exceeds 65535".into()))?;
        let height = u16::try_from(surface.height())
            .map_err(|_| TgaError::InvalidArgument("surface height exceeds 65535".into()))?;
        let pixel_depth = u8::try_from(surface.bpp() * 8)
            .map_err(|_| TgaError::ApplicationBug("pixel depth does not fit in a byte"))?;

        Ok(Self {
            id_length: 0,
            color_map_type: 0,
            image_type,
            color_map_first_entry_index: 0,
            color_map_length: 0,
            color_map_entry_size: 0,
            offset_x: 0,
            offset_y: 0,
            width,
            height,
            pixel_depth,
            alpha_bits: surface.pixel_format().alpha_bits(),
            origin: surface.origin(),
        })
    }

    /// Serializes this header to its on-disk 18-byte representation.
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0] = self.id_length;
        buf[1] = self.color_map_type;
        buf[2] = self.image_type;
        buf[3..5].copy_from_slice(&self.color_map_first_entry_index.to_le_bytes());
        buf[5..7].copy_from_slice(&self.color_map_length.to_le_bytes());
        buf[7] = self.color_map_entry_size;
        buf[8..10].copy_from_slice(&self.offset_x.to_le_bytes());
        buf[10..12].copy_from_slice(&self.offset_y.to_le_bytes());
        buf[12..14].copy_from_slice(&self.width.to_le_bytes());
        buf[14..16].copy_from_slice(&self.height.to_le_bytes());
        buf[16] = self.pixel_depth;
        buf[17] = (self.alpha_bits & 0b0000_1111) | (self.origin.to_descriptor_bits() << 4);
        buf
    }
}
