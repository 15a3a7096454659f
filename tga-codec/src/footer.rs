use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Size in bytes of the TGA 2.0 footer.
pub const FOOTER_LEN: usize = 26;

/// The 18-byte signature a New Format (2.0) TGA file carries in the last 18
/// bytes of its footer, including the trailing NUL.
pub const SIGNATURE: &[u8; 18] = b"TRUEVISION-XFILE.\0";

/// The footer appended to a New Format (2.0) TGA file.
///
/// Its presence (a valid [`SIGNATURE`] in the last 18 bytes of the file) is
/// what distinguishes a New Format file from an Original Format one; see
/// [`TgaFooter::find`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TgaFooter {
    pub extension_area_offset: u32,
    pub developer_directory_offset: u32,
}

impl TgaFooter {
    /// Looks for a valid footer in the last [`FOOTER_LEN`] bytes of `bytes`.
    ///
    /// Returns the byte offset the footer starts at together with the
    /// parsed footer, or `None` if `bytes` is too short or its tail doesn't
    /// carry the [`SIGNATURE`] -- in which case the file is an Original
    /// Format (1.0) TGA file rather than malformed.
    pub fn find(bytes: &[u8]) -> Option<(usize, Self)> {
        if bytes.len() < FOOTER_LEN {
            return None;
        }
        let offset = bytes.len() - FOOTER_LEN;
        let tail = &bytes[offset..];
        if &tail[8..26] != SIGNATURE.as_slice() {
            return None;
        }

        let mut cursor = Cursor::new(tail);
        let extension_area_offset = cursor.read_u32::<LittleEndian>().ok()?;
        let developer_directory_offset = cursor.read_u32::<LittleEndian>().ok()?;
        Some((
            offset,
            Self {
                extension_area_offset,
                developer_directory_offset,
            },
        ))
    }

    /// Serializes this footer to its on-disk 26-byte representation.
    pub fn to_bytes(self) -> [u8; FOOTER_LEN] {
        let mut buf = [0u8; FOOTER_LEN];
        buf[0..4].copy_from_slice(&self.extension_area_offset.to_le_bytes());
        buf[4..8].copy_from_slice(&self.developer_directory_offset.to_le_bytes());
        buf[8..26].copy_from_slice(SIGNATURE);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let footer = TgaFooter {
            extension_area_offset: 0,
            developer_directory_offset: 0,
        };
        let bytes = footer.to_bytes();
        let (offset, parsed) = TgaFooter::find(&bytes).unwrap();
        assert_eq!(offset, 0);
        assert_eq!(parsed, footer);
    }

    #[test]
    fn one_flipped_signature_byte_is_rejected() {
        let footer = TgaFooter {
            extension_area_offset: 0,
            developer_directory_offset: 0,
        };
        let mut bytes = footer.to_bytes();
        bytes[25] = b'x'; // corrupt the trailing NUL of the signature
        assert!(TgaFooter::find(&bytes).is_none());
    }

    #[test]
    fn short_buffer_has_no_footer() {
        assert!(TgaFooter::find(&[0u8; 10]).is_none());
    }

    #[test]
    fn footer_is_found_at_the_tail_of_a_larger_buffer() {
        let footer = TgaFooter {
            extension_area_offset: 118,
            developer_directory_offset: 0,
        };
        let mut bytes = vec![0xAAu8; 18];
        bytes.extend_from_slice(&footer.to_bytes());
        let (offset, parsed) = TgaFooter::find(&bytes).unwrap();
        assert_eq!(offset, 18);
        assert_eq!(parsed, footer);
    }
}
