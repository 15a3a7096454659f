/// Errors that can occur while constructing a [`Surface`](crate::Surface).
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// Width or height was zero.
    #[error("surface width and height must both be non-zero")]
    ZeroSize,

    /// The requested pitch is smaller than `width * bytes_per_pixel`.
    #[error("pitch {pitch} is smaller than width {width} * bytes-per-pixel {bytes_per_pixel}")]
    PitchTooSmall {
        /// Surface width in pixels.
        width: usize,
        /// Bytes per pixel of the surface's pixel format.
        bytes_per_pixel: usize,
        /// The pitch that was requested.
        pitch: usize,
    },

    /// A caller-provided backing buffer is smaller than `height * pitch`.
    #[error("backing buffer has {actual} bytes but the surface needs {expected}")]
    BufferTooSmall {
        /// Bytes required (`height * pitch`).
        expected: usize,
        /// Bytes actually provided.
        actual: usize,
    },
}
