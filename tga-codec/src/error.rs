/// Errors that can occur while loading or writing a Truevision TGA file.
#[derive(Debug, thiserror::Error)]
pub enum TgaError {
    /// The file could not be opened for reading or writing.
    #[error("failed to open file: {0}")]
    FailedToOpenFile(#[source] std::io::Error),

    /// `stat`-ing the file to learn its size failed.
    #[error("failed to stat file: {0}")]
    FailedToStatFile(#[source] std::io::Error),

    /// Reading the file's bytes failed partway through.
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] std::io::Error),

    /// Writing the encoded bytes failed partway through.
    #[error("failed to write file: {0}")]
    FailedToWriteFile(#[source] std::io::Error),

    /// The byte stream is too short, or internally inconsistent, to be a
    /// valid TGA file.
    #[error("invalid TGA file format: {0}")]
    InvalidFileFormat(String),

    /// The header's image type is not 2 (uncompressed true-color), the only
    /// image type this codec decodes or writes.
    #[error("unsupported TGA image type {0}, only true-color (2) is supported")]
    UnsupportedImageType(u8),

    /// A caller-supplied argument was invalid, e.g. an empty surface.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The header's pixel depth and alpha-bit count don't correspond to any
    /// supported [`PixelFormat`](raster_core::PixelFormat), or the resulting
    /// surface failed to construct.
    #[error("failed to create a surface from the decoded TGA image: {0}")]
    FailedToCreateSurface(#[from] raster_core::SurfaceError),

    /// An internal invariant was violated. Reaching this indicates a bug in
    /// this crate, not malformed input.
    #[error("internal error: {0}")]
    ApplicationBug(&'static str),
}
