/// Errors that can occur while loading a Wavefront OBJ file.
#[derive(Debug, thiserror::Error)]
pub enum WavefrontError {
    /// The caller declared a format version other than
    /// [`crate::WavefrontVersion::V3_0`], the only version this parser reads.
    #[error("unsupported Wavefront OBJ version {0:?}, only 3.0 is supported")]
    UnsupportedVersion(crate::version::WavefrontVersion),

    /// `stat`-ing the file to learn its size failed.
    #[error("failed to stat file: {0}")]
    FailedToStatFile(#[source] std::io::Error),

    /// Reading the file's bytes failed partway through.
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] std::io::Error),

    /// A line could not be parsed: an unparseable number, the wrong number
    /// of face corners, or a malformed corner token.
    #[error("invalid Wavefront OBJ file: {0}")]
    InvalidFileFormat(String),
}
