/// A Wavefront OBJ format version, as declared by the caller.
///
/// The parser accepts only [`WavefrontVersion::V3_0`]; every other value is
/// rejected with [`crate::WavefrontError::UnsupportedVersion`] before the
/// file is even opened.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct WavefrontVersion {
    pub major: u32,
    pub minor: u32,
}

impl WavefrontVersion {
    /// The only version this parser's grammar covers: `v`/`f` directives
    /// with no polygon faces, no materials, no groups.
    pub const V3_0: Self = Self { major: 3, minor: 0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v3_0_is_distinct_from_other_versions() {
        assert_ne!(WavefrontVersion::V3_0, WavefrontVersion { major: 2, minor: 0 });
    }
}
