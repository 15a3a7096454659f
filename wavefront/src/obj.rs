use std::fs;
use std::path::Path;

use crate::error::WavefrontError;
use crate::face::Face;
use crate::parser::{parse_face, parse_vertex};
use crate::version::WavefrontVersion;

/// A parsed Wavefront OBJ document: its `v` vertices and `f` faces, in the
/// order they appeared in the file. Every other directive (`vt`, `vn`, `g`,
/// `o`, `#`, `s`, `mtllib`, `usemtl`, ...) is silently skipped.
#[derive(Debug, Default)]
pub struct WavefrontObj {
    pub vertices: Vec<[f32; 4]>,
    pub faces: Vec<Face>,
}

/// Reads and parses the OBJ file at `path`.
///
/// Only [`WavefrontVersion::V3_0`] is accepted; any other declared version
/// fails immediately with [`WavefrontError::UnsupportedVersion`] before the
/// file is opened.
pub fn load_file(path: impl AsRef<Path>, version: WavefrontVersion) -> Result<WavefrontObj, WavefrontError> {
    if version != WavefrontVersion::V3_0 {
        return Err(WavefrontError::UnsupportedVersion(version));
    }

    let path = path.as_ref();
    fs::metadata(path).map_err(WavefrontError::FailedToStatFile)?;
    let contents = fs::read_to_string(path).map_err(WavefrontError::FailedToReadFile)?;
    parse_str(&contents)
}

/// Parses an already-read OBJ document, line by line.
pub fn parse_str(contents: &str) -> Result<WavefrontObj, WavefrontError> {
    let mut obj = WavefrontObj::default();

    for line in contents.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("v ") {
            obj.vertices.push(parse_vertex(rest)?);
        } else if let Some(rest) = line.strip_prefix("f ") {
            obj.faces.push(parse_face(rest)?);
        }
        // Everything else (vt, vn, g, o, #, s, mtllib, usemtl, ...) is
        // intentionally ignored.
    }

    Ok(obj)
}
