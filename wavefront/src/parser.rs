use crate::error::WavefrontError;
use crate::face::{Face, FaceCorner};
use crate::tokenizer::tokens;

/// Parses the remainder of a `v` line (everything after `"v "`) into a
/// homogeneous vertex. `w` defaults to `0.0` when the line carries only
/// three components; callers that want the conventional default of `1.0`
/// for an unset `w` should apply it themselves, since this parser returns
/// exactly what it read.
pub fn parse_vertex(rest: &str) -> Result<[f32; 4], WavefrontError> {
    let fields: Vec<&str> = tokens(rest).collect();
    if fields.len() != 3 && fields.len() != 4 {
        return Err(WavefrontError::InvalidFileFormat(format!(
            "vertex line has {} components, expected 3 or 4",
            fields.len()
        )));
    }

    let mut v = [0.0f32; 4];
    for (i, field) in fields.iter().enumerate() {
        v[i] = field.parse::<f32>().map_err(|_| {
            log::warn!("failed to parse vertex component \"{field}\" as a float");
            WavefrontError::InvalidFileFormat(format!("\"{field}\" is not a valid float"))
        })?;
    }
    Ok(v)
}

/// Parses the remainder of an `f` line (everything after `"f "`) into a
/// triangular face. Exactly three whitespace-separated corner tokens are
/// required; any other count fails.
pub fn parse_face(rest: &str) -> Result<Face, WavefrontError> {
    let corner_tokens: Vec<&str> = tokens(rest).collect();
    if corner_tokens.len() != 3 {
        return Err(WavefrontError::InvalidFileFormat(format!(
            "face line has {} corners, only triangles (3) are supported",
            corner_tokens.len()
        )));
    }

    let mut corners = [FaceCorner { v: 0, vt: None, vn: None }; 3];
    for (i, token) in corner_tokens.iter().enumerate() {
        corners[i] = parse_corner(token)?;
    }
    Ok(Face { corners })
}

fn parse_corner(token: &str) -> Result<FaceCorner, WavefrontError> {
    let mut fields = token.split('/');

    let v_field = fields.next().unwrap_or("");
    if v_field.is_empty() {
        return Err(WavefrontError::InvalidFileFormat(format!(
            "corner token \"{token}\" is missing its vertex index"
        )));
    }
    let v = parse_index(v_field)?;
    let vt = parse_optional_index(fields.next())?;
    let vn = parse_optional_index(fields.next())?;

    if fields.next().is_some() {
        return Err(WavefrontError::InvalidFileFormat(format!(
            "corner token \"{token}\" has more than three index fields"
        )));
    }

    Ok(FaceCorner { v, vt, vn })
}

fn parse_index(field: &str) -> Result<i32, WavefrontError> {
    field.parse::<i32>().map_err(|_| {
        log::warn!("failed to parse face index \"{field}\"");
        WavefrontError::InvalidFileFormat(format!("\"{field}\" is not a valid face index"))
    })
}

fn parse_optional_index(field: Option<&str>) -> Result<Option<i32>, WavefrontError> {
    match field {
        None => Ok(None),
        Some("") => Ok(None),
        Some(s) => parse_index(s).map(Some),
    }
}
