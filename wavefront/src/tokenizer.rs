/// Splits a line's remainder on single spaces, discarding empty tokens
/// produced by runs of spaces.
///
/// Only the ASCII space is treated as a separator, matching the original
/// parser: a tab-separated OBJ file is not tokenized correctly and will
/// surface as an unparseable float or index rather than a clean split.
pub fn tokens(rest: &str) -> impl Iterator<Item = &str> {
    rest.split(' ').filter(|token| !token.is_empty())
}
