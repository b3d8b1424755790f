//! `key=value` dictionary resource parsing.
//!
//! All three dictionary resources (script pairs, glyph readings, phrase
//! overrides) share one line format: UTF-8 text, one `key=value` entry per
//! line, no escaping. Only the first `=` is significant, so values may
//! contain further `=` characters verbatim.

use memchr::memchr;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while loading or merging dictionary entries.
///
/// Loading is all-or-nothing: a malformed line aborts the whole operation
/// rather than half-populating a table.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("dictionary line `{0}` has no `=` delimiter")]
    MissingDelimiter(String),

    #[error("dictionary line `{0}` has an empty key")]
    EmptyKey(String),

    #[error("dictionary line `{line}` is invalid: {reason}")]
    InvalidEntry { line: String, reason: &'static str },
}

/// Split a raw line into `(key, value)` at the first `=`.
///
/// Returns `Ok(None)` for blank lines (formatting, not entries). The line
/// is trimmed before splitting.
pub fn parse_line(raw: &str) -> Result<Option<(&str, &str)>, ResourceError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }
    // `=` is ASCII, so the byte offset is a valid char boundary.
    let eq = memchr(b'=', line.as_bytes())
        .ok_or_else(|| ResourceError::MissingDelimiter(line.to_string()))?;
    let (key, value) = (&line[..eq], &line[eq + 1..]);
    if key.is_empty() {
        return Err(ResourceError::EmptyKey(line.to_string()));
    }
    Ok(Some((key, value)))
}

/// Parse raw dictionary lines into a key → value map.
///
/// Later lines with a duplicate key overwrite earlier ones.
pub fn parse_lines<'a, I>(lines: I) -> Result<HashMap<String, String>, ResourceError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = HashMap::new();
    for raw in lines {
        if let Some((key, value)) = parse_line(raw)? {
            map.insert(key.to_string(), value.to_string());
        }
    }
    Ok(map)
}

/// Key (or value) expected to be exactly one character.
pub(crate) fn single_char(s: &str, line: &str, reason: &'static str) -> Result<char, ResourceError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ResourceError::InvalidEntry {
            line: line.trim().to_string(),
            reason,
        }),
    }
}
