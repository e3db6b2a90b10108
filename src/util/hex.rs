//! Hex-nibble text helpers for the debug grid form.

use crate::template::WILDCARD;
use crate::util::{MicroDetectError, MicroDetectResult};

const WILDCARD_CHAR: char = '*';

/// Parses hex rows into integer rows, mapping `*` to [`WILDCARD`] when allowed.
///
/// Row lengths are not checked here; callers run their own grid validation.
pub(crate) fn parse_rows<S: AsRef<str>>(
    rows: &[S],
    allow_wildcard: bool,
) -> MicroDetectResult<Vec<Vec<i32>>> {
    rows.iter()
        .enumerate()
        .map(|(row, text)| {
            text.as_ref()
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    WILDCARD_CHAR if allow_wildcard => Ok(WILDCARD),
                    _ => ch
                        .to_digit(16)
                        .map(|v| v as i32)
                        .ok_or(MicroDetectError::InvalidHexDigit { row, col, ch }),
                })
                .collect()
        })
        .collect()
}

/// Uppercase hex digit for a nibble value.
pub(crate) fn nibble_char(value: u8) -> char {
    char::from_digit(u32::from(value & 0x0F), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

pub(crate) fn wildcard_char() -> char {
    WILDCARD_CHAR
}
