//! Byte classification used by the scanner. ASCII only.

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const TAB: u8 = b'\t';
pub const SPACE: u8 = b' ';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const SLASH: u8 = b'/';
pub const EQUALS: u8 = b'=';
pub const DOT: u8 = b'.';

/// Whitespace that is skipped without affecting the line count.
#[inline]
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, SPACE | CARRIAGE_RETURN | TAB)
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Check if a byte can start an identifier.
#[inline]
pub fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Check if a byte can continue an identifier.
#[inline]
pub fn is_identifier_part(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Render a byte for a diagnostic, escaping anything that is not printable ASCII.
pub fn describe_byte(byte: u8) -> String {
    byte.escape_ascii().to_string()
}
