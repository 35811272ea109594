//! Code points and UTF-8 byte classification.
//!
//! | Bytes | Lead byte | Continuation bytes |
//! | ----- | --------- | ------------------ |
//! | 1     | 00-7F     | -                  |
//! | 2     | C2-DF     | 80-BF              |
//! | 3     | E0-EF     | 80-BF (x2)         |
//! | 4     | F0-F4     | 80-BF (x3)         |
//!
//! 80-C1 and F5-FF can never start a sequence.

/// A decoded Unicode code point, `0..=RUNE_MAX`.
pub type Rune = u32;

/// Largest valid code point.
pub const RUNE_MAX: Rune = 0x10_FFFF;

/// Maximum number of bytes in one UTF-8 sequence.
pub const UTF_MAX: usize = 4;

/// Bytes below this value are ASCII and represent themselves.
pub const RUNE_SELF: u8 = 0x80;

/// U+00AD SOFT HYPHEN.
pub const SOFT_HYPHEN: Rune = 0x00AD;

/// `true` for bytes that cannot begin any UTF-8 sequence.
///
/// # Example
/// ```
/// use dv_core::rune::is_invalid_lead;
/// assert!(is_invalid_lead(0x80));
/// assert!(is_invalid_lead(0xC1));
/// assert!(!is_invalid_lead(0xC2));
/// assert!(is_invalid_lead(0xF5));
/// ```
#[inline(always)]
#[must_use]
pub const fn is_invalid_lead(byte: u8) -> bool {
    matches!(byte, 0x80..=0xC1 | 0xF5..=0xFF)
}

/// `true` for `10xxxxxx` bytes.
#[inline(always)]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Sequence length announced by a lead byte, `None` for invalid leads.
///
/// # Example
/// ```
/// use dv_core::rune::sequence_len;
/// assert_eq!(sequence_len(b'a'), Some(1));
/// assert_eq!(sequence_len(0xC3), Some(2));
/// assert_eq!(sequence_len(0xE2), Some(3));
/// assert_eq!(sequence_len(0xF0), Some(4));
/// assert_eq!(sequence_len(0xFF), None);
/// ```
#[must_use]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_is_classified_once() {
        for b in 0..=255u8 {
            let invalid = is_invalid_lead(b);
            let cont = is_continuation(b);
            match sequence_len(b) {
                Some(_) => assert!(!invalid && !cont, "byte {b:#04x}"),
                None => assert!(invalid, "byte {b:#04x}"),
            }
        }
    }

    #[test]
    fn continuation_range() {
        assert!(is_continuation(0x80));
        assert!(is_continuation(0xBF));
        assert!(!is_continuation(0x7F));
        assert!(!is_continuation(0xC0));
    }
}
