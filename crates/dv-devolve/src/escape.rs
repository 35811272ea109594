//! Visible escapes for bytes and runes that cannot be devolved.
//!
//! | Condition                   | Escape                 |
//! | --------------------------- | ---------------------- |
//! | invalid lead byte           | `*BAD:xx*`             |
//! | invalid multi-byte sequence | `*BAD*`                |
//! | valid, untranslated rune    | `*U+xxxx=\xNN\xNN...*` |
//!
//! Hex digits are lowercase. Code points use at least four digits.

use std::fmt::Write as _;

use dv_core::rune::Rune;

/// Escape for a sequence that started well but did not decode.
pub const BAD_SEQUENCE: &str = "*BAD*";

/// Escape for a byte that cannot start a sequence.
///
/// # Example
/// ```
/// assert_eq!(dv_devolve::escape::bad_lead(0x80), "*BAD:80*");
/// assert_eq!(dv_devolve::escape::bad_lead(0xFE), "*BAD:fe*");
/// ```
#[must_use]
pub fn bad_lead(byte: u8) -> String {
    format!("*BAD:{byte:02x}*")
}

/// Escape for a valid rune with no table entry: code point, then every raw
/// byte of its encoding.
///
/// # Example
/// ```
/// let s = dv_devolve::escape::untranslated(0xAD, &[0xC2, 0xAD]);
/// assert_eq!(s, "*U+00ad=\\xc2\\xad*");
/// ```
#[must_use]
pub fn untranslated(rune: Rune, bytes: &[u8]) -> String {
    let mut s = format!("*U+{rune:04x}=");
    s.push_str(&hex_bytes(bytes));
    s.push('*');
    s
}

/// `\xNN` for every byte.
#[must_use]
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 4);
    for b in bytes {
        let _ = write!(s, "\\x{b:02x}");
    }
    s
}
