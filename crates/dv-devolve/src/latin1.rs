//! Latin-1 (ISO-8859-1) byte table for 0xA0..=0xFF.
//!
//! Most bytes devolve to a single character, stored inline. Entries with the
//! top bit set are an index (`bytecode - 0x80`) into [`OVERFLOW_STRINGS`],
//! for replacements two characters or longer: the copyright sign becomes
//! `(C)`.

use std::fmt;

/// First byte covered by [`LATIN1_TABLE`].
pub const LATIN1_BASE: u8 = 0xA0;

/// Bytecodes at or above this value index the overflow strings.
const OVERFLOW_BASE: u8 = 0x80;

/// Multi-character replacements, indexed by `bytecode - 0x80`.
pub static OVERFLOW_STRINGS: [&str; 21] = [
    "\\[nbsp]", // 0x80
    "\\[cents]", // 0x81
    "\\[GBP]", // 0x82
    "\\[lozenge]", // 0x83
    "\\[Yen]", // 0x84
    "\\[section]", // 0x85
    "\\[umlaut]", // 0x86
    "(C)", // 0x87
    "<<", // 0x88
    "(R)", // 0x89
    "\\[degree]", // 0x8A
    "\\[+-]", // 0x8B
    "\\[paragraph]", // 0x8C
    ">>", // 0x8D
    "1/4", // 0x8E
    "1/2", // 0x8F
    "3/4", // 0x90
    "AE", // 0x91
    "ae", // 0x92
    "\\[not]", // 0x93
    "\\[macron]", // 0x94
];

/// One bytecode per byte in 0xA0..=0xFF.
pub static LATIN1_TABLE: [u8; 96] = [
    0x80, // 0xA0 -> \[nbsp]
    b'!', // 0xA1 ¡
    0x81, // 0xA2 -> \[cents]
    0x82, // 0xA3 -> \[GBP]
    0x83, // 0xA4 -> \[lozenge]
    0x84, // 0xA5 -> \[Yen]
    b'|', // 0xA6 ¦
    0x85, // 0xA7 -> \[section]
    0x86, // 0xA8 -> \[umlaut]
    0x87, // 0xA9 -> (C)
    b'a', // 0xAA ª
    0x88, // 0xAB -> <<
    0x93, // 0xAC -> \[not]
    b'-', // 0xAD soft hyphen
    0x89, // 0xAE -> (R)
    0x94, // 0xAF -> \[macron]
    0x8A, // 0xB0 -> \[degree]
    0x8B, // 0xB1 -> \[+-]
    b'2', // 0xB2 ²
    b'3', // 0xB3 ³
    b'\'', // 0xB4 ´
    b'u', // 0xB5 µ
    0x8C, // 0xB6 -> \[paragraph]
    b'.', // 0xB7 ·
    b',', // 0xB8 ¸
    b'1', // 0xB9 ¹
    b'o', // 0xBA º
    0x8D, // 0xBB -> >>
    0x8E, // 0xBC -> 1/4
    0x8F, // 0xBD -> 1/2
    0x90, // 0xBE -> 3/4
    b'?', // 0xBF ¿
    b'A', // 0xC0 À
    b'A', // 0xC1 Á
    b'A', // 0xC2 Â
    b'A', // 0xC3 Ã
    b'A', // 0xC4 Ä
    b'A', // 0xC5 Å
    0x91, // 0xC6 -> AE
    b'C', // 0xC7 Ç
    b'E', // 0xC8 È
    b'E', // 0xC9 É
    b'E', // 0xCA Ê
    b'E', // 0xCB Ë
    b'I', // 0xCC Ì
    b'I', // 0xCD Í
    b'I', // 0xCE Î
    b'I', // 0xCF Ï
    b'D', // 0xD0 Ð
    b'N', // 0xD1 Ñ
    b'O', // 0xD2 Ò
    b'O', // 0xD3 Ó
    b'O', // 0xD4 Ô
    b'O', // 0xD5 Õ
    b'O', // 0xD6 Ö
    b'x', // 0xD7 ×
    b'O', // 0xD8 Ø
    b'U', // 0xD9 Ù
    b'U', // 0xDA Ú
    b'U', // 0xDB Û
    b'U', // 0xDC Ü
    b'Y', // 0xDD Ý
    b'P', // 0xDE Þ
    b'B', // 0xDF ß
    b'a', // 0xE0 à
    b'a', // 0xE1 á
    b'a', // 0xE2 â
    b'a', // 0xE3 ã
    b'a', // 0xE4 ä
    b'a', // 0xE5 å
    0x92, // 0xE6 -> ae
    b'c', // 0xE7 ç
    b'e', // 0xE8 è
    b'e', // 0xE9 é
    b'e', // 0xEA ê
    b'e', // 0xEB ë
    b'i', // 0xEC ì
    b'i', // 0xED í
    b'i', // 0xEE î
    b'i', // 0xEF ï
    b'o', // 0xF0 ð
    b'n', // 0xF1 ñ
    b'o', // 0xF2 ò
    b'o', // 0xF3 ó
    b'o', // 0xF4 ô
    b'o', // 0xF5 õ
    b'o', // 0xF6 ö
    b'/', // 0xF7 ÷
    b'o', // 0xF8 ø
    b'u', // 0xF9 ù
    b'u', // 0xFA ú
    b'u', // 0xFB û
    b'u', // 0xFC ü
    b'y', // 0xFD ý
    b'p', // 0xFE þ
    b'y', // 0xFF ÿ
];

/// Devolved form of one Latin-1 byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latin1Replacement {
    /// Single ASCII character, stored inline in the table.
    Inline(u8),
    /// Overflow string, at least two characters.
    Overflow(&'static str),
}

impl Latin1Replacement {
    /// Bytes to write to the output.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Inline(b) => std::slice::from_ref(b),
            Self::Overflow(s) => s.as_bytes(),
        }
    }
}

impl fmt::Display for Latin1Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(b) => write!(f, "{}", char::from(*b)),
            Self::Overflow(s) => f.write_str(s),
        }
    }
}

/// Look up a Latin-1 byte.
///
/// Defined for 0xA0..=0xFF, where every byte has a replacement. Bytes below
/// 0xA0 return `None`: ASCII passes through untouched and 0x80..=0x9F are
/// C1 control codes the table does not cover.
///
/// # Example
/// ```
/// use dv_devolve::latin1::{lookup, Latin1Replacement};
/// assert_eq!(lookup(0xE9), Some(Latin1Replacement::Inline(b'e')));
/// assert_eq!(lookup(0xA9), Some(Latin1Replacement::Overflow("(C)")));
/// assert_eq!(lookup(0x85), None);
/// ```
#[inline]
#[must_use]
pub fn lookup(byte: u8) -> Option<Latin1Replacement> {
    let idx = byte.checked_sub(LATIN1_BASE)?;
    let bytecode = LATIN1_TABLE[usize::from(idx)];
    if bytecode < OVERFLOW_BASE {
        Some(Latin1Replacement::Inline(bytecode))
    } else {
        OVERFLOW_STRINGS
            .get(usize::from(bytecode - OVERFLOW_BASE))
            .copied()
            .map(Latin1Replacement::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_high_byte_has_a_replacement() {
        for b in LATIN1_BASE..=0xFF {
            let rep = lookup(b).unwrap_or_else(|| panic!("0x{b:02X} unmapped"));
            assert!(!rep.as_bytes().is_empty());
            assert!(rep.as_bytes().iter().all(|c| (0x20..0x7F).contains(c)), "0x{b:02X}");
        }
    }

    #[test]
    fn overflow_strings_are_long() {
        for s in OVERFLOW_STRINGS {
            assert!(s.len() >= 2, "{s:?}");
        }
    }

    #[test]
    fn every_overflow_string_is_referenced() {
        for i in 0..OVERFLOW_STRINGS.len() {
            let code = OVERFLOW_BASE + i as u8;
            assert!(LATIN1_TABLE.contains(&code), "overflow 0x{code:02X} unused");
        }
    }

    #[test]
    fn below_table_is_none() {
        assert_eq!(lookup(b'a'), None);
        assert_eq!(lookup(0x80), None);
        assert_eq!(lookup(0x9F), None);
    }

    #[test]
    fn sample_replacements() {
        assert_eq!(lookup(0xC6).unwrap().to_string(), "AE");
        assert_eq!(lookup(0xDF).unwrap().to_string(), "B");
        assert_eq!(lookup(0xBD).unwrap().to_string(), "1/2");
        assert_eq!(lookup(0xA0).unwrap().to_string(), "\\[nbsp]");
        assert_eq!(lookup(0xFF).unwrap().to_string(), "y");
    }
}
