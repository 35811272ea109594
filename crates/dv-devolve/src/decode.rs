use std::io::{self, BufRead};

use dv_core::rune::{RUNE_SELF, Rune, UTF_MAX, is_continuation, sequence_len};

use crate::source::ByteSource;

/// What one call to [`decode`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A complete, well-formed sequence.
    Rune(Rune),
    /// Valid lead byte, but the sequence is truncated, interrupted by a
    /// non-continuation byte, overlong, a surrogate, or above U+10FFFF.
    Invalid,
    /// The byte can never start a UTF-8 sequence. Exactly one byte consumed.
    InvalidLead(u8),
    /// Nothing left to read.
    EndOfInput,
}

/// Outcome of a decode plus the raw bytes it consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded rune, or the reason there is none.
    pub outcome: DecodeOutcome,
    buf: [u8; UTF_MAX],
    len: usize,
}

impl Decoded {
    fn with_outcome(outcome: DecodeOutcome) -> Self {
        Self {
            outcome,
            buf: [0; UTF_MAX],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Raw bytes consumed, lead byte included.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of bytes consumed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when nothing was consumed (end of input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes with the high bit set among those consumed.
    #[must_use]
    pub fn high_bit_count(&self) -> usize {
        self.bytes().iter().filter(|&&b| b >= RUNE_SELF).count()
    }
}

/// Decode one code point from `source`.
///
/// `pre_read` is a lead byte the caller already took off the source; when
/// `None` the lead byte is read here. Continuation bytes are only consumed
/// while they look like continuation bytes, so a stray ASCII byte after a
/// truncated sequence is left for the caller. At most [`UTF_MAX`] bytes are
/// consumed.
///
/// # Errors
/// Propagates read errors from the source.
///
/// # Example
/// ```
/// use dv_devolve::decode::{decode, DecodeOutcome};
/// use dv_devolve::source::ByteSource;
///
/// let mut src = ByteSource::new(&[0xC3, 0xA9, b'!'][..]);
/// let d = decode(&mut src, None).unwrap();
/// assert_eq!(d.outcome, DecodeOutcome::Rune(0xE9));
/// assert_eq!(d.bytes(), &[0xC3, 0xA9]);
/// assert_eq!(d.high_bit_count(), 2);
/// ```
pub fn decode<R: BufRead>(
    source: &mut ByteSource<R>,
    pre_read: Option<u8>,
) -> io::Result<Decoded> {
    let lead = match pre_read {
        Some(b) => b,
        None => match source.next_byte()? {
            Some(b) => b,
            None => return Ok(Decoded::with_outcome(DecodeOutcome::EndOfInput)),
        },
    };

    let mut decoded = Decoded::with_outcome(DecodeOutcome::Invalid);
    decoded.push(lead);

    let Some(expected) = sequence_len(lead) else {
        decoded.outcome = DecodeOutcome::InvalidLead(lead);
        return Ok(decoded);
    };

    loop {
        if decoded.len == expected {
            decoded.outcome = complete(decoded.bytes());
            return Ok(decoded);
        }
        match source.peek()? {
            Some(b) if is_continuation(b) => {
                source.next_byte()?;
                decoded.push(b);
            }
            // Truncated: end of input or a byte that starts something else.
            _ => return Ok(decoded),
        }
    }
}

/// Check a buffer whose length matches its lead byte.
fn complete(bytes: &[u8]) -> DecodeOutcome {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.chars().next())
        .map_or(DecodeOutcome::Invalid, |ch| DecodeOutcome::Rune(Rune::from(ch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(input: &[u8]) -> Vec<(DecodeOutcome, usize)> {
        let mut src = ByteSource::new(input);
        let mut out = Vec::new();
        loop {
            let d = decode(&mut src, None).unwrap();
            if d.outcome == DecodeOutcome::EndOfInput {
                break;
            }
            out.push((d.outcome, d.len()));
        }
        out
    }

    #[test]
    fn ascii_and_multibyte() {
        let input = "aé€😀".as_bytes();
        assert_eq!(
            decode_all(input),
            vec![
                (DecodeOutcome::Rune(0x61), 1),
                (DecodeOutcome::Rune(0xE9), 2),
                (DecodeOutcome::Rune(0x20AC), 3),
                (DecodeOutcome::Rune(0x1F600), 4),
            ]
        );
    }

    #[test]
    fn pre_read_lead_byte() {
        let mut src = ByteSource::new(&[0x82, 0xAC][..]);
        let d = decode(&mut src, Some(0xE2)).unwrap();
        assert_eq!(d.outcome, DecodeOutcome::Rune(0x20AC));
        assert_eq!(d.bytes(), &[0xE2, 0x82, 0xAC]);
        assert_eq!(src.consumed(), 2);
    }

    #[test]
    fn invalid_lead_consumes_one_byte() {
        let mut src = ByteSource::new(&[0x80, b'a'][..]);
        let d = decode(&mut src, None).unwrap();
        assert_eq!(d.outcome, DecodeOutcome::InvalidLead(0x80));
        assert_eq!(d.len(), 1);
        assert_eq!(src.next_byte().unwrap(), Some(b'a'));
    }

    #[test]
    fn truncated_by_end_of_input() {
        let mut src = ByteSource::new(&[0xE2, 0x82][..]);
        let d = decode(&mut src, None).unwrap();
        assert_eq!(d.outcome, DecodeOutcome::Invalid);
        assert_eq!(d.bytes(), &[0xE2, 0x82]);
        assert_eq!(decode(&mut src, None).unwrap().outcome, DecodeOutcome::EndOfInput);
    }

    #[test]
    fn interrupting_byte_is_left_unread() {
        let mut src = ByteSource::new(&[0xC3, b'\n'][..]);
        let d = decode(&mut src, None).unwrap();
        assert_eq!(d.outcome, DecodeOutcome::Invalid);
        assert_eq!(d.len(), 1);
        assert_eq!(src.next_byte().unwrap(), Some(b'\n'));
    }

    #[test]
    fn overlong_surrogate_and_out_of_range_are_invalid() {
        // E0 80 80: overlong NUL. ED A0 80: U+D800. F4 90 80 80: U+110000.
        let cases: [&[u8]; 3] = [&[0xE0, 0x80, 0x80], &[0xED, 0xA0, 0x80], &[0xF4, 0x90, 0x80, 0x80]];
        for seq in cases {
            let mut src = ByteSource::new(seq);
            let d = decode(&mut src, None).unwrap();
            assert_eq!(d.outcome, DecodeOutcome::Invalid, "{seq:02x?}");
            assert_eq!(d.len(), seq.len());
        }
    }

    #[test]
    fn never_more_than_four_bytes() {
        let input = [0xF0, 0x9F, 0x98, 0x80, 0x80];
        let mut src = ByteSource::new(&input[..]);
        let d = decode(&mut src, None).unwrap();
        assert_eq!(d.len(), 4);
        assert_eq!(d.outcome, DecodeOutcome::Rune(0x1F600));
        assert_eq!(src.consumed(), 4);
    }

    #[test]
    fn high_bit_count_on_invalid_sequence() {
        let mut src = ByteSource::new(&[0xE2, 0x82, b'x'][..]);
        let d = decode(&mut src, None).unwrap();
        assert_eq!(d.outcome, DecodeOutcome::Invalid);
        assert_eq!(d.high_bit_count(), 2);
    }
}
