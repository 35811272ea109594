use std::io::{self, BufRead};

/// Forward-only byte reader over a buffered input.
///
/// [`peek`](Self::peek) looks at the next byte through the reader's buffer
/// without consuming it, so the decoder can stop in front of a byte that
/// does not belong to the current sequence without any push-back.
///
/// # Example
/// ```
/// use dv_devolve::source::ByteSource;
/// let mut src = ByteSource::new(&b"ab"[..]);
/// assert_eq!(src.peek().unwrap(), Some(b'a'));
/// assert_eq!(src.next_byte().unwrap(), Some(b'a'));
/// assert_eq!(src.next_byte().unwrap(), Some(b'b'));
/// assert_eq!(src.next_byte().unwrap(), None);
/// assert_eq!(src.consumed(), 2);
/// ```
pub struct ByteSource<R> {
    inner: R,
    consumed: u64,
}

impl<R: BufRead> ByteSource<R> {
    /// Wrap a buffered reader.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Next byte without consuming it, `None` at end of input.
    ///
    /// # Errors
    /// Propagates read errors other than `Interrupted`.
    #[inline]
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume and return the next byte, `None` at end of input.
    ///
    /// # Errors
    /// Propagates read errors other than `Interrupted`.
    #[inline]
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.inner.consume(1);
            self.consumed += 1;
        }
        Ok(byte)
    }

    /// Total bytes consumed so far.
    #[must_use]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read};

    use super::*;

    /// Reader that fails with `Interrupted` once before every real read.
    struct Flaky<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Flaky<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn peek_does_not_consume() {
        let mut src = ByteSource::new(&b"x"[..]);
        assert_eq!(src.peek().unwrap(), Some(b'x'));
        assert_eq!(src.peek().unwrap(), Some(b'x'));
        assert_eq!(src.consumed(), 0);
        assert_eq!(src.next_byte().unwrap(), Some(b'x'));
        assert_eq!(src.peek().unwrap(), None);
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let reader = BufReader::with_capacity(1, Flaky { data: b"abc", interrupt: false });
        let mut src = ByteSource::new(reader);
        let mut seen = Vec::new();
        while let Some(b) = src.next_byte().unwrap() {
            seen.push(b);
        }
        assert_eq!(seen, b"abc");
    }
}
