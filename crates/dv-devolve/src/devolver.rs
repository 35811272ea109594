use std::fmt;
use std::io::{self, BufRead, Write};

use dv_core::charset::Charset;
use dv_core::config::DevolveOptions;
use dv_core::rune::{RUNE_SELF, Rune, SOFT_HYPHEN, is_invalid_lead};

use crate::context::{FileContext, Status};
use crate::decode::{DecodeOutcome, decode};
use crate::error::DevolveError;
use crate::escape;
use crate::latin1;
use crate::source::ByteSource;
use crate::stats;
use crate::table::RuneTable;

/// Soft hyphen in Latin-1.
const LATIN1_SOFT_HYPHEN: u8 = 0xAD;

/// 1-based position of the first byte of a unit, for traces.
#[derive(Clone, Copy, Debug)]
struct Location {
    line: u64,
    col: u64,
}

impl Location {
    fn of(ctx: &FileContext) -> Self {
        Self {
            line: ctx.line_number(),
            col: ctx.column() + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.col)
    }
}

/// Output and diagnostic sinks of one pass.
struct Sinks<'s, W, D> {
    out: &'s mut W,
    diag: &'s mut D,
}

impl<W: Write, D: Write> Sinks<'_, W, D> {
    #[inline(always)]
    fn emit(&mut self, bytes: &[u8]) -> Result<(), DevolveError> {
        self.out.write_all(bytes).map_err(DevolveError::Write)
    }

    fn trace(&mut self, args: fmt::Arguments<'_>) -> Result<(), DevolveError> {
        writeln!(self.diag, "{args}").map_err(DevolveError::Diagnostic)
    }
}

fn read_error(ctx: &FileContext, source: io::Error) -> DevolveError {
    DevolveError::Read {
        name: ctx.name().to_string(),
        source,
    }
}

#[inline(always)]
fn next_byte<R: BufRead>(
    source: &mut ByteSource<R>,
    ctx: &FileContext,
) -> Result<Option<u8>, DevolveError> {
    source.next_byte().map_err(|e| read_error(ctx, e))
}

/// Drives one pass over an input: reads bytes, devolves them, writes the
/// result and keeps the file's counters.
///
/// # Example
/// ```
/// use dv_core::config::DevolveOptions;
/// use dv_devolve::context::{FileContext, FilePosition, Status};
/// use dv_devolve::devolver::Devolver;
///
/// let options = DevolveOptions::default();
/// let devolver = Devolver::new(&options);
/// let mut ctx = FileContext::new("-", FilePosition::single(), 0);
/// let (mut out, mut diag) = (Vec::new(), Vec::new());
/// let status = devolver
///     .devolve_stream("Café\n".as_bytes(), &mut ctx, &mut out, &mut diag)
///     .unwrap();
/// assert_eq!(out, b"Cafe\n");
/// assert_eq!(status, Status::Clean);
/// assert_eq!(ctx.counts().totals.translated, 1);
/// ```
pub struct Devolver<'a> {
    options: &'a DevolveOptions,
    table: &'a RuneTable,
}

impl<'a> Devolver<'a> {
    /// Devolver over the built-in translation table.
    #[must_use]
    pub fn new(options: &'a DevolveOptions) -> Self {
        Self::with_table(options, RuneTable::builtin())
    }

    /// Devolver over a caller-provided UTF-8 table.
    #[must_use]
    pub fn with_table(options: &'a DevolveOptions, table: &'a RuneTable) -> Self {
        Self { options, table }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &DevolveOptions {
        self.options
    }

    /// Devolve `input` to `out` until end of input.
    ///
    /// Malformed input never stops the pass: it is escaped, counted in
    /// `ctx`, and reflected in the returned [`Status`]. Traces go to `diag`.
    /// `out` is flushed, never closed.
    ///
    /// # Errors
    /// Returns an error if reading `input` or writing to either sink fails.
    pub fn devolve_stream<R: BufRead, W: Write, D: Write>(
        &self,
        input: R,
        ctx: &mut FileContext,
        out: &mut W,
        diag: &mut D,
    ) -> Result<Status, DevolveError> {
        let pos = ctx.position();
        log::debug!(
            "Passe {} ({}) : fichier {}/{}",
            ctx.name(),
            self.options.charset,
            pos.index + 1,
            pos.count
        );

        let mut source = ByteSource::new(input);
        let mut sinks = Sinks { out, diag };
        match self.options.charset {
            Charset::Utf8 => self.devolve_utf8(&mut source, ctx, &mut sinks)?,
            Charset::Latin1 => self.devolve_latin1(&mut source, ctx, &mut sinks)?,
        }
        ctx.finish();
        sinks.out.flush().map_err(DevolveError::Write)?;

        log::debug!(
            "Fin de {} : {} octets lus, {} lignes, {:?}",
            ctx.name(),
            source.consumed(),
            ctx.counts().lines,
            ctx.counts().totals
        );
        Ok(ctx.status())
    }

    /// [`devolve_stream`](Self::devolve_stream), then report the counts to
    /// `diag` if the options ask for them.
    ///
    /// # Errors
    /// Same as [`devolve_stream`](Self::devolve_stream).
    pub fn devolve_file<R: BufRead, W: Write, D: Write>(
        &self,
        input: R,
        ctx: &mut FileContext,
        out: &mut W,
        diag: &mut D,
    ) -> Result<Status, DevolveError> {
        let status = self.devolve_stream(input, ctx, out, diag)?;
        stats::report_counts(ctx, self.options, diag).map_err(DevolveError::Diagnostic)?;
        Ok(status)
    }

    fn devolve_utf8<R: BufRead, W: Write, D: Write>(
        &self,
        source: &mut ByteSource<R>,
        ctx: &mut FileContext,
        sinks: &mut Sinks<'_, W, D>,
    ) -> Result<(), DevolveError> {
        while let Some(byte) = next_byte(source, ctx)? {
            if byte == b'\n' {
                sinks.emit(b"\n")?;
                ctx.end_line();
                continue;
            }
            if byte < RUNE_SELF {
                sinks.emit(&[byte])?;
                ctx.advance(1);
                continue;
            }

            let at = Location::of(ctx);
            if is_invalid_lead(byte) {
                // Resync on the very next byte, the decoder is not involved.
                ctx.advance(1);
                ctx.line_tallies_mut().eight_bit += 1;
                self.bad_byte(byte, at, ctx, sinks)?;
                continue;
            }

            let decoded = decode(source, Some(byte)).map_err(|e| read_error(ctx, e))?;
            ctx.advance(decoded.len());
            ctx.line_tallies_mut().eight_bit += decoded.high_bit_count() as u64;

            match decoded.outcome {
                DecodeOutcome::Rune(rune) => {
                    self.emit_rune(rune, decoded.bytes(), at, ctx, sinks)?;
                }
                DecodeOutcome::Invalid => {
                    sinks.emit(escape::BAD_SEQUENCE.as_bytes())?;
                    ctx.line_tallies_mut().invalid += 1;
                    if self.options.trace_errors {
                        let bytes = escape::hex_bytes(decoded.bytes());
                        sinks.trace(format_args!("Invalid sequence @ {at}, {bytes}"))?;
                    }
                }
                DecodeOutcome::InvalidLead(b) => self.bad_byte(b, at, ctx, sinks)?,
                DecodeOutcome::EndOfInput => break,
            }
        }
        Ok(())
    }

    fn emit_rune<W: Write, D: Write>(
        &self,
        rune: Rune,
        bytes: &[u8],
        at: Location,
        ctx: &mut FileContext,
        sinks: &mut Sinks<'_, W, D>,
    ) -> Result<(), DevolveError> {
        if self.options.soft_hyphen_as_hyphen && rune == SOFT_HYPHEN {
            sinks.emit(b"-")?;
            ctx.line_tallies_mut().translated += 1;
        } else if let Some(text) = self.table.lookup(rune) {
            sinks.emit(text.as_bytes())?;
            ctx.line_tallies_mut().translated += 1;
            if self.options.trace_conversions {
                sinks.trace(format_args!("Conversion @ {at}, U+{rune:04X} -> '{text}'"))?;
            }
        } else {
            sinks.emit(escape::untranslated(rune, bytes).as_bytes())?;
            ctx.line_tallies_mut().untranslated += 1;
            if self.options.trace_untranslated {
                let bytes = escape::hex_bytes(bytes);
                sinks.trace(format_args!("Untranslated @ {at}, U+{rune:04X} = {bytes}"))?;
            }
        }
        Ok(())
    }

    fn bad_byte<W: Write, D: Write>(
        &self,
        byte: u8,
        at: Location,
        ctx: &mut FileContext,
        sinks: &mut Sinks<'_, W, D>,
    ) -> Result<(), DevolveError> {
        sinks.emit(escape::bad_lead(byte).as_bytes())?;
        ctx.line_tallies_mut().invalid += 1;
        if self.options.trace_errors {
            sinks.trace(format_args!("Invalid byte @ {at}, 0x{byte:02x}"))?;
        }
        Ok(())
    }

    fn devolve_latin1<R: BufRead, W: Write, D: Write>(
        &self,
        source: &mut ByteSource<R>,
        ctx: &mut FileContext,
        sinks: &mut Sinks<'_, W, D>,
    ) -> Result<(), DevolveError> {
        while let Some(byte) = next_byte(source, ctx)? {
            if byte == b'\n' {
                sinks.emit(b"\n")?;
                ctx.end_line();
                continue;
            }
            if byte < RUNE_SELF {
                sinks.emit(&[byte])?;
                ctx.advance(1);
                continue;
            }

            let at = Location::of(ctx);
            ctx.advance(1);
            ctx.line_tallies_mut().eight_bit += 1;

            if self.options.soft_hyphen_as_hyphen && byte == LATIN1_SOFT_HYPHEN {
                sinks.emit(b"-")?;
                ctx.line_tallies_mut().translated += 1;
                continue;
            }
            match latin1::lookup(byte) {
                Some(rep) => {
                    sinks.emit(rep.as_bytes())?;
                    ctx.line_tallies_mut().translated += 1;
                    if self.options.trace_conversions {
                        sinks.trace(format_args!("Conversion @ {at}, U+{byte:04X} -> '{rep}'"))?;
                    }
                }
                // 0x80..=0x9F: C1 controls, escaped like an invalid UTF-8 lead byte.
                None => self.bad_byte(byte, at, ctx, sinks)?,
            }
        }
        Ok(())
    }
}
