//! End-of-file counts report.

use std::io::{self, Write};

use dv_core::config::DevolveOptions;

use crate::context::{FileContext, FileCounts};

/// Write the counts of `ctx` to `diag` if `options` ask for them.
///
/// Returns `true` when a report was written.
///
/// # Errors
/// Propagates write errors from `diag`.
pub fn report_counts<D: Write>(
    ctx: &FileContext,
    options: &DevolveOptions,
    diag: &mut D,
) -> io::Result<bool> {
    if !options.wants_counts(ctx.counts().totals.eight_bit) {
        return Ok(false);
    }
    write_counts(ctx, diag)?;
    Ok(true)
}

/// Write the counts block of one file, unconditionally.
///
/// The header names the file, prefixed by `[i/n]` in a multi-file run.
///
/// # Errors
/// Propagates write errors from `diag`.
///
/// # Example
/// ```
/// use dv_devolve::context::{FileContext, FilePosition};
/// use dv_devolve::stats::write_counts;
///
/// let ctx = FileContext::new("empty.txt", FilePosition::single(), 0);
/// let mut diag = Vec::new();
/// write_counts(&ctx, &mut diag).unwrap();
/// assert!(String::from_utf8(diag).unwrap().starts_with("empty.txt:\n"));
/// ```
pub fn write_counts<D: Write>(ctx: &FileContext, diag: &mut D) -> io::Result<()> {
    let FileCounts {
        lines,
        totals,
        lines_with,
    } = *ctx.counts();
    let pos = ctx.position();

    if pos.count > 1 {
        writeln!(diag, "[{}/{}] {}:", pos.index + 1, pos.count, ctx.name())?;
    } else {
        writeln!(diag, "{}:", ctx.name())?;
    }
    writeln!(diag, "  {:<14}{lines:>10}", "lines")?;

    let rows = [
        ("8-bit bytes", totals.eight_bit, lines_with.eight_bit),
        ("translated", totals.translated, lines_with.translated),
        ("invalid", totals.invalid, lines_with.invalid),
        ("untranslated", totals.untranslated, lines_with.untranslated),
    ];
    for (label, total, with) in rows {
        let plural = if with == 1 { "" } else { "s" };
        writeln!(diag, "  {label:<14}{total:>10}  on {with} line{plural}")?;
    }
    diag.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FilePosition;
    use crate::devolver::Devolver;

    fn counted(name: &str, position: FilePosition, input: &[u8]) -> FileContext {
        let options = DevolveOptions::default();
        let mut ctx = FileContext::new(name, position, 0);
        Devolver::new(&options)
            .devolve_stream(input, &mut ctx, &mut io::sink(), &mut io::sink())
            .unwrap();
        ctx
    }

    #[test]
    fn report_layout() {
        let ctx = counted("a.txt", FilePosition::single(), b"\xC3\xA9\x80\n\xE4\xB8\xAD\nabc\n");
        let mut diag = Vec::new();
        write_counts(&ctx, &mut diag).unwrap();
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "a.txt:\n\
             \x20 lines                  3\n\
             \x20 8-bit bytes            6  on 2 lines\n\
             \x20 translated             1  on 1 line\n\
             \x20 invalid                1  on 1 line\n\
             \x20 untranslated           1  on 1 line\n"
        );
    }

    #[test]
    fn multi_file_header() {
        let ctx = counted("b.txt", FilePosition { index: 1, count: 3 }, b"x");
        let mut diag = Vec::new();
        write_counts(&ctx, &mut diag).unwrap();
        let text = String::from_utf8(diag).unwrap();
        assert!(text.starts_with("[2/3] b.txt:\n"));
        assert!(text.contains("8-bit bytes            0  on 0 lines"));
    }

    #[test]
    fn gated_by_options() {
        let ctx = counted("c", FilePosition::single(), b"plain\n");
        let mut diag = Vec::new();

        let off = DevolveOptions::default();
        assert!(!report_counts(&ctx, &off, &mut diag).unwrap());

        let eight_bit_only = DevolveOptions { show_8bit_only: true, ..Default::default() };
        assert!(!report_counts(&ctx, &eight_bit_only, &mut diag).unwrap());
        assert!(diag.is_empty());

        let always = DevolveOptions { show_counts: true, ..Default::default() };
        assert!(report_counts(&ctx, &always, &mut diag).unwrap());
        assert!(!diag.is_empty());
    }
}
