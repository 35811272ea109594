//! Range-segmented UTF-8 → ASCII translation table.
//!
//! The table is a short list of contiguous code-point ranges, each with its
//! own array of replacements. Lookup is a linear scan that stops as soon as
//! the rune falls below a segment start.

mod segments;

use dv_core::rune::{RUNE_MAX, Rune};

/// One contiguous range of code points sharing a translation array.
#[derive(Debug)]
pub struct Segment {
    start: Rune,
    translations: &'static [Option<&'static str>],
}

impl Segment {
    /// Segment covering `start..start + translations.len()`.
    #[must_use]
    pub const fn new(start: Rune, translations: &'static [Option<&'static str>]) -> Self {
        Self {
            start,
            translations,
        }
    }

    /// First code point covered.
    #[must_use]
    pub const fn start(&self) -> Rune {
        self.start
    }

    /// Number of code points covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.translations.len()
    }

    /// `true` for a segment covering nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// One past the last code point covered.
    #[must_use]
    pub const fn end(&self) -> Rune {
        self.start + self.translations.len() as Rune
    }

    /// Replacement array, indexed by `rune - start`.
    #[must_use]
    pub const fn translations(&self) -> &'static [Option<&'static str>] {
        self.translations
    }
}

/// Immutable set of segments, sorted ascending and non-overlapping.
///
/// # Example
/// ```
/// use dv_devolve::table::RuneTable;
/// let table = RuneTable::builtin();
/// assert_eq!(table.lookup(0xE9), Some("e"));
/// assert_eq!(table.lookup(0x00A9), Some("(C)"));
/// assert_eq!(table.lookup(0x4E2D), None);
/// ```
#[derive(Debug)]
pub struct RuneTable {
    segments: &'static [Segment],
}

static BUILTIN: RuneTable = RuneTable::new(segments::SEGMENTS);

impl RuneTable {
    /// Table over caller-provided segments.
    ///
    /// Segments must be sorted and disjoint; see [`is_well_formed`](Self::is_well_formed).
    #[must_use]
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// The table shipped with the crate.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Segments in ascending order.
    #[must_use]
    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// ASCII replacement for `rune`, `None` when unmapped.
    ///
    /// `Some("")` means the rune is translated to nothing.
    #[must_use]
    pub fn lookup(&self, rune: Rune) -> Option<&'static str> {
        for seg in self.segments {
            if rune < seg.start {
                // Segments only go up from here.
                return None;
            }
            if rune < seg.end() {
                return seg.translations[(rune - seg.start) as usize];
            }
        }
        None
    }

    /// Sorted, non-overlapping, no empty segment, nothing past U+10FFFF.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.segments.iter().all(|s| !s.is_empty() && s.end() <= RUNE_MAX + 1)
            && self.segments.windows(2).all(|w| w[0].end() <= w[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SMALL_A: [Option<&str>; 3] = [Some("a"), None, Some("c")];
    static SMALL_B: [Option<&str>; 2] = [Some("x"), Some("yy")];
    static SMALL: [Segment; 2] = [Segment::new(0x100, &SMALL_A), Segment::new(0x200, &SMALL_B)];

    /// Reference lookup: scan every segment, no early exit.
    fn brute_force(table: &RuneTable, rune: Rune) -> Option<&'static str> {
        let hits: Vec<_> = table
            .segments()
            .iter()
            .filter(|s| (s.start()..s.end()).contains(&rune))
            .collect();
        assert!(hits.len() <= 1, "U+{rune:04X} claimed by {} segments", hits.len());
        hits.first().and_then(|s| s.translations()[(rune - s.start()) as usize])
    }

    #[test]
    fn builtin_is_well_formed() {
        assert!(RuneTable::builtin().is_well_formed());
    }

    #[test]
    fn builtin_output_is_printable_ascii() {
        for seg in RuneTable::builtin().segments() {
            for text in seg.translations().iter().flatten() {
                assert!(
                    text.bytes().all(|b| (0x20..0x7F).contains(&b)),
                    "non-ASCII replacement {text:?} in segment U+{:04X}",
                    seg.start()
                );
            }
        }
    }

    #[test]
    fn small_table_lookup() {
        let table = RuneTable::new(&SMALL);
        assert!(table.is_well_formed());
        assert_eq!(table.lookup(0xFF), None);
        assert_eq!(table.lookup(0x100), Some("a"));
        assert_eq!(table.lookup(0x101), None);
        assert_eq!(table.lookup(0x102), Some("c"));
        assert_eq!(table.lookup(0x103), None);
        assert_eq!(table.lookup(0x201), Some("yy"));
        assert_eq!(table.lookup(0x202), None);
    }

    #[test]
    fn lookup_matches_brute_force() {
        let table = RuneTable::builtin();
        for rune in (0..0x3000).chain(0xFB00..0x1_0000) {
            assert_eq!(table.lookup(rune), brute_force(table, rune), "U+{rune:04X}");
        }
    }

    #[test]
    fn overlapping_segments_are_detected() {
        static OVERLAP: [Segment; 2] =
            [Segment::new(0x100, &SMALL_A), Segment::new(0x102, &SMALL_B)];
        assert!(!RuneTable::new(&OVERLAP).is_well_formed());
    }

    #[test]
    fn well_known_translations() {
        let table = RuneTable::builtin();
        assert_eq!(table.lookup(0x00AD), None);
        assert_eq!(table.lookup(0x0153), Some("oe"));
        assert_eq!(table.lookup(0x2014), Some("--"));
        assert_eq!(table.lookup(0x201C), Some("\""));
        assert_eq!(table.lookup(0x2026), Some("..."));
        assert_eq!(table.lookup(0x20AC), Some("EUR"));
        assert_eq!(table.lookup(0x2122), Some("TM"));
        assert_eq!(table.lookup(0x00BD), Some("1/2"));
        assert_eq!(table.lookup(0xFB01), Some("fi"));
        assert_eq!(table.lookup(0xFEFF), Some(""));
        assert_eq!(table.lookup(0xFF21), Some("A"));
    }
}
