use std::ops::AddAssign;

/// One counter per category of non-ASCII input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tallies {
    /// Bytes with the high bit set.
    pub eight_bit: u64,
    /// Runes (or Latin-1 bytes) replaced from a table.
    pub translated: u64,
    /// Invalid lead bytes, invalid sequences, Latin-1 C1 bytes.
    pub invalid: u64,
    /// Valid runes with no table entry.
    pub untranslated: u64,
}

impl Tallies {
    /// `1` for every nonzero category, `0` otherwise.
    #[must_use]
    pub fn presence(&self) -> Self {
        Self {
            eight_bit: u64::from(self.eight_bit > 0),
            translated: u64::from(self.translated > 0),
            invalid: u64::from(self.invalid > 0),
            untranslated: u64::from(self.untranslated > 0),
        }
    }

    /// All categories zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for Tallies {
    fn add_assign(&mut self, rhs: Self) {
        self.eight_bit += rhs.eight_bit;
        self.translated += rhs.translated;
        self.invalid += rhs.invalid;
        self.untranslated += rhs.untranslated;
    }
}

/// End-of-file counts for one input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileCounts {
    /// Newline bytes seen.
    pub lines: u64,
    /// Totals per category.
    pub totals: Tallies,
    /// Lines containing at least one unit of each category.
    pub lines_with: Tallies,
}

/// Where a file sits in a multi-file run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilePosition {
    /// Zero-based index in the file list.
    pub index: usize,
    /// Number of files in the run.
    pub count: usize,
}

impl FilePosition {
    /// Position of the only file of a run.
    #[must_use]
    pub const fn single() -> Self {
        Self { index: 0, count: 1 }
    }
}

/// Outcome of one file pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No invalid byte or sequence.
    Clean,
    /// At least one invalid byte or sequence was escaped.
    Invalid,
}

impl Status {
    /// `0` for a clean pass, `1` otherwise.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::Invalid => 1,
        }
    }

    /// Worst of two statuses.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        if self == Self::Invalid || other == Self::Invalid {
            Self::Invalid
        } else {
            Self::Clean
        }
    }
}

/// Mutable state of one file pass.
///
/// Created when the pass begins and handed back to the caller when it ends,
/// so counts can be reported and the cumulative line number carried over to
/// the next file.
///
/// # Example
/// ```
/// use dv_devolve::context::{FileContext, FilePosition};
/// let ctx = FileContext::new("notes.txt", FilePosition::single(), 0);
/// assert_eq!(ctx.name(), "notes.txt");
/// assert_eq!(ctx.line_number(), 1);
/// assert_eq!(ctx.counts().lines, 0);
/// ```
#[derive(Clone, Debug)]
pub struct FileContext {
    name: String,
    position: FilePosition,
    global_line: u64,
    column: u64,
    line_tallies: Tallies,
    counts: FileCounts,
}

impl FileContext {
    /// Fresh context; `global_line` is the number of lines already seen in
    /// earlier files of the run.
    #[must_use]
    pub fn new(name: impl Into<String>, position: FilePosition, global_line: u64) -> Self {
        Self {
            name: name.into(),
            position,
            global_line,
            column: 0,
            line_tallies: Tallies::default(),
            counts: FileCounts::default(),
        }
    }

    /// Display name of the input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the run.
    #[must_use]
    pub fn position(&self) -> FilePosition {
        self.position
    }

    /// 1-based number of the current line in this file.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.counts.lines + 1
    }

    /// Lines completed across the whole run so far.
    #[must_use]
    pub fn global_line(&self) -> u64 {
        self.global_line
    }

    /// Bytes consumed on the current line.
    #[must_use]
    pub fn column(&self) -> u64 {
        self.column
    }

    /// Counts folded so far. Complete once the pass is finished.
    #[must_use]
    pub fn counts(&self) -> &FileCounts {
        &self.counts
    }

    /// Status implied by the counts so far.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.counts.totals.invalid + self.line_tallies.invalid > 0 {
            Status::Invalid
        } else {
            Status::Clean
        }
    }

    /// Tallies of the line in progress.
    pub(crate) fn line_tallies_mut(&mut self) -> &mut Tallies {
        &mut self.line_tallies
    }

    /// Account for `n` raw bytes consumed on the current line.
    #[inline(always)]
    pub(crate) fn advance(&mut self, n: usize) {
        self.column += n as u64;
    }

    /// Newline seen: fold the line and start the next one.
    pub(crate) fn end_line(&mut self) {
        self.fold_line();
        self.counts.lines += 1;
        self.global_line += 1;
        self.column = 0;
    }

    /// End of input: fold whatever the last partial line holds.
    pub(crate) fn finish(&mut self) {
        self.fold_line();
    }

    fn fold_line(&mut self) {
        let line = std::mem::take(&mut self.line_tallies);
        self.counts.totals += line;
        self.counts.lines_with += line.presence();
    }
}
