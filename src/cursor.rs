use crate::error::ParseError;
use crate::source::{Rewind, Source};
use crate::symbol::Symbol;
use std::borrow::Cow;

/// Reported cursor position, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number
    pub row: u32,
    /// 1-based visible column of the buffered symbol
    pub col: u32,
    /// Number of symbols consumed so far
    pub byte_count: usize,
}

/// Single-owner read head over a [`Source`].
///
/// The cursor buffers exactly one symbol of lookahead and tracks the byte
/// count plus the row and column used in diagnostics. Column bookkeeping
/// follows the printable-only rule: when a freshly buffered symbol is a
/// newline the row advances and the column resets to the line start; when
/// it is printable the column advances; control characters leave the
/// visible column alone.
///
/// A cursor is exclusively owned by one in-flight parse and is not shared
/// between threads. Dropping it releases the underlying source.
pub struct Cursor<S> {
    source: S,
    sym: Symbol,
    byte_count: usize,
    row: u32,
    col: u32,
}

/// Saved cursor state for sources that support rewinding.
///
/// Snapshots the source's own mark together with the buffered symbol and
/// the position counters, so a restore recovers the cursor exactly.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint<M> {
    mark: M,
    sym: Symbol,
    byte_count: usize,
    row: u32,
    col: u32,
}

impl<S: Source> Cursor<S> {
    /// Create a cursor and buffer the first symbol
    pub fn new(mut source: S) -> Self {
        let sym = source.next();
        Cursor {
            source,
            sym,
            byte_count: 0,
            row: 1,
            col: 1,
        }
    }

    /// The buffered lookahead; does not advance
    pub fn peek(&self) -> Symbol {
        self.sym
    }

    /// Discard the buffered symbol and read the next one.
    ///
    /// A no-op at end of input, so the counters freeze once the source is
    /// exhausted and every loop over advances terminates on finite input.
    pub fn advance(&mut self) {
        if self.sym.is_end() {
            return;
        }
        self.sym = self.source.next();
        self.byte_count += 1;
        if self.sym == Symbol::Byte(b'\n') {
            self.row += 1;
            self.col = 0;
        } else if self.sym.is_printable() {
            self.col += 1;
        }
    }

    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            col: self.col,
            byte_count: self.byte_count,
        }
    }

    /// Number of symbols consumed; combinators compare this to detect
    /// whether a child parser consumed input
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Construct a parse error at the current position
    pub fn fail(&self, message: impl Into<Cow<'static, str>>, expected: &str) -> ParseError {
        ParseError::new(message, expected, self.row, self.col, self.sym)
    }
}

impl<S: Rewind> Cursor<S> {
    /// Save the complete cursor state
    pub fn checkpoint(&self) -> Checkpoint<S::Mark> {
        Checkpoint {
            mark: self.source.mark(),
            sym: self.sym,
            byte_count: self.byte_count,
            row: self.row,
            col: self.col,
        }
    }

    /// Rewind to a previously saved state
    pub fn restore(&mut self, checkpoint: Checkpoint<S::Mark>) {
        self.source.rewind(checkpoint.mark);
        self.sym = checkpoint.sym;
        self.byte_count = checkpoint.byte_count;
        self.row = checkpoint.row;
        self.col = checkpoint.col;
    }
}
