use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Rewind;

/// Explicit backtracking for rewindable sources.
///
/// Checkpoints the cursor, runs the child, and restores the checkpoint
/// when the child fails, turning a committed failure back into a
/// non-consuming one that choice and repetition can recover from. This
/// is the only place the core rewinds; everywhere else it commits on
/// first consumption.
///
/// Restoration covers the cursor only. A child that appended to the slot
/// before failing leaves those writes behind; wrap the child in
/// [`discard`](crate::discard::discard) or reduce through
/// [`all`](crate::all::all) when that matters.
///
/// Hard failures pass through unrewound, carrying their diagnostic
/// position.
#[derive(Debug, Clone)]
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<P> IsParser for Attempt<P> {}

impl<S: Rewind, P: Parser<S>> Parser<S> for Attempt<P> {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<S>,
        slot: Option<&mut Self::Output>,
    ) -> Result<bool, ParseError> {
        let saved = cursor.checkpoint();
        match self.parser.parse(cursor, slot) {
            Ok(true) => Ok(true),
            Ok(false) => {
                cursor.restore(saved);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Rewind the cursor when `parser` fails
pub fn attempt<P>(parser: P) -> Attempt<P> {
    Attempt::new(parser)
}
