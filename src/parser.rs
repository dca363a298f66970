use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::source::Source;

/// Core parser trait.
///
/// A parser is a stateless value that either matches a prefix of the
/// input or does not. Composition happens entirely in the type system:
/// every combination of parsers is its own concrete type, so a composed
/// parser monomorphizes into one function with no dispatch on the hot
/// path.
///
/// The outcome protocol has three channels:
///
/// - `Ok(true)`: success. The cursor sits past exactly the consumed
///   symbols, and the slot (if one was supplied) has been appended to or
///   assigned.
/// - `Ok(false)`: failure. Either *non-consuming* (the cursor is
///   untouched; choice and repetition recover from this) or *committed*
///   (the cursor advanced before the failure; nothing may try an
///   alternative). Callers distinguish the two by comparing
///   [`Cursor::byte_count`] around the call. The design commits on first
///   consumption; rewinding is an explicit opt-in through
///   [`attempt`](crate::attempt::attempt).
/// - `Err(ParseError)`: hard failure from `expect` or `strict`,
///   unwinding to the outermost call.
///
/// The slot is caller-owned and only ever mutated on success. Passing
/// `None` runs the parser for its consumption alone.
pub trait Parser<S: Source> {
    /// Result type written into the slot
    type Output: Default;

    fn parse(
        &self,
        cursor: &mut Cursor<S>,
        slot: Option<&mut Self::Output>,
    ) -> Result<bool, ParseError>;

    /// Top-level entry: parse into a caller-owned, default-constructed slot
    fn run(&self, cursor: &mut Cursor<S>, slot: &mut Self::Output) -> Result<bool, ParseError> {
        self.parse(cursor, Some(slot))
    }
}

/// Family tag for parser values.
///
/// Parsers and predicates are two disjoint families, and the composition
/// methods dispatch on the family: [`Predicate`](crate::predicate::Predicate)
/// carries `or`/`not` for predicates, while the extension traits bounded
/// by this tag carry `or`/`and` for parsers. Implement `IsParser` for
/// your own parser types to opt into those methods.
pub trait IsParser {}
