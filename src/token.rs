use crate::accept::{accept, Accept};
use crate::and::{and, And};
use crate::ascii::{space, Space};
use crate::discard::{discard, Discard};
use crate::many::{many, Many};

/// Skip leading whitespace, then run `parser`.
///
/// The skipped whitespace never reaches the slot. Note that a token that
/// fails after the whitespace has been skipped is a committed failure.
pub fn token<P>(parser: P) -> And<Discard<Many<Accept<Space>>>, P> {
    and(discard(many(accept(space()))), parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::cursor::Cursor;
    use crate::parser::Parser;
    use crate::some::some;
    use crate::source::SliceSource;
    use crate::symbol::Symbol;

    fn over(data: &[u8]) -> Cursor<SliceSource<'_>> {
        Cursor::new(SliceSource::new(data))
    }

    #[test]
    fn test_skips_leading_whitespace() {
        let mut cursor = over(b"  \t42;");
        let mut out = String::new();
        let parser = token(some(accept(digit())));
        assert!(parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "42");
        assert_eq!(cursor.peek(), Symbol::Byte(b';'));
    }

    #[test]
    fn test_no_whitespace_needed() {
        let mut cursor = over(b"7");
        let mut out = String::new();
        let parser = token(some(accept(digit())));
        assert!(parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "7");
    }

    #[test]
    fn test_commits_once_whitespace_is_consumed() {
        let mut cursor = over(b" x");
        let mut out = String::new();
        let parser = token(some(accept(digit())));
        assert!(!parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(cursor.byte_count(), 1);
    }
}
