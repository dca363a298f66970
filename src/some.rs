use crate::and::{and, And};
use crate::many::{many, Many};

/// One or more repetitions: `p` then `many(p)`, accumulating into the
/// same slot
pub fn some<P: Clone>(parser: P) -> And<P, Many<P>> {
    and(parser.clone(), many(parser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::accept;
    use crate::ascii::digit;
    use crate::cursor::Cursor;
    use crate::parser::Parser;
    use crate::source::SliceSource;
    use crate::symbol::Symbol;

    fn over(data: &[u8]) -> Cursor<SliceSource<'_>> {
        Cursor::new(SliceSource::new(data))
    }

    #[test]
    fn test_requires_at_least_one_match() {
        let mut cursor = over(b"abc");
        let mut out = String::new();
        assert!(!some(accept(digit())).run(&mut cursor, &mut out).unwrap());
        assert_eq!(cursor.byte_count(), 0);
    }

    #[test]
    fn test_accumulates_prefix_and_stops() {
        let mut cursor = over(b"123abc");
        let mut out = String::new();
        assert!(some(accept(digit())).run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "123");
        assert_eq!(cursor.peek(), Symbol::Byte(b'a'));
        assert_eq!(cursor.position().col, 4);
    }

    #[test]
    fn test_single_match() {
        let mut cursor = over(b"7.");
        let mut out = String::new();
        assert!(some(accept(digit())).run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "7");
    }
}
