//! C-locale character class predicates.
//!
//! Classification follows the classic `<ctype.h>` tables restricted to
//! ASCII: bytes outside the ASCII range satisfy no class, and the
//! end-of-input sentinel satisfies nothing except [`eof`].

use crate::predicate::Predicate;
use crate::symbol::Symbol;

/// Matches any symbol except end of input
#[derive(Debug, Clone, Copy)]
pub struct AnySym;

impl Predicate for AnySym {
    fn test(&self, sym: Symbol) -> bool {
        !sym.is_end()
    }

    fn name(&self) -> &str {
        "anything"
    }
}

pub fn any_sym() -> AnySym {
    AnySym
}

/// Matches C-locale whitespace (space, tab, newline, vertical tab, form
/// feed, carriage return)
#[derive(Debug, Clone, Copy)]
pub struct Space;

impl Predicate for Space {
    fn test(&self, sym: Symbol) -> bool {
        matches!(
            sym,
            Symbol::Byte(b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
        )
    }

    fn name(&self) -> &str {
        "space"
    }
}

pub fn space() -> Space {
    Space
}

/// Matches a decimal digit
#[derive(Debug, Clone, Copy)]
pub struct Digit;

impl Predicate for Digit {
    fn test(&self, sym: Symbol) -> bool {
        sym.byte().is_some_and(|b| b.is_ascii_digit())
    }

    fn name(&self) -> &str {
        "digit"
    }
}

pub fn digit() -> Digit {
    Digit
}

/// Matches an uppercase letter
#[derive(Debug, Clone, Copy)]
pub struct Upper;

impl Predicate for Upper {
    fn test(&self, sym: Symbol) -> bool {
        sym.byte().is_some_and(|b| b.is_ascii_uppercase())
    }

    fn name(&self) -> &str {
        "uppercase"
    }
}

pub fn upper() -> Upper {
    Upper
}

/// Matches a lowercase letter
#[derive(Debug, Clone, Copy)]
pub struct Lower;

impl Predicate for Lower {
    fn test(&self, sym: Symbol) -> bool {
        sym.byte().is_some_and(|b| b.is_ascii_lowercase())
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

pub fn lower() -> Lower {
    Lower
}

/// Matches a letter
#[derive(Debug, Clone, Copy)]
pub struct Alpha;

impl Predicate for Alpha {
    fn test(&self, sym: Symbol) -> bool {
        sym.byte().is_some_and(|b| b.is_ascii_alphabetic())
    }

    fn name(&self) -> &str {
        "alphabetic"
    }
}

pub fn alpha() -> Alpha {
    Alpha
}

/// Matches a letter or a digit
#[derive(Debug, Clone, Copy)]
pub struct Alnum;

impl Predicate for Alnum {
    fn test(&self, sym: Symbol) -> bool {
        sym.byte().is_some_and(|b| b.is_ascii_alphanumeric())
    }

    fn name(&self) -> &str {
        "alphanumeric"
    }
}

pub fn alnum() -> Alnum {
    Alnum
}

/// Matches a printable symbol, including space
#[derive(Debug, Clone, Copy)]
pub struct Print;

impl Predicate for Print {
    fn test(&self, sym: Symbol) -> bool {
        sym.is_printable()
    }

    fn name(&self) -> &str {
        "printable"
    }
}

pub fn print() -> Print {
    Print
}

/// Matches only the end-of-input sentinel
#[derive(Debug, Clone, Copy)]
pub struct Eof;

impl Predicate for Eof {
    fn test(&self, sym: Symbol) -> bool {
        sym.is_end()
    }

    fn name(&self) -> &str {
        "end of input"
    }
}

pub fn eof() -> Eof {
    Eof
}

/// Matches one specific byte; names itself `'c'`
#[derive(Debug, Clone)]
pub struct CharIs {
    byte: u8,
    name: String,
}

impl Predicate for CharIs {
    fn test(&self, sym: Symbol) -> bool {
        sym.byte() == Some(self.byte)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn is_char(byte: u8) -> CharIs {
    CharIs {
        byte,
        name: format!("'{}'", char::from(byte)),
    }
}
