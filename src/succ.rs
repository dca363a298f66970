use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;

/// Parser that always succeeds, consuming and writing nothing
#[derive(Debug, Clone, Copy)]
pub struct Succ;

impl IsParser for Succ {}

impl<S: Source> Parser<S> for Succ {
    type Output = ();

    fn parse(&self, _cursor: &mut Cursor<S>, _slot: Option<&mut ()>) -> Result<bool, ParseError> {
        Ok(true)
    }
}

pub fn succ() -> Succ {
    Succ
}
