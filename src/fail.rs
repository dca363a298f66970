use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;

/// Parser that always fails without consuming
#[derive(Debug, Clone, Copy)]
pub struct Fail;

impl IsParser for Fail {}

impl<S: Source> Parser<S> for Fail {
    type Output = ();

    fn parse(&self, _cursor: &mut Cursor<S>, _slot: Option<&mut ()>) -> Result<bool, ParseError> {
        Ok(false)
    }
}

pub fn fail() -> Fail {
    Fail
}
