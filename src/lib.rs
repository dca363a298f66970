//! # MonoComb - Statically Composed Parser Combinators
//!
//! A small algebra of primitive recognizers and higher-order combinators
//! that compose into a complete parser at type-resolution time, so the
//! finished parser is one monomorphic function with no virtual dispatch
//! on its hot path. Composition reads like EBNF, result types are
//! inferred from the composition, and the match loop stays competitive
//! with a hand-written recursive-descent parser. The library emphasizes:
//!
//! - **Commit on consume**: choice recovers only from failures that did
//!   not consume; rewinding is an explicit opt-in via `attempt`
//! - **Slot accumulation**: parsers append into one caller-owned result
//!   slot, so the common case of building a match string allocates only
//!   when a character is appended
//! - **Reduction at the edges**: `all` and `any` are the only places
//!   user code transforms results, keeping callbacks off the hot path
//! - **Rich diagnostics**: hard failures carry row, column, the composed
//!   expectation name, and the offending symbol

pub mod accept;
pub mod all;
pub mod and;
pub mod any;
pub mod ascii;
pub mod attempt;
pub mod cursor;
pub mod discard;
pub mod error;
pub mod expect;
pub mod fail;
pub mod many;
pub mod option;
pub mod or;
pub mod parser;
pub mod predicate;
pub mod result;
pub mod sep_by;
pub mod some;
pub mod source;
pub mod strict;
pub mod succ;
pub mod symbol;
pub mod token;

pub use accept::{accept, Accept};
pub use all::{all, All};
pub use and::{and, And, AndExt};
pub use any::{any, Any};
pub use ascii::{alnum, alpha, any_sym, digit, eof, is_char, lower, print, space, upper};
pub use attempt::{attempt, Attempt};
pub use cursor::{Checkpoint, Cursor, Position};
pub use discard::{discard, Discard};
pub use error::ParseError;
pub use expect::{expect, Expect};
pub use fail::{fail, Fail};
pub use many::{many, Many};
pub use option::option;
pub use or::{or, Or, OrExt};
pub use parser::{IsParser, Parser};
pub use predicate::{Predicate, PredicateExt};
pub use result::{LeastGeneral, Value};
pub use sep_by::sep_by;
pub use some::some;
pub use source::{ReaderSource, Rewind, SliceSource, Source};
pub use strict::{strict, Strict};
pub use succ::{succ, Succ};
pub use symbol::Symbol;
pub use token::token;
