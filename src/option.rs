use crate::or::{or, Or};
use crate::succ::Succ;

/// Zero or one occurrence: `p || succ`.
///
/// Recovers only from a *non-consuming* failure of `p`; a committed
/// failure still fails the whole parser.
pub fn option<P>(parser: P) -> Or<P, Succ> {
    or(parser, Succ)
}
