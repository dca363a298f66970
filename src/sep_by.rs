use crate::and::{and, And};
use crate::discard::{discard, Discard};
use crate::many::{many, Many};

/// One or more `item`s separated by `sep`, accumulating every item into
/// the same slot: `item` then `many(discard(sep) && item)`.
///
/// The separator's result is dropped, so only items reach the slot. A
/// separator followed by a failing item is a committed failure, so a
/// trailing separator does not parse.
pub fn sep_by<P: Clone, Q>(item: P, sep: Q) -> And<P, Many<And<Discard<Q>, P>>> {
    and(item.clone(), many(and(discard(sep), item)))
}
