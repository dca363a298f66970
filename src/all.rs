use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;
use std::marker::PhantomData;

/// Sequence with a reducer: run every sub-parser, then fold.
///
/// Each sub-parser gets a fresh, default-constructed temporary slot of
/// its own result type; temporaries for later parsers are not constructed
/// until their turn comes. When every sub-parser has succeeded the
/// reducer is invoked exactly once as `f(&mut slot, t1, …, tn)`. On the
/// first sub-parser failure the whole sequence reports `false` with the
/// cursor wherever that sub-parser left it.
///
/// When the surrounding combinator discarded the slot the sub-parsers
/// still run for their consumption, but the reducer is skipped; there is
/// nothing to fold into.
///
/// Sub-parsers are passed as a tuple, `all(f, (p1, p2, p3))`; impls are
/// provided for arities one through six. This is one of the two places
/// results are *transformed* rather than accumulated, which keeps the
/// accumulation path free of callbacks.
pub struct All<F, PS, R> {
    reducer: F,
    parsers: PS,
    marker: PhantomData<fn() -> R>,
}

impl<F, PS, R> All<F, PS, R> {
    pub fn new(reducer: F, parsers: PS) -> Self {
        All {
            reducer,
            parsers,
            marker: PhantomData,
        }
    }
}

impl<F: Clone, PS: Clone, R> Clone for All<F, PS, R> {
    fn clone(&self) -> Self {
        All {
            reducer: self.reducer.clone(),
            parsers: self.parsers.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, PS, R> IsParser for All<F, PS, R> {}

macro_rules! impl_all {
    ($($P:ident $tmp:ident),+) => {
        impl<S, F, R, $($P),+> Parser<S> for All<F, ($($P,)+), R>
        where
            S: Source,
            R: Default,
            F: Fn(&mut R, $(<$P as Parser<S>>::Output),+),
            $($P: Parser<S>,)+
        {
            type Output = R;

            fn parse(
                &self,
                cursor: &mut Cursor<S>,
                slot: Option<&mut R>,
            ) -> Result<bool, ParseError> {
                #[allow(non_snake_case)]
                let ($($P,)+) = &self.parsers;
                $(
                    let mut $tmp: <$P as Parser<S>>::Output = Default::default();
                    if !$P.parse(cursor, Some(&mut $tmp))? {
                        return Ok(false);
                    }
                )+
                if let Some(out) = slot {
                    (self.reducer)(out, $($tmp),+);
                }
                Ok(true)
            }
        }
    };
}

impl_all!(P1 t1);
impl_all!(P1 t1, P2 t2);
impl_all!(P1 t1, P2 t2, P3 t3);
impl_all!(P1 t1, P2 t2, P3 t3, P4 t4);
impl_all!(P1 t1, P2 t2, P3 t3, P4 t4, P5 t5);
impl_all!(P1 t1, P2 t2, P3 t3, P4 t4, P5 t5, P6 t6);

/// Sequence `parsers`, then fold their results with `reducer`
pub fn all<F, PS, R>(reducer: F, parsers: PS) -> All<F, PS, R> {
    All::new(reducer, parsers)
}
