use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;
use std::marker::PhantomData;

/// First-match choice with a reducer.
///
/// All temporary slots are default-constructed up front; the
/// alternatives then run in order. On the first success, at zero-based
/// index `k`, the reducer is invoked exactly once as
/// `f(&mut slot, k, t1, …, tn)`. Every temporary is present but only
/// `t_k` has been populated, and the index tells the reducer which one.
///
/// An alternative that fails *after consuming* commits the whole choice
/// to failure; later alternatives are only tried while failures are
/// non-consuming. If no alternative matches the choice reports `false`.
///
/// Alternatives are passed as a tuple, `any(f, (p1, p2, p3))`; impls are
/// provided for arities one through six.
pub struct Any<F, PS, R> {
    reducer: F,
    parsers: PS,
    marker: PhantomData<fn() -> R>,
}

impl<F, PS, R> Any<F, PS, R> {
    pub fn new(reducer: F, parsers: PS) -> Self {
        Any {
            reducer,
            parsers,
            marker: PhantomData,
        }
    }
}

impl<F: Clone, PS: Clone, R> Clone for Any<F, PS, R> {
    fn clone(&self) -> Self {
        Any {
            reducer: self.reducer.clone(),
            parsers: self.parsers.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, PS, R> IsParser for Any<F, PS, R> {}

macro_rules! impl_any {
    ($($P:ident $tmp:ident),+) => {
        impl<S, F, R, $($P),+> Parser<S> for Any<F, ($($P,)+), R>
        where
            S: Source,
            R: Default,
            F: Fn(&mut R, usize, $(<$P as Parser<S>>::Output),+),
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
                $(let mut $tmp: <$P as Parser<S>>::Output = Default::default();)+
                let mark = cursor.byte_count();
                let mut index = 0usize;
                let mut matched = false;
                $(
                    if !matched {
                        if $P.parse(cursor, Some(&mut $tmp))? {
                            matched = true;
                        } else if cursor.byte_count() != mark {
                            // committed: no further alternatives
                            return Ok(false);
                        } else {
                            index += 1;
                        }
                    }
                )+
                if !matched {
                    return Ok(false);
                }
                if let Some(out) = slot {
                    (self.reducer)(out, index, $($tmp),+);
                }
                Ok(true)
            }
        }
    };
}

impl_any!(P1 t1);
impl_any!(P1 t1, P2 t2);
impl_any!(P1 t1, P2 t2, P3 t3);
impl_any!(P1 t1, P2 t2, P3 t3, P4 t4);
impl_any!(P1 t1, P2 t2, P3 t3, P4 t4, P5 t5);
impl_any!(P1 t1, P2 t2, P3 t3, P4 t4, P5 t5, P6 t6);

/// Try `parsers` in order; fold the first match with `reducer`
pub fn any<F, PS, R>(reducer: F, parsers: PS) -> Any<F, PS, R> {
    Any::new(reducer, parsers)
}
