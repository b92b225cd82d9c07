use derive_more::Constructor;
use higher_kinded_types::prelude::*;
use higher_kinded_types::ForFixed;
use impl_tools::autoimpl;
use seqview_core_rs::{
    Adapted, Adaptor, Decay, Mutability, Pair, Pipe, Reference, RvalueReference, Sequence,
};

/// Cursor-level transform selecting the first field of pair-shaped elements.
///
/// References alias the field inside the source element, the move path extracts only the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectFirst;

/// Cursor-level transform selecting the second field of pair-shaped elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectSecond;

/// Cursor-level transform computing a value from the source and a cursor.
///
/// Both paths call `f`, the produced values never alias the source.
#[derive(Clone, Copy, Default, Constructor)]
#[autoimpl(Debug ignore self.f)]
pub struct IterFn<F> {
    f: F,
}

pub type IterTransform<S, A> = Adapted<S, A>;

macro_rules! select {
    ($adaptor:ident, $field:ident, $into:ident) => {
        impl<S> Adaptor<S> for $adaptor
        where
            S: Sequence<Value: Pair>,
            for<'s> Reference<'s, S>: Pair,
            for<'s> RvalueReference<'s, S>: Pair,
        {
            type Value = <S::Value as Pair>::$field;
            type Reference = For!(<'s> = <Reference<'s, S> as Pair>::$field);
            type RvalueReference = For!(<'s> = <RvalueReference<'s, S> as Pair>::$field);

            #[inline(always)]
            fn extract_copy<'s>(
                &mut self,
                base: &'s mut S,
                cursor: &S::Cursor,
            ) -> <Reference<'s, S> as Pair>::$field {
                base.read(cursor).$into()
            }

            #[inline(always)]
            fn extract_move<'s>(
                &mut self,
                base: &'s mut S,
                cursor: &S::Cursor,
            ) -> <RvalueReference<'s, S> as Pair>::$field {
                base.read_move(cursor).$into()
            }
        }
    };
}

select!(SelectFirst, First, into_first);
select!(SelectSecond, Second, into_second);

impl<S, F, R> Adaptor<S> for IterFn<F>
where
    S: Sequence,
    F: for<'x> FnMut(&'x mut S, &S::Cursor) -> R,
    R: Decay,
{
    type Value = R::Value;
    type Reference = ForFixed<R>;
    type RvalueReference = ForFixed<R>;

    const MUTABILITY: Mutability = Mutability::ReadOnly;

    #[inline(always)]
    fn extract_copy<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> R {
        (self.f)(base, cursor)
    }

    #[inline(always)]
    fn extract_move<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> R {
        (self.f)(base, cursor)
    }
}

/// Pipe object of [iter_transform].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Constructor)]
pub struct IterTransformPipe<A> {
    adaptor: A,
}

/// View whose elements are produced by a cursor-level `adaptor` with separate copy and move paths.
pub fn iter_transform<A>(adaptor: A) -> IterTransformPipe<A> {
    IterTransformPipe::new(adaptor)
}

impl<S: Sequence, A: Adaptor<S>> Pipe<S> for IterTransformPipe<A> {
    type Output = IterTransform<S, A>;

    fn pipe(self, seq: S) -> Self::Output {
        Adapted::new(seq, self.adaptor)
    }
}

seqview_core_rs::pipe_combinator! {
    impl[A] IterTransformPipe<A>;
}
