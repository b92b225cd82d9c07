use higher_kinded_types::prelude::*;
use seqview_core_rs::{
    Adapted, Adaptor, Mutability, Pipe, Readonly, Reference, RvalueReference, Sequence,
};

/// Read-only projection: both paths yield the read-only variant of the source reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AsConst;

pub type ConstView<S> = Adapted<S, AsConst>;

impl<S> Adaptor<S> for AsConst
where
    S: Sequence,
    for<'s> Reference<'s, S>: Readonly,
    for<'s> RvalueReference<'s, S>: Readonly,
{
    type Value = S::Value;
    type Reference = For!(<'s> = <Reference<'s, S> as Readonly>::Output);
    type RvalueReference = For!(<'s> = <RvalueReference<'s, S> as Readonly>::Output);

    const MUTABILITY: Mutability = Mutability::ReadOnly;

    #[inline(always)]
    fn extract_copy<'s>(
        &mut self,
        base: &'s mut S,
        cursor: &S::Cursor,
    ) -> <Reference<'s, S> as Readonly>::Output {
        base.read(cursor).readonly()
    }

    #[inline(always)]
    fn extract_move<'s>(
        &mut self,
        base: &'s mut S,
        cursor: &S::Cursor,
    ) -> <RvalueReference<'s, S> as Readonly>::Output {
        base.read_move(cursor).readonly()
    }
}

/// Pipe object of [as_const].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AsConstPipe;

pub fn as_const() -> AsConstPipe {
    AsConstPipe
}

impl<S: Sequence> Pipe<S> for AsConstPipe {
    type Output = ConstView<S>;

    fn pipe(self, seq: S) -> Self::Output {
        Adapted::new(seq, AsConst)
    }
}

seqview_core_rs::pipe_combinator! {
    impl[] AsConstPipe;
}
