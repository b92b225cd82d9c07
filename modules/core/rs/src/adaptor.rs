use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use higher_kinded_types::prelude::*;
use impl_tools::autoimpl;

use crate::capability::Traits;
use crate::sequence::{
    BidirectionalSequence, CommonSequence, ForwardSequence, RandomAccessSequence, Reference,
    RvalueReference, Sequence, SizedSequence,
};

/// How an adaptor affects the mutability of the elements it exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Mutable iff the source is mutable.
    #[default]
    Inherit,
    /// Never mutable.
    ReadOnly,
}

impl Mutability {
    pub const fn apply(self, traits: Traits) -> Traits {
        match self {
            Mutability::Inherit => traits,
            Mutability::ReadOnly => traits.difference(Traits::MUTABLE),
        }
    }
}

pub type AdaptorReference<'s, S, A> = <<A as Adaptor<S>>::Reference as ForLt>::Of<'s>;
pub type AdaptorRvalueReference<'s, S, A> = <<A as Adaptor<S>>::RvalueReference as ForLt>::Of<'s>;

/// Element access of a cursor-preserving view.
///
/// `extract_copy` produces the view's reference for a source cursor, `extract_move` its rvalue
/// reference. An adaptor without a dedicated move path implements `extract_move` in terms of the
/// copy path.
pub trait Adaptor<S: Sequence> {
    type Value;
    type Reference: ForLt;
    type RvalueReference: ForLt;

    const MUTABILITY: Mutability = Mutability::Inherit;

    fn extract_copy<'s>(
        &mut self,
        base: &'s mut S,
        cursor: &S::Cursor,
    ) -> AdaptorReference<'s, S, Self>;

    fn extract_move<'s>(
        &mut self,
        base: &'s mut S,
        cursor: &S::Cursor,
    ) -> AdaptorRvalueReference<'s, S, Self>;
}

/// A view that keeps the cursors of its source and changes only how elements are read.
///
/// Traversal, category, shape, size and commonness are forwarded to the source, the reference
/// triple comes from the adaptor.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Dissolve, Getters, Constructor)]
#[autoimpl(Debug ignore self.adaptor where S: std::fmt::Debug)]
pub struct Adapted<S, A> {
    base: S,
    adaptor: A,
}

impl<S: Sequence, A: Adaptor<S>> Sequence for Adapted<S, A> {
    type Value = A::Value;
    type Reference = A::Reference;
    type RvalueReference = A::RvalueReference;
    type Cursor = S::Cursor;
    type End = S::End;
    type Category = S::Category;
    type Shape = S::Shape;

    const TRAITS: Traits = A::MUTABILITY.apply(S::TRAITS.union(Traits::VIEW));

    #[inline(always)]
    fn first(&mut self) -> Self::Cursor {
        self.base.first()
    }

    #[inline(always)]
    fn end(&self) -> Self::End {
        self.base.end()
    }

    #[inline(always)]
    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        self.base.is_end(cursor)
    }

    #[inline(always)]
    fn advance(&mut self, cursor: &mut Self::Cursor) {
        self.base.advance(cursor)
    }

    #[inline(always)]
    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        self.adaptor.extract_copy(&mut self.base, cursor)
    }

    #[inline(always)]
    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        self.adaptor.extract_move(&mut self.base, cursor)
    }
}

impl<S: ForwardSequence, A: Adaptor<S>> ForwardSequence for Adapted<S, A> {}

impl<S: BidirectionalSequence, A: Adaptor<S>> BidirectionalSequence for Adapted<S, A> {
    #[inline(always)]
    fn retreat(&mut self, cursor: &mut Self::Cursor) {
        self.base.retreat(cursor)
    }
}

impl<S: RandomAccessSequence, A: Adaptor<S>> RandomAccessSequence for Adapted<S, A> {
    #[inline(always)]
    fn offset(&self, cursor: &mut Self::Cursor, n: isize) {
        self.base.offset(cursor, n)
    }

    #[inline(always)]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        self.base.distance(from, to)
    }
}

impl<S: SizedSequence, A: Adaptor<S>> SizedSequence for Adapted<S, A> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<S: CommonSequence, A: Adaptor<S>> CommonSequence for Adapted<S, A> {
    #[inline(always)]
    fn end_cursor(&self) -> Self::Cursor {
        self.base.end_cursor()
    }
}

crate::pipeable! {
    impl[S, A] Adapted<S, A>;
}
