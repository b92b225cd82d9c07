//! Wrappers that hide capabilities of a richer sequence.
//!
//! They turn a slice into a minimal forward, bidirectional or non-sized source, which is how the
//! capability rules of adaptors are exercised against weaker sources.

use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::capability::{CategoryTag, ShapeTag, Traits};
use crate::sequence::{
    BidirectionalSequence, CommonSequence, ForwardSequence, RandomAccessSequence, Reference,
    RvalueReference, Sequence, SizedSequence,
};

/// Traversal of `S` capped at forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Constructor)]
pub struct ForwardOnly<S> {
    base: S,
}

/// Traversal of `S` capped at bidirectional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Constructor)]
pub struct BidirectionalOnly<S> {
    base: S,
}

/// `S` without a known size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Constructor)]
pub struct Unsized<S> {
    base: S,
}

macro_rules! forward_sequence {
    ($wrapper:ident, category = $category:ty, traits = $traits:expr) => {
        impl<S: Sequence> Sequence for $wrapper<S> {
            type Value = S::Value;
            type Reference = S::Reference;
            type RvalueReference = S::RvalueReference;
            type Cursor = S::Cursor;
            type End = S::End;
            type Category = $category;
            type Shape = <S::Shape as ShapeTag>::Degraded;

            const TRAITS: Traits = $traits;

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
                self.base.read(cursor)
            }

            #[inline(always)]
            fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
                self.base.read_move(cursor)
            }
        }

        impl<S: ForwardSequence> ForwardSequence for $wrapper<S> {}

        impl<S: CommonSequence> CommonSequence for $wrapper<S> {
            #[inline(always)]
            fn end_cursor(&self) -> Self::Cursor {
                self.base.end_cursor()
            }
        }

        crate::pipeable! {
            impl[S] $wrapper<S>;
        }
    };
}

forward_sequence!(
    ForwardOnly,
    category = <S::Category as CategoryTag>::UpToForward,
    traits = S::TRAITS
);
forward_sequence!(
    BidirectionalOnly,
    category = <S::Category as CategoryTag>::UpToBidirectional,
    traits = S::TRAITS
);
forward_sequence!(
    Unsized,
    category = S::Category,
    traits = S::TRAITS.difference(Traits::SIZED)
);

impl<S: SizedSequence> SizedSequence for ForwardOnly<S> {
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<S: SizedSequence> SizedSequence for BidirectionalOnly<S> {
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for BidirectionalOnly<S> {
    fn retreat(&mut self, cursor: &mut Self::Cursor) {
        self.base.retreat(cursor)
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for Unsized<S> {
    fn retreat(&mut self, cursor: &mut Self::Cursor) {
        self.base.retreat(cursor)
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for Unsized<S> {
    fn offset(&self, cursor: &mut Self::Cursor, n: isize) {
        self.base.offset(cursor, n)
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        self.base.distance(from, to)
    }
}
