use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use seqview_core_rs::capability::tag::{Contiguous, Infinite, Sequential};
use seqview_core_rs::capability::{CategoryTag, ShapeTag};
use seqview_core_rs::{
    CommonSequence, ForwardSequence, Pipe, RandomAccessSequence, Reference, RvalueReference,
    Sequence, SizedSequence, Traits,
};

use crate::subrange::Subrange;

/// At most `count` leading elements of a source without the contiguous guarantees.
///
/// The end is reached when the countdown runs out or the source ends, whichever comes first, so
/// the end marker is never a cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Getters, Constructor)]
pub struct Take<S> {
    base: S,
    count: usize,
}

/// Cursor of [Take]: the source cursor and the number of elements left in the prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TakeCursor<C> {
    base: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// End marker of [Take]: the source end together with the prefix bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TakeEnd<E> {
    base: E,
    count: usize,
}

impl<E> TakeEnd<E> {
    pub fn base(&self) -> &E {
        &self.base
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Value = S::Value;
    type Reference = S::Reference;
    type RvalueReference = S::RvalueReference;
    type Cursor = TakeCursor<S::Cursor>;
    type End = TakeEnd<S::End>;
    type Category = <S::Category as CategoryTag>::UpToForward;
    type Shape = Sequential;

    const TRAITS: Traits = {
        let traits = S::TRAITS
            .difference(Traits::COMMON.union(Traits::INFINITE))
            .union(Traits::VIEW);
        if S::TRAITS.contains(Traits::INFINITE) {
            traits.union(Traits::SIZED)
        } else {
            traits
        }
    };

    fn first(&mut self) -> Self::Cursor {
        TakeCursor {
            base: self.base.first(),
            remaining: self.count,
        }
    }

    fn end(&self) -> Self::End {
        TakeEnd {
            base: self.base.end(),
            count: self.count,
        }
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        cursor.remaining == 0 || self.base.is_end(&cursor.base)
    }

    fn advance(&mut self, cursor: &mut Self::Cursor) {
        assert!(cursor.remaining > 0, "Advanced past the end of a bounded prefix");
        cursor.remaining -= 1;
        // An exhausted countdown is the end, the source cursor stays on the last element.
        if cursor.remaining > 0 {
            self.base.advance(&mut cursor.base);
        }
    }

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        assert!(cursor.remaining > 0, "Read past the end of a bounded prefix");
        self.base.read(&cursor.base)
    }

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        assert!(cursor.remaining > 0, "Read past the end of a bounded prefix");
        self.base.read_move(&cursor.base)
    }
}

impl<S: ForwardSequence> ForwardSequence for Take<S> {}

/// Number of elements in a prefix of `count` elements, by the shape of the source.
pub trait TakeExtent<S: Sequence>: ShapeTag {
    fn extent(base: &S, count: usize) -> usize;
}

impl<S: Sequence> TakeExtent<S> for Infinite {
    fn extent(_: &S, count: usize) -> usize {
        count
    }
}

impl<S: SizedSequence> TakeExtent<S> for Sequential {
    fn extent(base: &S, count: usize) -> usize {
        base.size().min(count)
    }
}

impl<S: SizedSequence> TakeExtent<S> for Contiguous {
    fn extent(base: &S, count: usize) -> usize {
        base.size().min(count)
    }
}

impl<S> SizedSequence for Take<S>
where
    S: Sequence,
    S::Shape: TakeExtent<S>,
{
    fn size(&self) -> usize {
        <S::Shape as TakeExtent<S>>::extent(&self.base, self.count)
    }
}

/// The view a prefix of the source is expressed with, by the shape of the source.
///
/// A contiguous source keeps all its capabilities as a [Subrange], everything else is bounded by
/// a countdown with [Take].
pub trait TakeStrategy<S: Sequence>: ShapeTag {
    type Output: Sequence;

    fn take(seq: S, count: usize) -> Self::Output;
}

impl<S> TakeStrategy<S> for Contiguous
where
    S: RandomAccessSequence + SizedSequence + CommonSequence,
{
    type Output = Subrange<S>;

    fn take(seq: S, count: usize) -> Subrange<S> {
        let size = seq.size();
        if count > size {
            log::debug!("Prefix of {count} elements clamped to the source size {size}");
        }
        Subrange::prefix(seq, size.min(count))
    }
}

impl<S: Sequence> TakeStrategy<S> for Sequential {
    type Output = Take<S>;

    fn take(seq: S, count: usize) -> Take<S> {
        Take::new(seq, count)
    }
}

impl<S: Sequence> TakeStrategy<S> for Infinite {
    type Output = Take<S>;

    fn take(seq: S, count: usize) -> Take<S> {
        Take::new(seq, count)
    }
}

/// Pipe object of [take].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Constructor)]
pub struct TakePipe {
    count: usize,
}

/// At most `count` leading elements. A count beyond the size of the source is clamped.
pub fn take(count: usize) -> TakePipe {
    TakePipe::new(count)
}

impl<S> Pipe<S> for TakePipe
where
    S: Sequence,
    S::Shape: TakeStrategy<S>,
{
    type Output = <S::Shape as TakeStrategy<S>>::Output;

    fn pipe(self, seq: S) -> Self::Output {
        <S::Shape as TakeStrategy<S>>::take(seq, self.count)
    }
}

seqview_core_rs::pipe_combinator! {
    impl[] TakePipe;
}

seqview_core_rs::pipeable! {
    impl[S] Take<S>;
}
