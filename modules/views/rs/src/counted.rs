use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};
use seqview_core_rs::capability::tag::{Bidirectional, Forward, Input, RandomAccess, Sequential};
use seqview_core_rs::capability::CategoryTag;
use seqview_core_rs::{
    ForwardSequence, RandomAccessSequence, Reference, RvalueReference, Sequence,
    SizedSequence, Traits,
};

use crate::subrange::Subrange;

/// Exactly `count` elements starting at the beginning of the source.
///
/// The source is never consulted for its end: it must hold at least `count` elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Getters, Constructor)]
pub struct Counted<S> {
    base: S,
    count: usize,
}

/// Cursor of [Counted].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountedCursor<C> {
    base: C,
    remaining: usize,
}

impl<C> CountedCursor<C> {
    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// End marker of [Counted]: reached when the countdown of a cursor runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Countdown;

impl<S: Sequence> Sequence for Counted<S> {
    type Value = S::Value;
    type Reference = S::Reference;
    type RvalueReference = S::RvalueReference;
    type Cursor = CountedCursor<S::Cursor>;
    type End = Countdown;
    type Category = <S::Category as CategoryTag>::UpToForward;
    type Shape = Sequential;

    const TRAITS: Traits = S::TRAITS
        .difference(Traits::COMMON.union(Traits::INFINITE))
        .union(Traits::SIZED)
        .union(Traits::VIEW);

    fn first(&mut self) -> Self::Cursor {
        CountedCursor {
            base: self.base.first(),
            remaining: self.count,
        }
    }

    fn end(&self) -> Countdown {
        Countdown
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        cursor.remaining == 0
    }

    fn advance(&mut self, cursor: &mut Self::Cursor) {
        assert!(cursor.remaining > 0, "Advanced past the end of a counted view");
        cursor.remaining -= 1;
        // An exhausted countdown is the end, the source cursor stays on the last element.
        if cursor.remaining > 0 {
            self.base.advance(&mut cursor.base);
        }
    }

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        assert!(cursor.remaining > 0, "Read past the end of a counted view");
        self.base.read(&cursor.base)
    }

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        assert!(cursor.remaining > 0, "Read past the end of a counted view");
        self.base.read_move(&cursor.base)
    }
}

impl<S: ForwardSequence> ForwardSequence for Counted<S> {}

impl<S: Sequence> SizedSequence for Counted<S> {
    fn size(&self) -> usize {
        self.count
    }
}

/// The view `count` leading elements are expressed with, by the category of the source.
///
/// Offsetting a random-access cursor forms a common pair of cursors, any other source is bounded
/// by a countdown.
pub trait CountedStrategy<S: Sequence>: CategoryTag {
    type Output: Sequence;

    fn counted(seq: S, count: usize) -> Self::Output;
}

impl<S: RandomAccessSequence> CountedStrategy<S> for RandomAccess {
    type Output = Subrange<S>;

    fn counted(seq: S, count: usize) -> Subrange<S> {
        Subrange::prefix(seq, count)
    }
}

macro_rules! countdown_strategy {
    ($($tag:ty),*) => {$(
        impl<S: Sequence> CountedStrategy<S> for $tag {
            type Output = Counted<S>;

            fn counted(seq: S, count: usize) -> Counted<S> {
                Counted::new(seq, count)
            }
        }
    )*};
}

countdown_strategy!(Input, Forward, Bidirectional);

/// Exactly `count` elements from the beginning of `seq`, which must hold at least that many.
pub fn counted<S>(seq: S, count: usize) -> <S::Category as CountedStrategy<S>>::Output
where
    S: Sequence,
    S::Category: CountedStrategy<S>,
{
    <S::Category as CountedStrategy<S>>::counted(seq, count)
}

/// [counted] over a sized source, rejecting a `count` beyond its size.
pub fn try_counted<S>(seq: S, count: usize) -> Result<<S::Category as CountedStrategy<S>>::Output>
where
    S: SizedSequence,
    S::Category: CountedStrategy<S>,
{
    let size = seq.size();
    ensure!(
        count <= size,
        "Count {count} exceeds the size {size} of the source"
    );
    Ok(counted(seq, count))
}

seqview_core_rs::pipeable! {
    impl[S] Counted<S>;
}
