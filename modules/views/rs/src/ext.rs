use seqview_core_rs::{Adaptor, BidirectionalSequence, CommonSequence, Pipe, Sequence};

use crate::constant::{as_const, ConstView};
use crate::counted::CountedStrategy;
use crate::delimit::{delimit, Delimit};
use crate::iter_transform::{iter_transform, IterTransform};
use crate::moved::{moved, MoveView};
use crate::reverse::{reverse, Reverse};
use crate::take::{take, TakeStrategy};
use crate::transform::{transform, transform_with_move, Map, MapWithMove};
use crate::zip::{zip, Zip};

/// Method forms of the adaptor catalog, available on every sequence.
///
/// `seq.transform(f)` is the same view as `seq | transform(f)`.
pub trait ViewExt: Sequence + Sized {
    fn transform<F>(self, f: F) -> Map<Self, F> {
        transform(f).pipe(self)
    }

    fn transform_with_move<F, G>(self, copy: F, moved: G) -> MapWithMove<Self, F, G> {
        transform_with_move(copy, moved).pipe(self)
    }

    fn iter_transform<A: Adaptor<Self>>(self, adaptor: A) -> IterTransform<Self, A> {
        iter_transform(adaptor).pipe(self)
    }

    fn take(self, count: usize) -> <Self::Shape as TakeStrategy<Self>>::Output
    where
        Self::Shape: TakeStrategy<Self>,
    {
        take(count).pipe(self)
    }

    fn as_const(self) -> ConstView<Self> {
        as_const().pipe(self)
    }

    fn moved(self) -> MoveView<Self> {
        moved().pipe(self)
    }

    fn reverse(self) -> Reverse<Self>
    where
        Self: BidirectionalSequence + CommonSequence,
    {
        reverse().pipe(self)
    }

    fn delimit<T>(self, delimiter: T) -> Delimit<Self, T> {
        delimit(delimiter).pipe(self)
    }

    fn zip<B: Sequence>(self, other: B) -> Zip<Self, B> {
        zip(self, other)
    }

    fn counted(self, count: usize) -> <Self::Category as CountedStrategy<Self>>::Output
    where
        Self::Category: CountedStrategy<Self>,
    {
        crate::counted::counted(self, count)
    }
}

impl<S: Sequence> ViewExt for S {}
