use std::borrow::Borrow;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use seqview_core_rs::capability::tag::Sequential;
use seqview_core_rs::capability::CategoryTag;
use seqview_core_rs::{
    CommonSequence, ForwardSequence, Pipe, Reference, RvalueReference, Sequence,
    Traits,
};

/// The elements of a source up to the first one equal to `delimiter`.
///
/// Where the view ends is known only after scanning, so it is at most forward and never sized.
/// A cursor that reaches the delimiter or the end of the source collapses into the end cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Getters, Constructor)]
pub struct Delimit<S, T> {
    base: S,
    delimiter: T,
}

/// Cursor of [Delimit]. `None` is the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DelimitCursor<C>(Option<C>);

impl<C> DelimitCursor<C> {
    pub fn base(&self) -> Option<&C> {
        self.0.as_ref()
    }
}

impl<S, T> Delimit<S, T>
where
    S: Sequence,
    T: PartialEq,
    for<'s> Reference<'s, S>: Borrow<T>,
{
    fn settle(&mut self, cursor: S::Cursor) -> DelimitCursor<S::Cursor> {
        if self.base.is_end(&cursor) {
            return DelimitCursor(None);
        }
        let element = self.base.read(&cursor);
        if Borrow::<T>::borrow(&element) == &self.delimiter {
            DelimitCursor(None)
        } else {
            DelimitCursor(Some(cursor))
        }
    }
}

impl<S, T> Sequence for Delimit<S, T>
where
    S: Sequence,
    T: PartialEq,
    for<'s> Reference<'s, S>: Borrow<T>,
{
    type Value = S::Value;
    type Reference = S::Reference;
    type RvalueReference = S::RvalueReference;
    type Cursor = DelimitCursor<S::Cursor>;
    type End = DelimitCursor<S::Cursor>;
    type Category = <S::Category as CategoryTag>::UpToForward;
    type Shape = Sequential;

    const TRAITS: Traits = S::TRAITS
        .difference(Traits::SIZED.union(Traits::INFINITE))
        .union(Traits::COMMON)
        .union(Traits::VIEW);

    fn first(&mut self) -> Self::Cursor {
        let cursor = self.base.first();
        self.settle(cursor)
    }

    fn end(&self) -> Self::End {
        DelimitCursor(None)
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        cursor.0.is_none()
    }

    fn advance(&mut self, cursor: &mut Self::Cursor) {
        let Some(mut inner) = cursor.0.take() else {
            panic!("Advanced past the end of a delimited view");
        };
        self.base.advance(&mut inner);
        *cursor = self.settle(inner);
    }

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        match &cursor.0 {
            Some(inner) => self.base.read(inner),
            None => panic!("Read past the end of a delimited view"),
        }
    }

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        match &cursor.0 {
            Some(inner) => self.base.read_move(inner),
            None => panic!("Read past the end of a delimited view"),
        }
    }
}

impl<S, T> ForwardSequence for Delimit<S, T>
where
    S: ForwardSequence,
    T: PartialEq,
    for<'s> Reference<'s, S>: Borrow<T>,
{
}

impl<S, T> CommonSequence for Delimit<S, T>
where
    S: Sequence,
    T: PartialEq,
    for<'s> Reference<'s, S>: Borrow<T>,
{
    fn end_cursor(&self) -> Self::Cursor {
        DelimitCursor(None)
    }
}

/// Pipe object of [delimit].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Constructor)]
pub struct DelimitPipe<T> {
    delimiter: T,
}

/// The elements up to, and excluding, the first one equal to `delimiter`.
pub fn delimit<T>(delimiter: T) -> DelimitPipe<T> {
    DelimitPipe::new(delimiter)
}

impl<S: Sequence, T> Pipe<S> for DelimitPipe<T> {
    type Output = Delimit<S, T>;

    fn pipe(self, seq: S) -> Self::Output {
        Delimit::new(seq, self.delimiter)
    }
}

seqview_core_rs::pipe_combinator! {
    impl[T] DelimitPipe<T>;
}

seqview_core_rs::pipeable! {
    impl[S, T] Delimit<S, T>;
}
