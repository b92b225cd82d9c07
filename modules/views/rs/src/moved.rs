use seqview_core_rs::{Adapted, Adaptor, Pipe, RvalueReference, Sequence};

/// Move projection: both paths yield the source's move-extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AsMoved;

pub type MoveView<S> = Adapted<S, AsMoved>;

impl<S: Sequence> Adaptor<S> for AsMoved {
    type Value = S::Value;
    type Reference = S::RvalueReference;
    type RvalueReference = S::RvalueReference;

    #[inline(always)]
    fn extract_copy<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> RvalueReference<'s, S> {
        base.read_move(cursor)
    }

    #[inline(always)]
    fn extract_move<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> RvalueReference<'s, S> {
        base.read_move(cursor)
    }
}

/// Pipe object of [moved].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MovedPipe;

/// View whose every read is a move-extraction of the source element. The view owns its source.
pub fn moved() -> MovedPipe {
    MovedPipe
}

impl<S: Sequence> Pipe<S> for MovedPipe {
    type Output = MoveView<S>;

    fn pipe(self, seq: S) -> Self::Output {
        Adapted::new(seq, AsMoved)
    }
}

seqview_core_rs::pipe_combinator! {
    impl[] MovedPipe;
}
