use seqview_core_rs::{
    BidirectionalSequence, CommonSequence, ForwardSequence, Pipe, RandomAccessSequence, Reference,
    RvalueReference, Sequence, SizedSequence, Traits,
};

/// The elements of a bidirectional common source, last to first.
///
/// A reversed cursor wraps the source position just past the element it designates, so the
/// source end is the reversed beginning and the source beginning is the reversed end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reverse<S: Sequence> {
    base: S,
    front: S::Cursor,
}

/// Cursor of [Reverse].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReverseCursor<C>(C);

impl<C> ReverseCursor<C> {
    pub fn base(&self) -> &C {
        &self.0
    }
}

impl<S> Reverse<S>
where
    S: BidirectionalSequence + CommonSequence,
{
    pub fn new(mut base: S) -> Self {
        let front = base.first();
        Self { base, front }
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn into_base(self) -> S {
        self.base
    }
}

impl<S> Sequence for Reverse<S>
where
    S: BidirectionalSequence + CommonSequence,
{
    type Value = S::Value;
    type Reference = S::Reference;
    type RvalueReference = S::RvalueReference;
    type Cursor = ReverseCursor<S::Cursor>;
    type End = ReverseCursor<S::Cursor>;
    type Category = S::Category;
    type Shape = S::Shape;

    const TRAITS: Traits = S::TRAITS.union(Traits::VIEW);

    fn first(&mut self) -> Self::Cursor {
        ReverseCursor(self.base.end_cursor())
    }

    fn end(&self) -> Self::End {
        ReverseCursor(self.front.clone())
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        cursor.0 == self.front
    }

    fn advance(&mut self, cursor: &mut Self::Cursor) {
        assert!(cursor.0 != self.front, "Advanced past the end of a reversed view");
        self.base.retreat(&mut cursor.0)
    }

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        let mut position = cursor.0.clone();
        self.base.retreat(&mut position);
        self.base.read(&position)
    }

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        let mut position = cursor.0.clone();
        self.base.retreat(&mut position);
        self.base.read_move(&position)
    }
}

impl<S> ForwardSequence for Reverse<S> where S: BidirectionalSequence + CommonSequence {}

impl<S> BidirectionalSequence for Reverse<S>
where
    S: BidirectionalSequence + CommonSequence,
{
    fn retreat(&mut self, cursor: &mut Self::Cursor) {
        assert!(
            cursor.0 != self.base.end_cursor(),
            "Retreated before the start of a reversed view"
        );
        self.base.advance(&mut cursor.0)
    }
}

impl<S> RandomAccessSequence for Reverse<S>
where
    S: RandomAccessSequence + CommonSequence,
{
    fn offset(&self, cursor: &mut Self::Cursor, n: isize) {
        self.base.offset(&mut cursor.0, -n)
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        self.base.distance(&to.0, &from.0)
    }
}

impl<S> SizedSequence for Reverse<S>
where
    S: BidirectionalSequence + CommonSequence + SizedSequence,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<S> CommonSequence for Reverse<S>
where
    S: BidirectionalSequence + CommonSequence,
{
    fn end_cursor(&self) -> Self::Cursor {
        ReverseCursor(self.front.clone())
    }
}

/// Pipe object of [reverse]. It applies only to bidirectional common sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReversePipe;

pub fn reverse() -> ReversePipe {
    ReversePipe
}

impl<S> Pipe<S> for ReversePipe
where
    S: BidirectionalSequence + CommonSequence,
{
    type Output = Reverse<S>;

    fn pipe(self, seq: S) -> Self::Output {
        Reverse::new(seq)
    }
}

seqview_core_rs::pipe_combinator! {
    impl[] ReversePipe;
}

seqview_core_rs::pipeable! {
    impl[S: Sequence] Reverse<S>;
}
