use derive_getters::Dissolve;
use eyre::{ensure, Result};
use seqview_core_rs::capability::tag::Contiguous;
use seqview_core_rs::{
    BidirectionalSequence, CommonSequence, ForwardSequence, RandomAccessSequence, Reference,
    RvalueReference, Sequence, SizedSequence, Traits,
};

/// The elements of a random-access source between two of its cursors.
///
/// The pair of cursors is a common range: the end is a cursor of the source, and the size is
/// their distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Dissolve)]
pub struct Subrange<S: Sequence> {
    base: S,
    first: S::Cursor,
    last: S::Cursor,
}

impl<S: RandomAccessSequence> Subrange<S> {
    /// Elements in `[first, last)` of `base`. Fails if `last` precedes `first`.
    pub fn new(base: S, first: S::Cursor, last: S::Cursor) -> Result<Self> {
        let distance = base.distance(&first, &last);
        ensure!(
            distance >= 0,
            "Subrange end precedes its start by {} positions",
            -distance
        );
        Ok(Self::from_parts(base, first, last))
    }

    pub(crate) fn from_parts(base: S, first: S::Cursor, last: S::Cursor) -> Self {
        Self { base, first, last }
    }

    /// The first `count` elements of `base`.
    pub(crate) fn prefix(mut base: S, count: usize) -> Self {
        let steps = match isize::try_from(count) {
            Ok(steps) => steps,
            Err(_) => panic!("Prefix of {count} elements doesn't fit a cursor offset"),
        };
        let first = base.first();
        let mut last = first.clone();
        base.offset(&mut last, steps);
        Self::from_parts(base, first, last)
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    fn position(&self, cursor: &S::Cursor) -> isize {
        self.base.distance(&self.first, cursor)
    }

    fn check_readable(&self, cursor: &S::Cursor) {
        assert!(
            self.position(cursor) >= 0 && self.base.distance(cursor, &self.last) > 0,
            "Read outside of a subrange"
        );
    }
}

impl<S: RandomAccessSequence> Sequence for Subrange<S> {
    type Value = S::Value;
    type Reference = S::Reference;
    type RvalueReference = S::RvalueReference;
    type Cursor = S::Cursor;
    type End = S::Cursor;
    type Category = S::Category;
    type Shape = Contiguous;

    const TRAITS: Traits = S::TRAITS
        .difference(Traits::INFINITE)
        .union(Traits::SIZED)
        .union(Traits::COMMON)
        .union(Traits::VIEW);

    #[inline(always)]
    fn first(&mut self) -> S::Cursor {
        self.first.clone()
    }

    #[inline(always)]
    fn end(&self) -> S::Cursor {
        self.last.clone()
    }

    #[inline(always)]
    fn is_end(&self, cursor: &S::Cursor) -> bool {
        *cursor == self.last
    }

    fn advance(&mut self, cursor: &mut S::Cursor) {
        assert!(*cursor != self.last, "Advanced past the end of a subrange");
        self.base.advance(cursor)
    }

    fn read<'s>(&'s mut self, cursor: &S::Cursor) -> Reference<'s, Self> {
        self.check_readable(cursor);
        self.base.read(cursor)
    }

    fn read_move<'s>(&'s mut self, cursor: &S::Cursor) -> RvalueReference<'s, Self> {
        self.check_readable(cursor);
        self.base.read_move(cursor)
    }
}

impl<S: RandomAccessSequence> ForwardSequence for Subrange<S> {}

impl<S: RandomAccessSequence> BidirectionalSequence for Subrange<S> {
    fn retreat(&mut self, cursor: &mut S::Cursor) {
        assert!(*cursor != self.first, "Retreated before the start of a subrange");
        self.base.retreat(cursor)
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for Subrange<S> {
    fn offset(&self, cursor: &mut S::Cursor, n: isize) {
        let target = self.position(cursor) + n;
        assert!(
            (0..=self.position(&self.last)).contains(&target),
            "Offset {n} moves the cursor out of the subrange bounds"
        );
        self.base.offset(cursor, n)
    }

    #[inline(always)]
    fn distance(&self, from: &S::Cursor, to: &S::Cursor) -> isize {
        self.base.distance(from, to)
    }
}

impl<S: RandomAccessSequence> SizedSequence for Subrange<S> {
    fn size(&self) -> usize {
        self.position(&self.last).unsigned_abs()
    }
}

impl<S: RandomAccessSequence> CommonSequence for Subrange<S> {
    fn end_cursor(&self) -> S::Cursor {
        self.last.clone()
    }
}

seqview_core_rs::pipeable! {
    impl[S: Sequence] Subrange<S>;
}

#[cfg(test)]
mod tests {
    use seqview_core_rs::source::{iota, slice, slice_mut};
    use seqview_core_rs::testing::{assert_capabilities, check_equal};
    use seqview_core_rs::Category;

    use super::*;

    #[test]
    fn test_subrange() {
        let items = [1, 2, 3, 4, 5];
        let mut view = Subrange::new(slice(&items), 1, 4).unwrap();
        assert_capabilities(
            &view,
            Category::RandomAccess,
            Traits::SIZED | Traits::COMMON | Traits::VIEW,
        );
        assert_eq!(view.size(), 3);

        let mut cursor = view.end_cursor();
        view.retreat(&mut cursor);
        assert_eq!(*view.read(&cursor), 4);
        assert_eq!(view.base().size(), 5);
        check_equal(view, [2, 3, 4]);
    }

    #[test]
    fn test_subrange_of_infinite_source() {
        let view = Subrange::new(iota(7u16), 7, 10).unwrap();
        assert_capabilities(
            &view,
            Category::RandomAccess,
            Traits::SIZED | Traits::COMMON | Traits::VIEW,
        );
        check_equal(view, [7u16, 8, 9]);
    }

    #[test]
    fn test_subrange_mutable() {
        let mut items = [1, 2, 3];
        let mut view = Subrange::new(slice_mut(&mut items), 0, 2).unwrap();
        assert!(view.capabilities().is_mutable());

        let cursor = view.first();
        *view.read(&cursor) = 10;
        assert_eq!(items, [10, 2, 3]);
    }

    #[test]
    fn test_rejects_reversed_bounds() {
        let items = [1, 2, 3];
        let err = Subrange::new(slice(&items), 2, 1).unwrap_err();
        assert!(err.to_string().contains("precedes its start by 1"));
    }

    #[test]
    #[should_panic(expected = "Read outside of a subrange")]
    fn test_read_before_start() {
        let items = [1, 2, 3, 4];
        let mut view = Subrange::new(slice(&items), 2, 4).unwrap();
        view.read(&1);
    }

    #[test]
    #[should_panic(expected = "Read outside of a subrange")]
    fn test_read_at_end() {
        let items = [1, 2, 3, 4];
        let mut view = Subrange::new(slice(&items), 0, 2).unwrap();
        let end = view.end_cursor();
        view.read_move(&end);
    }

    #[test]
    fn test_prefix() {
        let items = [1, 2, 3, 4];
        let view = Subrange::prefix(slice(&items), 3);
        assert_eq!(view.size(), 3);
        check_equal(view, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "doesn't fit a cursor offset")]
    fn test_prefix_beyond_offsets() {
        Subrange::prefix(iota(0u64), usize::MAX);
    }

    #[test]
    #[should_panic(expected = "out of the subrange bounds")]
    fn test_offset_out_of_bounds() {
        let items = [1, 2, 3, 4];
        let view = Subrange::new(slice(&items), 0, 2).unwrap();
        let mut cursor = 0;
        view.offset(&mut cursor, 3);
    }
}
