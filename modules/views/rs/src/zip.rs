use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use higher_kinded_types::prelude::*;
use seqview_core_rs::capability::{CategoryTag, MeetShape, MinCategory};
use seqview_core_rs::{
    BidirectionalSequence, Category, CommonSequence, ForwardSequence, RandomAccessSequence,
    Reference, RvalueReference, Sequence, SizedSequence, Traits,
};

/// Two sequences traversed in lockstep.
///
/// Elements are pairs of the per-source references, the move path pairs the per-source
/// move-extractions. The traversal ends as soon as either source ends.
///
/// The zip is common only over two random-access, sized and common sources: its end cursor is then
/// both sources offset to the length of the shorter one. Any other zip has the pair of source end
/// markers as its end, which is never a cursor, so it can't be reversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Getters, Constructor)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

pub fn zip<A: Sequence, B: Sequence>(left: A, right: B) -> Zip<A, B> {
    Zip::new(left, right)
}

const fn is_random_access<C: CategoryTag>() -> bool {
    matches!(C::CATEGORY, Category::RandomAccess)
}

/// Steps back from the end of a source of `size` elements to the end of its first `len` ones.
fn shortfall(size: usize, len: usize) -> isize {
    let excess = size - len;
    match isize::try_from(excess) {
        Ok(steps) => -steps,
        Err(_) => panic!("Zipped sources differ by {excess} elements, beyond a cursor offset"),
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Category: MinCategory<B::Category>,
    A::Shape: MeetShape<B::Shape>,
{
    type Value = (A::Value, B::Value);
    type Reference = For!(<'s> = (Reference<'s, A>, Reference<'s, B>));
    type RvalueReference = For!(<'s> = (RvalueReference<'s, A>, RvalueReference<'s, B>));
    type Cursor = (A::Cursor, B::Cursor);
    type End = (A::End, B::End);
    type Category = <A::Category as MinCategory<B::Category>>::Output;
    type Shape = <A::Shape as MeetShape<B::Shape>>::Output;

    const TRAITS: Traits = {
        let traits = A::TRAITS.intersection(B::TRAITS).union(Traits::VIEW);
        if is_random_access::<A::Category>()
            && is_random_access::<B::Category>()
            && traits.contains(Traits::SIZED)
        {
            traits
        } else {
            traits.difference(Traits::COMMON)
        }
    };

    fn first(&mut self) -> Self::Cursor {
        (self.left.first(), self.right.first())
    }

    fn end(&self) -> Self::End {
        (self.left.end(), self.right.end())
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        self.left.is_end(&cursor.0) || self.right.is_end(&cursor.1)
    }

    fn advance(&mut self, cursor: &mut Self::Cursor) {
        self.left.advance(&mut cursor.0);
        self.right.advance(&mut cursor.1);
    }

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        (self.left.read(&cursor.0), self.right.read(&cursor.1))
    }

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        (self.left.read_move(&cursor.0), self.right.read_move(&cursor.1))
    }
}

impl<A, B> ForwardSequence for Zip<A, B>
where
    A: ForwardSequence,
    B: ForwardSequence,
    A::Category: MinCategory<B::Category>,
    A::Shape: MeetShape<B::Shape>,
{
}

impl<A, B> BidirectionalSequence for Zip<A, B>
where
    A: BidirectionalSequence,
    B: BidirectionalSequence,
    A::Category: MinCategory<B::Category>,
    A::Shape: MeetShape<B::Shape>,
{
    fn retreat(&mut self, cursor: &mut Self::Cursor) {
        self.left.retreat(&mut cursor.0);
        self.right.retreat(&mut cursor.1);
    }
}

impl<A, B> RandomAccessSequence for Zip<A, B>
where
    A: RandomAccessSequence,
    B: RandomAccessSequence,
    A::Category: MinCategory<B::Category>,
    A::Shape: MeetShape<B::Shape>,
{
    fn offset(&self, cursor: &mut Self::Cursor, n: isize) {
        self.left.offset(&mut cursor.0, n);
        self.right.offset(&mut cursor.1, n);
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        let left = self.left.distance(&from.0, &to.0);
        let right = self.right.distance(&from.1, &to.1);
        if left.abs() <= right.abs() {
            left
        } else {
            right
        }
    }
}

impl<A, B> SizedSequence for Zip<A, B>
where
    A: SizedSequence,
    B: SizedSequence,
    A::Category: MinCategory<B::Category>,
    A::Shape: MeetShape<B::Shape>,
{
    fn size(&self) -> usize {
        self.left.size().min(self.right.size())
    }
}

impl<A, B> CommonSequence for Zip<A, B>
where
    A: RandomAccessSequence + SizedSequence + CommonSequence,
    B: RandomAccessSequence + SizedSequence + CommonSequence,
    A::Category: MinCategory<B::Category>,
    A::Shape: MeetShape<B::Shape>,
{
    fn end_cursor(&self) -> Self::Cursor {
        let len = self.size();

        let mut left = self.left.end_cursor();
        self.left.offset(&mut left, shortfall(self.left.size(), len));
        let mut right = self.right.end_cursor();
        self.right.offset(&mut right, shortfall(self.right.size(), len));
        (left, right)
    }
}

seqview_core_rs::pipeable! {
    impl[A, B] Zip<A, B>;
}

#[cfg(test)]
mod tests {
    use seqview_core_rs::source::{
        iota, slice, slice_mut, BidirectionalOnly, ForwardOnly, Iota, Slice,
    };
    use seqview_core_rs::testing::{assert_capabilities, check_equal, DebugInput};
    use seqview_core_rs::Moved;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    use super::*;

    type Pairs = Zip<Slice<'static, i32>, Iota<u8>>;
    type Items = Slice<'static, i32>;

    assert_type_eq_all!(Reference<'static, Pairs>, (&'static i32, u8));

    assert_impl_all!(Zip<Items, Items>: RandomAccessSequence, CommonSequence);
    assert_impl_all!(Zip<BidirectionalOnly<Items>, Items>: BidirectionalSequence);
    assert_not_impl_any!(Zip<BidirectionalOnly<Items>, Items>: CommonSequence);
    assert_not_impl_any!(Zip<ForwardOnly<Items>, Items>: CommonSequence);

    #[test]
    fn test_zip_stops_at_shorter() {
        let numbers = [1, 2, 3];
        let mut view = zip(slice(&numbers), iota(10u8));
        assert_capabilities(&view, Category::RandomAccess, Traits::VIEW);
        assert_eq!(
            (&mut view).values().collect::<Vec<_>>(),
            [(1, 10), (2, 11), (3, 12)]
        );

        let start = view.first();
        let mut cursor = start;
        view.offset(&mut cursor, 2);
        assert_eq!(view.distance(&start, &cursor), 2);
        assert_eq!(view.read(&cursor), (&3, 12));
    }

    #[test]
    fn test_zip_capabilities() {
        let numbers = [1, 2, 3];
        let letters = ['a', 'b'];

        let view = zip(slice(&numbers), slice(&letters));
        assert_capabilities(
            &view,
            Category::RandomAccess,
            Traits::SIZED | Traits::COMMON | Traits::VIEW,
        );
        assert_eq!(view.size(), 2);
        check_equal(view, [(1, 'a'), (2, 'b')]);

        let view = zip(ForwardOnly::new(slice(&numbers)), slice(&letters));
        assert_capabilities(&view, Category::Forward, Traits::SIZED | Traits::VIEW);

        let view = zip(BidirectionalOnly::new(slice(&numbers)), slice(&letters));
        assert_capabilities(&view, Category::Bidirectional, Traits::SIZED | Traits::VIEW);

        let view = zip(DebugInput::new(&numbers), slice(&letters));
        assert_capabilities(&view, Category::Input, Traits::VIEW);
        check_equal(view, [(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_end_cursor_of_unequal_sources() {
        let numbers = [1, 2, 3];
        let letters = ['a', 'b'];
        let mut view = zip(slice(&numbers), slice(&letters));

        let mut cursor = view.first();
        while !view.is_end(&cursor) {
            view.advance(&mut cursor);
        }
        assert_eq!(cursor, (2, 2));
        assert_eq!(view.end_cursor(), cursor);

        let start = view.first();
        assert_eq!(view.distance(&start, &view.end_cursor()), 2);

        let mut last = view.end_cursor();
        view.retreat(&mut last);
        assert_eq!(view.read(&last), (&2, &'b'));

        let view = zip(slice(&letters), slice(&numbers));
        assert_eq!(view.end_cursor(), (2, 2));
    }

    #[test]
    fn test_zip_move_path() {
        let mut left = vec![String::from("a"), String::from("b")];
        let mut right = vec![1, 2];
        let mut view = zip(slice_mut(&mut left), slice_mut(&mut right));
        assert_capabilities(
            &view,
            Category::RandomAccess,
            Traits::SIZED | Traits::COMMON | Traits::VIEW | Traits::MUTABLE,
        );

        let cursor = view.first();
        let (text, number): (Moved<String>, Moved<i32>) = view.read_move(&cursor);
        assert_eq!(text.take(), "a");
        assert_eq!(*number, 1);

        let (_, number) = view.read(&cursor);
        *number += 10;
        assert_eq!(left, ["", "b"]);
        assert_eq!(right, [11, 2]);
    }
}
