use derive_getters::Dissolve;
use higher_kinded_types::prelude::*;
use higher_kinded_types::ForFixed;

use crate::capability::tag::{Contiguous, RandomAccess};
use crate::capability::Traits;
use crate::sequence::{
    BidirectionalSequence, CommonSequence, ForwardSequence, Moved, RandomAccessSequence,
    Reference, RvalueReference, Sequence, SizedSequence,
};

/// Read-only view over a borrowed slice.
#[derive(Debug, PartialEq, Eq, Hash, Dissolve)]
pub struct Slice<'a, T> {
    items: &'a [T],
}

/// Mutable view over a borrowed slice. Elements are moved out through [Moved] handles.
#[derive(Debug, PartialEq, Eq, Hash, Dissolve)]
pub struct SliceMut<'a, T> {
    items: &'a mut [T],
}

pub fn slice<T>(items: &[T]) -> Slice<'_, T> {
    Slice::new(items)
}

pub fn slice_mut<T>(items: &mut [T]) -> SliceMut<'_, T> {
    SliceMut::new(items)
}

impl<'a, T> Slice<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<'a, T> SliceMut<'a, T> {
    pub fn new(items: &'a mut [T]) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        self.items
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(items: &'a mut [T]) -> Self {
        Self::new(items)
    }
}

#[inline(always)]
fn step(len: usize, cursor: usize, n: isize) -> usize {
    match cursor.checked_add_signed(n) {
        Some(target) if target <= len => target,
        _ => panic!("Offset {n} moves the cursor {cursor} out of the slice bounds [0, {len}]"),
    }
}

impl<'a, T> Sequence for Slice<'a, T> {
    type Value = T;
    type Reference = ForFixed<&'a T>;
    type RvalueReference = ForFixed<&'a T>;
    type Cursor = usize;
    type End = usize;
    type Category = RandomAccess;
    type Shape = Contiguous;

    const TRAITS: Traits = Traits::SIZED.union(Traits::COMMON).union(Traits::VIEW);

    fn first(&mut self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.items.len()
    }

    fn is_end(&self, cursor: &usize) -> bool {
        *cursor == self.items.len()
    }

    fn advance(&mut self, cursor: &mut usize) {
        assert!(*cursor < self.items.len(), "Advanced past the end of a slice");
        *cursor += 1;
    }

    fn read<'s>(&'s mut self, cursor: &usize) -> Reference<'s, Self> {
        let items: &'a [T] = self.items;
        &items[*cursor]
    }

    fn read_move<'s>(&'s mut self, cursor: &usize) -> RvalueReference<'s, Self> {
        self.read(cursor)
    }
}

impl<T> ForwardSequence for Slice<'_, T> {}

impl<T> BidirectionalSequence for Slice<'_, T> {
    fn retreat(&mut self, cursor: &mut usize) {
        assert!(*cursor > 0, "Retreated before the start of a slice");
        *cursor -= 1;
    }
}

impl<T> RandomAccessSequence for Slice<'_, T> {
    fn offset(&self, cursor: &mut usize, n: isize) {
        *cursor = step(self.items.len(), *cursor, n);
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}

impl<T> SizedSequence for Slice<'_, T> {
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> CommonSequence for Slice<'_, T> {
    fn end_cursor(&self) -> usize {
        self.items.len()
    }
}

impl<T> Sequence for SliceMut<'_, T> {
    type Value = T;
    type Reference = For!(<'s> = &'s mut T);
    type RvalueReference = For!(<'s> = Moved<'s, T>);
    type Cursor = usize;
    type End = usize;
    type Category = RandomAccess;
    type Shape = Contiguous;

    const TRAITS: Traits = Traits::SIZED
        .union(Traits::COMMON)
        .union(Traits::VIEW)
        .union(Traits::MUTABLE);

    fn first(&mut self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.items.len()
    }

    fn is_end(&self, cursor: &usize) -> bool {
        *cursor == self.items.len()
    }

    fn advance(&mut self, cursor: &mut usize) {
        assert!(*cursor < self.items.len(), "Advanced past the end of a slice");
        *cursor += 1;
    }

    fn read<'s>(&'s mut self, cursor: &usize) -> Reference<'s, Self> {
        &mut self.items[*cursor]
    }

    fn read_move<'s>(&'s mut self, cursor: &usize) -> RvalueReference<'s, Self> {
        Moved::new(&mut self.items[*cursor])
    }
}

impl<T> ForwardSequence for SliceMut<'_, T> {}

impl<T> BidirectionalSequence for SliceMut<'_, T> {
    fn retreat(&mut self, cursor: &mut usize) {
        assert!(*cursor > 0, "Retreated before the start of a slice");
        *cursor -= 1;
    }
}

impl<T> RandomAccessSequence for SliceMut<'_, T> {
    fn offset(&self, cursor: &mut usize, n: isize) {
        *cursor = step(self.items.len(), *cursor, n);
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}

impl<T> SizedSequence for SliceMut<'_, T> {
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> CommonSequence for SliceMut<'_, T> {
    fn end_cursor(&self) -> usize {
        self.items.len()
    }
}

crate::pipeable! {
    impl['a, T] Slice<'a, T>;
    impl['a, T] SliceMut<'a, T>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{is_common, is_mutable, is_sized, Category};
    use crate::testing::assert_capabilities;

    #[test]
    fn test_slice_traversal() {
        let items = [1, 2, 3, 4];
        let mut seq = slice(&items);
        assert_capabilities(
            &seq,
            Category::RandomAccess,
            Traits::SIZED | Traits::COMMON | Traits::VIEW,
        );
        assert!(is_sized(&seq) && is_common(&seq) && !is_mutable(&seq));

        let mut cursor = seq.first();
        seq.offset(&mut cursor, 3);
        assert_eq!(*seq.read(&cursor), 4);
        assert!(std::ptr::eq(seq.read(&cursor), &items[3]));

        seq.retreat(&mut cursor);
        assert_eq!(seq.distance(&cursor, &seq.end_cursor()), 2);
        assert_eq!(seq.values().collect::<Vec<_>>(), items);
    }

    #[test]
    #[should_panic(expected = "out of the slice bounds")]
    fn test_offset_out_of_bounds() {
        let items = [1, 2, 3];
        let seq = slice(&items);
        let mut cursor = 1;
        seq.offset(&mut cursor, 3);
    }

    #[test]
    #[should_panic(expected = "Advanced past the end of a slice")]
    fn test_advance_past_end() {
        let items = [1];
        let mut seq = slice(&items);
        let mut cursor = seq.end_cursor();
        seq.advance(&mut cursor);
    }

    #[test]
    fn test_slice_mut() {
        let mut items = vec![String::from("a"), String::from("b")];
        let mut seq = slice_mut(&mut items);
        assert!(is_mutable(&seq));

        let cursor = seq.first();
        seq.read(&cursor).push('!');
        assert_eq!(seq.read_move(&1).take(), "b");
        assert_eq!(seq.size(), 2);

        assert_eq!(items, ["a!", ""]);
    }
}
