use std::fmt::Debug;

use derive_more::Constructor;
use higher_kinded_types::ForFixed;

use crate::capability::tag::{Infinite, RandomAccess};
use crate::capability::Traits;
use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Reference, RvalueReference,
    Sequence,
};

/// Primitive integer usable as a counting cursor.
pub trait Counter: num::PrimInt + Debug + Default {}

impl<T: num::PrimInt + Debug + Default> Counter for T {}

/// End marker that no cursor ever reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

/// Infinite sequence of consecutive integers starting at `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Constructor)]
pub struct Iota<T> {
    start: T,
}

pub fn iota<T: Counter>(start: T) -> Iota<T> {
    Iota::new(start)
}

fn steps<T: Counter>(n: usize) -> T {
    match num::cast(n) {
        Some(steps) => steps,
        None => panic!("Offset {n} doesn't fit the counter type"),
    }
}

impl<T: Counter> Iota<T> {
    pub fn start(&self) -> T {
        self.start
    }
}

impl<T: Counter> Sequence for Iota<T> {
    type Value = T;
    type Reference = ForFixed<T>;
    type RvalueReference = ForFixed<T>;
    type Cursor = T;
    type End = Unreachable;
    type Category = RandomAccess;
    type Shape = Infinite;

    const TRAITS: Traits = Traits::VIEW.union(Traits::INFINITE);

    fn first(&mut self) -> T {
        self.start
    }

    fn end(&self) -> Unreachable {
        Unreachable
    }

    fn is_end(&self, _: &T) -> bool {
        false
    }

    fn advance(&mut self, cursor: &mut T) {
        *cursor = match cursor.checked_add(&T::one()) {
            Some(next) => next,
            None => panic!("Counting sequence advanced past {cursor:?}, the maximum of its type"),
        };
    }

    fn read<'s>(&'s mut self, cursor: &T) -> Reference<'s, Self> {
        *cursor
    }

    fn read_move<'s>(&'s mut self, cursor: &T) -> RvalueReference<'s, Self> {
        *cursor
    }
}

impl<T: Counter> ForwardSequence for Iota<T> {}

impl<T: Counter> BidirectionalSequence for Iota<T> {
    fn retreat(&mut self, cursor: &mut T) {
        assert!(*cursor > self.start, "Retreated before the start of a counting sequence");
        *cursor = *cursor - T::one();
    }
}

impl<T: Counter> RandomAccessSequence for Iota<T> {
    fn offset(&self, cursor: &mut T, n: isize) {
        let delta = steps::<T>(n.unsigned_abs());
        if n >= 0 {
            *cursor = match cursor.checked_add(&delta) {
                Some(target) => target,
                None => panic!("Offset {n} moves the cursor {cursor:?} past the maximum of its type"),
            };
        } else {
            assert!(
                *cursor - self.start >= delta,
                "Offset {n} moves the cursor before the start of a counting sequence"
            );
            *cursor = *cursor - delta;
        }
    }

    fn distance(&self, from: &T, to: &T) -> isize {
        let magnitude = |a: T, b: T| -> isize {
            match num::cast(a - b) {
                Some(distance) => distance,
                None => panic!("Distance between {a:?} and {b:?} overflows isize"),
            }
        };
        if to >= from {
            magnitude(*to, *from)
        } else {
            -magnitude(*from, *to)
        }
    }
}

crate::pipeable! {
    impl[T] Iota<T>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Category;
    use crate::testing::assert_capabilities;

    #[test]
    fn test_iota() {
        let mut seq = iota(10u8);
        assert_capabilities(&seq, Category::RandomAccess, Traits::VIEW | Traits::INFINITE);
        assert_eq!(seq.end(), Unreachable);

        let mut cursor = seq.first();
        seq.offset(&mut cursor, 5);
        assert_eq!(seq.read(&cursor), 15);
        assert!(!seq.is_end(&cursor));

        let start = seq.first();
        assert_eq!(seq.distance(&start, &cursor), 5);
        assert_eq!(seq.distance(&cursor, &start), -5);

        seq.offset(&mut cursor, -5);
        assert_eq!(cursor, 10);
        assert_eq!(seq.values().take(3).collect::<Vec<_>>(), [10, 11, 12]);
    }

    #[test]
    #[should_panic(expected = "the maximum of its type")]
    fn test_advance_past_maximum() {
        let mut seq = iota(u8::MAX);
        let mut cursor = seq.first();
        seq.advance(&mut cursor);
    }

    #[test]
    #[should_panic(expected = "past the maximum of its type")]
    fn test_offset_past_maximum() {
        let seq = iota(250u8);
        let mut cursor = 250;
        seq.offset(&mut cursor, 6);
    }

    #[test]
    #[should_panic(expected = "before the start of a counting sequence")]
    fn test_offset_before_start() {
        let seq = iota(0u32);
        let mut cursor = 3;
        seq.offset(&mut cursor, -4);
    }
}
