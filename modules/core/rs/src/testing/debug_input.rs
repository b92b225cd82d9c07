use higher_kinded_types::ForFixed;

use crate::capability::tag::{Input, Sequential};
use crate::capability::Traits;
use crate::sequence::{Reference, RvalueReference, Sequence};

/// Single-pass, non-sized, non-common view over a slice that rejects multi-pass usage.
///
/// The sequence can be started only once and tracks the live position. Reading or advancing a
/// cursor that isn't the live one, or reading at the end, panics.
#[derive(Debug)]
pub struct DebugInput<'a, T> {
    items: &'a [T],
    live: usize,
    started: bool,
}

/// Cursor of [DebugInput]. It can be neither copied nor compared.
#[derive(Debug)]
pub struct InputCursor {
    pos: usize,
}

/// End marker of [DebugInput].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputEnd;

impl<'a, T> DebugInput<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            live: 0,
            started: false,
        }
    }

    fn check_live(&self, cursor: &InputCursor) {
        assert_eq!(
            cursor.pos, self.live,
            "Stale cursor of a single-pass sequence: the sequence has moved on"
        );
        assert!(
            cursor.pos < self.items.len(),
            "Single-pass cursor used past the end of the sequence"
        );
    }
}

impl<'a, T> Sequence for DebugInput<'a, T> {
    type Value = T;
    type Reference = ForFixed<&'a T>;
    type RvalueReference = ForFixed<&'a T>;
    type Cursor = InputCursor;
    type End = InputEnd;
    type Category = Input;
    type Shape = Sequential;

    const TRAITS: Traits = Traits::VIEW;

    fn first(&mut self) -> InputCursor {
        assert!(!self.started, "Single-pass sequence can't be traversed twice");
        self.started = true;
        InputCursor { pos: self.live }
    }

    fn end(&self) -> InputEnd {
        InputEnd
    }

    fn is_end(&self, cursor: &InputCursor) -> bool {
        cursor.pos == self.items.len()
    }

    fn advance(&mut self, cursor: &mut InputCursor) {
        self.check_live(cursor);
        self.live += 1;
        cursor.pos = self.live;
    }

    fn read<'s>(&'s mut self, cursor: &InputCursor) -> Reference<'s, Self> {
        self.check_live(cursor);
        let items: &'a [T] = self.items;
        &items[cursor.pos]
    }

    fn read_move<'s>(&'s mut self, cursor: &InputCursor) -> RvalueReference<'s, Self> {
        self.read(cursor)
    }
}

crate::pipeable! {
    impl['a, T] DebugInput<'a, T>;
}
