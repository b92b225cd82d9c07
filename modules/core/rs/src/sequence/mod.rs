pub use decay::Decay;
pub use moved::Moved;
pub use pair::Pair;
pub use readonly::Readonly;
pub use values::{MovedValues, Values};

use higher_kinded_types::prelude::*;

use crate::capability::{Capabilities, CategoryTag, ShapeTag, Traits};

mod decay;
mod moved;
mod pair;
mod readonly;
mod values;

/// What reading a cursor of `S` yields while the sequence is borrowed for `'s`.
pub type Reference<'s, S> = <<S as Sequence>::Reference as ForLt>::Of<'s>;

/// What move-extracting a cursor of `S` yields while the sequence is borrowed for `'s`.
pub type RvalueReference<'s, S> = <<S as Sequence>::RvalueReference as ForLt>::Of<'s>;

/// A lazily traversed sequence of elements.
///
/// Cursors are plain positions: every read goes through the sequence itself. The traversal category
/// and the shape are declared as type-level tags, the remaining structural traits as a constant.
/// Stronger traversal guarantees are expressed by the [ForwardSequence], [BidirectionalSequence] and
/// [RandomAccessSequence] traits, a known size by [SizedSequence], a common end by [CommonSequence].
///
/// The reference triple is `Value` together with the `Reference` and `RvalueReference` families,
/// which may borrow from the sequence for the duration of a read.
pub trait Sequence {
    /// Decayed (owned) element type.
    type Value;
    type Reference: ForLt;
    type RvalueReference: ForLt;
    type Cursor;
    type End;

    type Category: CategoryTag;
    type Shape: ShapeTag;

    const TRAITS: Traits;
    const CAPABILITIES: Capabilities = Capabilities::of::<Self>();

    /// Cursor at the beginning of the sequence. Single-pass sequences can be started only once.
    fn first(&mut self) -> Self::Cursor;

    fn end(&self) -> Self::End;

    fn is_end(&self, cursor: &Self::Cursor) -> bool;

    /// Step the cursor to the next element. Advancing a cursor at the end is a contract violation.
    fn advance(&mut self, cursor: &mut Self::Cursor);

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self>;

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self>;

    fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
    }

    /// Iterator over the decayed elements.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
        for<'s> Reference<'s, Self>: Decay<Value = Self::Value>,
    {
        Values::new(self)
    }

    /// Iterator over the elements extracted through the move path.
    fn moved_values(self) -> MovedValues<Self>
    where
        Self: Sized,
        for<'s> RvalueReference<'s, Self>: Decay<Value = Self::Value>,
    {
        MovedValues::new(self)
    }

    /// Visit every element by reference.
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: for<'s> FnMut(Reference<'s, Self>),
    {
        let mut cursor = self.first();
        while !self.is_end(&cursor) {
            f(self.read(&cursor));
            self.advance(&mut cursor);
        }
    }
}

/// Multi-pass sequence: cursors are copyable and comparable positions.
pub trait ForwardSequence: Sequence<Cursor: Clone + PartialEq> {}

pub trait BidirectionalSequence: ForwardSequence {
    fn retreat(&mut self, cursor: &mut Self::Cursor);
}

pub trait RandomAccessSequence: BidirectionalSequence {
    fn offset(&self, cursor: &mut Self::Cursor, n: isize);

    /// Signed number of steps from `from` to `to`.
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize;
}

pub trait SizedSequence: Sequence {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// The end marker is a cursor: `End` and `Cursor` are the same type.
pub trait CommonSequence: Sequence {
    fn end_cursor(&self) -> Self::Cursor;
}

// A mutable borrow of a sequence is a view over it. Traversing through the borrow keeps any
// adaptor state, so the same sequence can be traversed repeatedly.
impl<S: Sequence> Sequence for &mut S {
    type Value = S::Value;
    type Reference = S::Reference;
    type RvalueReference = S::RvalueReference;
    type Cursor = S::Cursor;
    type End = S::End;
    type Category = S::Category;
    type Shape = S::Shape;

    const TRAITS: Traits = S::TRAITS.union(Traits::VIEW);

    fn first(&mut self) -> Self::Cursor {
        (**self).first()
    }

    fn end(&self) -> Self::End {
        (**self).end()
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        (**self).is_end(cursor)
    }

    fn advance(&mut self, cursor: &mut Self::Cursor) {
        (**self).advance(cursor)
    }

    fn read<'s>(&'s mut self, cursor: &Self::Cursor) -> Reference<'s, Self> {
        (**self).read(cursor)
    }

    fn read_move<'s>(&'s mut self, cursor: &Self::Cursor) -> RvalueReference<'s, Self> {
        (**self).read_move(cursor)
    }
}

impl<S: ForwardSequence> ForwardSequence for &mut S {}

impl<S: BidirectionalSequence> BidirectionalSequence for &mut S {
    fn retreat(&mut self, cursor: &mut Self::Cursor) {
        (**self).retreat(cursor)
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for &mut S {
    fn offset(&self, cursor: &mut Self::Cursor, n: isize) {
        (**self).offset(cursor, n)
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        (**self).distance(from, to)
    }
}

impl<S: SizedSequence> SizedSequence for &mut S {
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S: CommonSequence> CommonSequence for &mut S {
    fn end_cursor(&self) -> Self::Cursor {
        (**self).end_cursor()
    }
}
