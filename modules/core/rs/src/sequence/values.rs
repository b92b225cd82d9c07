use super::{Decay, Reference, RvalueReference, Sequence};

/// Iterator over the decayed elements of a sequence, obtained with [Sequence::values].
pub struct Values<S: Sequence> {
    seq: S,
    cursor: Option<S::Cursor>,
}

impl<S: Sequence> Values<S> {
    pub(crate) fn new(seq: S) -> Self {
        Self { seq, cursor: None }
    }
}

impl<S> Iterator for Values<S>
where
    S: Sequence,
    for<'s> Reference<'s, S>: Decay<Value = S::Value>,
{
    type Item = S::Value;

    fn next(&mut self) -> Option<S::Value> {
        let cursor = self.cursor.get_or_insert_with(|| self.seq.first());
        if self.seq.is_end(cursor) {
            return None;
        }
        let value = self.seq.read(cursor).decay();
        self.seq.advance(cursor);
        Some(value)
    }
}

/// Iterator over the elements of a sequence extracted through the move path, obtained with
/// [Sequence::moved_values].
pub struct MovedValues<S: Sequence> {
    seq: S,
    cursor: Option<S::Cursor>,
}

impl<S: Sequence> MovedValues<S> {
    pub(crate) fn new(seq: S) -> Self {
        Self { seq, cursor: None }
    }
}

impl<S> Iterator for MovedValues<S>
where
    S: Sequence,
    for<'s> RvalueReference<'s, S>: Decay<Value = S::Value>,
{
    type Item = S::Value;

    fn next(&mut self) -> Option<S::Value> {
        let cursor = self.cursor.get_or_insert_with(|| self.seq.first());
        if self.seq.is_end(cursor) {
            return None;
        }
        let value = self.seq.read_move(cursor).decay();
        self.seq.advance(cursor);
        Some(value)
    }
}
