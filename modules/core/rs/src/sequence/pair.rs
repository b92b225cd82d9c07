use super::Moved;

/// Field access on pair-shaped elements and element references.
///
/// A reference to a pair splits into references to its fields, a move handle splits into move
/// handles, so selecting a field never touches the other one.
pub trait Pair {
    type First;
    type Second;

    fn into_first(self) -> Self::First;

    fn into_second(self) -> Self::Second;
}

impl<A, B> Pair for (A, B) {
    type First = A;
    type Second = B;

    fn into_first(self) -> A {
        self.0
    }

    fn into_second(self) -> B {
        self.1
    }
}

impl<'a, A, B> Pair for &'a (A, B) {
    type First = &'a A;
    type Second = &'a B;

    fn into_first(self) -> &'a A {
        &self.0
    }

    fn into_second(self) -> &'a B {
        &self.1
    }
}

impl<'a, A, B> Pair for &'a mut (A, B) {
    type First = &'a mut A;
    type Second = &'a mut B;

    fn into_first(self) -> &'a mut A {
        &mut self.0
    }

    fn into_second(self) -> &'a mut B {
        &mut self.1
    }
}

impl<'a, A, B> Pair for Moved<'a, (A, B)> {
    type First = Moved<'a, A>;
    type Second = Moved<'a, B>;

    fn into_first(self) -> Moved<'a, A> {
        self.map(|pair| &mut pair.0)
    }

    fn into_second(self) -> Moved<'a, B> {
        self.map(|pair| &mut pair.1)
    }
}
