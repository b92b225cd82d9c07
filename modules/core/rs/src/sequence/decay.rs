use super::Moved;

/// Conversion of an element reference into the owned element value.
///
/// Shared and mutable references clone, move handles move the element out, owned values are
/// returned as is. Tuples decay component-wise.
pub trait Decay {
    type Value;

    fn decay(self) -> Self::Value;
}

impl<T: Clone> Decay for &T {
    type Value = T;

    fn decay(self) -> T {
        self.clone()
    }
}

impl<T: Clone> Decay for &mut T {
    type Value = T;

    fn decay(self) -> T {
        self.clone()
    }
}

impl<T: Default> Decay for Moved<'_, T> {
    type Value = T;

    fn decay(self) -> T {
        self.take()
    }
}

impl<A: Decay, B: Decay> Decay for (A, B) {
    type Value = (A::Value, B::Value);

    fn decay(self) -> Self::Value {
        (self.0.decay(), self.1.decay())
    }
}

impl<A: Decay, B: Decay, C: Decay> Decay for (A, B, C) {
    type Value = (A::Value, B::Value, C::Value);

    fn decay(self) -> Self::Value {
        (self.0.decay(), self.1.decay(), self.2.decay())
    }
}

/// Implement [Decay] for owned types that are produced by value, e.g. by a transform closure.
#[macro_export]
macro_rules! decay_by_value {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::sequence::Decay for $ty {
            type Value = $ty;

            #[inline(always)]
            fn decay(self) -> $ty {
                self
            }
        }
    )*};
}

decay_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay() {
        let mut owned = (String::from("a"), 1);
        let moved = Moved::new(&mut owned.0);
        assert_eq!((moved, 2usize).decay(), (String::from("a"), 2));
        assert_eq!(owned.0, "");

        let text = String::from("b");
        assert_eq!((&text).decay(), "b");
        assert_eq!(text, "b");
    }
}
