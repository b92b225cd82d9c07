use super::Moved;

/// Read-only variant of an element reference.
pub trait Readonly {
    type Output;

    fn readonly(self) -> Self::Output;
}

impl<'a, T: ?Sized> Readonly for &'a T {
    type Output = &'a T;

    fn readonly(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> Readonly for &'a mut T {
    type Output = &'a T;

    fn readonly(self) -> &'a T {
        self
    }
}

// A move handle never turns into a mutable rvalue.
impl<'a, T: ?Sized> Readonly for Moved<'a, T> {
    type Output = &'a T;

    fn readonly(self) -> &'a T {
        self.into_ref()
    }
}

impl<A: Readonly, B: Readonly> Readonly for (A, B) {
    type Output = (A::Output, B::Output);

    fn readonly(self) -> Self::Output {
        (self.0.readonly(), self.1.readonly())
    }
}

impl<A: Readonly, B: Readonly, C: Readonly> Readonly for (A, B, C) {
    type Output = (A::Output, B::Output, C::Output);

    fn readonly(self) -> Self::Output {
        (self.0.readonly(), self.1.readonly(), self.2.readonly())
    }
}

macro_rules! readonly_by_value {
    ($($ty:ty),* $(,)?) => {$(
        impl Readonly for $ty {
            type Output = $ty;

            #[inline(always)]
            fn readonly(self) -> $ty {
                self
            }
        }
    )*};
}

readonly_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String
);
