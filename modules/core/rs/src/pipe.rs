//! Left-to-right composition of views: `seq | adaptor | adaptor`.
//!
//! A pipe object is a deferred adaptor application. Sequence types get `seq | pipe` through
//! [pipeable], pipe objects get `pipe | pipe` through [pipe_combinator], which builds a [Chain]
//! applied in order. Both groupings of a pipeline produce the same view type.

use derive_getters::Dissolve;
use derive_more::Constructor;

/// Deferred application of an adaptor to a sequence.
pub trait Pipe<S> {
    type Output;

    fn pipe(self, seq: S) -> Self::Output;
}

/// Two pipe objects applied one after another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Dissolve, Constructor)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<S, A, B> Pipe<S> for Chain<A, B>
where
    A: Pipe<S>,
    B: Pipe<A::Output>,
{
    type Output = B::Output;

    fn pipe(self, seq: S) -> Self::Output {
        self.second.pipe(self.first.pipe(seq))
    }
}

/// Implement `seq | pipe` for sequence types.
///
/// The generic parameters of the type are listed in brackets together with the bounds the type
/// declares.
#[macro_export]
macro_rules! pipeable {
    () => {};
    (impl[] $ty:ty; $($rest:tt)*) => {
        $crate::pipeable!(@emit [__P] $ty);
        $crate::pipeable!($($rest)*);
    };
    (impl[$($gen:tt)+] $ty:ty; $($rest:tt)*) => {
        $crate::pipeable!(@emit [$($gen)+, __P] $ty);
        $crate::pipeable!($($rest)*);
    };
    (@emit [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::BitOr<__P> for $ty
        where
            __P: $crate::pipe::Pipe<$ty>,
        {
            type Output = <__P as $crate::pipe::Pipe<$ty>>::Output;

            #[inline(always)]
            fn bitor(self, pipe: __P) -> Self::Output {
                $crate::pipe::Pipe::pipe(pipe, self)
            }
        }
    };
}

/// Implement `pipe | pipe` for pipe objects.
#[macro_export]
macro_rules! pipe_combinator {
    () => {};
    (impl[] $ty:ty; $($rest:tt)*) => {
        $crate::pipe_combinator!(@emit [__Next] $ty);
        $crate::pipe_combinator!($($rest)*);
    };
    (impl[$($gen:tt)+] $ty:ty; $($rest:tt)*) => {
        $crate::pipe_combinator!(@emit [$($gen)+, __Next] $ty);
        $crate::pipe_combinator!($($rest)*);
    };
    (@emit [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::BitOr<__Next> for $ty {
            type Output = $crate::pipe::Chain<Self, __Next>;

            #[inline(always)]
            fn bitor(self, next: __Next) -> Self::Output {
                $crate::pipe::Chain::new(self, next)
            }
        }
    };
}

pipe_combinator! {
    impl[A, B] Chain<A, B>;
}
