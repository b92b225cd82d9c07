use derive_more::Constructor;
use higher_kinded_types::ForFixed;
use impl_tools::autoimpl;
use seqview_core_rs::{
    Adapted, Adaptor, Decay, Mutability, Pipe, Reference, RvalueReference, Sequence,
};

use crate::zip::Zip;

/// Element transform: both the copy and the move path apply `f` to the element reference.
#[derive(Clone, Copy, Default, Constructor)]
#[autoimpl(Debug ignore self.f)]
pub struct Elementwise<F> {
    f: F,
}

/// Element transform with a dedicated move path: `copy` maps references, `moved` maps
/// move-extracted elements.
#[derive(Clone, Copy, Default, Constructor)]
#[autoimpl(Debug ignore self.copy, self.moved)]
pub struct WithMove<F, G> {
    copy: F,
    moved: G,
}

pub type Map<S, F> = Adapted<S, Elementwise<F>>;
pub type MapWithMove<S, F, G> = Adapted<S, WithMove<F, G>>;

impl<S, F, R> Adaptor<S> for Elementwise<F>
where
    S: Sequence,
    F: for<'x> FnMut(Reference<'x, S>) -> R,
    R: Decay,
{
    type Value = R::Value;
    type Reference = ForFixed<R>;
    type RvalueReference = ForFixed<R>;

    const MUTABILITY: Mutability = Mutability::ReadOnly;

    #[inline(always)]
    fn extract_copy<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> R {
        (self.f)(base.read(cursor))
    }

    #[inline(always)]
    fn extract_move<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> R {
        (self.f)(base.read(cursor))
    }
}

impl<S, F, G, R, RR> Adaptor<S> for WithMove<F, G>
where
    S: Sequence,
    F: for<'x> FnMut(Reference<'x, S>) -> R,
    G: for<'x> FnMut(RvalueReference<'x, S>) -> RR,
    R: Decay,
{
    type Value = R::Value;
    type Reference = ForFixed<R>;
    type RvalueReference = ForFixed<RR>;

    const MUTABILITY: Mutability = Mutability::ReadOnly;

    #[inline(always)]
    fn extract_copy<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> R {
        (self.copy)(base.read(cursor))
    }

    #[inline(always)]
    fn extract_move<'s>(&mut self, base: &'s mut S, cursor: &S::Cursor) -> RR {
        (self.moved)(base.read_move(cursor))
    }
}

/// Pipe object of [transform].
#[derive(Clone, Copy, Default, Constructor)]
#[autoimpl(Debug ignore self.f)]
pub struct TransformPipe<F> {
    f: F,
}

/// Pipe object of [transform_with_move].
#[derive(Clone, Copy, Default, Constructor)]
#[autoimpl(Debug ignore self.copy, self.moved)]
pub struct TransformWithMovePipe<F, G> {
    copy: F,
    moved: G,
}

/// View of the elements mapped through `f`. The closure is owned by the view and may keep state
/// between calls; cloning the view clones that state.
pub fn transform<F>(f: F) -> TransformPipe<F> {
    TransformPipe::new(f)
}

pub fn transform_with_move<F, G>(copy: F, moved: G) -> TransformWithMovePipe<F, G> {
    TransformWithMovePipe::new(copy, moved)
}

/// Two sequences traversed in lockstep and combined by `f`, which receives the pair of element
/// references.
pub fn zip_with<A, B, F>(first: A, second: B, f: F) -> Map<Zip<A, B>, F>
where
    A: Sequence,
    B: Sequence,
{
    Adapted::new(Zip::new(first, second), Elementwise::new(f))
}

impl<S: Sequence, F> Pipe<S> for TransformPipe<F> {
    type Output = Map<S, F>;

    fn pipe(self, seq: S) -> Self::Output {
        Adapted::new(seq, Elementwise::new(self.f))
    }
}

impl<S: Sequence, F, G> Pipe<S> for TransformWithMovePipe<F, G> {
    type Output = MapWithMove<S, F, G>;

    fn pipe(self, seq: S) -> Self::Output {
        Adapted::new(seq, WithMove::new(self.copy, self.moved))
    }
}

seqview_core_rs::pipe_combinator! {
    impl[F] TransformPipe<F>;
    impl[F, G] TransformWithMovePipe<F, G>;
}
