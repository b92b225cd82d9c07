//! Type-level mirrors of the capability model.
//!
//! Adaptors compute their category and shape from these tags at compile time, so a composed view
//! never claims more than its weakest structural dependency provides. Strategy traits implemented
//! on the tags let an adaptor pick a different output type for different kinds of sources.

use std::fmt::Debug;

use super::Category;

pub trait CategoryTag: Copy + Default + Debug {
    const CATEGORY: Category;

    /// This category capped at forward traversal.
    type UpToForward: CategoryTag;

    /// This category capped at bidirectional traversal.
    type UpToBidirectional: CategoryTag;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Input;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

macro_rules! category_tag {
    ($($tag:ident => $category:ident, $forward:ident, $bidirectional:ident;)*) => {$(
        impl CategoryTag for $tag {
            const CATEGORY: Category = Category::$category;
            type UpToForward = $forward;
            type UpToBidirectional = $bidirectional;
        }
    )*};
}

category_tag! {
    Input => Input, Input, Input;
    Forward => Forward, Forward, Forward;
    Bidirectional => Bidirectional, Forward, Bidirectional;
    RandomAccess => RandomAccess, Forward, Bidirectional;
}

/// Weakest of two categories.
pub trait MinCategory<Other: CategoryTag>: CategoryTag {
    type Output: CategoryTag;
}

macro_rules! min_category {
    ($($a:ident, $b:ident => $out:ident;)*) => {$(
        impl MinCategory<$b> for $a {
            type Output = $out;
        }
    )*};
}

min_category! {
    Input, Input => Input;
    Input, Forward => Input;
    Input, Bidirectional => Input;
    Input, RandomAccess => Input;
    Forward, Input => Input;
    Forward, Forward => Forward;
    Forward, Bidirectional => Forward;
    Forward, RandomAccess => Forward;
    Bidirectional, Input => Input;
    Bidirectional, Forward => Forward;
    Bidirectional, Bidirectional => Bidirectional;
    Bidirectional, RandomAccess => Bidirectional;
    RandomAccess, Input => Input;
    RandomAccess, Forward => Forward;
    RandomAccess, Bidirectional => Bidirectional;
    RandomAccess, RandomAccess => RandomAccess;
}

/// Coarse shape of a sequence: how its end is found.
pub trait ShapeTag: Copy + Default + Debug {
    /// Shape after losing random access or a known size.
    type Degraded: ShapeTag;
}

/// Random-access, sized and common: any prefix is another pair of cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Contiguous;

/// A finite (or not provably infinite) sequence without the full contiguous guarantees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequential;

/// The end marker is unreachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Infinite;

impl ShapeTag for Contiguous {
    type Degraded = Sequential;
}

impl ShapeTag for Sequential {
    type Degraded = Sequential;
}

impl ShapeTag for Infinite {
    type Degraded = Infinite;
}

/// Shape of two sequences traversed in lockstep.
pub trait MeetShape<Other: ShapeTag>: ShapeTag {
    type Output: ShapeTag;
}

macro_rules! meet_shape {
    ($($a:ident, $b:ident => $out:ident;)*) => {$(
        impl MeetShape<$b> for $a {
            type Output = $out;
        }
    )*};
}

meet_shape! {
    Contiguous, Contiguous => Contiguous;
    Contiguous, Sequential => Sequential;
    Contiguous, Infinite => Sequential;
    Sequential, Contiguous => Sequential;
    Sequential, Sequential => Sequential;
    Sequential, Infinite => Sequential;
    Infinite, Contiguous => Sequential;
    Infinite, Sequential => Sequential;
    Infinite, Infinite => Infinite;
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;

    assert_type_eq_all!(<RandomAccess as MinCategory<Forward>>::Output, Forward);
    assert_type_eq_all!(<Bidirectional as MinCategory<RandomAccess>>::Output, Bidirectional);
    assert_type_eq_all!(<RandomAccess as CategoryTag>::UpToForward, Forward);
    assert_type_eq_all!(<Input as CategoryTag>::UpToForward, Input);
    assert_type_eq_all!(<Contiguous as MeetShape<Infinite>>::Output, Sequential);
    assert_type_eq_all!(<Contiguous as ShapeTag>::Degraded, Sequential);
    assert_type_eq_all!(<Infinite as ShapeTag>::Degraded, Infinite);

    fn min_of<A: MinCategory<B>, B: CategoryTag>() -> Category {
        <A::Output as CategoryTag>::CATEGORY
    }

    #[test]
    fn test_min_category_matches_runtime_min() {
        let cases = [
            (min_of::<Input, RandomAccess>(), Input::CATEGORY, RandomAccess::CATEGORY),
            (min_of::<Forward, Bidirectional>(), Forward::CATEGORY, Bidirectional::CATEGORY),
            (min_of::<RandomAccess, Bidirectional>(), RandomAccess::CATEGORY, Bidirectional::CATEGORY),
            (min_of::<RandomAccess, RandomAccess>(), RandomAccess::CATEGORY, RandomAccess::CATEGORY),
        ];
        for (derived, a, b) in cases {
            assert_eq!(derived, a.min(b));
        }
    }
}
