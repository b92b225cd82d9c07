//! Helpers for checking views against minimal sources and declared capabilities.

use std::fmt::Debug;

pub use debug_input::{DebugInput, InputCursor, InputEnd};

use crate::capability::{Capabilities, Category, Traits};
use crate::sequence::{Decay, Reference, Sequence};

mod debug_input;

/// Assert the capabilities declared by the type of `seq`.
#[track_caller]
pub fn assert_capabilities<S: Sequence>(_: &S, category: Category, traits: Traits) {
    let expected = Capabilities::new(category, traits);
    assert_eq!(
        S::CAPABILITIES,
        expected,
        "{} declares [{}], expected [{}]",
        std::any::type_name::<S>(),
        S::CAPABILITIES,
        expected
    );
}

/// Compile-time check that `value` has type `T`.
pub fn has_type<T>(_: &T) {}

/// Assert that `seq` yields exactly the `expected` values.
#[track_caller]
pub fn check_equal<S, I>(seq: S, expected: I)
where
    S: Sequence,
    S::Value: Debug + PartialEq<I::Item>,
    I: IntoIterator,
    I::Item: Debug,
    for<'s> Reference<'s, S>: Decay<Value = S::Value>,
{
    itertools::assert_equal(seq.values(), expected);
}
