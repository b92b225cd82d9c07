use seqview_core_rs::source::{slice, BidirectionalOnly, ForwardOnly, Iota, Slice};
use seqview_core_rs::testing::{check_equal, DebugInput};
use seqview_core_rs::{
    BidirectionalSequence, Capabilities, Category, CommonSequence, ForwardSequence, Pipe,
    RandomAccessSequence, Sequence, SizedSequence, Traits,
};
use seqview_views_rs::{
    as_const, counted, delimit, moved, reverse, take, transform, zip, Counted, Delimit,
    ReversePipe, Take, Zip,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

type Items = Slice<'static, i32>;
type Single = DebugInput<'static, i32>;

assert_not_impl_any!(ReversePipe: Pipe<Single>, Pipe<Iota<i32>>, Pipe<ForwardOnly<Items>>);
assert_impl_all!(ReversePipe: Pipe<Items>, Pipe<BidirectionalOnly<Items>>);
assert_impl_all!(ReversePipe: Pipe<Zip<Items, Items>>);
assert_not_impl_any!(
    ReversePipe: Pipe<Zip<BidirectionalOnly<Items>, BidirectionalOnly<Items>>>
);

assert_impl_all!(Zip<Items, Items>: RandomAccessSequence, CommonSequence);
assert_not_impl_any!(Zip<BidirectionalOnly<Items>, Items>: CommonSequence);

assert_impl_all!(Take<Items>: ForwardSequence, SizedSequence);
assert_not_impl_any!(Take<Items>: BidirectionalSequence, CommonSequence);
assert_impl_all!(Take<Iota<i32>>: ForwardSequence, SizedSequence);

assert_impl_all!(Delimit<Items, i32>: ForwardSequence, CommonSequence);
assert_not_impl_any!(Delimit<Items, i32>: BidirectionalSequence, SizedSequence);

assert_impl_all!(Counted<Single>: Sequence, SizedSequence);
assert_not_impl_any!(Counted<Single>: ForwardSequence, CommonSequence);

const ITEMS: [i32; 3] = [1, 2, 3];

fn identity(x: &i32) -> i32 {
    *x
}

fn caps(category: Category, traits: Traits) -> Capabilities {
    Capabilities::new(category, traits)
}

#[track_caller]
fn expect<S: Sequence>(adaptor: &str, view: S, category: Category, traits: Traits) {
    assert_eq!(
        view.capabilities(),
        caps(category, traits),
        "{adaptor} derived [{}]",
        view.capabilities()
    );
}

#[test]
fn test_single_pass_sources() {
    let input = || DebugInput::new(&ITEMS);
    let plain = Traits::VIEW;

    expect("transform", input() | transform(identity), Category::Input, plain);
    expect("take", input() | take(2), Category::Input, plain);
    expect("as_const", input() | as_const(), Category::Input, plain);
    expect("moved", input() | moved(), Category::Input, plain);
    expect("counted", counted(input(), 2), Category::Input, Traits::SIZED | plain);
    expect("delimit", input() | delimit(0), Category::Input, Traits::COMMON | plain);
    expect("zip", zip(input(), slice(&ITEMS)), Category::Input, plain);
}

#[test]
fn test_single_pass_through_layers() {
    let view = DebugInput::new(&ITEMS)
        | transform(identity)
        | as_const()
        | delimit(3)
        | take(5)
        | moved();
    assert_eq!(view.capabilities(), caps(Category::Input, Traits::VIEW));
    check_equal(view, [1, 2]);
}

#[test]
fn test_forward_sources() {
    let source = ForwardOnly::new(slice(&ITEMS));
    let full = Traits::SIZED | Traits::COMMON | Traits::VIEW;
    let bounded = Traits::SIZED | Traits::VIEW;

    expect("transform", source | transform(identity), Category::Forward, full);
    expect("take", source | take(2), Category::Forward, bounded);
    expect("as_const", source | as_const(), Category::Forward, full);
    expect("moved", source | moved(), Category::Forward, full);
    expect("counted", counted(source, 2), Category::Forward, bounded);
    expect("delimit", source | delimit(0), Category::Forward, Traits::COMMON | Traits::VIEW);
    expect("zip", zip(source, slice(&ITEMS)), Category::Forward, bounded);
}

#[test]
fn test_bidirectional_sources() {
    let source = BidirectionalOnly::new(slice(&ITEMS));
    let full = Traits::SIZED | Traits::COMMON | Traits::VIEW;
    let bounded = Traits::SIZED | Traits::VIEW;

    expect("transform", source | transform(identity), Category::Bidirectional, full);
    expect("take", source | take(2), Category::Forward, bounded);
    expect("as_const", source | as_const(), Category::Bidirectional, full);
    expect("moved", source | moved(), Category::Bidirectional, full);
    expect("reverse", source | reverse(), Category::Bidirectional, full);
    expect("counted", counted(source, 2), Category::Forward, bounded);
    expect("delimit", source | delimit(0), Category::Forward, Traits::COMMON | Traits::VIEW);
    expect("zip", zip(source, slice(&ITEMS)), Category::Bidirectional, bounded);
}

#[test]
fn test_random_access_sources() {
    let source = slice(&ITEMS);
    let full = Traits::SIZED | Traits::COMMON | Traits::VIEW;

    expect("transform", source | transform(identity), Category::RandomAccess, full);
    expect("take", source | take(2), Category::RandomAccess, full);
    expect("as_const", source | as_const(), Category::RandomAccess, full);
    expect("moved", source | moved(), Category::RandomAccess, full);
    expect("reverse", source | reverse(), Category::RandomAccess, full);
    expect("counted", counted(source, 2), Category::RandomAccess, full);
    expect("delimit", source | delimit(0), Category::Forward, Traits::COMMON | Traits::VIEW);
    expect("zip", zip(source, slice(&ITEMS)), Category::RandomAccess, full);
}

#[test]
fn test_random_access_views_navigate() {
    let mut view = slice(&ITEMS) | transform(identity) | reverse();
    let start = view.first();
    let mut cursor = start;
    view.offset(&mut cursor, 2);
    assert_eq!(view.read(&cursor), 1);
    assert_eq!(view.distance(&start, &cursor), 2);
}

#[test]
fn test_runtime_requirement() {
    let provided = Capabilities::of::<Single>();
    let required = caps(Category::Bidirectional, Traits::COMMON);

    let err = provided.require(&required, "reverse").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported composition: reverse requires [bidirectional, common], but the source provides [input, view]"
    );

    assert!(Capabilities::of::<Items>().require(&required, "reverse").is_ok());
}
