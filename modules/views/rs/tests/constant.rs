use seqview_core_rs::capability::is_mutable;
use seqview_core_rs::source::{slice, slice_mut, ForwardOnly};
use seqview_core_rs::testing::{assert_capabilities, check_equal, has_type, DebugInput};
use seqview_core_rs::{Category, Sequence, Traits};
use seqview_views_rs::{as_const, moved, zip, ViewExt};

#[test]
fn test_const_hides_mutability() {
    let mut items = [1, 2, 3];

    let mut view = slice_mut(&mut items) | as_const();
    assert!(!is_mutable(&view));
    assert_capabilities(
        &view,
        Category::RandomAccess,
        Traits::SIZED | Traits::COMMON | Traits::VIEW,
    );

    let cursor = view.first();
    has_type::<&i32>(&view.read(&cursor));
    has_type::<&i32>(&view.read_move(&cursor));
    check_equal(view, [1, 2, 3]);
}

#[test]
fn test_const_keeps_weak_categories() {
    let items = [1, 2, 3];

    let view = DebugInput::new(&items) | as_const();
    assert_capabilities(&view, Category::Input, Traits::VIEW);
    check_equal(view, items);

    let view = ForwardOnly::new(slice(&items)).as_const();
    assert_capabilities(
        &view,
        Category::Forward,
        Traits::SIZED | Traits::COMMON | Traits::VIEW,
    );
}

#[test]
fn test_const_over_zip() {
    let mut numbers = [1, 2];
    let mut names = [String::from("a"), String::from("b")];

    let mut view = zip(slice_mut(&mut numbers), slice_mut(&mut names)) | as_const();
    assert!(!is_mutable(&view));

    let cursor = view.first();
    has_type::<(&i32, &String)>(&view.read(&cursor));
    has_type::<(&i32, &String)>(&view.read_move(&cursor));
    check_equal(view, [(1, String::from("a")), (2, String::from("b"))]);

    let mut view = zip(slice_mut(&mut numbers), slice_mut(&mut names)) | moved() | as_const();
    let cursor = view.first();
    has_type::<(&i32, &String)>(&view.read_move(&cursor));
    check_equal(view, [(1, String::from("a")), (2, String::from("b"))]);

    assert_eq!(names, ["a", "b"]);
}
