use seqview_core_rs::capability::{is_common, is_sized};
use seqview_core_rs::source::{iota, slice, BidirectionalOnly, Unsized};
use seqview_core_rs::testing::{assert_capabilities, check_equal};
use seqview_core_rs::{Category, SizedSequence, Traits};
use seqview_views_rs::{delimit, take, Subrange, Take, ViewExt};

#[test]
fn test_take_clamps_to_source() {
    let items = [1, 2, 3, 4];

    let view = slice(&items) | take(6);
    assert_capabilities(
        &view,
        Category::RandomAccess,
        Traits::SIZED | Traits::COMMON | Traits::VIEW,
    );
    assert_eq!(view.size(), 4);
    check_equal(view, [1, 2, 3, 4]);

    let view = slice(&items) | take(20);
    assert_eq!(view.size(), 4);
    assert_eq!(view.base().size(), 4);
}

#[test]
fn test_take_over_bidirectional() {
    let items = [1, 2, 3, 4];

    let view = BidirectionalOnly::new(slice(&items)) | take(2);
    assert_capabilities(&view, Category::Forward, Traits::SIZED | Traits::VIEW);
    assert!(!is_common(&view));
    check_equal(view, [1, 2]);

    let view = BidirectionalOnly::new(Unsized::new(slice(&items))) | take(2);
    assert!(!is_sized(&view) && !is_common(&view));
    check_equal(view, [1, 2]);
}

#[test]
fn test_take_over_infinite() {
    let view = iota(0) | take(10);
    assert_capabilities(&view, Category::Forward, Traits::SIZED | Traits::VIEW);
    assert_eq!(view.size(), 10);
    check_equal(view, 0..10);
}

#[test]
fn test_take_after_delimit() {
    let text = "hello world\0";
    let chars: Vec<char> = text.chars().collect();

    let view = slice(&chars) | delimit('\0') | take(5);
    assert_capabilities(&view, Category::Forward, Traits::VIEW);
    assert!(!is_sized(&view));
    check_equal(view, ['h', 'e', 'l', 'l', 'o']);

    let view = slice(&chars) | delimit('\0');
    check_equal(view.take(20), text.trim_end_matches('\0').chars());
}

#[test]
fn test_take_of_take() {
    let view: Take<Take<_>> = iota(1u8) | take(5) | take(3);
    assert_eq!(view.size(), 3);
    check_equal(view, [1u8, 2, 3]);

    let items = [1, 2, 3, 4, 5];
    let view: Subrange<Subrange<_>> = slice(&items) | (take(4) | take(2));
    check_equal(view, [1, 2]);
}
