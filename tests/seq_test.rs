use usewire::{Seq, SeqError};

#[test]
fn starts_empty_with_no_storage() {
    let s: Seq<u32> = Seq::new();
    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
    assert_eq!(s.capacity(), 0);
}

#[test]
fn push_preserves_insertion_order() {
    let mut s = Seq::new();
    for i in 0..16 {
        s.push(i);
    }
    assert_eq!(s.len(), 16);
    for i in 0..16 {
        assert_eq!(s[i], i);
    }
}

#[test]
fn storage_stays_exact_fit_after_every_mutation() {
    let mut s = Seq::new();
    for i in 0..10 {
        s.push(i);
        assert_eq!(s.capacity(), s.len());
    }
    s.insert(3, 99).unwrap();
    assert_eq!(s.capacity(), s.len());
    s.remove(0).unwrap();
    assert_eq!(s.capacity(), s.len());
    s.pop();
    assert_eq!(s.capacity(), s.len());
}

#[test]
fn pop_returns_last_and_none_on_empty() {
    let mut s: Seq<&str> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(s.pop(), Some("c"));
    assert_eq!(s.pop(), Some("b"));
    assert_eq!(s.pop(), Some("a"));
    assert_eq!(s.pop(), None);
    assert!(s.is_empty());
}

#[test]
fn insert_shifts_tail_right() {
    let mut s: Seq<i32> = [10, 20, 30].into_iter().collect();
    s.insert(1, 15).unwrap();
    assert_eq!(&s[..], [10, 15, 20, 30]);

    // Insert at len() appends; insert at 0 prepends.
    s.insert(s.len(), 40).unwrap();
    s.insert(0, 5).unwrap();
    assert_eq!(&s[..], [5, 10, 15, 20, 30, 40]);
}

#[test]
fn insert_past_end_is_an_error() {
    let mut s: Seq<i32> = [1, 2].into_iter().collect();
    assert_eq!(
        s.insert(3, 9),
        Err(SeqError::OutOfBounds { index: 3, len: 2 })
    );
    assert_eq!(&s[..], [1, 2]);
}

#[test]
fn remove_drops_exactly_one_keeping_relative_order() {
    let mut s: Seq<char> = "abcde".chars().collect();
    assert_eq!(s.remove(2), Ok('c'));
    assert_eq!(&s[..], ['a', 'b', 'd', 'e']);
    assert_eq!(s.remove(0), Ok('a'));
    assert_eq!(&s[..], ['b', 'd', 'e']);
    assert_eq!(s.remove(2), Ok('e'));
    assert_eq!(&s[..], ['b', 'd']);
}

#[test]
fn remove_out_of_range_is_an_error() {
    let mut s: Seq<i32> = [1].into_iter().collect();
    assert_eq!(s.remove(1), Err(SeqError::OutOfBounds { index: 1, len: 1 }));
    s.clear();
    assert_eq!(s.remove(0), Err(SeqError::OutOfBounds { index: 0, len: 0 }));
}

#[test]
fn concat_appends_src_in_order_and_leaves_it_unchanged() {
    let mut dst: Seq<String> = ["x", "y"].into_iter().map(String::from).collect();
    let src: Seq<String> = ["p", "q", "r"].into_iter().map(String::from).collect();
    let src_before = src.clone();

    dst.concat(&src);
    assert_eq!(&dst[..], ["x", "y", "p", "q", "r"]);
    assert_eq!(src, src_before);
    assert_eq!(dst.capacity(), dst.len());
}

#[test]
fn concat_with_empty_sides() {
    let mut dst: Seq<i32> = Seq::new();
    let src: Seq<i32> = [7, 8].into_iter().collect();
    dst.concat(&src);
    assert_eq!(&dst[..], [7, 8]);

    let empty: Seq<i32> = Seq::new();
    dst.concat(&empty);
    assert_eq!(&dst[..], [7, 8]);
}

#[test]
fn clear_resets_to_the_empty_state() {
    let mut s: Seq<i32> = (0..100).collect();
    s.clear();
    assert_eq!(s.len(), 0);
    assert_eq!(s.capacity(), 0);
    // Usable again after release.
    s.push(1);
    assert_eq!(&s[..], [1]);
}

#[test]
fn iteration_and_slicing_through_deref() {
    let s: Seq<i32> = (1..=5).collect();
    let doubled: Vec<i32> = s.iter().map(|v| v * 2).collect();
    assert_eq!(doubled, [2, 4, 6, 8, 10]);
    assert_eq!(&s[1..3], [2, 3]);

    let consumed: Vec<i32> = s.into_iter().collect();
    assert_eq!(consumed, [1, 2, 3, 4, 5]);
}

#[test]
fn extend_keeps_order_and_exact_fit() {
    let mut s: Seq<i32> = [1, 2].into_iter().collect();
    s.extend([3, 4, 5]);
    assert_eq!(&s[..], [1, 2, 3, 4, 5]);
    assert_eq!(s.capacity(), s.len());
}
