use crate::idx::{Idx, SliceExt, VecExt};

#[test]
fn index_round_trip() {
    let mut arena: Vec<&str> = Vec::new();
    let a = arena.push_get_index("a");
    let b = arena.push_get_index("b");
    assert_eq!((a.usize(), b.usize()), (0, 1));
    assert_eq!(arena[b], "b");
    assert_eq!(arena.iter_index().collect::<Vec<_>>(), vec![a, b]);

    let last: Idx<()> = Idx::new(usize::MAX - 1);
    assert_eq!(last.usize(), usize::MAX - 1);
}

#[test]
#[should_panic(expected = "Index overflow")]
fn index_overflow_panics() {
    let _: Idx<()> = Idx::new(usize::MAX);
}
