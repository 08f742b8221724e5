use riverbed::{ImmutableListBuilder, MutableListBuilder};

#[test]
fn mutable_list_accumulates_in_order() {
    let b = MutableListBuilder::<String, Vec<String>>::create();
    b.add("a".into()).add_all(["b".to_string(), "c".to_string()]);
    assert_eq!(b.merge(), vec!["a", "b", "c"]);
    assert_eq!(b.merge(), b.merge());

    b.clear();
    assert!(b.merge().is_empty());
}

#[test]
fn immutable_list_branches_do_not_interfere() {
    let base = ImmutableListBuilder::<u32, Vec<u32>, Vec<u32>>::create().with_items([1, 2]);
    let left = base.with_item(3);
    let right = base.cleared().with_item(9);

    assert_eq!(base.build(), vec![1, 2]);
    assert_eq!(left.build(), vec![1, 2, 3]);
    assert_eq!(right.build(), vec![9]);
}

#[test]
fn list_constructors_shape_the_result() {
    let b = ImmutableListBuilder::new(
        |words: Vec<&'static str>| words.join(" "),
        |words: Vec<&'static str>| words.len(),
    )
    .with_item("hello")
    .with_item("world");

    assert_eq!(b.build(), "hello world");
    assert_eq!(b.done(), 2);
}
