//! Property tests over random delta sequences

use std::collections::HashMap;

use proptest::prelude::*;
use riverbed::{
    enum_key, BuilderKey, EnumKey, EnumMapBuilder, HashMapBuilder, ImmutableHashMapBuilder,
    MapDelta,
};

enum_key! {
    enum Slot { A, B, C, D }
}

#[derive(Debug, Clone)]
enum Op {
    Default(u8, i32),
    Value(u8, i32),
    Remove(u8),
    Add(u8, i32),
    Reset(u8),
    ResetAll,
    Clear,
}

fn key_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, -100i32..100).prop_map(|(k, v)| Op::Default(k, v)),
        (0u8..4, -100i32..100).prop_map(|(k, v)| Op::Value(k, v)),
        (0u8..4).prop_map(Op::Remove),
        (0u8..4, -5i32..5).prop_map(|(k, n)| Op::Add(k, n)),
        (0u8..4).prop_map(Op::Reset),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![8 => key_op(), 1 => Just(Op::ResetAll), 1 => Just(Op::Clear)]
}

fn delta<K: BuilderKey>(op: &Op, key: impl Fn(u8) -> K) -> MapDelta<K, i32> {
    let built = match *op {
        Op::Default(k, v) => MapDelta::default_entry(key(k), v),
        Op::Value(k, v) => MapDelta::value(key(k), v),
        Op::Remove(k) => MapDelta::remove_key(key(k)),
        Op::Add(k, n) => MapDelta::update(key(k), move |v: i32| v.wrapping_add(n)),
        Op::Reset(k) => MapDelta::reset_key(key(k)),
        Op::ResetAll => Ok(MapDelta::reset_all()),
        Op::Clear => Ok(MapDelta::clear()),
    };
    built.unwrap()
}

fn slot(k: u8) -> Slot {
    Slot::from_ordinal(usize::from(k)).unwrap()
}

fn mutable_merge(ops: &[Op]) -> HashMap<u8, i32> {
    let b = HashMapBuilder::<u8, i32>::create();
    for op in ops {
        b.post(delta(op, |k| k));
    }
    b.merge()
}

fn immutable_chain(ops: &[Op]) -> ImmutableHashMapBuilder<u8, i32> {
    ops.iter()
        .fold(ImmutableHashMapBuilder::<u8, i32>::create(), |b, op| b.post(delta(op, |k| k)))
}

proptest! {
    #[test]
    fn enum_kernel_agrees_with_hash_kernel(ops in prop::collection::vec(any_op(), 0..40)) {
        let enum_builder = EnumMapBuilder::<Slot, i32>::create();
        for op in &ops {
            enum_builder.post(delta(op, slot));
        }
        let from_enum: HashMap<u8, i32> = enum_builder
            .merge()
            .iter()
            .map(|(k, v)| (k.ordinal() as u8, *v))
            .collect();
        prop_assert_eq!(from_enum, mutable_merge(&ops));
    }

    #[test]
    fn immutable_replay_agrees_with_mutable_apply(ops in prop::collection::vec(any_op(), 0..40)) {
        let chain = immutable_chain(&ops);
        prop_assert_eq!(chain.build(), mutable_merge(&ops));
        prop_assert_eq!(chain.build(), chain.done());
    }

    #[test]
    fn last_explicit_write_wins(
        ops in prop::collection::vec(any_op(), 0..30),
        later_defaults in prop::collection::vec((0u8..4, -100i32..100), 0..5),
        k in 0u8..4,
        v in -100i32..100,
        remove in any::<bool>(),
    ) {
        let mut all = ops;
        all.push(if remove { Op::Remove(k) } else { Op::Value(k, v) });
        all.extend(later_defaults.into_iter().map(|(dk, dv)| Op::Default(dk, dv)));

        let merged = mutable_merge(&all);
        if remove {
            prop_assert_eq!(merged.get(&k), None);
        } else {
            prop_assert_eq!(merged.get(&k), Some(&v));
        }
    }

    #[test]
    fn defaults_commute_with_keyed_operations(
        ops in prop::collection::vec(key_op(), 0..30),
        k in 0u8..4,
        v in -100i32..100,
        at in any::<prop::sample::Index>(),
    ) {
        // A second default for `k` would replace this one by posting order
        let ops: Vec<Op> = ops
            .into_iter()
            .filter(|op| !matches!(op, Op::Default(dk, _) if *dk == k))
            .collect();

        let mut early = vec![Op::Default(k, v)];
        early.extend(ops.iter().cloned());

        let mut moved = ops.clone();
        moved.insert(at.index(ops.len() + 1), Op::Default(k, v));

        let mut late = ops;
        late.push(Op::Default(k, v));

        let expected = mutable_merge(&early);
        prop_assert_eq!(mutable_merge(&moved), expected.clone());
        prop_assert_eq!(mutable_merge(&late), expected);
    }

    #[test]
    fn extending_a_chain_never_changes_its_prefix(
        prefix in prop::collection::vec(any_op(), 0..20),
        suffix in prop::collection::vec(any_op(), 1..20),
    ) {
        let b0 = immutable_chain(&prefix);
        let before = b0.build();

        let extended = suffix.iter().fold(b0.clone(), |b, op| b.post(delta(op, |k| k)));
        let _ = extended.build();

        prop_assert_eq!(b0.build(), before);
        prop_assert_eq!(extended.depth(), prefix.len() + suffix.len());
    }

    #[test]
    fn merge_is_referentially_transparent(ops in prop::collection::vec(any_op(), 0..40)) {
        let b = HashMapBuilder::<u8, i32>::create();
        for op in &ops {
            b.post(delta(op, |k| k));
        }
        prop_assert_eq!(b.merge(), b.merge());
    }
}
