use std::collections::BTreeMap;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use crate::key::{key_from_slice, Key};
use crate::tree::PhTree;

const DIM: usize = 3;

/// Key components are kept in a small range so that random sequences
/// actually collide, split, and merge within a handful of operations
/// instead of scattering across the whole keyspace.
fn component() -> impl Strategy<Value = u64> {
    0u64..64
}

#[derive(Debug, Clone)]
struct TestKey(Key);

impl Arbitrary for TestKey {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::array::uniform3(component())
            .prop_map(|components| TestKey(key_from_slice(&components)))
            .boxed()
    }
}

/// Actions to test against both implementations.
#[derive(Arbitrary, Debug, Clone)]
enum Action {
    Put(TestKey, i64),
    Get(TestKey),
    Remove(TestKey),
}

/// Test harness that executes actions on both `PhTree` and a `BTreeMap`
/// reference model.
struct Test {
    tree: PhTree<i64>,
    model: BTreeMap<Key, i64>,
}

impl Default for Test {
    fn default() -> Self {
        Self { tree: PhTree::new(DIM), model: BTreeMap::new() }
    }
}

impl Test {
    fn execute(&mut self, action: Action) {
        match action {
            Action::Put(key, value) => {
                let tree_result = self.tree.put(&key.0, value).unwrap();
                let model_result = self.model.insert(key.0.clone(), value);
                assert_eq!(
                    tree_result, model_result,
                    "put mismatch: key={:?}, tree={:?}, model={:?}",
                    key.0, tree_result, model_result
                );
            }
            Action::Get(key) => {
                let tree_result = self.tree.get(&key.0).unwrap().copied();
                let model_result = self.model.get(&key.0).copied();
                assert_eq!(
                    tree_result, model_result,
                    "get mismatch: key={:?}, tree={:?}, model={:?}",
                    key.0, tree_result, model_result
                );
            }
            Action::Remove(key) => {
                let tree_result = self.tree.remove(&key.0).unwrap();
                let model_result = self.model.remove(&key.0);
                assert_eq!(
                    tree_result, model_result,
                    "remove mismatch: key={:?}, tree={:?}, model={:?}",
                    key.0, tree_result, model_result
                );
            }
        }
        assert_eq!(
            self.tree.len(),
            self.model.len(),
            "length mismatch after action: tree={}, model={}",
            self.tree.len(),
            self.model.len()
        );
        assert_eq!(
            self.tree.is_empty(),
            self.model.is_empty(),
            "is_empty mismatch: tree={}, model={}",
            self.tree.is_empty(),
            self.model.is_empty()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn put_get_remove_matches_a_btreemap_model(actions in prop::collection::vec(any::<Action>(), 1..128)) {
        let mut test = Test::default();
        for action in actions {
            test.execute(action);
        }
    }

    #[test]
    fn full_iteration_matches_model_after_random_ops(actions in prop::collection::vec(any::<Action>(), 1..128)) {
        let mut test = Test::default();
        for action in actions {
            test.execute(action);
        }
        let mut seen: Vec<(Key, i64)> = test.tree.iter().map(|(k, v)| (k, *v)).collect();
        seen.sort();
        let mut expected: Vec<(Key, i64)> = test.model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }
}
