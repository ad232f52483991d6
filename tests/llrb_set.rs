use std::collections::BTreeSet;

use llrb_tree::{LlrbMap, LlrbSet, Rank, TreeError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Generates values in a range narrow enough to force collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -20_000i64..20_000i64
}

fn scenario() -> LlrbSet<i32> {
    [10, 5, 15, 3, 7, 12, 18, 1, 4, 6, 8, 11, 13, 17, 20].into_iter().collect()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    DeleteMin,
    DeleteMax,
    Floor(i64),
    Ceiling(i64),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::DeleteMin),
        1 => Just(SetOp::DeleteMax),
        1 => value_strategy().prop_map(SetOp::Floor),
        1 => value_strategy().prop_map(SetOp::Ceiling),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both `LlrbSet` and `BTreeSet`
    /// and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut llrb: LlrbSet<i64> = LlrbSet::new();
        let mut bt: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(llrb.insert(*v), bt.insert(*v), "insert({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(llrb.remove(v), bt.remove(v), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(llrb.contains(v), bt.contains(v), "contains({})", v);
                }
                SetOp::DeleteMin => {
                    let expected = bt.pop_first().ok_or(TreeError::Underflow { operation: "delete_min" });
                    prop_assert_eq!(llrb.delete_min(), expected, "delete_min()");
                }
                SetOp::DeleteMax => {
                    let expected = bt.pop_last().ok_or(TreeError::Underflow { operation: "delete_max" });
                    prop_assert_eq!(llrb.delete_max(), expected, "delete_max()");
                }
                SetOp::Floor(v) => {
                    prop_assert_eq!(llrb.floor(v), bt.range(..=*v).next_back(), "floor({})", v);
                }
                SetOp::Ceiling(v) => {
                    prop_assert_eq!(llrb.ceiling(v), bt.range(*v..).next(), "ceiling({})", v);
                }
            }
            prop_assert_eq!(llrb.len(), bt.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(llrb.is_empty(), bt.is_empty(), "is_empty mismatch after {:?}", op);
        }

        let items: Vec<_> = llrb.iter().copied().collect();
        let expected: Vec<_> = bt.iter().copied().collect();
        prop_assert_eq!(items, expected);
    }

    /// Iteration order matches `BTreeSet` after random insertions.
    #[test]
    fn iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let llrb: LlrbSet<i64> = values.iter().copied().collect();
        let bt: BTreeSet<i64> = values.iter().copied().collect();

        let forward: Vec<_> = llrb.iter().copied().collect();
        prop_assert_eq!(&forward, &bt.iter().copied().collect::<Vec<_>>(), "iter() mismatch");

        let reverse: Vec<_> = llrb.iter().rev().copied().collect();
        prop_assert_eq!(&reverse, &bt.iter().rev().copied().collect::<Vec<_>>(), "iter().rev() mismatch");

        let inorder: Vec<_> = llrb.inorder().copied().collect();
        prop_assert_eq!(&inorder, &forward, "inorder() mismatch");

        let owned: Vec<_> = llrb.into_iter().collect();
        prop_assert_eq!(&owned, &forward, "into_iter() mismatch");
    }

    /// Pre- and post-order walks visit every element exactly once.
    #[test]
    fn structural_walks_are_permutations(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let llrb: LlrbSet<i64> = values.iter().copied().collect();
        let sorted: Vec<_> = llrb.iter().copied().collect();

        let mut pre: Vec<_> = llrb.preorder().copied().collect();
        let mut post: Vec<_> = llrb.postorder().copied().collect();
        prop_assert_eq!(pre.first(), post.last(), "walks disagree on the root");

        pre.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&pre, &sorted);
        prop_assert_eq!(&post, &sorted);
    }

    #[test]
    fn height_is_logarithmic(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let llrb: LlrbSet<i64> = values.iter().copied().collect();
        let n = llrb.len();
        let bound = 2 * (usize::BITS - n.leading_zeros()) as usize;
        let height = llrb.height().unwrap_or_default();
        prop_assert!(height <= bound, "height {} exceeds {} for {} elements", height, bound, n);
    }

    #[test]
    fn clone_and_eq_match_btreeset(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let llrb: LlrbSet<i64> = values.iter().copied().collect();
        let copy = llrb.clone();
        prop_assert_eq!(&llrb, &copy);
        prop_assert_eq!(llrb.len(), values.iter().collect::<BTreeSet<_>>().len());
    }
}

// ─── Order-statistic operations (compared against Vec) ───────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn select_and_rank_match_vec(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let llrb: LlrbSet<i64> = values.iter().copied().collect();
        let sorted: Vec<_> = llrb.iter().copied().collect();

        for (k, v) in sorted.iter().enumerate() {
            prop_assert_eq!(llrb.select(k), Ok(v), "select({})", k);
            prop_assert_eq!(llrb[Rank(k)], *v, "[Rank({})]", k);
            prop_assert_eq!(llrb.rank(v), k, "rank({})", v);
            prop_assert_eq!(llrb.rank_of(v), Some(k), "rank_of({})", v);
        }
        prop_assert_eq!(
            llrb.select(sorted.len()),
            Err(TreeError::InvalidArgument { rank: sorted.len(), len: sorted.len() })
        );
    }

    #[test]
    fn range_count_matches_vec(
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
        lo in value_strategy(),
        hi in value_strategy(),
    ) {
        let llrb: LlrbSet<i64> = values.iter().copied().collect();
        let expected = llrb.iter().filter(|&&v| lo <= v && v <= hi).count();
        prop_assert_eq!(llrb.range_count(&lo, &hi), expected, "range_count({}, {})", lo, hi);

        let below = llrb.iter().filter(|&&v| v < lo).count();
        prop_assert_eq!(llrb.rank(&lo), below, "rank({})", lo);
    }

    #[test]
    fn order_stats_after_mutations(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut llrb: LlrbSet<i64> = LlrbSet::new();
        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    llrb.insert(*v);
                }
                SetOp::Remove(v) => {
                    llrb.remove(v);
                }
                SetOp::DeleteMin => {
                    let _ = llrb.delete_min();
                }
                SetOp::DeleteMax => {
                    let _ = llrb.delete_max();
                }
                SetOp::Contains(_) | SetOp::Floor(_) | SetOp::Ceiling(_) => {}
            }
        }

        let sorted: Vec<_> = llrb.iter().copied().collect();
        for (k, v) in sorted.iter().enumerate() {
            prop_assert_eq!(llrb.get_by_rank(k), Some(v));
            prop_assert_eq!(llrb.rank(v), k);
        }
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn scenario_queries() {
    let set = scenario();

    assert_eq!(set.len(), 15);
    assert!(set.height().is_some_and(|h| h <= 8));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 15, 17, 18, 20]);
    assert_eq!(set.min(), Ok(&1));
    assert_eq!(set.max(), Ok(&20));
    assert_eq!(set.floor(&9), Some(&8));
    assert_eq!(set.ceiling(&9), Some(&10));
    assert_eq!(set.select(0), Ok(&1));
    assert_eq!(set.select(5), Ok(&7));
    assert_eq!(set.select(14), Ok(&20));
    assert_eq!(set.rank(&7), 5);
    assert_eq!(set.rank(&15), 11);
    assert_eq!(set.range_count(&7, &13), 6);
    assert_eq!(set.range_count(&5, &15), 9);
}

#[test]
fn scenario_deletions() {
    let mut set = scenario();

    assert_eq!(set.delete_min(), Ok(1));
    assert_eq!(set.delete_max(), Ok(20));
    assert!(set.remove(&10));
    assert!(!set.remove(&10));

    assert_eq!(set.len(), 12);
    assert_eq!(set.min(), Ok(&3));
    assert_eq!(set.max(), Ok(&18));
    assert_eq!(set.rank(&11), 6);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7, 8, 11, 12, 13, 15, 17, 18]);
}

#[test]
fn ascending_inserts() {
    let set: LlrbSet<u32> = (1..=1000).collect();
    assert_eq!(set.len(), 1000);
    assert!(set.height().is_some_and(|h| h <= 20));
    assert_eq!(set.select(0), Ok(&1));
    assert_eq!(set.select(999), Ok(&1000));
}

#[test]
fn duplicate_insert_keeps_shape() {
    let mut set = scenario();
    let before: Vec<_> = set.preorder().copied().collect();
    assert!(!set.insert(7));
    assert_eq!(set.len(), 15);
    assert_eq!(set.preorder().copied().collect::<Vec<_>>(), before);
}

/// Orders by the number only, so equal elements can still be told apart.
#[derive(Debug)]
struct Labelled(i32, &'static str);

impl PartialEq for Labelled {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Labelled {}

impl PartialOrd for Labelled {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Labelled {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn duplicate_insert_stores_the_new_element() {
    let mut set = LlrbSet::new();
    assert!(set.insert(Labelled(1, "old")));
    assert!(set.insert(Labelled(2, "other")));
    assert!(!set.insert(Labelled(1, "new")));

    assert_eq!(set.len(), 2);
    assert_eq!(set.first().map(|l| l.1), Some("new"));
    assert_eq!(set.get(&Labelled(1, "")).map(|l| l.1), Some("new"));
}

#[test]
fn min_and_max_on_owned_collections() {
    let set: LlrbSet<i32> = LlrbSet::from([3, 1, 2]);
    assert_eq!(set.min(), Ok(&1));
    assert_eq!(set.max(), Ok(&3));

    let map = LlrbMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    assert_eq!(map.min(), Ok((&1, &'a')));
    assert_eq!(map.max(), Ok((&3, &'c')));
}

#[test]
fn empty_set_errors() {
    let mut set: LlrbSet<i32> = LlrbSet::new();

    assert_eq!(set.delete_min(), Err(TreeError::Underflow { operation: "delete_min" }));
    assert_eq!(set.delete_max(), Err(TreeError::Underflow { operation: "delete_max" }));
    assert_eq!(set.min(), Err(TreeError::EmptyAccess { operation: "min" }));
    assert_eq!(set.max(), Err(TreeError::EmptyAccess { operation: "max" }));
    assert_eq!(set.select(0), Err(TreeError::InvalidArgument { rank: 0, len: 0 }));
    assert_eq!(set.height(), None);
    assert_eq!(set.rank(&5), 0);
    assert_eq!(set.range_count(&0, &10), 0);
    assert!(!set.remove(&5));
    assert!(set.is_empty());
}

#[test]
fn select_out_of_range() {
    let set = scenario();
    let err = set.select(15).unwrap_err();
    assert_eq!(err, TreeError::InvalidArgument { rank: 15, len: 15 });
    assert_eq!(err.to_string(), "select: rank 15 is out of range for 15 elements");
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_past_end_panics() {
    let set = LlrbSet::from([1, 2, 3]);
    let _value = set[Rank(3)];
}

#[test]
fn single_element_lifecycle() {
    let mut set = LlrbSet::new();
    set.insert(42);
    assert_eq!(set.height(), Some(0));
    assert_eq!(set.delete_max(), Ok(42));
    assert!(set.is_empty());

    set.insert(42);
    assert_eq!(set.take(&42), Some(42));
    assert!(set.is_empty());
}

#[test]
fn drain_both_ends_alternately() {
    let mut set: LlrbSet<i32> = (0..100).collect();
    let mut low = 0;
    let mut high = 99;
    while !set.is_empty() {
        assert_eq!(set.delete_min(), Ok(low));
        low += 1;
        if let Ok(max) = set.delete_max() {
            assert_eq!(max, high);
            high -= 1;
        }
    }
    assert_eq!(low, 50);
}

#[test]
fn capacity_is_reused_after_clear() {
    let mut set: LlrbSet<i32> = LlrbSet::with_capacity(64);
    let capacity = set.capacity();
    assert!(capacity >= 64);

    set.extend(0..64);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.capacity(), capacity);

    set.extend(0..64);
    assert_eq!(set.len(), 64);
}
