use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use super::RawLlrb;
use crate::raw::handle::Handle;

impl<K, V> RawLlrb<K, V> {
    fn entry(&self, h: Handle) -> (&K, &V) {
        self.nodes.get(h).entry()
    }

    fn leftmost(&self, mut h: Handle) -> Handle {
        while let Some(left) = self.left_of(h) {
            h = left;
        }
        h
    }

    fn rightmost(&self, mut h: Handle) -> Handle {
        while let Some(right) = self.right_of(h) {
            h = right;
        }
        h
    }

    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(self.leftmost(root)))
    }

    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(self.rightmost(root)))
    }

    /// Entry at zero-based position `rank` in ascending order.
    pub(crate) fn select(&self, rank: usize) -> Option<(&K, &V)> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root;
        let mut remaining = rank;
        while let Some(h) = current {
            let left = self.left_of(h);
            let left_size = self.subtree_size(left);
            match remaining.cmp(&left_size) {
                Less => current = left,
                Equal => return Some(self.entry(h)),
                Greater => {
                    remaining -= left_size + 1;
                    current = self.right_of(h);
                }
            }
        }

        // Only reachable if subtree sizes disagree with `len()`.
        None
    }

    /// Edges on the longest root-to-leaf path, `None` for an empty tree.
    pub(crate) fn height(&self) -> Option<usize> {
        self.root.map(|root| self.height_at(root))
    }

    fn height_at(&self, h: Handle) -> usize {
        let left = self.left_of(h).map_or(0, |left| 1 + self.height_at(left));
        let right = self.right_of(h).map_or(0, |right| 1 + self.height_at(right));
        left.max(right)
    }
}

impl<K: Ord, V> RawLlrb<K, V> {
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(h) = current {
            current = match key.cmp(self.nodes.get(h).key().borrow()) {
                Less => self.left_of(h),
                Greater => self.right_of(h),
                Equal => return Some(h),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|h| self.entry(h))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<(&K, &mut V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let h = self.search(key)?;
        Some(self.nodes.get_mut(h).entry_mut())
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Largest entry whose key is `<= key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            current = match key.cmp(self.nodes.get(h).key().borrow()) {
                Less => self.left_of(h),
                Greater => {
                    best = Some(h);
                    self.right_of(h)
                }
                Equal => return Some(self.entry(h)),
            };
        }
        best.map(|h| self.entry(h))
    }

    /// Smallest entry whose key is `>= key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            current = match key.cmp(self.nodes.get(h).key().borrow()) {
                Less => {
                    best = Some(h);
                    self.left_of(h)
                }
                Greater => self.right_of(h),
                Equal => return Some(self.entry(h)),
            };
        }
        best.map(|h| self.entry(h))
    }

    /// Number of keys strictly less than `key`, and whether `key` itself is present.
    fn locate<Q>(&self, key: &Q) -> (usize, bool)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(h) = current {
            let left = self.left_of(h);
            current = match key.cmp(self.nodes.get(h).key().borrow()) {
                Less => left,
                Greater => {
                    rank += self.subtree_size(left) + 1;
                    self.right_of(h)
                }
                Equal => return (rank + self.subtree_size(left), true),
            };
        }
        (rank, false)
    }

    /// Number of keys strictly less than `key`; `key` need not be present.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.locate(key).0
    }

    /// Position of `key` in ascending order, `None` if it is absent.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(key) {
            (rank, true) => Some(rank),
            (_, false) => None,
        }
    }

    /// Number of keys in `lo..=hi`.
    pub(crate) fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if lo > hi {
            return 0;
        }
        let (below_hi, hi_present) = self.locate(hi);
        below_hi - self.rank(lo) + usize::from(hi_present)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::tests::{SCENARIO, keys_of, tree_of};
    use super::*;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn scenario_queries() {
        let tree = tree_of(&SCENARIO);

        assert_eq!(tree.len(), 15);
        assert!(tree.height().is_some_and(|h| h <= 8));
        assert_eq!(keys_of(&tree), [1, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 15, 17, 18, 20]);

        assert_eq!(tree.floor(&9), Some((&8, &80)));
        assert_eq!(tree.ceiling(&9), Some((&10, &100)));
        assert_eq!(tree.floor(&6), Some((&6, &60)));
        assert_eq!(tree.ceiling(&6), Some((&6, &60)));

        assert_eq!(tree.select(0), Some((&1, &10)));
        assert_eq!(tree.select(5), Some((&7, &70)));
        assert_eq!(tree.select(14), Some((&20, &200)));
        assert_eq!(tree.select(15), None);

        assert_eq!(tree.rank(&7), 5);
        assert_eq!(tree.rank(&15), 11);
        assert_eq!(tree.rank(&0), 0);
        assert_eq!(tree.rank(&99), 15);

        assert_eq!(tree.range_count(&7, &13), 6);
        assert_eq!(tree.range_count(&5, &15), 9);
        assert_eq!(tree.range_count(&13, &7), 0);
        assert_eq!(tree.range_count(&9, &9), 0);
        assert_eq!(tree.range_count(&10, &10), 1);
    }

    #[test]
    fn bounds_outside_key_range() {
        let tree = tree_of(&SCENARIO);
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.ceiling(&21), None);
        assert_eq!(tree.floor(&21), Some((&20, &200)));
        assert_eq!(tree.ceiling(&0), Some((&1, &10)));
    }

    #[test]
    fn empty_tree_queries() {
        let tree: RawLlrb<i32, i32> = RawLlrb::new();
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.height(), None);
        assert_eq!(tree.select(0), None);
        assert_eq!(tree.rank(&3), 0);
        assert_eq!(tree.rank_of(&3), None);
        assert_eq!(tree.range_count(&0, &10), 0);
        assert_eq!(tree.floor(&3), None);
        assert_eq!(tree.ceiling(&3), None);
    }

    #[test]
    fn height_counts_edges() {
        assert_eq!(tree_of(&[1]).height(), Some(0));
        assert_eq!(tree_of(&[1, 2]).height(), Some(1));
        assert_eq!(tree_of(&[1, 2, 3]).height(), Some(1));
    }

    #[test]
    fn get_mut_updates_value() {
        let mut tree = tree_of(&SCENARIO);
        if let Some((_, value)) = tree.get_mut(&12) {
            *value = -1;
        }
        assert_eq!(tree.get(&12), Some((&12, &-1)));
        assert_eq!(tree.get_mut(&9), None);
    }

    proptest! {
        #[test]
        fn rank_and_select_agree(keys in prop::collection::vec(-5_000i32..5_000, 1..500)) {
            let tree = tree_of(&keys);
            let sorted = keys_of(&tree);

            for (k, key) in sorted.iter().enumerate() {
                prop_assert_eq!(tree.select(k).map(|(key, _)| *key), Some(*key));
                prop_assert_eq!(tree.rank(key), k);
                prop_assert_eq!(tree.rank_of(key), Some(k));
            }
        }

        #[test]
        fn queries_match_sorted_slice(keys in prop::collection::vec(-500i32..500, 0..300), probe in -600i32..600, span in 0i32..200) {
            let tree = tree_of(&keys);
            let sorted: Vec<i32> = keys_of(&tree);

            let floor = sorted.iter().rev().find(|&&k| k <= probe).copied();
            let ceiling = sorted.iter().find(|&&k| k >= probe).copied();
            prop_assert_eq!(tree.floor(&probe).map(|(k, _)| *k), floor);
            prop_assert_eq!(tree.ceiling(&probe).map(|(k, _)| *k), ceiling);

            let below = sorted.iter().filter(|&&k| k < probe).count();
            prop_assert_eq!(tree.rank(&probe), below);

            let hi = probe + span;
            let inside = sorted.iter().filter(|&&k| probe <= k && k <= hi).count();
            prop_assert_eq!(tree.range_count(&probe, &hi), inside);
        }
    }
}
