//! Read-only walks over the tree. Each iterator borrows the tree, so the
//! shape cannot change underneath it.

use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::RawLlrb;
use crate::raw::handle::Handle;

// Deep enough for any tree whose handles fit in 32 bits.
const INLINE_DEPTH: usize = 64;

type Stack = SmallVec<[Handle; INLINE_DEPTH]>;

/// Ascending in-order iterator driven from both ends.
///
/// The front stack holds the unvisited part of the left spine below the
/// next entry; the back stack mirrors it on the right. `remaining` stops the
/// two ends from crossing.
pub(crate) struct Iter<'a, K, V> {
    tree: &'a RawLlrb<K, V>,
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl<K, V> RawLlrb<K, V> {
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            tree: self,
            front: Stack::new(),
            back: Stack::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root);
        iter.push_right_spine(self.root);
        iter
    }

    pub(crate) fn preorder(&self) -> Preorder<'_, K, V> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    pub(crate) fn postorder(&self) -> Postorder<'_, K, V> {
        Postorder {
            tree: self,
            stack: self.root.into_iter().map(|h| (h, false)).collect(),
        }
    }
}

impl<K, V> Iter<'_, K, V> {
    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.front.push(h);
            link = self.tree.left_of(h);
        }
    }

    fn push_right_spine(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.back.push(h);
            link = self.tree.right_of(h);
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let h = self.front.pop()?;
        self.push_left_spine(tree.right_of(h));
        self.remaining -= 1;
        Some(tree.nodes.get(h).entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let h = self.back.pop()?;
        self.push_right_spine(tree.left_of(h));
        self.remaining -= 1;
        Some(tree.nodes.get(h).entry())
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

/// Node, then left subtree, then right subtree.
pub(crate) struct Preorder<'a, K, V> {
    tree: &'a RawLlrb<K, V>,
    stack: Stack,
}

impl<'a, K, V> Iterator for Preorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let h = self.stack.pop()?;
        let node = tree.nodes.get(h);
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.entry())
    }
}

impl<K, V> FusedIterator for Preorder<'_, K, V> {}

impl<K, V> Clone for Preorder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

/// Left subtree, then right subtree, then node.
pub(crate) struct Postorder<'a, K, V> {
    tree: &'a RawLlrb<K, V>,
    // `true` once the node's children have been scheduled.
    stack: SmallVec<[(Handle, bool); INLINE_DEPTH]>,
}

impl<'a, K, V> Iterator for Postorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tree = self.tree;
            let (h, expanded) = self.stack.pop()?;
            let node = tree.nodes.get(h);
            if expanded {
                return Some(node.entry());
            }
            self.stack.push((h, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<K, V> FusedIterator for Postorder<'_, K, V> {}

impl<K, V> Clone for Postorder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
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

    fn preorder_keys(tree: &RawLlrb<i32, i32>) -> Vec<i32> {
        tree.preorder().map(|(k, _)| *k).collect()
    }

    fn postorder_keys(tree: &RawLlrb<i32, i32>) -> Vec<i32> {
        tree.postorder().map(|(k, _)| *k).collect()
    }

    #[test]
    fn three_node_orders() {
        // 1, 2, 3 settles into 2 over 1 and 3.
        let tree = tree_of(&[1, 2, 3]);
        assert_eq!(keys_of(&tree), [1, 2, 3]);
        assert_eq!(preorder_keys(&tree), [2, 1, 3]);
        assert_eq!(postorder_keys(&tree), [1, 3, 2]);
    }

    #[test]
    fn empty_tree_walks_nothing() {
        let tree: RawLlrb<i32, i32> = RawLlrb::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().next_back(), None);
        assert_eq!(tree.preorder().next(), None);
        assert_eq!(tree.postorder().next(), None);
    }

    #[test]
    fn scenario_orders_agree_on_root() {
        let tree = tree_of(&SCENARIO);
        let pre = preorder_keys(&tree);
        let post = postorder_keys(&tree);

        assert_eq!(pre.len(), SCENARIO.len());
        assert_eq!(post.len(), SCENARIO.len());
        assert_eq!(pre.first(), post.last());

        let mut sorted = pre.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, keys_of(&tree));
    }

    #[test]
    fn iterator_is_one_shot_and_fused() {
        let tree = tree_of(&[5, 1, 9]);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some((&1, &10)));
        assert_eq!(iter.next_back(), Some((&9, &90)));
        assert_eq!(iter.next(), Some((&5, &50)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);

        // A fresh iterator starts over.
        assert_eq!(tree.iter().count(), 3);
    }

    proptest! {
        #[test]
        fn alternating_ends_cover_every_key_once(keys in prop::collection::vec(-1000i32..1000, 0..400), pattern in any::<u64>()) {
            let tree = tree_of(&keys);
            let mut front = Vec::new();
            let mut back = Vec::new();
            let mut iter = tree.iter();

            for step in 0u32.. {
                let from_front = (pattern >> (step % 64)) & 1 == 0;
                let item = if from_front { iter.next() } else { iter.next_back() };
                let Some((key, _)) = item else { break };
                if from_front {
                    front.push(*key);
                } else {
                    back.push(*key);
                }
            }

            back.reverse();
            front.extend(back);
            prop_assert_eq!(front, keys_of(&tree));
        }

        #[test]
        fn preorder_visits_parents_before_children(keys in prop::collection::vec(-1000i32..1000, 1..300)) {
            let tree = tree_of(&keys);
            let pre = preorder_keys(&tree);
            let post = postorder_keys(&tree);

            prop_assert_eq!(pre.len(), tree.len());
            prop_assert_eq!(post.len(), tree.len());
            // Both walks are anchored at the root.
            prop_assert_eq!(pre.first(), post.last());
        }
    }
}
