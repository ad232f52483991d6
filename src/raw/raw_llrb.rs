use core::cmp::Ordering::{Equal, Greater, Less};

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};

mod query;
mod rebalance;
mod remove;
mod traversal;

pub(crate) use traversal::{Iter, Postorder, Preorder};

/// The left-leaning red-black tree engine backing `LlrbMap`.
///
/// Every mutation recurses from the root, edits one subtree, and hands back
/// the (possibly different) handle of that subtree's new root so the parent
/// can re-link it on the way up.
#[derive(Clone)]
pub(crate) struct RawLlrb<K, V> {
    /// Arena owning every node; links between nodes are handles into it.
    nodes: Arena<Node<K, V>>,
    /// Root of the tree, `None` when empty. Black whenever no operation is in flight.
    root: Option<Handle>,
}

impl<K, V> RawLlrb<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.subtree_size(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        log::trace!("reserving room for {additional} more nodes");
        self.nodes.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        log::trace!("clearing tree of {} nodes", self.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Number of nodes under `link`, zero for the empty subtree.
    #[inline]
    fn subtree_size(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |h| self.nodes.get(h).size().to_usize())
    }

    #[inline]
    fn left_of(&self, h: Handle) -> Option<Handle> {
        self.nodes.get(h).left()
    }

    #[inline]
    fn right_of(&self, h: Handle) -> Option<Handle> {
        self.nodes.get(h).right()
    }

    /// Makes `root` the root and paints it black.
    fn set_root(&mut self, root: Option<Handle>) {
        self.root = root;
        if let Some(root) = root {
            self.nodes.get_mut(root).set_color(Color::Black);
        }
    }

    /// Moves every entry out in ascending order. O(n), no rebalancing.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stack: Vec<Handle> = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(h) = current {
                stack.push(h);
                current = self.left_of(h);
            }
            let Some(h) = stack.pop() else { break };
            current = self.right_of(h);
            entries.push(self.nodes.take(h).into_entry());
        }

        entries
    }
}

impl<K: Ord, V> RawLlrb<K, V> {
    /// Inserts `key`, replacing the value in place when the key is present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, old) = self.insert_at(self.root, key, value);
        self.set_root(Some(root));
        old
    }

    fn insert_at(&mut self, link: Option<Handle>, key: K, value: V) -> (Handle, Option<V>) {
        let Some(h) = link else {
            return (self.nodes.alloc(Node::new(key, value)), None);
        };

        let old = match key.cmp(self.nodes.get(h).key()) {
            Less => {
                let left = self.left_of(h);
                let (left, old) = self.insert_at(left, key, value);
                self.nodes.get_mut(h).set_left(Some(left));
                old
            }
            Greater => {
                let right = self.right_of(h);
                let (right, old) = self.insert_at(right, key, value);
                self.nodes.get_mut(h).set_right(Some(right));
                old
            }
            Equal => Some(core::mem::replace(self.nodes.get_mut(h).value_mut(), value)),
        };

        // An overwrite leaves shape, colors and sizes untouched.
        if old.is_some() {
            return (h, old);
        }
        (self.fix_up_after_insert(h), None)
    }

    /// Stores `key` in place of an equal key, returning the one it displaced.
    /// Inserts `key` with `value` when no equal key is present.
    pub(crate) fn replace_key(&mut self, key: K, value: V) -> Option<K> {
        match self.search(&key) {
            Some(h) => Some(self.nodes.get_mut(h).replace_key(key)),
            None => {
                self.insert(key, value);
                None
            }
        }
    }
}
