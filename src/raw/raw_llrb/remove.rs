//! Deletion: push a red link down ahead of the descent so the node finally
//! removed is never a lone black node, then repair with `balance` on unwind.

use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Less};

use super::RawLlrb;
use crate::raw::handle::Handle;
use crate::raw::node::Color;

/// Subtree root after a removal, and the entry that was removed.
type Removed<K, V> = (Option<Handle>, (K, V));

impl<K, V> RawLlrb<K, V> {
    /// Paints the root red when neither child is, so the first descent step
    /// has a red link to push down.
    fn prepare_root(&mut self, root: Handle) {
        if !self.is_red(self.left_of(root)) && !self.is_red(self.right_of(root)) {
            self.nodes.get_mut(root).set_color(Color::Red);
        }
    }

    /// Removes the smallest entry, or returns `None` when the tree is empty.
    pub(crate) fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        self.prepare_root(root);
        let (root, entry) = self.delete_min_at(root);
        self.set_root(root);
        Some(entry)
    }

    /// Removes the largest entry, or returns `None` when the tree is empty.
    pub(crate) fn delete_max(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        self.prepare_root(root);
        let (root, entry) = self.delete_max_at(root);
        self.set_root(root);
        Some(entry)
    }

    fn delete_min_at(&mut self, mut h: Handle) -> Removed<K, V> {
        let Some(left) = self.left_of(h) else {
            // No left child means no right child either: `h` is a leaf.
            return (None, self.nodes.take(h).into_entry());
        };

        if !self.is_red(Some(left)) && !self.is_red(self.left_of(left)) {
            h = self.move_red_left(h);
        }
        let left = self.expect_left(h);
        let (left, entry) = self.delete_min_at(left);
        self.nodes.get_mut(h).set_left(left);
        (Some(self.balance(h)), entry)
    }

    fn delete_max_at(&mut self, mut h: Handle) -> Removed<K, V> {
        if self.is_red(self.left_of(h)) {
            h = self.rotate_right(h);
        }
        let Some(right) = self.right_of(h) else {
            return (None, self.nodes.take(h).into_entry());
        };

        if !self.is_red(Some(right)) && !self.is_red(self.left_of(right)) {
            h = self.move_red_right(h);
        }
        let right = self.expect_right(h);
        let (right, entry) = self.delete_max_at(right);
        self.nodes.get_mut(h).set_right(right);
        (Some(self.balance(h)), entry)
    }
}

impl<K: Ord, V> RawLlrb<K, V> {
    /// Removes the entry for `key`. Absent keys leave the tree untouched.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        // The descent below relies on the key being somewhere beneath it.
        self.search(key)?;

        let root = self.root?;
        self.prepare_root(root);
        let (root, entry) = self.remove_at(root, key);
        self.set_root(root);
        Some(entry)
    }

    fn compare_at<Q>(&self, key: &Q, h: Handle) -> core::cmp::Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        key.cmp(self.nodes.get(h).key().borrow())
    }

    fn remove_at<Q>(&mut self, mut h: Handle, key: &Q) -> Removed<K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let entry = if self.compare_at(key, h) == Less {
            let left = self.expect_left(h);
            if !self.is_red(Some(left)) && !self.is_red(self.left_of(left)) {
                h = self.move_red_left(h);
            }
            let left = self.expect_left(h);
            let (left, entry) = self.remove_at(left, key);
            self.nodes.get_mut(h).set_left(left);
            entry
        } else {
            if self.is_red(self.left_of(h)) {
                h = self.rotate_right(h);
            }
            if self.compare_at(key, h) == Equal && self.right_of(h).is_none() {
                return (None, self.nodes.take(h).into_entry());
            }

            let right = self.expect_right(h);
            if !self.is_red(Some(right)) && !self.is_red(self.left_of(right)) {
                h = self.move_red_right(h);
            }
            let right = self.expect_right(h);

            if self.compare_at(key, h) == Equal {
                // Pull the successor out of the right subtree and store it here.
                let (right, (key, value)) = self.delete_min_at(right);
                let node = self.nodes.get_mut(h);
                node.set_right(right);
                node.replace_entry(key, value)
            } else {
                let (right, entry) = self.remove_at(right, key);
                self.nodes.get_mut(h).set_right(right);
                entry
            }
        };

        (Some(self.balance(h)), entry)
    }
}
