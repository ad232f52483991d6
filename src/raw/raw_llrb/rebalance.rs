//! Local restructuring primitives. Each one is O(1), keeps keys in order,
//! and returns the handle now rooting the subtree it was given.

use super::RawLlrb;
use crate::raw::handle::Handle;
use crate::raw::node::Color;
use crate::raw::size::Size;

impl<K, V> RawLlrb<K, V> {
    /// The empty subtree counts as black.
    #[inline]
    pub(super) fn is_red(&self, link: Option<Handle>) -> bool {
        link.is_some_and(|h| self.nodes.get(h).color() == Color::Red)
    }

    /// True when `h` hangs a red left child that itself has a red left child.
    fn has_red_left_pair(&self, h: Handle) -> bool {
        let left = self.left_of(h);
        self.is_red(left) && self.is_red(left.and_then(|left| self.left_of(left)))
    }

    fn has_two_red_children(&self, h: Handle) -> bool {
        self.is_red(self.left_of(h)) && self.is_red(self.right_of(h))
    }

    /// Child of `h` on the path the red-black shape guarantees to exist.
    pub(super) fn expect_left(&self, h: Handle) -> Handle {
        self.left_of(h).expect("`RawLlrb` - left child missing where the tree shape requires one!")
    }

    pub(super) fn expect_right(&self, h: Handle) -> Handle {
        self.right_of(h).expect("`RawLlrb` - right child missing where the tree shape requires one!")
    }

    pub(super) fn update_size(&mut self, h: Handle) {
        let size = Size::from_children(self.subtree_size(self.left_of(h)), self.subtree_size(self.right_of(h)));
        self.nodes.get_mut(h).set_size(size);
    }

    /// Turns the red right link of `h` into a left link of its right child.
    pub(super) fn rotate_left(&mut self, h: Handle) -> Handle {
        let x = self.expect_right(h);
        debug_assert!(self.is_red(Some(x)), "`rotate_left()` - right link is not red!");

        let (color, size) = {
            let node = self.nodes.get(h);
            (node.color(), node.size())
        };
        let inner = self.left_of(x);

        let node = self.nodes.get_mut(h);
        node.set_right(inner);
        node.set_color(Color::Red);

        let promoted = self.nodes.get_mut(x);
        promoted.set_left(Some(h));
        promoted.set_color(color);
        promoted.set_size(size);

        self.update_size(h);
        x
    }

    /// Turns the red left link of `h` into a right link of its left child.
    pub(super) fn rotate_right(&mut self, h: Handle) -> Handle {
        let x = self.expect_left(h);
        debug_assert!(self.is_red(Some(x)), "`rotate_right()` - left link is not red!");

        let (color, size) = {
            let node = self.nodes.get(h);
            (node.color(), node.size())
        };
        let inner = self.right_of(x);

        let node = self.nodes.get_mut(h);
        node.set_left(inner);
        node.set_color(Color::Red);

        let promoted = self.nodes.get_mut(x);
        promoted.set_right(Some(h));
        promoted.set_color(color);
        promoted.set_size(size);

        self.update_size(h);
        x
    }

    /// Toggles `h` and both of its children. Splits a temporary 4-node on the
    /// way up, merges siblings into one on the way down.
    pub(super) fn flip_colors(&mut self, h: Handle) {
        let (left, right) = (self.expect_left(h), self.expect_right(h));
        self.nodes.get_mut(h).flip_color();
        self.nodes.get_mut(left).flip_color();
        self.nodes.get_mut(right).flip_color();
    }

    /// Given `h` red with black `h.left` and `h.left.left`, makes `h.left` or
    /// one of its children red.
    pub(super) fn move_red_left(&mut self, mut h: Handle) -> Handle {
        self.flip_colors(h);
        let right = self.expect_right(h);
        if self.is_red(self.left_of(right)) {
            let right = self.rotate_right(right);
            self.nodes.get_mut(h).set_right(Some(right));
            h = self.rotate_left(h);
            self.flip_colors(h);
        }
        h
    }

    /// Given `h` red with black `h.right` and `h.right.left`, makes `h.right`
    /// or one of its children red.
    pub(super) fn move_red_right(&mut self, mut h: Handle) -> Handle {
        self.flip_colors(h);
        let left = self.expect_left(h);
        if self.is_red(self.left_of(left)) {
            h = self.rotate_right(h);
            self.flip_colors(h);
        }
        h
    }

    /// Bottom-up repair after a deletion step below `h`.
    pub(super) fn balance(&mut self, mut h: Handle) -> Handle {
        if self.is_red(self.right_of(h)) {
            h = self.rotate_left(h);
        }
        if self.has_red_left_pair(h) {
            h = self.rotate_right(h);
        }
        if self.has_two_red_children(h) {
            self.flip_colors(h);
        }
        self.update_size(h);
        h
    }

    /// Bottom-up repair after an insertion below `h`.
    pub(super) fn fix_up_after_insert(&mut self, mut h: Handle) -> Handle {
        if self.is_red(self.right_of(h)) && !self.is_red(self.left_of(h)) {
            h = self.rotate_left(h);
        }
        if self.has_red_left_pair(h) {
            h = self.rotate_right(h);
        }
        if self.has_two_red_children(h) {
            self.flip_colors(h);
        }
        self.update_size(h);
        h
    }
}
