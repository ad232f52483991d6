use core::num::NonZero;

use super::handle::{Handle, RawHandle, non_zero};

/// Number of nodes in a non-empty subtree.
///
/// A live node always counts itself, so the count is never zero and shares
/// the handle's integer width: the arena never holds more than
/// `Handle::MAX` nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(NonZero<RawHandle>);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size >= 1 && size <= Self::MAX, "`Size::from_usize()` - `size` out of range!");
        Self(non_zero(size))
    }

    /// The size of a node whose children hold `left` and `right` nodes.
    #[inline]
    pub(crate) const fn from_children(left: usize, right: usize) -> Self {
        Self::from_usize(1 + left + right)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get() as usize
    }
}
