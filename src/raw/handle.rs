use core::fmt;
use core::num::NonZero;

// Narrow under test so the `Handle::MAX` limits are reachable.
#[cfg(test)]
pub(super) type RawHandle = u16;
#[cfg(not(test))]
pub(super) type RawHandle = u32;

/// Packs a value known to lie in `1..=RawHandle::MAX` into the shared
/// non-zero representation of handles and subtree sizes.
#[inline]
pub(super) const fn non_zero(value: usize) -> NonZero<RawHandle> {
    #[allow(clippy::cast_possible_truncation)]
    let raw = value as RawHandle;
    match NonZero::new(raw) {
        Some(raw) => raw,
        None => panic!("`non_zero()` - `value` is zero!"),
    }
}

/// Link to a node slot in the arena.
///
/// Holds the slot index plus one, so `Option<Handle>` is as small as a bare
/// handle and `None` is the empty subtree.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        Self(non_zero(index + 1))
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_index())
    }
}
