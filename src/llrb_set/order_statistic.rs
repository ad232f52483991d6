use core::borrow::Borrow;
use core::ops::Index;

use super::LlrbSet;
use crate::{Rank, TreeError};

impl<T> LlrbSet<T> {
    /// Returns the element at zero-based position `rank` in ascending order.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `rank >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{LlrbSet, TreeError};
    ///
    /// let set = LlrbSet::from([10, 20, 30]);
    /// assert_eq!(set.select(1), Ok(&20));
    /// assert_eq!(set.select(3), Err(TreeError::InvalidArgument { rank: 3, len: 3 }));
    /// ```
    pub fn select(&self, rank: usize) -> Result<&T, TreeError> {
        self.map.select(rank).map(|(k, ())| k)
    }

    /// Returns the element at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.get_by_rank(rank).map(|(k, ())| k)
    }
}

impl<T: Ord> LlrbSet<T> {
    /// Returns the largest element less than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([1, 3, 5]);
    /// assert_eq!(set.floor(&4), Some(&3));
    /// assert_eq!(set.ceiling(&4), Some(&5));
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.ceiling(&6), None);
    /// ```
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.floor(value).map(|(k, ())| k)
    }

    /// Returns the smallest element greater than or equal to `value`.
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.ceiling(value).map(|(k, ())| k)
    }

    /// Returns the number of elements strictly less than `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn rank<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank(value)
    }

    /// Returns the zero-based rank of `value` in sorted order, or `None` if
    /// the value is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([10, 20]);
    /// assert_eq!(set.rank_of(&10), Some(0));
    /// assert_eq!(set.rank_of(&15), None);
    /// assert_eq!(set.rank(&15), 1);
    /// ```
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank_of(value)
    }

    /// Returns the number of elements in `lo..=hi`, or zero when `lo > hi`.
    pub fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.range_count(lo, hi)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<T> Index<Rank> for LlrbSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
