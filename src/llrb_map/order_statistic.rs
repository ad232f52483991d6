use core::borrow::Borrow;
use core::ops::Index;

use super::LlrbMap;
use crate::{Rank, TreeError};

impl<K, V> LlrbMap<K, V> {
    /// Returns the entry at zero-based position `rank` in ascending key
    /// order.
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
    /// use llrb_tree::{LlrbMap, TreeError};
    ///
    /// let map = LlrbMap::from([("a", 10), ("c", 30), ("b", 20)]);
    /// assert_eq!(map.select(1), Ok((&"b", &20)));
    /// assert_eq!(map.select(3), Err(TreeError::InvalidArgument { rank: 3, len: 3 }));
    /// ```
    pub fn select(&self, rank: usize) -> Result<(&K, &V), TreeError> {
        self.raw.select(rank).ok_or_else(|| TreeError::invalid_rank(rank, self.len()))
    }

    /// Returns the entry at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.select(rank)
    }
}

impl<K: Ord, V> LlrbMap<K, V> {
    /// Returns the entry with the largest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(10, 'a'), (20, 'b')]);
    /// assert_eq!(map.floor(&15), Some((&10, &'a')));
    /// assert_eq!(map.floor(&20), Some((&20, &'b')));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key)
    }

    /// Returns the entry with the smallest key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn ceiling<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key)
    }

    /// Returns the number of keys strictly less than `key`. The key itself
    /// need not be present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.rank(&20), 1);
    /// assert_eq!(map.rank(&25), 2);
    /// assert_eq!(map.rank(&99), 3);
    /// ```
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the zero-based rank of `key` in sorted order, or `None` if
    /// the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.rank_of(&20), Some(1));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }

    /// Returns the number of keys in the closed interval `lo..=hi`, or zero
    /// when `lo > hi`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map: LlrbMap<i32, ()> = (1..=10).map(|k| (k, ())).collect();
    /// assert_eq!(map.range_count(&3, &6), 4);
    /// assert_eq!(map.range_count(&6, &3), 0);
    /// ```
    pub fn range_count<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.range_count(lo, hi)
    }
}

/// Indexes into the map by rank, yielding the value.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use llrb_tree::{LlrbMap, Rank};
///
/// let map = LlrbMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(1)], 2);
/// ```
impl<K, V> Index<Rank> for LlrbMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
