use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::TreeError;
use crate::raw::{self, RawLlrb};

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An ordered map based on a [left-leaning red-black tree].
///
/// Keys must implement [`Ord`]. Entries are kept in ascending key order and
/// every node records the size of its subtree, so on top of the usual
/// lookups the map answers order-statistic queries ([`select`], [`rank`],
/// [`range_count`]) in O(log n).
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map. The
/// resulting behavior is unspecified but stays confined to the map.
///
/// # Examples
///
/// ```
/// use llrb_tree::LlrbMap;
///
/// let mut scores = LlrbMap::new();
/// scores.insert("carol", 71);
/// scores.insert("alice", 93);
/// scores.insert("bob", 88);
///
/// assert_eq!(scores.get("bob"), Some(&88));
/// assert_eq!(scores.min(), Ok((&"alice", &93)));
/// assert_eq!(scores.rank("carol"), 2);
///
/// // Re-inserting a key overwrites its value.
/// assert_eq!(scores.insert("bob", 90), Some(88));
/// assert_eq!(scores.len(), 3);
///
/// for (name, score) in &scores {
///     println!("{name}: {score}");
/// }
/// ```
///
/// [left-leaning red-black tree]: https://en.wikipedia.org/wiki/Left-leaning_red%E2%80%93black_tree
/// [`select`]: LlrbMap::select
/// [`rank`]: LlrbMap::rank
/// [`range_count`]: LlrbMap::range_count
pub struct LlrbMap<K, V> {
    raw: RawLlrb<K, V>,
}

/// An ascending iterator over the entries of a `LlrbMap`.
///
/// This `struct` is created by the [`iter`] method on [`LlrbMap`]. It can be
/// driven from both ends.
///
/// # Examples
///
/// ```
/// use llrb_tree::LlrbMap;
///
/// let map = LlrbMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: LlrbMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: raw::Iter<'a, K, V>,
}

/// An owning iterator over the entries of a `LlrbMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`LlrbMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `LlrbMap`.
///
/// This `struct` is created by the [`keys`] method on [`LlrbMap`].
///
/// [`keys`]: LlrbMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `LlrbMap`.
///
/// This `struct` is created by the [`values`] method on [`LlrbMap`].
///
/// [`values`]: LlrbMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A pre-order walk over the entries of a `LlrbMap`: each node before its
/// left subtree, then its right subtree.
///
/// This `struct` is created by the [`preorder`] method on [`LlrbMap`].
///
/// [`preorder`]: LlrbMap::preorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Preorder<'a, K, V> {
    inner: raw::Preorder<'a, K, V>,
}

/// A post-order walk over the entries of a `LlrbMap`: both subtrees before
/// the node itself.
///
/// This `struct` is created by the [`postorder`] method on [`LlrbMap`].
///
/// [`postorder`]: LlrbMap::postorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Postorder<'a, K, V> {
    inner: raw::Postorder<'a, K, V>,
}

impl<K, V> LlrbMap<K, V> {
    /// Makes a new, empty `LlrbMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> LlrbMap<K, V> {
        LlrbMap { raw: RawLlrb::new() }
    }

    /// Clears the map, removing all elements. Allocated capacity is kept.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut a = LlrbMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut a = LlrbMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of edges on the longest path from the root down to
    /// a leaf, or `None` if the map is empty.
    ///
    /// The red-black shape keeps this below `2 * log2(len + 1)`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.height(), None);
    /// map.insert(1, ());
    /// assert_eq!(map.height(), Some(0));
    /// map.extend([(2, ()), (3, ())]);
    /// assert_eq!(map.height(), Some(1));
    /// ```
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.raw.height()
    }

    /// Returns the first key-value pair in the map, the one with the
    /// minimum key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first()
    }

    /// Returns the last key-value pair in the map, the one with the
    /// maximum key, or `None` if the map is empty.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last()
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyAccess`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{LlrbMap, TreeError};
    ///
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.min(), Err(TreeError::EmptyAccess { operation: "min" }));
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.min(), Ok((&1, &"a")));
    /// ```
    pub fn min(&self) -> Result<(&K, &V), TreeError> {
        self.raw.first().ok_or_else(|| TreeError::empty_access("min"))
    }

    /// Returns the entry with the maximum key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyAccess`] if the map is empty.
    pub fn max(&self) -> Result<(&K, &V), TreeError> {
        self.raw.last().ok_or_else(|| TreeError::empty_access("max"))
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Errors
    ///
    /// [`TreeError::Underflow`] if the map is empty; the map is unchanged.
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
    /// let mut map = LlrbMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.delete_min(), Ok((1, "a")));
    /// assert_eq!(map.delete_min(), Ok((2, "b")));
    /// assert_eq!(map.delete_min(), Err(TreeError::Underflow { operation: "delete_min" }));
    /// ```
    pub fn delete_min(&mut self) -> Result<(K, V), TreeError> {
        self.raw.delete_min().ok_or_else(|| TreeError::underflow("delete_min"))
    }

    /// Removes and returns the entry with the maximum key.
    ///
    /// # Errors
    ///
    /// [`TreeError::Underflow`] if the map is empty; the map is unchanged.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete_max(&mut self) -> Result<(K, V), TreeError> {
        self.raw.delete_max().ok_or_else(|| TreeError::underflow("delete_max"))
    }

    /// Removes and returns the first element in the map, or `None` if the
    /// map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::from([(1, "a"), (2, "b")]);
    /// while let Some((key, _)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.delete_min()
    }

    /// Removes and returns the last element in the map, or `None` if the
    /// map is empty.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.delete_max()
    }

    /// Gets an ascending iterator over the entries of the map.
    ///
    /// The iterator borrows the map, so the map cannot be modified while it
    /// is alive.
    ///
    /// # Complexity
    ///
    /// O(log n) to create, amortized O(1) per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.raw.iter() }
    }

    /// In-order traversal; the same ascending walk as [`iter`](Self::iter).
    pub fn inorder(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Pre-order traversal: each node, then its left subtree, then its right
    /// subtree.
    ///
    /// The order reflects the current tree shape, which depends on the
    /// history of insertions and removals.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let keys: Vec<_> = map.preorder().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, K, V> {
        Preorder { inner: self.raw.preorder() }
    }

    /// Post-order traversal: left subtree, right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let keys: Vec<_> = map.postorder().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn postorder(&self) -> Postorder<'_, K, V> {
        Postorder { inner: self.raw.postorder() }
    }

    /// Gets an ascending iterator over the keys of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> LlrbMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
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
    /// let mut map = LlrbMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).map(|(_, v)| v)
    }

    /// Returns the stored key and its value for the supplied key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned and the
    /// tree is rebalanced. If the key was present, the value is overwritten
    /// in place, the old value is returned and the tree shape is unchanged.
    /// The stored key is not updated.
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
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. Absent keys leave the map untouched.
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
    /// let mut map = LlrbMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Stores `key` in place of an equal key and returns the displaced one;
    /// inserts `(key, value)` when no equal key is present.
    pub(crate) fn replace_key(&mut self, key: K, value: V) -> Option<K> {
        self.raw.replace_key(key, value)
    }
}

impl<K: Clone, V: Clone> Clone for LlrbMap<K, V> {
    fn clone(&self) -> Self {
        LlrbMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for LlrbMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for LlrbMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for LlrbMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LlrbMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for LlrbMap<K, V> {
    fn default() -> Self {
        LlrbMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LlrbMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = LlrbMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for LlrbMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LlrbMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for LlrbMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map = LlrbMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_sorted_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for LlrbMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for LlrbMap<K, V> {
    /// ```
    /// use llrb_tree::LlrbMap;
    ///
    /// let map1 = LlrbMap::from([(1, 2), (3, 4)]);
    /// let map2: LlrbMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Preorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V> FusedIterator for Preorder<'_, K, V> {}

impl<K, V> Clone for Preorder<'_, K, V> {
    fn clone(&self) -> Self {
        Preorder {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Preorder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Postorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V> FusedIterator for Postorder<'_, K, V> {}

impl<K, V> Clone for Postorder<'_, K, V> {
    fn clone(&self) -> Self {
        Postorder {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Postorder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
