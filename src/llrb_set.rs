use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::llrb_map::{self, Keys};
use crate::{LlrbMap, TreeError};

mod capacity;
mod order_statistic;

/// An ordered set based on a left-leaning red-black tree.
///
/// See [`LlrbMap`]'s documentation for how the tree is balanced and what
/// the order-statistic queries cost.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item changes while it is in the set.
///
/// # Examples
///
/// ```
/// use llrb_tree::{LlrbSet, Rank};
///
/// let mut books = LlrbSet::new();
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove("The Odyssey");
/// assert_eq!(books[Rank(0)], "A Dance With Dragons");
/// assert_eq!(books.rank("To Kill a Mockingbird"), 2);
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
pub struct LlrbSet<T> {
    map: LlrbMap<T, ()>,
}

/// An ascending iterator over the items of a `LlrbSet`.
///
/// This `struct` is created by the [`iter`] method on [`LlrbSet`].
///
/// [`iter`]: LlrbSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: Keys<'a, T, ()>,
}

/// An owning iterator over the items of a `LlrbSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`LlrbSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: LlrbSet::into_iter
pub struct IntoIter<T> {
    iter: llrb_map::IntoIter<T, ()>,
}

/// A pre-order walk over the items of a `LlrbSet`.
///
/// This `struct` is created by the [`preorder`] method on [`LlrbSet`].
///
/// [`preorder`]: LlrbSet::preorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Preorder<'a, T: 'a> {
    iter: llrb_map::Preorder<'a, T, ()>,
}

/// A post-order walk over the items of a `LlrbSet`.
///
/// This `struct` is created by the [`postorder`] method on [`LlrbSet`].
///
/// [`postorder`]: LlrbSet::postorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Postorder<'a, T: 'a> {
    iter: llrb_map::Postorder<'a, T, ()>,
}

impl<T> LlrbSet<T> {
    /// Makes a new, empty `LlrbSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut set: LlrbSet<i32> = LlrbSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> LlrbSet<T> {
        LlrbSet { map: LlrbMap::new() }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut v = LlrbSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of edges on the longest root-to-leaf path, or
    /// `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set: LlrbSet<u32> = (0..1000).collect();
    /// assert!(set.height().is_some_and(|h| h <= 20));
    /// ```
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.map.height()
    }

    /// Returns a reference to the first element in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(k, ())| k)
    }

    /// Returns a reference to the last element in the set, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(k, ())| k)
    }

    /// Returns the minimum element.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyAccess`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{LlrbSet, TreeError};
    ///
    /// let set = LlrbSet::from([3, 1, 2]);
    /// assert_eq!(set.min(), Ok(&1));
    /// assert_eq!(set.max(), Ok(&3));
    ///
    /// let empty: LlrbSet<i32> = LlrbSet::new();
    /// assert_eq!(empty.min(), Err(TreeError::EmptyAccess { operation: "min" }));
    /// ```
    pub fn min(&self) -> Result<&T, TreeError> {
        self.map.min().map(|(k, ())| k)
    }

    /// Returns the maximum element.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyAccess`] if the set is empty.
    pub fn max(&self) -> Result<&T, TreeError> {
        self.map.max().map(|(k, ())| k)
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    ///
    /// [`TreeError::Underflow`] if the set is empty; the set is unchanged.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete_min(&mut self) -> Result<T, TreeError> {
        self.map.delete_min().map(|(k, ())| k)
    }

    /// Removes and returns the maximum element.
    ///
    /// # Errors
    ///
    /// [`TreeError::Underflow`] if the set is empty; the set is unchanged.
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
    /// let mut set = LlrbSet::from([1, 2]);
    /// assert_eq!(set.delete_max(), Ok(2));
    /// assert_eq!(set.delete_max(), Ok(1));
    /// assert_eq!(set.delete_max(), Err(TreeError::Underflow { operation: "delete_max" }));
    /// ```
    pub fn delete_max(&mut self) -> Result<T, TreeError> {
        self.map.delete_max().map(|(k, ())| k)
    }

    /// Removes the first element from the set and returns it, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(k, ())| k)
    }

    /// Removes the last element from the set and returns it, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(k, ())| k)
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.map.keys() }
    }

    /// In-order traversal; the same ascending walk as [`iter`](Self::iter).
    pub fn inorder(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Pre-order traversal of the current tree shape.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            iter: self.map.preorder(),
        }
    }

    /// Post-order traversal of the current tree shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([1, 2, 3]);
    /// assert_eq!(set.preorder().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// assert_eq!(set.postorder().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            iter: self.map.postorder(),
        }
    }
}

impl<T: Ord> LlrbSet<T> {
    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set equal to the value.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(k, ())| k)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. An equal element that is
    /// already present is replaced by `value`; the tree shape is unchanged.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// An equal element already in the set is overwritten by `value`:
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(Vec::<i32>::new());
    /// assert_eq!(set.insert(Vec::with_capacity(10)), false);
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 10);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.map.replace_key(value, ()).is_none()
    }

    /// Adds a value to the set, replacing the existing element, if any, that
    /// is equal to the value. Returns the replaced element.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(Vec::<i32>::new());
    ///
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 0);
    /// set.replace(Vec::with_capacity(10));
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 10);
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.map.replace_key(value, ())
    }

    /// If the set contains an element equal to the value, removes it from
    /// the set. Returns whether such an element was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }
}

impl<T: Hash> Hash for LlrbSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<T: PartialEq> PartialEq for LlrbSet<T> {
    fn eq(&self, other: &LlrbSet<T>) -> bool {
        self.map.eq(&other.map)
    }
}

impl<T: Eq> Eq for LlrbSet<T> {}

impl<T: Clone> Clone for LlrbSet<T> {
    fn clone(&self) -> Self {
        LlrbSet { map: self.map.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for LlrbSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for LlrbSet<T> {
    fn default() -> LlrbSet<T> {
        LlrbSet::new()
    }
}

impl<T: Ord> FromIterator<T> for LlrbSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> LlrbSet<T> {
        let mut set = LlrbSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for LlrbSet<T> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for LlrbSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for LlrbSet<T> {
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set1 = LlrbSet::from([1, 2, 3, 4]);
    /// let set2: LlrbSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for LlrbSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `LlrbSet`'s contents in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbSet;
    ///
    /// let set = LlrbSet::from([1, 2, 3, 4]);
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a LlrbSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next().map(|(k, ())| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().map(|(k, ())| k)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.iter.len()).finish()
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next().map(|(k, ())| k)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

impl<T> Clone for Preorder<'_, T> {
    fn clone(&self) -> Self {
        Preorder {
            iter: self.iter.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Preorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next().map(|(k, ())| k)
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

impl<T> Clone for Postorder<'_, T> {
    fn clone(&self) -> Self {
        Postorder {
            iter: self.iter.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Postorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_formats_as_set() {
        let set = LlrbSet::from([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
        assert_eq!(format!("{:?}", set.iter()), "Iter([1, 2, 3])");
        assert_eq!(format!("{:?}", set.preorder()), "[2, 1, 3]");
    }

    #[test]
    fn delete_scenario() {
        let mut set: LlrbSet<i32> = [10, 5, 15, 3, 7, 12, 18, 1, 4, 6, 8, 11, 13, 17, 20].into_iter().collect();

        assert_eq!(set.delete_min(), Ok(1));
        assert_eq!(set.delete_max(), Ok(20));
        assert!(set.remove(&10));
        assert!(!set.contains(&10));
        assert_eq!(set.len(), 12);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7, 8, 11, 12, 13, 15, 17, 18]);
    }

    #[test]
    fn single_element_removal_empties_the_set() {
        let mut set = LlrbSet::from([42]);
        assert!(set.remove(&42));
        assert!(set.is_empty());
        assert_eq!(set.height(), None);
        assert_eq!(set.min(), Err(TreeError::EmptyAccess { operation: "min" }));

        set.insert(7);
        assert_eq!(set.first(), Some(&7));
    }

    #[test]
    fn extend_from_references() {
        let source = [4, 2, 4, 9];
        let mut set: LlrbSet<i32> = LlrbSet::new();
        set.extend(source.iter());
        assert_eq!(set.len(), 3);
        assert_eq!(set.into_iter().rev().collect::<Vec<_>>(), [9, 4, 2]);
    }
}
