/// A zero-based position in the ascending order of a map or set.
///
/// Indexing with a `Rank` panics when the position is out of bounds; use
/// `select` or `get_by_rank` for a fallible lookup.
///
/// # Examples
///
/// ```
/// use llrb_tree::{LlrbSet, Rank};
///
/// let set = LlrbSet::from([30, 10, 20]);
/// assert_eq!(set[Rank(0)], 10);
/// assert_eq!(set[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
