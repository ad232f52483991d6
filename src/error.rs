use core::fmt;

/// Failure of a tree operation whose precondition the caller did not meet.
///
/// Every variant is raised before the tree is touched, so a failed call
/// leaves the tree exactly as it was.
///
/// # Examples
///
/// ```
/// use llrb_tree::{LlrbSet, TreeError};
///
/// let mut set: LlrbSet<i32> = LlrbSet::new();
/// assert_eq!(set.delete_min(), Err(TreeError::Underflow { operation: "delete_min" }));
/// assert_eq!(set.delete_min().unwrap_err().to_string(), "delete_min: tree underflow");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeError {
    /// An element was removed from an empty tree.
    Underflow {
        /// The operation that was called.
        operation: &'static str,
    },
    /// An extreme element was read from an empty tree.
    EmptyAccess {
        /// The operation that was called.
        operation: &'static str,
    },
    /// A rank outside `0..len` was requested.
    InvalidArgument {
        /// The requested rank.
        rank: usize,
        /// The number of elements at the time of the call.
        len: usize,
    },
}

impl TreeError {
    pub(crate) fn underflow(operation: &'static str) -> Self {
        log::debug!("{operation} called on an empty tree");
        Self::Underflow { operation }
    }

    pub(crate) fn empty_access(operation: &'static str) -> Self {
        log::debug!("{operation} called on an empty tree");
        Self::EmptyAccess { operation }
    }

    pub(crate) fn invalid_rank(rank: usize, len: usize) -> Self {
        log::debug!("select({rank}) out of range for {len} elements");
        Self::InvalidArgument { rank, len }
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow { operation } => write!(formatter, "{operation}: tree underflow"),
            Self::EmptyAccess { operation } => write!(formatter, "{operation}: no such element in an empty tree"),
            Self::InvalidArgument { rank, len } => {
                write!(formatter, "select: rank {rank} is out of range for {len} elements")
            }
        }
    }
}

impl core::error::Error for TreeError {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_operation() {
        assert_eq!(TreeError::underflow("delete_max").to_string(), "delete_max: tree underflow");
        assert_eq!(TreeError::empty_access("min").to_string(), "min: no such element in an empty tree");
        assert_eq!(
            TreeError::invalid_rank(4, 4).to_string(),
            "select: rank 4 is out of range for 4 elements"
        );
    }

    #[test]
    fn constructors_build_matching_variants() {
        assert_eq!(TreeError::underflow("delete_min"), TreeError::Underflow { operation: "delete_min" });
        assert_eq!(TreeError::empty_access("max"), TreeError::EmptyAccess { operation: "max" });
        assert_eq!(TreeError::invalid_rank(9, 2), TreeError::InvalidArgument { rank: 9, len: 2 });
    }
}
