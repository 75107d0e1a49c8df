use std::error::Error;
use std::fmt;

/// Errors surfaced by the selection routines.
///
/// Splitting never fails, only selection has a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// `rank` does not address any element of a collection holding `len` elements.
    /// An empty collection has no valid rank at all.
    InvalidRank { rank: usize, len: usize },
}

impl SelectError {
    #[inline]
    pub(crate) fn check_rank(rank: usize, len: usize) -> Result<(), Self> {
        if rank < len {
            Ok(())
        } else {
            Err(SelectError::InvalidRank { rank, len })
        }
    }

    /// True if the selection was attempted on an empty collection.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, SelectError::InvalidRank { len: 0, .. })
    }
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SelectError::InvalidRank { rank, len: 0 } => {
                write!(f, "cannot select rank {rank} from an empty collection")
            }
            SelectError::InvalidRank { rank, len } => write!(
                f,
                "rank {rank} out of range for collection of length {len}"
            ),
        }
    }
}

impl Error for SelectError {}
