//! Balanced splitting of unordered collections around their lower median.
//!
//! Every implementation module provides a `SplitImpl` that selects the element of a given rank
//! without sorting, and splits a collection into two halves of `len / 2` and `len - len / 2`
//! elements where every element of the left half is `<=` every element of the right half.

macro_rules! split_impl {
    ($name:expr, $pivot:expr) => {
        pub struct SplitImpl;

        impl crate::Split for SplitImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn select<T>(v: &mut [T], k: usize) -> Result<T, crate::SelectError>
            where
                T: Ord + Clone,
            {
                select_cloned(v, k, &mut $pivot)
            }

            #[inline]
            fn split<T>(v: Vec<T>) -> (Vec<T>, Vec<T>)
            where
                T: Ord + Clone,
            {
                split_owned(v, &mut $pivot)
            }
        }
    };
}

pub trait Split {
    fn name() -> String;

    /// Returns the value that would sit at index `k` if `v` were sorted ascending.
    ///
    /// Implementations are free to reorder `v`, but never add or drop elements.
    fn select<T>(v: &mut [T], k: usize) -> Result<T, SelectError>
    where
        T: Ord + Clone;

    /// Splits `v` into `(left, right)` with `left.len() == v.len() / 2` and every element of
    /// `left` less than or equal to every element of `right`.
    fn split<T>(v: Vec<T>) -> (Vec<T>, Vec<T>)
    where
        T: Ord + Clone;
}

pub mod error;
pub mod partition;
pub mod patterns;
pub mod pivot;

pub mod copying;
pub mod in_place;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::SelectError;

/// Rank of the lower median, the split point of a collection with `len` elements.
#[inline]
pub fn lower_median_rank(len: usize) -> usize {
    len / 2
}

/// Returns `true` if `left` and `right` form a balanced split: sizes `floor(n/2)` and
/// `ceil(n/2)`, and no element of `left` greater than any element of `right`.
///
/// Does not check multiset conservation, that needs the original input.
pub fn is_balanced_split<T: Ord>(left: &[T], right: &[T]) -> bool {
    let len = left.len() + right.len();
    if left.len() != lower_median_rank(len) {
        return false;
    }

    match (left.iter().max(), right.iter().min()) {
        (Some(max_left), Some(min_right)) => max_left <= min_right,
        _ => true,
    }
}
