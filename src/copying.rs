//! Selection and balanced split that build new lists at every partition step and never touch
//! the input.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::error::SelectError;
use crate::lower_median_rank;
use crate::partition::Buckets;
use crate::pivot::{AtRank, ChoosePivot};

split_impl!("copying_at_rank", AtRank);

/// Same as the parent module, but every pivot is drawn uniformly at random.
pub mod random {
    use super::{select_cloned, split_owned};

    split_impl!("copying_random", crate::pivot::Uniform::new());
}

/// Returns the element of rank `k` in `v`, using the element at index `k` as pivot.
#[inline]
pub fn select<T: Ord + Clone>(v: &[T], k: usize) -> Result<T, SelectError> {
    select_with(v, k, &mut AtRank)
}

pub fn select_with<T, P>(v: &[T], k: usize, pivot_choice: &mut P) -> Result<T, SelectError>
where
    T: Ord + Clone,
    P: ChoosePivot,
{
    SelectError::check_rank(k, v.len())?;

    let mut active = Cow::Borrowed(v);
    let mut rank = k;

    loop {
        let len = active.len();
        if len == 1 {
            debug_assert_eq!(rank, 0);
            return Ok(active[0].clone());
        }

        let pivot_pos = pivot_choice.choose(len, rank);
        let pivot = &active[pivot_pos];

        let mut less = Vec::new();
        let mut not_less = Vec::with_capacity(len - 1);
        for (i, elem) in active.iter().enumerate() {
            if i == pivot_pos {
                continue;
            }

            if elem < pivot {
                less.push(elem.clone());
            } else {
                not_less.push(elem.clone());
            }
        }

        log::trace!(
            "select: len {len}, rank {rank}, pivot_pos {pivot_pos}, less {}",
            less.len()
        );

        match rank.cmp(&less.len()) {
            Ordering::Equal => return Ok(pivot.clone()),
            Ordering::Less => active = Cow::Owned(less),
            Ordering::Greater => {
                rank -= less.len() + 1;
                active = Cow::Owned(not_less);
            }
        }
    }
}

/// Splits `v` into halves of `v.len() / 2` and `v.len() - v.len() / 2` elements, all of the left
/// half `<=` all of the right half.
#[inline]
pub fn split<T: Ord + Clone>(v: &[T]) -> (Vec<T>, Vec<T>) {
    split_with(v, &mut AtRank)
}

pub fn split_with<T, P>(v: &[T], pivot_choice: &mut P) -> (Vec<T>, Vec<T>)
where
    T: Ord + Clone,
    P: ChoosePivot,
{
    if v.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let len_left = lower_median_rank(v.len());
    // We're free to use `expect()` here because `len_left < v.len()` for any non-empty `v`.
    let median = select_with(v, len_left, pivot_choice).expect("lower median rank in bounds");

    Buckets::classify(v.iter().cloned(), &median).into_balanced(len_left)
}

#[inline]
fn select_cloned<T, P>(v: &mut [T], k: usize, pivot_choice: &mut P) -> Result<T, SelectError>
where
    T: Ord + Clone,
    P: ChoosePivot,
{
    select_with(v, k, pivot_choice)
}

#[inline]
fn split_owned<T, P>(v: Vec<T>, pivot_choice: &mut P) -> (Vec<T>, Vec<T>)
where
    T: Ord + Clone,
    P: ChoosePivot,
{
    split_with(&v, pivot_choice)
}
