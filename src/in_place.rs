//! Quickselect style selection that partitions the slice in place with swaps, and the balanced
//! split that falls out of it for free.
//!
//! After [`partition_at_rank`] every element left of the selected position is `<=` it and every
//! element right of it is `>=` it, so splitting the slice at the lower median rank already yields
//! a balanced, ordered split. Duplicates of the median need no special treatment here.

use std::cmp::Ordering;

use crate::error::SelectError;
use crate::lower_median_rank;
use crate::pivot::{AtRank, ChoosePivot};

split_impl!("in_place_at_rank", AtRank);

/// Same as the parent module, but every pivot is drawn uniformly at random.
pub mod random {
    use super::{select_cloned, split_owned};

    split_impl!("in_place_random", crate::pivot::Uniform::new());
}

/// Reorders `v` such that the element at `k` is at its final sorted position, and returns the
/// parts left of it, the element itself and the parts right of it.
pub fn partition_at_rank<'a, T, P>(
    v: &'a mut [T],
    k: usize,
    pivot_choice: &mut P,
) -> Result<(&'a mut [T], &'a mut T, &'a mut [T]), SelectError>
where
    T: Ord,
    P: ChoosePivot,
{
    SelectError::check_rank(k, v.len())?;

    partition_at_rank_loop(v, k, pivot_choice);

    let (left, right) = v.split_at_mut(k);
    let (pivot, right) = right.split_at_mut(1);
    Ok((left, &mut pivot[0], right))
}

/// Returns the element of rank `k`, using the element at index `k` of each sub-slice as pivot.
#[inline]
pub fn select<T: Ord>(v: &mut [T], k: usize) -> Result<&mut T, SelectError> {
    partition_at_rank(v, k, &mut AtRank).map(|(_, elem, _)| elem)
}

/// Splits `v` in place into `(left, right)` with `left.len() == v.len() / 2`, all of `left` `<=`
/// all of `right`.
#[inline]
pub fn split<T: Ord>(v: &mut [T]) -> (&mut [T], &mut [T]) {
    split_with(v, &mut AtRank)
}

pub fn split_with<'a, T, P>(v: &'a mut [T], pivot_choice: &mut P) -> (&'a mut [T], &'a mut [T])
where
    T: Ord,
    P: ChoosePivot,
{
    let len_left = lower_median_rank(v.len());

    if !v.is_empty() {
        partition_at_rank_loop(v, len_left, pivot_choice);
    }

    v.split_at_mut(len_left)
}

/// Owned version of [`split`], reusing the allocation of `v` for the left half.
#[inline]
pub fn split_vec<T: Ord>(v: Vec<T>) -> (Vec<T>, Vec<T>) {
    split_vec_with(v, &mut AtRank)
}

pub fn split_vec_with<T, P>(mut v: Vec<T>, pivot_choice: &mut P) -> (Vec<T>, Vec<T>)
where
    T: Ord,
    P: ChoosePivot,
{
    let len_left = split_with(&mut v, pivot_choice).0.len();
    let right = v.split_off(len_left);

    (v, right)
}

fn partition_at_rank_loop<T, P>(mut v: &mut [T], mut rank: usize, pivot_choice: &mut P)
where
    T: Ord,
    P: ChoosePivot,
{
    loop {
        debug_assert!(rank < v.len());

        if v.len() <= 1 {
            return;
        }

        let pivot_pos = pivot_choice.choose(v.len(), rank);
        let mid = partition(v, pivot_pos);

        log::trace!(
            "select: len {}, rank {rank}, pivot_pos {pivot_pos}, less {mid}",
            v.len()
        );

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let (_pivot, right) = right.split_at_mut(1);

        match rank.cmp(&mid) {
            // partition() guaranteed that everything left of mid is less and everything right of
            // it is greater or equal, so the pivot is in its final position.
            Ordering::Equal => return,
            Ordering::Less => v = left,
            Ordering::Greater => {
                rank -= mid + 1;
                v = right;
            }
        }
    }
}

/// Lomuto partition around the element at `pivot_pos`.
///
/// Returns `mid` such that afterwards `v[..mid] < v[mid] <= v[mid + 1..]`, with `v[mid]` being
/// the pivot.
fn partition<T: Ord>(v: &mut [T], pivot_pos: usize) -> usize {
    let last = v.len() - 1;
    v.swap(pivot_pos, last);

    let mut store = 0;
    for i in 0..last {
        if v[i] < v[last] {
            v.swap(store, i);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}

#[inline]
fn select_cloned<T, P>(v: &mut [T], k: usize, pivot_choice: &mut P) -> Result<T, SelectError>
where
    T: Ord + Clone,
    P: ChoosePivot,
{
    partition_at_rank(v, k, pivot_choice).map(|(_, elem, _)| elem.clone())
}

#[inline]
fn split_owned<T, P>(v: Vec<T>, pivot_choice: &mut P) -> (Vec<T>, Vec<T>)
where
    T: Ord + Clone,
    P: ChoosePivot,
{
    split_vec_with(v, pivot_choice)
}

#[cfg(test)]
mod tests {
    use super::partition;

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 3, 8, 3, 9, 1];
        // Pivot 8.
        let mid = partition(&mut v, 2);

        assert_eq!(mid, 4);
        assert_eq!(v[mid], 8);
        assert!(v[..mid].iter().all(|&x| x < 8));
        assert!(v[mid + 1..].iter().all(|&x| x >= 8));
    }

    #[test]
    fn partition_equal_goes_right() {
        let mut v = [2, 2, 2, 2];
        let mid = partition(&mut v, 1);

        assert_eq!(mid, 0);
    }
}
