//! Balanced split with the classification scan spread over the rayon thread pool.
//!
//! Only the scan is parallel. Selecting the median stays sequential, every partition step of the
//! selection depends on the one before it.

use rayon::prelude::*;

use crate::copying;
use crate::lower_median_rank;
use crate::partition::Buckets;
use crate::pivot::{AtRank, ChoosePivot};

/// Inputs shorter than this are classified on the calling thread.
const MIN_PAR_LEN: usize = 4096;

/// Elements classified per rayon task.
const CHUNK_LEN: usize = 2048;

/// Same result contract as [`copying::split`].
pub fn par_split<T>(v: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Ord + Clone + Send + Sync,
{
    par_split_with(v, &mut AtRank)
}

pub fn par_split_with<T, P>(v: &[T], pivot_choice: &mut P) -> (Vec<T>, Vec<T>)
where
    T: Ord + Clone + Send + Sync,
    P: ChoosePivot,
{
    if v.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let len_left = lower_median_rank(v.len());
    // We're free to use `expect()` here because `len_left < v.len()` for any non-empty `v`.
    let median =
        copying::select_with(v, len_left, pivot_choice).expect("lower median rank in bounds");

    let buckets = if v.len() < MIN_PAR_LEN {
        Buckets::classify(v.iter().cloned(), &median)
    } else {
        v.par_chunks(CHUNK_LEN)
            .map(|chunk| Buckets::classify(chunk.iter().cloned(), &median))
            .reduce(Buckets::new, |mut acc, buckets| {
                acc.append(buckets);
                acc
            })
    };

    buckets.into_balanced(len_left)
}
