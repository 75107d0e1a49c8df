use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

/// Input generators for testing and benchmarking selection and splitting.
/// Currently limited to i32 values.
///
/// All generators draw from one seed per process, see [`random_init_seed`]. Set the `OVERRIDE_SEED`
/// environment variable to reproduce a run.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_below_len(len: usize) -> Vec<i32> {
    // Values in 0..len, so duplicates are common but not dominant.
    random_below_len_from(&mut new_seed(), len)
}

/// Same as [`random_below_len`], drawing from `rng` instead of the process seed, so that
/// consecutive calls yield different, yet reproducible, values.
pub fn random_below_len_from<R: Rng>(rng: &mut R, len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    (0..len).map(|_| rng.gen_range(0..(len as i32))).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let mut rng = new_seed();

    for chunk in vals.chunks_mut(chunk_len) {
        if rng.gen::<bool>() {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn median_plateau(len: usize) -> Vec<i32> {
    //  .  :    .
    // :::::::::::
    // .: :. .: .:
    //
    // Half of the values are one value, which ends up being the lower median for most lens. The
    // split has to distribute its duplicates over both halves.

    let plateau_len = len / 2;
    let mut vals = random_vec(len);
    vals[..plateau_len].fill(0);

    let mut rng = new_seed();
    vals.shuffle(&mut rng);

    vals
}

/// Largest input len worth benchmarking for `pattern_name`.
///
/// Runs of equal values are quadratic for every pivot choice. Descending input is quadratic when
/// the pivot is the element at the searched rank, `rank_pivot` selects that limit.
pub fn max_bench_len(pattern_name: &str, rank_pivot: bool) -> usize {
    match pattern_name {
        "random_dense" | "median_plateau" | "all_equal" | "random_binary" => 10_000,
        "descending" if rank_pivot => 10_000,
        _ => usize::MAX,
    }
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    if seed_override().is_some() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| seed_override().unwrap_or_else(|| thread_rng().gen()))
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn seed_override() -> Option<u64> {
    env::var("OVERRIDE_SEED").ok().map(|seed| {
        u64::from_str(&seed).unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: '{seed}'"))
    })
}

fn new_seed() -> StdRng {
    // Random seed, but printed by the test harness for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
