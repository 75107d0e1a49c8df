//! Splits random inputs of growing length with every implementation and verifies the result.
//!
//! Usage: split_check [MAX_LEN] [ROUNDS]
//!
//! Logging is controlled with RUST_LOG, at debug level the sorted input and halves are printed.
//! All inputs are drawn from one seed, logged at startup. Set OVERRIDE_SEED to that value to
//! reproduce a run.

use std::env;
use std::error::Error;
use std::fmt::Debug;

use env_logger::Env;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use split_comp::{copying, in_place, patterns, Split};

const DEFAULT_MAX_LEN: usize = 30;
const DEFAULT_ROUNDS: usize = 1;

fn parse_arg(args: &[String], pos: usize, default: usize) -> Result<usize, Box<dyn Error>> {
    match args.get(pos) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|err| format!("invalid argument '{arg}': {err}").into()),
        None => Ok(default),
    }
}

fn check_split<S: Split>(input: &[i32]) -> Result<(), Box<dyn Error>> {
    let (left, right) = S::split(input.to_vec());

    let mut sorted_input = input.to_vec();
    sorted_input.sort_unstable();
    let mut sorted_left = left.clone();
    sorted_left.sort_unstable();
    let mut sorted_right = right.clone();
    sorted_right.sort_unstable();

    debug!("{}: N={} {:?}", S::name(), sorted_input.len(), sorted_input);
    debug!("{}: N={} {:?}", S::name(), sorted_left.len(), sorted_left);
    debug!("{}: N={} {:?}", S::name(), sorted_right.len(), sorted_right);

    if !(left.len() == right.len() || left.len() + 1 == right.len()) {
        return Err(fail::<S, _>("unbalanced", input, &left, &right));
    }

    if !split_comp::is_balanced_split(&left, &right) {
        return Err(fail::<S, _>("unordered", input, &left, &right));
    }

    let sorted_merged = sorted_left
        .into_iter()
        .chain(sorted_right)
        .collect::<Vec<_>>();
    if sorted_merged != sorted_input {
        return Err(fail::<S, _>("elements lost", input, &left, &right));
    }

    Ok(())
}

fn fail<S: Split, T: Debug>(reason: &str, input: &[T], left: &[T], right: &[T]) -> Box<dyn Error> {
    format!(
        "{} {reason} for N={}: input {input:?}, left {left:?}, right {right:?}",
        S::name(),
        input.len()
    )
    .into()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = env::args().collect::<Vec<_>>();
    let max_len = parse_arg(&args, 1, DEFAULT_MAX_LEN)?;
    let rounds = parse_arg(&args, 2, DEFAULT_ROUNDS)?;

    let seed = patterns::random_init_seed();
    info!("Seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    info!("Checking lens 0..{max_len}, {rounds} round(s) each");

    let mut checked = 0;
    for len in 0..max_len {
        for _ in 0..rounds {
            let input = patterns::random_below_len_from(&mut rng, len);

            check_split::<copying::SplitImpl>(&input)?;
            check_split::<copying::random::SplitImpl>(&input)?;
            check_split::<in_place::SplitImpl>(&input)?;
            check_split::<in_place::random::SplitImpl>(&input)?;

            checked += 1;
        }
    }

    info!("All {checked} inputs split correctly");
    Ok(())
}
