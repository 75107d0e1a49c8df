use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use split_comp::{copying, in_place, patterns, Split};

#[inline(never)]
fn bench_func<T: Ord + std::fmt::Debug, R>(
    c: &mut Criterion,
    test_len: usize,
    bench_name: &str,
    op_name: &str,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    func: impl Fn(Vec<T>) -> R,
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{op_name}-{transform_name}-{pattern_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_len)),
                |test_data| func(black_box(test_data)),
                batch_size,
            )
        },
    );
}

#[inline(never)]
fn bench_impl<T: Ord + Clone + std::fmt::Debug, S: Split>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    _split_impl: S,
) {
    let bench_name = S::name();

    if let Ok(filter) = env::var("BENCH_IMPL") {
        if !bench_name.contains(&filter) {
            return;
        }
    }

    // A pivot taken at the searched rank degrades to quadratic time on descending input.
    if test_len > patterns::max_bench_len(pattern_name, bench_name.contains("_at_rank")) {
        return;
    }

    if test_len > 0 {
        bench_func(
            c,
            test_len,
            &bench_name,
            "select_median",
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            |mut test_data| S::select(&mut test_data, test_len / 2),
        );
    }

    bench_func(
        c,
        test_len,
        &bench_name,
        "split",
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        S::split,
    );
}

#[cfg(feature = "parallel")]
fn bench_parallel<T: Ord + Clone + Send + Sync + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if test_len > patterns::max_bench_len(pattern_name, true) {
        return;
    }

    bench_func(
        c,
        test_len,
        "parallel_at_rank",
        "split",
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        |test_data| split_comp::parallel::par_split(&test_data),
    );
}

fn bench_patterns<T: Ord + Clone + Send + Sync + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if test_len > 100_000 && transform_name != "i32" {
        // These are just too expensive.
        return;
    }

    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32).max(1))
        }),
        ("random_below_len", patterns::random_below_len),
        ("median_plateau", patterns::median_plateau),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        bench_impl(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            copying::SplitImpl,
        );

        bench_impl(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            copying::random::SplitImpl,
        );

        bench_impl(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            in_place::SplitImpl,
        );

        bench_impl(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            in_place::random::SplitImpl,
        );

        #[cfg(feature = "parallel")]
        bench_parallel(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [
        0, 1, 2, 3, 5, 8, 11, 16, 20, 31, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
        1_000_000,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_len in test_lens {
        bench_patterns(c, test_len, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        bench_patterns(c, test_len, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        // Larger type that is not Copy and does heap access.
        bench_patterns(c, test_len, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
