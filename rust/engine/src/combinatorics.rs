//! Binomial and hypergeometric primitives.
//!
//! Counts are taken as `i64` so callers can pass out-of-range draw counts
//! (negative or larger than the population) and get a zero term back instead
//! of having to pre-filter.

/// Binomial coefficient `C(n, k)`.
///
/// Accumulates the multiplicative identity `Π (n - i) / (i + 1)` as an `f64`
/// and rounds once at the end. Reference probabilities were produced with this
/// exact sequence of operations, so factorial or log-gamma forms must not be
/// substituted.
///
/// # Examples
///
/// ```
/// use drawodds_engine::combinatorics::combination;
///
/// assert_eq!(combination(40, 5), 658_008.0);
/// assert_eq!(combination(5, 7), 0.0);
/// assert_eq!(combination(12, 0), 1.0);
/// ```
pub fn combination(n: i64, k: i64) -> f64 {
    if k > n || k < 0 {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    let mut result = 1.0_f64;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result.round()
}

/// Probability of drawing exactly `k` successes in `n` draws without
/// replacement from a population of `population` items holding `successes`
/// successes.
///
/// Terms outside the valid range come out as zero through [`combination`].
/// The caller must ensure `C(population, n)` is non-zero, i.e. `n <= population`.
pub fn hypergeometric(population: i64, successes: i64, n: i64, k: i64) -> f64 {
    combination(successes, k) * combination(population - successes, n - k)
        / combination(population, n)
}

/// Sum of [`hypergeometric`] terms for `k` in `lo..=hi`, with `hi` clamped to
/// both the available successes and the number of draws.
///
/// An empty range (`lo` above the clamped bound) sums to exactly zero.
pub fn tail_sum(population: i64, successes: i64, n: i64, lo: i64, hi: i64) -> f64 {
    let upper = hi.min(successes).min(n);
    (lo.max(0)..=upper)
        .map(|k| hypergeometric(population, successes, n, k))
        .sum()
}
