//! Factorials, permutations and combinations.

/// Computes `n!`.
///
/// Returns [`None`] if the result does not fit in a [`u64`] (ie. for `n > 20`).
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// Computes the number of ordered arrangements of `k` items out of `n` (`n! / (n - k)!`).
///
/// Returns `Some(0)` if `k > n`, and [`None`] on overflow.
pub fn permutations(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    (n - k + 1..=n).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// Computes the binomial coefficient "`n` choose `k`".
///
/// The multiplicative formula is used, so intermediate values stay as small as the result allows:
/// large `n` is fine as long as the coefficient itself fits in a [`u64`].
///
/// Returns `Some(0)` if `k > n`, and [`None`] on overflow.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert_eq!(combinations(5, 2), Some(10));
/// assert_eq!(combinations(5, 6), Some(0));
/// assert_eq!(combinations(62, 31), Some(465428353255261088));
/// ```
pub fn combinations(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // `acc * (n - i)` is always divisible by `i + 1` here.
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    u64::try_from(acc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorials() {
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn perms() {
        assert_eq!(permutations(5, 0), Some(1));
        assert_eq!(permutations(5, 2), Some(20));
        assert_eq!(permutations(5, 5), factorial(5));
        assert_eq!(permutations(3, 4), Some(0));
        assert_eq!(permutations(u64::MAX, 3), None);
    }

    #[test]
    fn combos() {
        assert_eq!(combinations(0, 0), Some(1));
        assert_eq!(combinations(10, 0), Some(1));
        assert_eq!(combinations(10, 10), Some(1));
        assert_eq!(combinations(10, 3), Some(120));
        assert_eq!(combinations(10, 7), Some(120));
        assert_eq!(combinations(1000, 1), Some(1000));
        assert_eq!(combinations(200, 100), None);
    }
}
