//! Divisibility and primes.

/// Computes the greatest common divisor of `a` and `b` using Euclid's algorithm.
///
/// `gcd(0, 0)` is 0.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Computes the least common multiple of `a` and `b`.
///
/// Returns `Some(0)` if either argument is 0, and [`None`] on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Returns whether `n` is a prime number.
///
/// Uses trial division by `6k ± 1` candidates up to `sqrt(n)`.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i.checked_mul(i).map_or(false, |sq| sq <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns the prime factorization of `n` in ascending order, with repeated factors.
///
/// 0 and 1 have no prime factors and yield an empty list.
///
/// # Examples
///
/// ```
/// # use lina_utils::*;
/// assert_eq!(prime_factors(360), [2, 2, 2, 3, 3, 5]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    for p in [2, 3] {
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
    }
    let mut i = 5u64;
    while i.checked_mul(i).map_or(false, |sq| sq <= n) {
        for p in [i, i + 2] {
            while n % p == 0 {
                factors.push(p);
                n /= p;
            }
        }
        i += 6;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisors() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(48, 180), 12);
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn primality() {
        let primes = (0..50).filter(|&n| is_prime(n)).collect::<Vec<_>>();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn factorization() {
        assert!(prime_factors(0).is_empty());
        assert_eq!(prime_factors(2), [2]);
        assert_eq!(prime_factors(97), [97]);
        assert_eq!(prime_factors(1001), [7, 11, 13]);
        assert_eq!(prime_factors(2 * 2 * 49), [2, 2, 7, 7]);
        for n in 2..500 {
            assert_eq!(prime_factors(n).iter().product::<u64>(), n);
            assert!(prime_factors(n).iter().all(|&p| is_prime(p)));
        }
    }
}
