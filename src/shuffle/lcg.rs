//! Linear congruential generator with glibc constants.
//!
//! Every port of the shuffle must produce the same sequence for the same
//! seed, so the generator is fixed rather than taken from a library:
//!
//! - a = 1103515245
//! - c = 12345
//! - m = 2^31

use anyhow::{anyhow, Result};

pub const LCG_A: u64 = 1_103_515_245;
pub const LCG_C: u64 = 12_345;
pub const LCG_M: u64 = 1 << 31;

/// Generator state, always in `[0, 2^31)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Seed with any integer; negative values wrap with mathematical modulo.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(LCG_M as i64) as u64,
        }
    }

    /// Seed from a decimal literal of any magnitude.
    ///
    /// The literal is reduced modulo 2^31 one digit at a time, so
    /// `"123456789012345678901234567890"` seeds the same state a
    /// big-integer implementation would.
    pub fn from_decimal(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(anyhow!("not an integer: {:?}", text));
        }

        let magnitude = digits
            .bytes()
            .fold(0u64, |acc, b| (acc * 10 + u64::from(b - b'0')) % LCG_M);
        let state = if negative {
            (LCG_M - magnitude) % LCG_M
        } else {
            magnitude
        };

        Ok(Self { state })
    }

    /// Advance the generator and return the new state.
    ///
    /// `LCG_A * state` needs up to 62 bits, so the product is formed in
    /// `u64` before reducing.
    pub fn next(&mut self) -> u32 {
        self.state = (LCG_A * self.state + LCG_C) % LCG_M;
        self.state as u32
    }

    /// Draw a value in `[0, upper_bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper_bound` is zero.
    pub fn bounded_next(&mut self, upper_bound: u64) -> u64 {
        assert!(upper_bound > 0, "bounded_next requires upper_bound >= 1");
        u64::from(self.next()) % upper_bound
    }

    pub fn state(&self) -> u32 {
        self.state as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_42_sequence() {
        let mut lcg = Lcg::new(42);
        let values: Vec<u32> = (0..5).map(|_| lcg.next()).collect();
        assert_eq!(
            values,
            vec![1250496027, 1116302264, 1000676753, 1668674806, 908095735]
        );
    }

    #[test]
    fn test_seed_zero_first_value_is_increment() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.next(), 12345);
    }

    #[test]
    fn test_negative_seed_uses_mathematical_modulo() {
        assert_eq!(Lcg::new(-42).state(), 2147483606);
        assert_eq!(Lcg::new(-1).state(), 2147483647);

        let mut lcg = Lcg::new(-42);
        assert_eq!(lcg.next(), 897012311);
        assert_eq!(lcg.next(), 1697562948);
    }

    #[test]
    fn test_large_seed_wraps() {
        assert_eq!(Lcg::new((1 << 31) + 7).state(), 7);
        assert_eq!(Lcg::new(i64::MAX).state(), (i64::MAX % (1 << 31)) as u32);
        assert_eq!(Lcg::new(i64::MIN).state(), 0);
    }

    #[test]
    fn test_from_decimal_matches_new() {
        for seed in [0i64, 1, 42, -42, -1, 2147483648, 9_000_000_000, i64::MIN] {
            let parsed = Lcg::from_decimal(&seed.to_string()).unwrap();
            assert_eq!(parsed, Lcg::new(seed), "seed {}", seed);
        }
    }

    #[test]
    fn test_from_decimal_arbitrary_magnitude() {
        let lcg = Lcg::from_decimal("123456789012345678901234567890").unwrap();
        assert_eq!(lcg.state(), 1312754386);
    }

    #[test]
    fn test_from_decimal_accepts_sign_and_whitespace() {
        assert_eq!(Lcg::from_decimal(" +42\n").unwrap(), Lcg::new(42));
        assert_eq!(Lcg::from_decimal("-0").unwrap(), Lcg::new(0));
    }

    #[test]
    fn test_from_decimal_rejects_garbage() {
        for bad in ["", "-", "abc", "4 2", "1.5", "0x10", "--1"] {
            assert!(Lcg::from_decimal(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        for seed in [0i64, 1, 42, -99, i64::MAX] {
            let mut lcg = Lcg::new(seed);
            for _ in 0..1000 {
                assert!(u64::from(lcg.next()) < LCG_M);
            }
        }
    }

    #[test]
    fn test_bounded_next_range() {
        let mut lcg = Lcg::new(7);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(lcg.bounded_next(bound) < bound);
            }
        }
        assert_eq!(lcg.bounded_next(1), 0);
    }

    #[test]
    fn test_bounded_next_above_u32_range() {
        let mut lcg = Lcg::new(42);
        let mut raw = Lcg::new(42);
        for bound in [u64::from(u32::MAX) + 1, (1 << 32) + 5, u64::MAX] {
            assert_eq!(lcg.bounded_next(bound), u64::from(raw.next()));
        }
    }

    #[test]
    #[should_panic(expected = "upper_bound")]
    fn test_bounded_next_zero_panics() {
        Lcg::new(1).bounded_next(0);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        a.next();
        a.next();
        assert_eq!(b.next(), 1250496027);
        assert_eq!(a.next(), 1000676753);
    }
}
