use crate::domain::model::{SquawkCode, CODE_LEN, OCTAL_RADIX};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws one code from `rng`, each digit uniform over `0..8`.
///
/// Codes are not unique across calls and may be reserved.
pub fn generate<R: Rng>(rng: &mut R) -> SquawkCode {
    let mut digits = [0u8; CODE_LEN];
    for digit in digits.iter_mut() {
        *digit = rng.random_range(0..OCTAL_RADIX);
    }
    SquawkCode::from_digits(digits)
}

/// Draws one code from the thread-local entropy source.
pub fn generate_code() -> SquawkCode {
    generate(&mut rand::rng())
}

/// A code source that owns its randomness.
#[derive(Debug, Clone)]
pub struct CodeGenerator<R> {
    rng: R,
}

impl<R: Rng> CodeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_code(&mut self) -> SquawkCode {
        generate(&mut self.rng)
    }

    /// Redraws until the code is outside the reserved set.
    pub fn next_assignable(&mut self) -> SquawkCode {
        loop {
            let code = self.next_code();
            if code.is_assignable() {
                return code;
            }
            tracing::trace!("Discarding reserved code {}", code);
        }
    }

    pub fn batch(&mut self, count: usize) -> Vec<SquawkCode> {
        (0..count).map(|_| self.next_code()).collect()
    }

    pub fn assignable_batch(&mut self, count: usize) -> Vec<SquawkCode> {
        (0..count).map(|_| self.next_assignable()).collect()
    }
}

impl CodeGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same codes.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::debug!("Using seeded generator (seed = {})", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> Iterator for CodeGenerator<R> {
    type Item = SquawkCode;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_code_has_four_octal_digits() {
        let code = generate_code();
        assert_eq!(code.as_str().len(), 4);
        assert!(code.as_str().chars().all(|c| ('0'..='7').contains(&c)));
    }

    #[test]
    fn test_same_seed_same_codes() {
        let a = CodeGenerator::seeded(1234).batch(50);
        let b = CodeGenerator::seeded(1234).batch(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_digit_shows_up_in_every_position() {
        let codes = CodeGenerator::seeded(99).batch(2000);
        for position in 0..4 {
            let seen: HashSet<u8> = codes
                .iter()
                .map(|c| c.as_str().as_bytes()[position])
                .collect();
            assert_eq!(seen.len(), 8, "position {} missed a digit", position);
        }
    }

    #[test]
    fn test_next_assignable_never_reserved() {
        let mut generator = CodeGenerator::seeded(7);
        for code in generator.assignable_batch(5000) {
            assert!(code.is_assignable());
        }
    }

    #[test]
    fn test_iterator_is_unbounded() {
        let codes: Vec<_> = CodeGenerator::seeded(3).take(10).collect();
        assert_eq!(codes.len(), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_generated_codes_parse_back(seed in any::<u64>()) {
            let mut generator = CodeGenerator::seeded(seed);
            for code in generator.batch(16) {
                let text = code.to_string();
                prop_assert_eq!(text.len(), 4);
                prop_assert_eq!(text.parse::<SquawkCode>(), Ok(code));
            }
        }
    }
}
