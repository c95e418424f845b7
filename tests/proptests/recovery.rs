//! Property tests for secret reconstruction

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use unshard::domain::{RecoveryConfig, Share, ShareCount, ShareIndex, ShareSet, Threshold};
use unshard::error::RecoveryError;
use unshard::interpolate;

/// Random integer polynomial with shares at x = 1..=n
///
/// Consecutive 1-based indices keep every Lagrange weight an exact integer
/// (signed binomial coefficients), so reconstruction from the first k shares
/// is always exact.
#[derive(Clone, Debug)]
struct PolySystem {
    coefficients: Vec<i64>, // constant term first
    threshold: u32,
    share_count: u32,
}

impl Arbitrary for PolySystem {
    fn arbitrary(g: &mut Gen) -> Self {
        let threshold = u32::from(u8::arbitrary(g) % 6) + 1; // 1..=6
        let share_count = threshold + u32::from(u8::arbitrary(g) % 4); // k..=k+3
        let coefficients = (0..threshold)
            .map(|_| i64::arbitrary(g) % 1_000_000)
            .collect();
        PolySystem {
            coefficients,
            threshold,
            share_count,
        }
    }
}

impl PolySystem {
    fn secret(&self) -> BigInt {
        BigInt::from(self.coefficients[0])
    }

    fn evaluate(&self, x: u32) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &c| acc * &x + BigInt::from(c))
    }

    fn shares(&self) -> Vec<Share> {
        (1..=self.share_count)
            .map(|x| Share::new(ShareIndex::new(x).unwrap(), self.evaluate(x), 10))
            .collect()
    }

    fn config(&self) -> RecoveryConfig {
        RecoveryConfig::new(
            Threshold::new(self.threshold).unwrap(),
            ShareCount::new(self.share_count).unwrap(),
        )
        .unwrap()
    }
}

/// The first k shares always recover the constant term exactly
#[quickcheck]
fn prop_reconstruction_recovers_secret(system: PolySystem) -> bool {
    let set = ShareSet::new(system.shares(), system.config()).unwrap();
    interpolate::secret_at_zero(&set) == Ok(system.secret())
}

/// Share input order never changes the recovered value
#[quickcheck]
fn prop_permutation_invariance(system: PolySystem, seed: u64) -> bool {
    let mut shares = system.shares();

    // Simple seeded shuffle
    let mut state = seed;
    for i in 0..shares.len() {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let j = i + (state % (shares.len() - i) as u64) as usize;
        shares.swap(i, j);
    }

    let shuffled = ShareSet::new(shares, system.config()).unwrap();
    let in_order = ShareSet::new(system.shares(), system.config()).unwrap();
    interpolate::secret_at_zero(&shuffled) == interpolate::secret_at_zero(&in_order)
}

/// Fewer than k shares must be rejected
#[quickcheck]
fn prop_insufficient_shares_rejected(system: PolySystem) -> bool {
    let mut shares = system.shares();
    shares.truncate(system.threshold as usize - 1);
    let set = ShareSet::new(shares, system.config()).unwrap();
    matches!(
        interpolate::secret_at_zero(&set),
        Err(RecoveryError::InsufficientShares { .. })
    )
}

/// Extra shares beyond the threshold never change the result
#[quickcheck]
fn prop_surplus_shares_ignored(system: PolySystem) -> bool {
    let full = ShareSet::new(system.shares(), system.config()).unwrap();

    let mut truncated = system.shares();
    truncated.truncate(system.threshold as usize);
    let minimal = ShareSet::new(truncated, system.config()).unwrap();

    interpolate::secret_at_zero(&full) == interpolate::secret_at_zero(&minimal)
}
