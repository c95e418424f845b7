//! Lagrange interpolation at x = 0 over exact integers
//!
//! Plain-integer interpolation, not finite-field arithmetic. The scheme is
//! only sound when the shares were produced so that every Lagrange term is an
//! integer; a term that violates that precondition is reported as an error
//! instead of being truncated into a plausible-looking wrong secret.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::domain::ShareSet;
use crate::error::RecoveryError;

/// Reconstructs the secret: the interpolating polynomial's value at x = 0
///
/// Uses exactly the first `k` shares in ascending index order, where `k` is
/// the set's declared threshold. Each term is accumulated as a single
/// product quotient, so the result cannot depend on the order the shares
/// arrived in.
///
/// # Errors
/// - [`RecoveryError::InsufficientShares`] if the set holds fewer than `k`
///   shares
/// - [`RecoveryError::InexactDivision`] if a term's quotient is not an exact
///   integer
pub fn secret_at_zero(set: &ShareSet) -> Result<BigInt, RecoveryError> {
    let needed = *set.config().threshold();
    let shares = set.shares();
    if shares.len() < needed as usize {
        return Err(RecoveryError::InsufficientShares {
            needed,
            available: shares.len(),
        });
    }
    let points = &shares[..needed as usize];

    let mut secret = BigInt::zero();
    for (i, share) in points.iter().enumerate() {
        let x_i = BigInt::from(*share.index());

        // term_i = y_i * prod(-x_j) / prod(x_i - x_j) over j != i
        let mut numerator = share.value().clone();
        let mut denominator = BigInt::one();
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_j = BigInt::from(*other.index());
            numerator *= -&x_j;
            denominator *= &x_i - &x_j;
        }

        let (term, remainder) = numerator.div_rem(&denominator);
        if !remainder.is_zero() {
            return Err(RecoveryError::InexactDivision {
                index: *share.index(),
            });
        }
        secret += term;
    }
    Ok(secret)
}
