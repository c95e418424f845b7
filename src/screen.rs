//! Statistical screening of a share set for outlier values
//!
//! An advisory heuristic: shares whose value falls far from the group's
//! central tendency are flagged as possibly corrupted or tampered. The screen
//! never consults the threshold, never performs any reconstruction, and its
//! result never gates recovery.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use crate::domain::{Share, ShareSet};
use crate::error::RecoveryError;

/// Upper bound on reported anomalies per share set
///
/// A fixed reporting cap, not a statistical one: outliers beyond the first
/// three are left unreported.
pub const MAX_REPORTED: usize = 3;

/// Half-width of the acceptance band, in standard deviations
const BAND_SIGMAS: u32 = 2;

/// How the acceptance-band statistics are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsPolicy {
    /// Floor-division integer mean/variance and floor integer square root.
    ///
    /// Not exact statistics: truncation can shift the band for small sets or
    /// values spanning many orders of magnitude. Kept as the default for
    /// compatibility with the historical behaviour.
    #[default]
    TruncatingInteger,
    /// `f64` statistics. Lossy once values exceed 2^53.
    FloatingPoint,
}

/// Flags shares whose value lies strictly outside the acceptance band
/// `[mean - 2*stddev, mean + 2*stddev]`
///
/// Returns at most [`MAX_REPORTED`] anomalies, in ascending index order.
///
/// # Errors
/// Returns [`RecoveryError::EmptyShareSet`] if the set holds no shares
pub fn find_anomalies(
    set: &ShareSet,
    policy: StatsPolicy,
) -> Result<Vec<Share>, RecoveryError> {
    let shares = set.shares();
    if shares.is_empty() {
        return Err(RecoveryError::EmptyShareSet);
    }
    match policy {
        StatsPolicy::TruncatingInteger => Ok(integer_band_outliers(shares)),
        StatsPolicy::FloatingPoint => Ok(float_band_outliers(shares)),
    }
}

fn integer_band_outliers(shares: &[Share]) -> Vec<Share> {
    let count = BigInt::from(shares.len());
    let sum: BigInt = shares.iter().map(Share::value).sum();
    let mean = sum.div_floor(&count);

    let squared_deviations: BigInt = shares
        .iter()
        .map(|share| {
            let deviation = share.value() - &mean;
            &deviation * &deviation
        })
        .sum();
    let variance = squared_deviations.div_floor(&count);
    let stddev = variance.sqrt();

    let spread = stddev * BAND_SIGMAS;
    let low = &mean - &spread;
    let high = &mean + &spread;

    shares
        .iter()
        .filter(|share| *share.value() < low || *share.value() > high)
        .take(MAX_REPORTED)
        .cloned()
        .collect()
}

fn float_band_outliers(shares: &[Share]) -> Vec<Share> {
    let count = shares.len() as f64;
    let values: Vec<f64> = shares.iter().map(|s| to_f64_lossy(s.value())).collect();
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|y| (y - mean).powi(2)).sum::<f64>() / count;
    let spread = f64::from(BAND_SIGMAS) * variance.sqrt();

    shares
        .iter()
        .zip(&values)
        .filter(|(_, y)| **y < mean - spread || **y > mean + spread)
        .map(|(share, _)| share.clone())
        .take(MAX_REPORTED)
        .collect()
}

fn to_f64_lossy(value: &BigInt) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        if value.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}
