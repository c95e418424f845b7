//! Configuration validation for share records

use anyhow::{Result, bail};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and declared share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents accepting records that demand more shares than the record
/// can ever hold.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl RecoveryConfig {
    /// Creates a new recovery configuration
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unshard::domain::{RecoveryConfig, ShareCount, Threshold};
    ///
    /// // Valid: threshold <= share_count
    /// let config = RecoveryConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// // Invalid: threshold > share_count
    /// let result = RecoveryConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            bail!(
                "Threshold {} cannot exceed share count {}",
                *threshold,
                *share_count
            );
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the declared share count
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
