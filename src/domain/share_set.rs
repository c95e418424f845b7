//! Ordered share collection used for screening and reconstruction

use anyhow::{Result, bail};

use super::{RecoveryConfig, Share};

/// Ordered, duplicate-free set of decoded shares plus the declared `n`/`k`
///
/// Shares are kept in ascending index order regardless of the order they
/// arrived in, so "the first `k` shares" is a deterministic subset-selection
/// policy. Read-only input to screening and reconstruction.
#[derive(Debug, Clone)]
pub struct ShareSet {
    shares: Vec<Share>,
    config: RecoveryConfig,
}

impl ShareSet {
    /// Creates a share set, sorting shares by index
    ///
    /// # Errors
    /// Returns an error if two shares carry the same index
    pub fn new(mut shares: Vec<Share>, config: RecoveryConfig) -> Result<Self> {
        shares.sort_by_key(Share::index);
        for pair in shares.windows(2) {
            if pair[0].index() == pair[1].index() {
                bail!("Duplicate share index {}", *pair[0].index());
            }
        }
        Ok(Self { shares, config })
    }

    /// Shares in ascending index order
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    #[must_use]
    pub fn config(&self) -> RecoveryConfig {
        self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
