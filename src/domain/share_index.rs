//! `ShareIndex` newtype for decoded shares

use anyhow::{Result, bail};

/// 1-based share index (the x coordinate)
///
/// Mirrors the position at which the share appeared in the input record;
/// record keys start at "1", so index 0 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareIndex(u32);

impl ShareIndex {
    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if the index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unshard::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// // Invalid: indices are 1-based
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            bail!("Share index must be at least 1 (indices are 1-based)");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
