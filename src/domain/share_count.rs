//! `ShareCount` newtype for share records

use anyhow::{Result, bail};

/// Declared total number of shares in a record (`n` in the header)
///
/// The record may carry fewer entries than declared; indices are allowed to
/// be sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u32);

impl ShareCount {
    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if the count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unshard::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// // Invalid: a record without shares cannot be recovered
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            bail!("Share count must be at least 1");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
