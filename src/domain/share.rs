//! One decoded share point

use std::fmt;

use num_bigint::BigInt;

use super::ShareIndex;

/// One decoded `(x, y)` point of the hidden polynomial
///
/// `base` records the radix the value string was decoded from. Shares are
/// created once by decoding and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    value: BigInt,
    base: u32,
}

impl Share {
    #[must_use]
    pub fn new(index: ShareIndex, value: BigInt, base: u32) -> Self {
        Self { index, value, base }
    }

    /// 1-based index (the x coordinate)
    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    /// Decoded value (the y coordinate)
    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Radix the value string was decoded from
    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", *self.index, self.value)
    }
}
