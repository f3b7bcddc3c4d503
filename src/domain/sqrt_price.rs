//! Q64.96 square-root price.

use core::fmt;

use primitive_types::U256;

use crate::error::{RegistryError, Result};

/// A pool's square-root price in Q64.96 fixed point:
/// `sqrt(token1/token0) * 2^96`.
///
/// Stored as a [`U256`] bounded to 160 bits, matching the reference
/// oracle's price width. Zero is the sentinel for an uninitialized pool
/// and is a valid value here; accounting code rejects it before any
/// conversion.
///
/// # Examples
///
/// ```
/// use leverpool::domain::SqrtPriceX96;
///
/// // Price 1.0: sqrt(1.0) * 2^96
/// let unit = SqrtPriceX96::one();
/// assert!(!unit.is_zero());
/// assert_eq!(unit.get(), SqrtPriceX96::q96());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceX96(U256);

impl SqrtPriceX96 {
    /// Number of fractional bits.
    pub const RESOLUTION: u32 = 96;

    /// Returns `2^96`, the fixed-point one.
    #[must_use]
    pub fn q96() -> U256 {
        U256::one() << Self::RESOLUTION
    }

    /// Creates a `SqrtPriceX96` from a raw `U256` value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPrice`] if the value needs more
    /// than 160 bits.
    pub fn new(value: U256) -> Result<Self> {
        if value.bits() > 160 {
            return Err(RegistryError::InvalidPrice(
                "sqrt price exceeds 160 bits",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a `SqrtPriceX96` from a `u128`, which always fits.
    #[must_use]
    pub fn from_raw(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// The sqrt price of 1.0 (`2^96`).
    #[must_use]
    pub fn one() -> Self {
        Self(Self::q96())
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` for the uninitialized-pool sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
