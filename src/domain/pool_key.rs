//! Composite, order-normalized registry key.

use core::fmt;

use super::{Address, Maintenance, TokenPair};
use crate::error::RegistryError;

/// The unique identity of a pool: canonical token pair, maintenance
/// requirement, and reference oracle.
///
/// Exactly one pool exists per `PoolKey`. The key is order-normalized at
/// construction — the pair is canonically sorted by [`TokenPair`] — so a
/// single map entry serves lookups in either token order; there is no
/// mirrored reverse-order entry to keep in sync.
///
/// # Examples
///
/// ```
/// use leverpool::domain::{Address, Maintenance, PoolKey};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// let oracle = Address::from_bytes([9u8; 32]);
///
/// let forward = PoolKey::new(a, b, Maintenance::M25, oracle).expect("distinct");
/// let reverse = PoolKey::new(b, a, Maintenance::M25, oracle).expect("distinct");
/// assert_eq!(forward, reverse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolKey {
    pair: TokenPair,
    maintenance: Maintenance,
    oracle: Address,
}

impl PoolKey {
    /// Creates a key from unordered token addresses, canonicalizing the
    /// pair.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidToken`] if the token addresses are
    /// equal.
    pub fn new(
        token_a: Address,
        token_b: Address,
        maintenance: Maintenance,
        oracle: Address,
    ) -> Result<Self, RegistryError> {
        let pair = TokenPair::new(token_a, token_b)?;
        Ok(Self::from_parts(pair, maintenance, oracle))
    }

    /// Creates a key from an already-canonical pair.
    #[must_use]
    pub const fn from_parts(pair: TokenPair, maintenance: Maintenance, oracle: Address) -> Self {
        Self {
            pair,
            maintenance,
            oracle,
        }
    }

    /// Returns the canonical token pair.
    #[must_use]
    pub const fn pair(&self) -> TokenPair {
        self.pair
    }

    /// Returns the lower-address token.
    #[must_use]
    pub const fn token0(&self) -> Address {
        self.pair.token0()
    }

    /// Returns the higher-address token.
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.pair.token1()
    }

    /// Returns the maintenance requirement.
    #[must_use]
    pub const fn maintenance(&self) -> Maintenance {
        self.maintenance
    }

    /// Returns the oracle address.
    #[must_use]
    pub const fn oracle(&self) -> Address {
        self.oracle
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolKey(maintenance={})", self.maintenance)
    }
}
