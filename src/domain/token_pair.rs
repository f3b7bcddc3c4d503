//! Canonically ordered pair of distinct token addresses.

use super::Address;
use crate::error::RegistryError;

/// An unordered asset pair held in canonical (address-sorted) order.
///
/// The canonical ordering guarantees `token0 < token1`, so `(A, B)` and
/// `(B, A)` construct the same pair. Every registry lookup and insert goes
/// through this canonicalization, which is what makes pool keys unique per
/// unordered pair.
///
/// # Examples
///
/// ```
/// use leverpool::domain::{Address, TokenPair};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.token0(), a);
/// assert_eq!(pair.token1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPair {
    token0: Address,
    token1: Address,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// The two addresses are automatically sorted so that
    /// `token0 < token1`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidToken`] if both addresses are equal.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self, RegistryError> {
        if token_a == token_b {
            return Err(RegistryError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self { token0, token1 })
    }

    /// Returns the first token (lower address).
    #[must_use]
    pub const fn token0(&self) -> Address {
        self.token0
    }

    /// Returns the second token (higher address).
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.token1
    }

    /// Returns `true` if the given address is one of the pair's tokens.
    #[must_use]
    pub fn contains(&self, token: Address) -> bool {
        self.token0 == token || self.token1 == token
    }
}
