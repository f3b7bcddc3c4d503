//! Oracle resolution seam.

use crate::domain::{Address, FeeTier, TokenPair};

/// Collaborator that resolves reference price oracles for token pairs.
///
/// The reference venue keeps at most one oracle per (pair, fee tier); the
/// registry requires an oracle to exist and to carry enough price history
/// before a pool may be created against it.
pub trait OracleSource {
    /// Returns the oracle address for the pair and fee tier, or `None` if
    /// no oracle exists for that combination.
    ///
    /// Implementations bridging environments that use a zero-address
    /// sentinel may return it; the registry treats the zero address as
    /// absent.
    fn resolve(&self, pair: &TokenPair, fee: FeeTier) -> Option<Address>;

    /// Returns the number of historical price observations the oracle
    /// currently stores.
    fn observation_cardinality(&self, oracle: Address) -> u16;
}
