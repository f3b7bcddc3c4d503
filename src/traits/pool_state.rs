//! Pool state-reading seam.

use crate::domain::{Address, Liquidity, Shares, SqrtPriceX96};

/// Point-in-time snapshot of the pool state the accountant needs.
///
/// `liquidity` is the pool's *active* liquidity; `locked_liquidity` is
/// liquidity currently committed against open leveraged positions. Locked
/// liquidity still backs LP claims, so valuation sums both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    /// Current square-root price (zero while uninitialized).
    pub sqrt_price: SqrtPriceX96,
    /// Active liquidity.
    pub liquidity: Liquidity,
    /// Liquidity locked against open positions, still owed to LPs.
    pub locked_liquidity: Liquidity,
    /// Total supply of LP share tokens.
    pub total_shares: Shares,
    /// Whether the pool has been initialized with a price and liquidity.
    pub initialized: bool,
}

/// Read-only view of a pool, implemented by the pool collaborator.
///
/// All methods are pure reads: calling them repeatedly against unchanged
/// pool state returns identical values and has no side effects.
pub trait PoolStateReader {
    /// Returns the current pool state snapshot.
    fn state(&self) -> PoolState;

    /// Returns the holder's LP share balance.
    fn share_balance(&self, holder: Address) -> Shares;
}
