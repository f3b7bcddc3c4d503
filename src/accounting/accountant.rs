//! Share-proportional valuation of a passive LP position.

use crate::domain::{Address, Amount, Liquidity, Rounding, Shares, SqrtPriceX96};
use crate::error::{RegistryError, Result};
use crate::math::{amounts_for_liquidity, CheckedArithmetic};
use crate::traits::PoolStateReader;

/// The value of a holder's position at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionValue {
    /// The holder's proportional share of total pool liquidity.
    pub liquidity: Liquidity,
    /// The pool price the amounts were computed at.
    pub sqrt_price: SqrtPriceX96,
    /// token0 backing the proportional liquidity.
    pub amount0: Amount,
    /// token1 backing the proportional liquidity.
    pub amount1: Amount,
}

/// Read-only valuation of a holder's proportional claim on pool reserves.
///
/// The accountant owns no state and never writes to the pool or the
/// registry; it is a pure function of the pool snapshot it is handed.
/// Repeated queries against unchanged upstream state return identical
/// results.
///
/// # Examples
///
/// ```
/// use leverpool::accounting::PositionAccountant;
/// use leverpool::domain::{Liquidity, Shares};
///
/// let liq = PositionAccountant::proportional_liquidity(
///     Liquidity::new(1_000),
///     Shares::new(250),
///     Shares::new(1_000),
/// )
/// .expect("holder has shares");
/// assert_eq!(liq, Liquidity::new(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionAccountant;

impl PositionAccountant {
    /// Computes the holder's proportional slice of total pool liquidity:
    /// `total_liquidity * holder_shares / total_shares`, rounding down,
    /// with the full 256-bit intermediate product.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NoPosition`] if `holder_shares` is zero — a
    ///   zero-share proportional computation would be a degenerate,
    ///   misleading answer.
    /// - [`RegistryError::InvalidPoolState`] if `total_shares` is zero
    ///   while a holder reports a balance; that is an upstream invariant
    ///   violation, not a division-by-zero to paper over.
    pub fn proportional_liquidity(
        total_liquidity: Liquidity,
        holder_shares: Shares,
        total_shares: Shares,
    ) -> Result<Liquidity> {
        if holder_shares.is_zero() {
            return Err(RegistryError::NoPosition);
        }
        if total_shares.is_zero() {
            return Err(RegistryError::InvalidPoolState(
                "total share supply is zero",
            ));
        }
        total_liquidity.safe_mul_div(holder_shares.get(), total_shares.get(), Rounding::Down)
    }

    /// Converts a liquidity amount into the two underlying asset amounts
    /// at the given square-root price.
    ///
    /// Delegates to the crate's price-math
    /// ([`amounts_for_liquidity`](crate::math::amounts_for_liquidity)).
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DivisionByZero`] if `sqrt_price` is zero.
    /// - [`RegistryError::Overflow`] if either amount exceeds `u128`.
    pub fn proportional_amounts(
        liquidity: Liquidity,
        sqrt_price: SqrtPriceX96,
    ) -> Result<(Amount, Amount)> {
        amounts_for_liquidity(liquidity, sqrt_price)
    }

    /// Values a holder's position against the pool's current state.
    ///
    /// Total liquidity is the pool's active liquidity *plus* liquidity
    /// locked against open leveraged positions: locked liquidity still
    /// backs the LP's claim, and omitting it would understate the
    /// position.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::PoolUninitialized`] if the pool reports it has
    ///   not been initialized (no liquidity, no valid price).
    /// - [`RegistryError::Overflow`] if active plus locked liquidity
    ///   overflows.
    /// - [`RegistryError::NoPosition`] /
    ///   [`RegistryError::InvalidPoolState`] as in
    ///   [`proportional_liquidity`](Self::proportional_liquidity).
    pub fn current_values<P: PoolStateReader>(pool: &P, holder: Address) -> Result<PositionValue> {
        let state = pool.state();
        if !state.initialized || state.sqrt_price.is_zero() {
            return Err(RegistryError::PoolUninitialized);
        }

        let total_liquidity = state.liquidity.safe_add(&state.locked_liquidity)?;
        let holder_shares = pool.share_balance(holder);
        let liquidity =
            Self::proportional_liquidity(total_liquidity, holder_shares, state.total_shares)?;
        let (amount0, amount1) = Self::proportional_amounts(liquidity, state.sqrt_price)?;

        Ok(PositionValue {
            liquidity,
            sqrt_price: state.sqrt_price,
            amount0,
            amount1,
        })
    }
}
