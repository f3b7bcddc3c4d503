//! Liquidity to token-amount conversion at a square-root price.
//!
//! A constant-product pool with full-range liquidity `L` at sqrt price
//! `sqrtP` (Q64.96) holds
//!
//! ```text
//! amount0 = (L << 96) / sqrtP
//! amount1 = (L * sqrtP) >> 96
//! ```
//!
//! Both computations use wide intermediates so the shift/product never
//! truncates, and both check that the resulting amount fits `u128`.

use primitive_types::{U256, U512};

use crate::domain::{Amount, Liquidity, SqrtPriceX96};
use crate::error::{RegistryError, Result};

/// Computes the token0 reserve backing `liquidity` at `sqrt_price`.
///
/// # Errors
///
/// - [`RegistryError::DivisionByZero`] if `sqrt_price` is zero.
/// - [`RegistryError::Overflow`] if the amount exceeds `u128`.
pub fn amount0_for_liquidity(liquidity: Liquidity, sqrt_price: SqrtPriceX96) -> Result<Amount> {
    if sqrt_price.is_zero() {
        return Err(RegistryError::DivisionByZero);
    }
    // L << 96 needs at most 224 bits.
    let shifted = U256::from(liquidity.get()) << SqrtPriceX96::RESOLUTION;
    let quotient = shifted / sqrt_price.get();
    if quotient > U256::from(u128::MAX) {
        return Err(RegistryError::Overflow("amount0 exceeds 128 bits"));
    }
    Ok(Amount::new(quotient.as_u128()))
}

/// Computes the token1 reserve backing `liquidity` at `sqrt_price`.
///
/// # Errors
///
/// Returns [`RegistryError::Overflow`] if the amount exceeds `u128`.
pub fn amount1_for_liquidity(liquidity: Liquidity, sqrt_price: SqrtPriceX96) -> Result<Amount> {
    // L (≤128 bits) * sqrtP (≤160 bits) needs up to 288 bits.
    let product: U512 = U256::from(liquidity.get()).full_mul(sqrt_price.get());
    let shifted = product >> SqrtPriceX96::RESOLUTION;
    if shifted > U512::from(u128::MAX) {
        return Err(RegistryError::Overflow("amount1 exceeds 128 bits"));
    }
    Ok(Amount::new(shifted.as_u128()))
}

/// Computes both reserves backing `liquidity` at `sqrt_price`.
///
/// # Errors
///
/// - [`RegistryError::DivisionByZero`] if `sqrt_price` is zero.
/// - [`RegistryError::Overflow`] if either amount exceeds `u128`.
///
/// # Examples
///
/// ```
/// use leverpool::domain::{Liquidity, SqrtPriceX96};
/// use leverpool::math::amounts_for_liquidity;
///
/// // At price 1.0 both reserves equal the liquidity.
/// let (a0, a1) = amounts_for_liquidity(Liquidity::new(1_000), SqrtPriceX96::one())
///     .expect("valid price");
/// assert_eq!(a0.get(), 1_000);
/// assert_eq!(a1.get(), 1_000);
/// ```
pub fn amounts_for_liquidity(
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
) -> Result<(Amount, Amount)> {
    let amount0 = amount0_for_liquidity(liquidity, sqrt_price)?;
    let amount1 = amount1_for_liquidity(liquidity, sqrt_price)?;
    Ok((amount0, amount1))
}
