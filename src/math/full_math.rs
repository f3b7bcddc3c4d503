//! Full-precision multiply-then-divide.

use primitive_types::U256;

use crate::domain::Rounding;
use crate::error::{RegistryError, Result};

/// Computes `a * b / denominator` with the full 256-bit intermediate
/// product, so the multiplication never truncates before the division.
///
/// This is the primitive behind proportional-claim accounting:
/// `total_liquidity * holder_shares / total_shares` must not lose
/// precision (or overflow) in the product even when both factors are near
/// `u128::MAX`.
///
/// # Errors
///
/// - [`RegistryError::DivisionByZero`] if `denominator` is zero.
/// - [`RegistryError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use leverpool::domain::Rounding;
/// use leverpool::math::mul_div;
///
/// let q = mul_div(1_000, 250, 1_000, Rounding::Down).expect("fits");
/// assert_eq!(q, 250);
///
/// // The intermediate product here exceeds u128; the result still fits.
/// let q = mul_div(u128::MAX, 7, u128::MAX, Rounding::Down).expect("fits");
/// assert_eq!(q, 7);
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(RegistryError::DivisionByZero);
    }

    // 128-bit x 128-bit always fits in 256 bits.
    let product = U256::from(a) * U256::from(b);
    let d = U256::from(denominator);

    let mut quotient = product / d;
    if rounding.is_up() && !(product % d).is_zero() {
        quotient += U256::one();
    }

    if quotient > U256::from(u128::MAX) {
        return Err(RegistryError::Overflow("mul_div quotient exceeds 128 bits"));
    }
    Ok(quotient.as_u128())
}
