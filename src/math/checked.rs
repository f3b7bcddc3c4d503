//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Self>`](crate::error::Result) instead of panicking on
//! overflow or underflow. `safe_mul_div` routes through the full-precision
//! [`mul_div`](crate::math::mul_div) so products never truncate before
//! division.

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::{RegistryError, Result};
use crate::math::full_math;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics** — all error conditions produce `Err`.
/// - **No saturation** — saturation hides bugs; errors propagate instead.
/// - Products are taken at 256-bit width before any division.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Underflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;

    /// Full-precision `self * numerator / denominator` with explicit
    /// [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DivisionByZero`] if `denominator` is zero,
    /// or [`RegistryError::Overflow`] if the quotient exceeds the
    /// representable range.
    fn safe_mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding)
        -> Result<Self>;
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(RegistryError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(RegistryError::Underflow("liquidity subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self> {
        full_math::mul_div(self.get(), numerator, denominator, rounding).map(Liquidity::new)
    }
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(RegistryError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(RegistryError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self> {
        full_math::mul_div(self.get(), numerator, denominator, rounding).map(Amount::new)
    }
}
