//! Arithmetic utilities for registry and accounting calculations.
//!
//! This module provides the [`CheckedArithmetic`] trait for overflow-safe
//! operations on domain types, the full-precision [`mul_div`] primitive,
//! and the liquidity-to-amount conversions used to value LP claims.

mod checked;
mod full_math;
mod liquidity_math;

pub use checked::CheckedArithmetic;
pub use full_math::mul_div;
pub use liquidity_math::{amount0_for_liquidity, amount1_for_liquidity, amounts_for_liquidity};
