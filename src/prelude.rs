//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use leverpool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Address, Amount, FeeTier, Leverage, Liquidity, Maintenance, PoolKey, Rounding, Shares,
    SqrtPriceX96, TokenPair,
};

// Re-export collaborator seams
pub use crate::traits::{OracleSource, PoolDeployer, PoolState, PoolStateReader};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration
pub use crate::config::RegistryConfig;

// Re-export error types
pub use crate::error::{RegistryError, Result};

// Re-export behavioral components
pub use crate::accounting::{PositionAccountant, PositionValue};
pub use crate::curve::LeverageCurve;
pub use crate::registry::{PoolRegistry, RegistryEvent};
