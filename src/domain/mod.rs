//! Fundamental domain value types used throughout the registry library.
//!
//! This module contains the core value types that model the domain:
//! addresses, token pairs, maintenance requirements, leverage multipliers,
//! pool keys, liquidity, shares, and prices. All types are newtypes with
//! validated constructors where an invariant exists.

mod address;
mod amount;
mod fee_tier;
mod leverage;
mod liquidity;
mod maintenance;
mod pool_key;
mod rounding;
mod shares;
mod sqrt_price;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use fee_tier::FeeTier;
pub use leverage::Leverage;
pub use liquidity::Liquidity;
pub use maintenance::Maintenance;
pub use pool_key::PoolKey;
pub use rounding::Rounding;
pub use shares::Shares;
pub use sqrt_price::SqrtPriceX96;
pub use token_pair::TokenPair;
