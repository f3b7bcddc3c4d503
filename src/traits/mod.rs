//! Trait seams for the external collaborators the registry and
//! accountant consume.
//!
//! The crate owns none of the pool, oracle, or deployment machinery; it
//! talks to those systems through [`PoolDeployer`], [`OracleSource`], and
//! [`PoolStateReader`].

mod deployer;
mod oracle_source;
mod pool_state;

pub use deployer::PoolDeployer;
pub use oracle_source::OracleSource;
pub use pool_state::{PoolState, PoolStateReader};
