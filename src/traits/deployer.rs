//! Pool deployment seam.

use crate::domain::{Address, PoolKey};
use crate::error::Result;

/// Collaborator that instantiates the actual pool for a canonical key.
///
/// The registry validates the key (enabled maintenance, resolvable oracle,
/// uniqueness, oracle depth) and then delegates construction here. The
/// deployer is assumed to enforce its own token validity rules (non-zero,
/// distinct addresses) and to perform whatever on-chain or in-process
/// construction a pool requires.
///
/// A deployment failure aborts `create_pool` before any registry state is
/// written.
pub trait PoolDeployer {
    /// Deploys a pool for the given key and returns its address.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DeployFailed`](crate::error::RegistryError::DeployFailed)
    /// (or any other variant the implementation chooses) if construction
    /// fails.
    fn deploy(&mut self, key: &PoolKey) -> Result<Address>;
}
