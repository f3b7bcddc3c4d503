//! Observable registry events.

use crate::domain::{Address, Leverage, Maintenance};

/// An event appended to the registry log by a successful mutating
/// operation.
///
/// Every mutation emits exactly one event; no mutation is silent. Events
/// accumulate in order on the registry until drained with
/// [`take_events`](crate::registry::PoolRegistry::take_events), which is
/// how indexers and other off-crate consumers observe state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A pool was created and recorded.
    PoolCreated {
        /// Lower-address token of the canonical pair.
        token0: Address,
        /// Higher-address token of the canonical pair.
        token1: Address,
        /// Maintenance requirement the pool is keyed to.
        maintenance: Maintenance,
        /// Reference oracle the pool is keyed to.
        oracle: Address,
        /// Address of the deployed pool.
        pool: Address,
    },

    /// A maintenance value was activated on the leverage curve.
    LeverageEnabled {
        /// The activated maintenance value.
        maintenance: Maintenance,
        /// The derived multiplier.
        leverage: Leverage,
    },

    /// Registry ownership was reassigned.
    OwnerChanged {
        /// Owner before the call.
        previous_owner: Address,
        /// Owner after the call.
        new_owner: Address,
    },
}
