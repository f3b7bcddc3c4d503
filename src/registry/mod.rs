//! Pool registry and its observable events.

mod events;
mod pool_registry;

pub use events::RegistryEvent;
pub use pool_registry::PoolRegistry;

#[cfg(test)]
mod proptest_properties;
