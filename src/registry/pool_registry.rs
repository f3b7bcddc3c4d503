//! Pool registry: creation, indexing, and governance.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RegistryConfig;
use crate::curve::LeverageCurve;
use crate::domain::{Address, FeeTier, Leverage, Maintenance, PoolKey, TokenPair};
use crate::error::{RegistryError, Result};
use crate::registry::RegistryEvent;
use crate::traits::{OracleSource, PoolDeployer};

/// Registry that deploys and indexes isolated leveraged trading pools.
///
/// At most one pool exists per [`PoolKey`] (canonical pair, maintenance,
/// oracle). The registry validates the maintenance parameter against its
/// [`LeverageCurve`], resolves the reference oracle through the
/// [`OracleSource`] collaborator, and delegates instantiation to the
/// [`PoolDeployer`] collaborator.
///
/// A single owner principal governs leverage activation and ownership
/// itself; pool creation is permissionless.
///
/// # Atomicity
///
/// Every mutating entry point takes `&mut self`, so Rust's exclusive
/// borrow is the transaction boundary: a call either fully commits or
/// fully rejects with no partial effect, and no other call can observe an
/// intermediate state. Within `create_pool`, all checks and the deployer
/// call run before the first write to registry state.
///
/// # Example
///
/// ```
/// use leverpool::config::RegistryConfig;
/// use leverpool::domain::{Address, FeeTier, Maintenance, PoolKey, TokenPair};
/// use leverpool::error::Result;
/// use leverpool::registry::PoolRegistry;
/// use leverpool::traits::{OracleSource, PoolDeployer};
///
/// struct CountingDeployer(u8);
///
/// impl PoolDeployer for CountingDeployer {
///     fn deploy(&mut self, _key: &PoolKey) -> Result<Address> {
///         self.0 += 1;
///         Ok(Address::from_bytes([self.0; 32]))
///     }
/// }
///
/// struct SingleOracle;
///
/// impl OracleSource for SingleOracle {
///     fn resolve(&self, _pair: &TokenPair, _fee: FeeTier) -> Option<Address> {
///         Some(Address::from_bytes([9u8; 32]))
///     }
///     fn observation_cardinality(&self, _oracle: Address) -> u16 {
///         u16::MAX
///     }
/// }
///
/// let owner = Address::from_bytes([7u8; 32]);
/// let mut registry = PoolRegistry::new(
///     CountingDeployer(0),
///     SingleOracle,
///     RegistryConfig::default(),
///     owner,
/// );
///
/// let usdc = Address::from_bytes([1u8; 32]);
/// let weth = Address::from_bytes([2u8; 32]);
///
/// let pool = registry
///     .create_pool(weth, usdc, Maintenance::M25, FeeTier::TIER_0_30_PERCENT)
///     .expect("first creation succeeds");
///
/// // Lookup works in either token order.
/// let oracle = Address::from_bytes([9u8; 32]);
/// assert_eq!(registry.pool(usdc, weth, Maintenance::M25, oracle), Some(pool));
/// assert!(registry.is_pool(pool));
/// ```
#[derive(Debug)]
pub struct PoolRegistry<D, O> {
    deployer: D,
    oracles: O,
    config: RegistryConfig,
    owner: Address,
    curve: LeverageCurve,
    pools: BTreeMap<PoolKey, Address>,
    recognized: BTreeSet<Address>,
    events: Vec<RegistryEvent>,
}

impl<D: PoolDeployer, O: OracleSource> PoolRegistry<D, O> {
    /// Creates a registry with a freshly seeded leverage curve and an
    /// empty pool index.
    #[must_use]
    pub fn new(deployer: D, oracles: O, config: RegistryConfig, owner: Address) -> Self {
        Self {
            deployer,
            oracles,
            config,
            owner,
            curve: LeverageCurve::new(),
            pools: BTreeMap::new(),
            recognized: BTreeSet::new(),
            events: Vec::new(),
        }
    }

    /// Creates the pool for `(token_a, token_b, maintenance, fee)` and
    /// records it under the canonical key.
    ///
    /// The fee tier selects the oracle venue; the resolved oracle address
    /// becomes part of the pool's key. Creation is permissionless but
    /// strictly unique per key: a second creation attempt for the same key
    /// is a permanent, checkable failure, not a retryable condition.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidToken`] if the token addresses are equal.
    /// - [`RegistryError::InvalidMaintenance`] if `maintenance` is not
    ///   enabled on the leverage curve.
    /// - [`RegistryError::InvalidOracle`] if no oracle exists for the pair
    ///   and fee tier.
    /// - [`RegistryError::PoolActive`] if a pool already exists for the
    ///   key.
    /// - [`RegistryError::InvalidObservationCardinality`] if the oracle's
    ///   observation depth is below the configured minimum.
    /// - Any error returned by the deployer collaborator.
    ///
    /// On any error the registry is left exactly as it was.
    pub fn create_pool(
        &mut self,
        token_a: Address,
        token_b: Address,
        maintenance: Maintenance,
        fee: FeeTier,
    ) -> Result<Address> {
        let pair = TokenPair::new(token_a, token_b)?;

        if !self.curve.is_enabled(maintenance) {
            return Err(RegistryError::InvalidMaintenance(
                "maintenance is not enabled on the leverage curve",
            ));
        }

        let oracle = match self.oracles.resolve(&pair, fee) {
            Some(addr) if !addr.is_zero() => addr,
            _ => {
                return Err(RegistryError::InvalidOracle(
                    "no oracle for pair and fee tier",
                ))
            }
        };

        let key = PoolKey::from_parts(pair, maintenance, oracle);
        if self.pools.contains_key(&key) {
            return Err(RegistryError::PoolActive);
        }

        let observed = self.oracles.observation_cardinality(oracle);
        let minimum = self.config.observation_cardinality_min();
        if observed < minimum {
            return Err(RegistryError::InvalidObservationCardinality { observed, minimum });
        }

        let pool = self.deployer.deploy(&key)?;

        self.pools.insert(key, pool);
        self.recognized.insert(pool);
        self.events.push(RegistryEvent::PoolCreated {
            token0: key.token0(),
            token1: key.token1(),
            maintenance,
            oracle,
            pool,
        });
        Ok(pool)
    }

    /// Looks up the pool recorded for `(token_a, token_b, maintenance,
    /// oracle)`, accepting the tokens in either order.
    ///
    /// Returns `None` when no pool exists for the key, including the
    /// degenerate case of identical token addresses.
    #[must_use]
    pub fn pool(
        &self,
        token_a: Address,
        token_b: Address,
        maintenance: Maintenance,
        oracle: Address,
    ) -> Option<Address> {
        let key = PoolKey::new(token_a, token_b, maintenance, oracle).ok()?;
        self.pools.get(&key).copied()
    }

    /// Returns `true` if `address` was deployed through this registry.
    #[must_use]
    pub fn is_pool(&self, address: Address) -> bool {
        self.recognized.contains(&address)
    }

    /// Returns the number of pools created through this registry.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Atomically reassigns ownership.
    ///
    /// There is no two-step handshake: transferring to an unreachable
    /// principal permanently loses registry governance.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unauthorized`] unless `caller` is the
    /// current owner.
    pub fn set_owner(&mut self, caller: Address, new_owner: Address) -> Result<()> {
        if caller != self.owner {
            return Err(RegistryError::Unauthorized);
        }
        let previous_owner = self.owner;
        self.owner = new_owner;
        self.events.push(RegistryEvent::OwnerChanged {
            previous_owner,
            new_owner,
        });
        Ok(())
    }

    /// Activates a maintenance value on the leverage curve.
    ///
    /// Thin pass-through to [`LeverageCurve::enable`] restricted to the
    /// registry owner; the same principal governs both the registry and
    /// the curve.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] unless `caller` is the current
    ///   owner.
    /// - [`RegistryError::InvalidMaintenance`] if the value is outside
    ///   the governance band.
    /// - [`RegistryError::AlreadyEnabled`] if the value already has an
    ///   entry.
    pub fn enable_leverage(
        &mut self,
        caller: Address,
        maintenance: Maintenance,
    ) -> Result<Leverage> {
        if caller != self.owner {
            return Err(RegistryError::Unauthorized);
        }
        let leverage = self.curve.enable(maintenance)?;
        self.events.push(RegistryEvent::LeverageEnabled {
            maintenance,
            leverage,
        });
        Ok(leverage)
    }

    /// Returns the current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the leverage curve.
    #[must_use]
    pub const fn curve(&self) -> &LeverageCurve {
        &self.curve
    }

    /// Returns the accumulated events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Drains and returns the accumulated events, oldest first.
    pub fn take_events(&mut self) -> Vec<RegistryEvent> {
        core::mem::take(&mut self.events)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- mock collaborators ---------------------------------------------------

    /// Deployer handing out sequential addresses; can be armed to fail.
    struct MockDeployer {
        next: u8,
        fail: bool,
    }

    impl MockDeployer {
        fn new() -> Self {
            Self { next: 0, fail: false }
        }
    }

    impl PoolDeployer for MockDeployer {
        fn deploy(&mut self, _key: &PoolKey) -> Result<Address> {
            if self.fail {
                return Err(RegistryError::DeployFailed("mock deployer armed to fail"));
            }
            self.next += 1;
            Ok(Address::from_bytes([self.next; 32]))
        }
    }

    /// Oracle source with one oracle per fee tier and a settable depth.
    struct MockOracles {
        cardinality: u16,
        missing: bool,
    }

    impl MockOracles {
        fn new() -> Self {
            Self {
                cardinality: u16::MAX,
                missing: false,
            }
        }
    }

    impl OracleSource for MockOracles {
        fn resolve(&self, _pair: &TokenPair, fee: FeeTier) -> Option<Address> {
            if self.missing {
                return None;
            }
            let mut bytes = [0xAAu8; 32];
            bytes[0] = (fee.pips() / 500) as u8;
            Some(Address::from_bytes(bytes))
        }

        fn observation_cardinality(&self, _oracle: Address) -> u16 {
            self.cardinality
        }
    }

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 32])
    }

    fn owner() -> Address {
        addr(0xEE)
    }

    fn registry() -> PoolRegistry<MockDeployer, MockOracles> {
        PoolRegistry::new(
            MockDeployer::new(),
            MockOracles::new(),
            RegistryConfig::default(),
            owner(),
        )
    }

    fn oracle_for(fee: FeeTier) -> Address {
        let mut bytes = [0xAAu8; 32];
        bytes[0] = (fee.pips() / 500) as u8;
        Address::from_bytes(bytes)
    }

    const FEE: FeeTier = FeeTier::TIER_0_30_PERCENT;

    // -- create_pool ----------------------------------------------------------

    #[test]
    fn create_records_pool() {
        let mut reg = registry();
        let Ok(pool) = reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        assert_eq!(
            reg.pool(addr(1), addr(2), Maintenance::M25, oracle_for(FEE)),
            Some(pool)
        );
        assert!(reg.is_pool(pool));
        assert_eq!(reg.pool_count(), 1);
    }

    #[test]
    fn lookup_in_reverse_order() {
        let mut reg = registry();
        let Ok(pool) = reg.create_pool(addr(2), addr(1), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        assert_eq!(
            reg.pool(addr(1), addr(2), Maintenance::M25, oracle_for(FEE)),
            Some(pool)
        );
        assert_eq!(
            reg.pool(addr(2), addr(1), Maintenance::M25, oracle_for(FEE)),
            Some(pool)
        );
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut reg = registry();
        let Ok(pool) = reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        // Same key in reversed argument order is still the same key.
        assert_eq!(
            reg.create_pool(addr(2), addr(1), Maintenance::M25, FEE),
            Err(RegistryError::PoolActive)
        );
        // Failed attempt left the original record intact.
        assert_eq!(
            reg.pool(addr(1), addr(2), Maintenance::M25, oracle_for(FEE)),
            Some(pool)
        );
        assert_eq!(reg.pool_count(), 1);
    }

    #[test]
    fn same_pair_different_maintenance_coexist() {
        let mut reg = registry();
        let Ok(p1) = reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        let Ok(p2) = reg.create_pool(addr(1), addr(2), Maintenance::M50, FEE) else {
            panic!("expected Ok");
        };
        assert_ne!(p1, p2);
        assert_eq!(reg.pool_count(), 2);
    }

    #[test]
    fn identical_tokens_rejected() {
        let mut reg = registry();
        let Err(RegistryError::InvalidToken(_)) =
            reg.create_pool(addr(1), addr(1), Maintenance::M25, FEE)
        else {
            panic!("expected InvalidToken");
        };
    }

    #[test]
    fn disabled_maintenance_rejected() {
        let mut reg = registry();
        let Err(RegistryError::InvalidMaintenance(_)) =
            reg.create_pool(addr(1), addr(2), Maintenance::new(999_999), FEE)
        else {
            panic!("expected InvalidMaintenance");
        };
        assert_eq!(reg.pool_count(), 0);
    }

    #[test]
    fn missing_oracle_rejected() {
        let mut reg = registry();
        reg.oracles.missing = true;
        let Err(RegistryError::InvalidOracle(_)) =
            reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE)
        else {
            panic!("expected InvalidOracle");
        };
    }

    #[test]
    fn shallow_oracle_rejected() {
        let mut reg = PoolRegistry::new(
            MockDeployer::new(),
            MockOracles::new(),
            RegistryConfig::new(100),
            owner(),
        );
        reg.oracles.cardinality = 99;
        assert_eq!(
            reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE),
            Err(RegistryError::InvalidObservationCardinality {
                observed: 99,
                minimum: 100
            })
        );
    }

    #[test]
    fn exact_cardinality_admitted() {
        let mut reg = PoolRegistry::new(
            MockDeployer::new(),
            MockOracles::new(),
            RegistryConfig::new(100),
            owner(),
        );
        reg.oracles.cardinality = 100;
        assert!(reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE).is_ok());
    }

    #[test]
    fn deploy_failure_leaves_no_trace() {
        let mut reg = registry();
        reg.deployer.fail = true;
        let Err(RegistryError::DeployFailed(_)) =
            reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE)
        else {
            panic!("expected DeployFailed");
        };
        assert_eq!(reg.pool_count(), 0);
        assert!(reg.events().is_empty());
        // The key is still creatable once the deployer recovers.
        reg.deployer.fail = false;
        assert!(reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE).is_ok());
    }

    #[test]
    fn fee_tier_selects_oracle() {
        let mut reg = registry();
        let Ok(p1) = reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        let Ok(p2) = reg.create_pool(
            addr(1),
            addr(2),
            Maintenance::M25,
            FeeTier::TIER_1_00_PERCENT,
        ) else {
            panic!("expected Ok");
        };
        // Different venue, different oracle, different key.
        assert_ne!(p1, p2);
        assert_eq!(
            reg.pool(addr(1), addr(2), Maintenance::M25, oracle_for(FEE)),
            Some(p1)
        );
    }

    #[test]
    fn unknown_address_is_not_pool() {
        let reg = registry();
        assert!(!reg.is_pool(addr(0x42)));
    }

    #[test]
    fn lookup_identical_tokens_is_none() {
        let reg = registry();
        assert_eq!(reg.pool(addr(1), addr(1), Maintenance::M25, addr(9)), None);
    }

    // -- governance -----------------------------------------------------------

    #[test]
    fn set_owner_reassigns() {
        let mut reg = registry();
        let Ok(()) = reg.set_owner(owner(), addr(0xDD)) else {
            panic!("expected Ok");
        };
        assert_eq!(reg.owner(), addr(0xDD));
        // Old owner lost governance.
        assert_eq!(
            reg.set_owner(owner(), addr(0xCC)),
            Err(RegistryError::Unauthorized)
        );
    }

    #[test]
    fn set_owner_unauthorized() {
        let mut reg = registry();
        assert_eq!(
            reg.set_owner(addr(0x01), addr(0xDD)),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(reg.owner(), owner());
    }

    #[test]
    fn enable_leverage_as_owner() {
        let mut reg = registry();
        let Ok(lev) = reg.enable_leverage(owner(), Maintenance::new(200_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(lev, Leverage::new(6_000_000));
        assert!(reg.curve().is_enabled(Maintenance::new(200_000)));
        // Newly enabled maintenance is immediately usable.
        assert!(reg
            .create_pool(addr(1), addr(2), Maintenance::new(200_000), FEE)
            .is_ok());
    }

    #[test]
    fn enable_leverage_unauthorized_before_validation() {
        let mut reg = registry();
        // Even an out-of-band value fails authorization first.
        assert_eq!(
            reg.enable_leverage(addr(0x01), Maintenance::new(50)),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(reg.curve().len(), 3);
    }

    #[test]
    fn enable_leverage_duplicate() {
        let mut reg = registry();
        assert_eq!(
            reg.enable_leverage(owner(), Maintenance::M25),
            Err(RegistryError::AlreadyEnabled)
        );
    }

    // -- events ---------------------------------------------------------------

    #[test]
    fn mutations_emit_in_order() {
        let mut reg = registry();
        let Ok(pool) = reg.create_pool(addr(2), addr(1), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        let Ok(lev) = reg.enable_leverage(owner(), Maintenance::new(200_000)) else {
            panic!("expected Ok");
        };
        let Ok(()) = reg.set_owner(owner(), addr(0xDD)) else {
            panic!("expected Ok");
        };

        assert_eq!(
            reg.events(),
            &[
                RegistryEvent::PoolCreated {
                    token0: addr(1),
                    token1: addr(2),
                    maintenance: Maintenance::M25,
                    oracle: oracle_for(FEE),
                    pool,
                },
                RegistryEvent::LeverageEnabled {
                    maintenance: Maintenance::new(200_000),
                    leverage: lev,
                },
                RegistryEvent::OwnerChanged {
                    previous_owner: owner(),
                    new_owner: addr(0xDD),
                },
            ]
        );
    }

    #[test]
    fn failed_mutations_emit_nothing() {
        let mut reg = registry();
        let _ = reg.create_pool(addr(1), addr(1), Maintenance::M25, FEE);
        let _ = reg.enable_leverage(addr(0x01), Maintenance::new(200_000));
        let _ = reg.set_owner(addr(0x01), addr(0xDD));
        assert!(reg.events().is_empty());
    }

    #[test]
    fn take_events_drains() {
        let mut reg = registry();
        let Ok(_) = reg.create_pool(addr(1), addr(2), Maintenance::M25, FEE) else {
            panic!("expected Ok");
        };
        assert_eq!(reg.take_events().len(), 1);
        assert!(reg.take_events().is_empty());
        assert!(reg.events().is_empty());
    }
}
