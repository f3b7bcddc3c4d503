//! Registry lifecycle walkthrough: create a pool, activate a new leverage
//! tier, hand over governance, and inspect the emitted events.
//!
//! Run with: `cargo run --example create_pool`

use leverpool::config::RegistryConfig;
use leverpool::domain::{Address, FeeTier, Maintenance, PoolKey, TokenPair};
use leverpool::error::Result;
use leverpool::registry::{PoolRegistry, RegistryEvent};
use leverpool::traits::{OracleSource, PoolDeployer};

/// Deployer handing out sequential addresses.
struct DemoDeployer {
    next: u64,
}

impl PoolDeployer for DemoDeployer {
    fn deploy(&mut self, _key: &PoolKey) -> Result<Address> {
        self.next += 1;
        let mut bytes = [0xF0u8; 32];
        bytes[24..].copy_from_slice(&self.next.to_be_bytes());
        Ok(Address::from_bytes(bytes))
    }
}

/// One deep oracle for every pair and fee tier.
struct DemoOracles;

impl OracleSource for DemoOracles {
    fn resolve(&self, _pair: &TokenPair, fee: FeeTier) -> Option<Address> {
        let mut bytes = [0xA0u8; 32];
        bytes[28..].copy_from_slice(&fee.pips().to_be_bytes());
        Some(Address::from_bytes(bytes))
    }

    fn observation_cardinality(&self, _oracle: Address) -> u16 {
        1_000
    }
}

fn main() {
    let owner = Address::from_bytes([0xEE; 32]);
    let mut registry = PoolRegistry::new(
        DemoDeployer { next: 0 },
        DemoOracles,
        RegistryConfig::new(100),
        owner,
    );

    let usdc = Address::from_bytes([0x01; 32]);
    let weth = Address::from_bytes([0x02; 32]);

    println!("Seeded leverage curve:");
    for (maintenance, leverage) in registry.curve().tiers() {
        println!("  {maintenance} -> {leverage}");
    }

    let pool = registry
        .create_pool(weth, usdc, Maintenance::M25, FeeTier::TIER_0_30_PERCENT)
        .expect("creation succeeds");
    println!("\nCreated 25%-maintenance pool: {:02x?}…", &pool.as_bytes()[..4]);

    // The same unordered key cannot be created twice.
    let duplicate = registry.create_pool(usdc, weth, Maintenance::M25, FeeTier::TIER_0_30_PERCENT);
    println!("Duplicate creation: {duplicate:?}");

    // Activate a fresh tier (20% maintenance -> 6x) and use it.
    let leverage = registry
        .enable_leverage(owner, Maintenance::new(200_000))
        .expect("in band, fresh");
    println!("\nEnabled 200000ppm at {leverage}");
    registry
        .create_pool(usdc, weth, Maintenance::new(200_000), FeeTier::TIER_0_30_PERCENT)
        .expect("newly enabled tier is usable");

    // Hand governance to a new principal.
    let new_owner = Address::from_bytes([0xDD; 32]);
    registry.set_owner(owner, new_owner).expect("owner may transfer");

    println!("\nEvent log:");
    for event in registry.take_events() {
        match event {
            RegistryEvent::PoolCreated {
                maintenance, pool, ..
            } => println!("  PoolCreated: maintenance={maintenance} pool={:02x?}…", &pool.as_bytes()[..4]),
            RegistryEvent::LeverageEnabled {
                maintenance,
                leverage,
            } => println!("  LeverageEnabled: {maintenance} -> {leverage}"),
            RegistryEvent::OwnerChanged { new_owner, .. } => {
                println!("  OwnerChanged: -> {:02x?}…", &new_owner.as_bytes()[..4]);
            }
        }
    }
}
