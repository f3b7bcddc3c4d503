//! Property-based tests using `proptest` for registry, curve, and
//! accounting invariants.
//!
//! Covered properties:
//!
//! 1. **Leverage formula exactness** — `1e6 + 1e12 / m` over the whole
//!    governance band.
//! 2. **Append-only activation** — a second enable always fails and never
//!    disturbs the stored multiplier.
//! 3. **Order-independent keys** — creation and lookup agree for both
//!    token orderings.
//! 4. **Proportional claim bounds** — a holder's slice never exceeds the
//!    total and is monotone in shares.
//! 5. **Full-precision mul_div** — agrees with naive arithmetic whenever
//!    the naive product fits, and cancels exactly at 256-bit widths.
//! 6. **Unit-price conversion** — at price 1.0 both reserves equal the
//!    liquidity.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::accounting::PositionAccountant;
use crate::config::RegistryConfig;
use crate::curve::LeverageCurve;
use crate::domain::{
    Address, FeeTier, Leverage, Liquidity, Maintenance, PoolKey, Rounding, Shares, SqrtPriceX96,
    TokenPair,
};
use crate::error::{RegistryError, Result};
use crate::math::{amounts_for_liquidity, mul_div};
use crate::registry::PoolRegistry;
use crate::traits::{OracleSource, PoolDeployer};

// ---------------------------------------------------------------------------
// Mock collaborators
// ---------------------------------------------------------------------------

struct SequenceDeployer(u64);

impl PoolDeployer for SequenceDeployer {
    fn deploy(&mut self, _key: &PoolKey) -> Result<Address> {
        self.0 += 1;
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&self.0.to_be_bytes());
        Ok(Address::from_bytes(bytes))
    }
}

struct AlwaysOracle;

impl OracleSource for AlwaysOracle {
    fn resolve(&self, _pair: &TokenPair, _fee: FeeTier) -> Option<Address> {
        Some(Address::from_bytes([0xAB; 32]))
    }

    fn observation_cardinality(&self, _oracle: Address) -> u16 {
        u16::MAX
    }
}

fn fresh_registry() -> PoolRegistry<SequenceDeployer, AlwaysOracle> {
    PoolRegistry::new(
        SequenceDeployer(0),
        AlwaysOracle,
        RegistryConfig::default(),
        Address::from_bytes([0xEE; 32]),
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]

    #[test]
    fn leverage_formula_exact(m in 100_000u32..1_000_000) {
        let Some(lev) = Leverage::from_maintenance(Maintenance::new(m)) else {
            panic!("derivation must succeed in band");
        };
        prop_assert_eq!(lev.get(), 1_000_000 + 1_000_000_000_000 / u64::from(m));
    }

    #[test]
    fn enable_is_append_only(m in 100_000u32..1_000_000) {
        let mut curve = LeverageCurve::new();
        let maintenance = Maintenance::new(m);
        match curve.enable(maintenance) {
            Ok(lev) => {
                prop_assert_eq!(curve.enable(maintenance), Err(RegistryError::AlreadyEnabled));
                prop_assert_eq!(curve.leverage_for(maintenance), Some(lev));
            }
            // Only the in-band seeded tiers collide.
            Err(e) => {
                prop_assert_eq!(e, RegistryError::AlreadyEnabled);
                prop_assert!(maintenance == Maintenance::M25 || maintenance == Maintenance::M50);
            }
        }
    }

    #[test]
    fn create_pool_order_independent(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        prop_assume!(a != b);
        let (ta, tb) = (Address::from_bytes(a), Address::from_bytes(b));
        let fee = FeeTier::TIER_0_30_PERCENT;
        let oracle = Address::from_bytes([0xAB; 32]);

        let mut forward = fresh_registry();
        let mut reverse = fresh_registry();
        let Ok(p1) = forward.create_pool(ta, tb, Maintenance::M25, fee) else {
            panic!("forward creation must succeed");
        };
        let Ok(p2) = reverse.create_pool(tb, ta, Maintenance::M25, fee) else {
            panic!("reverse creation must succeed");
        };
        prop_assert_eq!(p1, p2);

        // Both orderings resolve the same record, in both registries.
        prop_assert_eq!(forward.pool(ta, tb, Maintenance::M25, oracle), Some(p1));
        prop_assert_eq!(forward.pool(tb, ta, Maintenance::M25, oracle), Some(p1));
        prop_assert_eq!(reverse.pool(ta, tb, Maintenance::M25, oracle), Some(p2));

        // And the second creation of the same unordered key fails.
        prop_assert_eq!(
            forward.create_pool(tb, ta, Maintenance::M25, fee),
            Err(RegistryError::PoolActive)
        );
    }

    #[test]
    fn proportional_claim_bounded(
        total in 0u128..=u128::MAX,
        supply in 1u128..=u128::MAX,
        shares in 1u128..=u128::MAX,
    ) {
        prop_assume!(shares <= supply);
        let Ok(slice) = PositionAccountant::proportional_liquidity(
            Liquidity::new(total),
            Shares::new(shares),
            Shares::new(supply),
        ) else {
            panic!("claim must compute");
        };
        prop_assert!(slice.get() <= total);
        if shares == supply {
            prop_assert_eq!(slice.get(), total);
        }
    }

    #[test]
    fn proportional_claim_monotone(
        total in 0u128..=u128::MAX,
        supply in 2u128..=u128::MAX,
        small in 1u128..=u128::MAX,
        large in 1u128..=u128::MAX,
    ) {
        prop_assume!(small < large && large <= supply);
        let (Ok(lo), Ok(hi)) = (
            PositionAccountant::proportional_liquidity(
                Liquidity::new(total),
                Shares::new(small),
                Shares::new(supply),
            ),
            PositionAccountant::proportional_liquidity(
                Liquidity::new(total),
                Shares::new(large),
                Shares::new(supply),
            ),
        ) else {
            panic!("claims must compute");
        };
        prop_assert!(lo <= hi);
    }

    #[test]
    fn mul_div_matches_naive_when_product_fits(
        a in 0u128..=u64::MAX as u128,
        b in 0u128..=u64::MAX as u128,
        d in 1u128..=u64::MAX as u128,
    ) {
        let Ok(q) = mul_div(a, b, d, Rounding::Down) else {
            panic!("product fits, quotient fits");
        };
        prop_assert_eq!(q, a * b / d);
    }

    #[test]
    fn mul_div_self_cancellation(a in 0u128..=u128::MAX, d in 1u128..=u128::MAX) {
        // (a * d) / d == a even when the product needs 256 bits.
        let Ok(q) = mul_div(a, d, d, Rounding::Down) else {
            panic!("cancellation must fit");
        };
        prop_assert_eq!(q, a);
    }

    #[test]
    fn unit_price_amounts_equal_liquidity(l in 0u128..=u128::MAX) {
        let Ok((a0, a1)) = amounts_for_liquidity(Liquidity::new(l), SqrtPriceX96::one()) else {
            panic!("unit price conversion must fit");
        };
        prop_assert_eq!(a0.get(), l);
        prop_assert_eq!(a1.get(), l);
    }
}
