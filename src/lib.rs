//! # leverpool
//!
//! Registry, leverage governance, and passive-LP accounting for isolated
//! leveraged trading pools.
//!
//! This crate provides the deployment-and-indexing state machine for pools
//! keyed by an asset pair, a maintenance (risk) parameter, and a reference
//! price oracle, together with the read-only accounting that values a
//! liquidity provider's proportional claim on a pool's reserves.
//!
//! Three components:
//!
//! - [`LeverageCurve`](curve::LeverageCurve) — append-only table mapping a
//!   maintenance parameter to its implied maximum leverage; owns the
//!   governance invariants over which parameters may be activated.
//! - [`PoolRegistry`](registry::PoolRegistry) — deploys at most one pool
//!   per (unordered pair, maintenance, oracle) key, delegating actual
//!   instantiation and oracle resolution to collaborators.
//! - [`PositionAccountant`](accounting::PositionAccountant) — pure,
//!   read-only computation of a holder's proportional liquidity and
//!   underlying asset amounts from a pool-state snapshot.
//!
//! The swap, margin, and liquidation mechanics of the pools themselves are
//! external concerns reached through the [`traits`] seams; this crate
//! never implements them.
//!
//! # Quick Start
//!
//! ```rust
//! use leverpool::accounting::PositionAccountant;
//! use leverpool::curve::LeverageCurve;
//! use leverpool::domain::{Leverage, Liquidity, Maintenance, Shares};
//!
//! // The curve comes seeded with the three production tiers.
//! let mut curve = LeverageCurve::new();
//! assert_eq!(
//!     curve.leverage_for(Maintenance::M25),
//!     Some(Leverage::new(5_000_000)), // 5x
//! );
//!
//! // Activating a new tier derives its multiplier; 20% maintenance -> 6x.
//! let lev = curve.enable(Maintenance::new(200_000)).expect("fresh, in band");
//! assert_eq!(lev.get(), 6_000_000);
//!
//! // A holder with 250 of 1000 shares owns a quarter of pool liquidity.
//! let slice = PositionAccountant::proportional_liquidity(
//!     Liquidity::new(1_000),
//!     Shares::new(250),
//!     Shares::new(1_000),
//! )
//! .expect("holder has shares");
//! assert_eq!(slice, Liquidity::new(250));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  create_pool / enable_leverage / set_owner
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   validates maintenance   ┌───────────────┐
//! │ PoolRegistry  │──────────────────────────▶│ LeverageCurve │
//! └──────┬───────┘                           └───────────────┘
//!        │ resolve / deploy
//!        ▼
//! ┌──────────────────────────────┐
//! │ OracleSource + PoolDeployer   │  external collaborators
//! └──────────────────────────────┘
//!
//! ┌──────────────────┐  state snapshot  ┌──────────────────┐
//! │ PositionAccountant│◀────────────────│ PoolStateReader  │
//! └──────────────────┘                  └──────────────────┘
//! ```
//!
//! The registry path and the accounting path share no mutable state: the
//! accountant is a pure observer and can value positions against any pool
//! at any time.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Address`](domain::Address), [`Maintenance`](domain::Maintenance), [`Leverage`](domain::Leverage), [`PoolKey`](domain::PoolKey), … |
//! | [`traits`] | Collaborator seams: [`PoolDeployer`](traits::PoolDeployer), [`OracleSource`](traits::OracleSource), [`PoolStateReader`](traits::PoolStateReader) |
//! | [`config`] | [`RegistryConfig`](config::RegistryConfig) — oracle observation-depth floor |
//! | [`curve`]  | [`LeverageCurve`](curve::LeverageCurve) append-only activation table |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) and [`RegistryEvent`](registry::RegistryEvent) |
//! | [`accounting`] | [`PositionAccountant`](accounting::PositionAccountant) proportional valuation |
//! | [`math`]   | Checked arithmetic, full-precision `mul_div`, liquidity↔amount conversion |
//! | [`error`]  | [`RegistryError`](error::RegistryError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod accounting;
pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod registry;
pub mod traits;
