//! Append-only leverage activation table.

use std::collections::BTreeMap;

use crate::domain::{Leverage, Maintenance};
use crate::error::{RegistryError, Result};

/// Mapping from maintenance requirement to its implied maximum leverage.
///
/// The curve governs which maintenance parameters may be used for pool
/// creation. It is **append-only**: entries are activated, never disabled
/// or overwritten, so a pool keyed to a maintenance value can rely on its
/// leverage entry forever. The map is private and [`enable`](Self::enable)
/// is the only inserting operation, which makes the invariant structural
/// rather than conventional.
///
/// Multipliers are derived from the maintenance value
/// ([`Leverage::from_maintenance`]), never caller-supplied.
///
/// # Examples
///
/// ```
/// use leverpool::curve::LeverageCurve;
/// use leverpool::domain::{Leverage, Maintenance};
///
/// let mut curve = LeverageCurve::new();
/// assert!(curve.is_enabled(Maintenance::M25)); // seeded
///
/// let lev = curve.enable(Maintenance::new(200_000)).expect("in band, fresh");
/// assert_eq!(lev, Leverage::new(6_000_000)); // 6x
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeverageCurve {
    entries: BTreeMap<Maintenance, Leverage>,
}

impl LeverageCurve {
    /// The production tiers activated at initialization:
    /// 25% (5x), 50% (3x), and 100% (2x).
    pub const SEED_TIERS: [Maintenance; 3] =
        [Maintenance::M25, Maintenance::M50, Maintenance::M100];

    /// Creates a curve seeded with [`SEED_TIERS`](Self::SEED_TIERS).
    ///
    /// Seeding derives each multiplier with the standard formula but is
    /// not subject to the runtime governance band — 100% maintenance sits
    /// on the band's exclusive upper bound and exists only as a seed.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        for maintenance in Self::SEED_TIERS {
            if let Some(leverage) = Leverage::from_maintenance(maintenance) {
                entries.insert(maintenance, leverage);
            }
        }
        Self { entries }
    }

    /// Returns the leverage multiplier for a maintenance value, or `None`
    /// if the value has not been enabled.
    #[must_use]
    pub fn leverage_for(&self, maintenance: Maintenance) -> Option<Leverage> {
        self.entries.get(&maintenance).copied()
    }

    /// Returns `true` if the maintenance value is usable for pool
    /// creation.
    #[must_use]
    pub fn is_enabled(&self, maintenance: Maintenance) -> bool {
        self.entries.contains_key(&maintenance)
    }

    /// Activates a maintenance value, deriving and storing its multiplier.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidMaintenance`] if the value is outside the
    ///   governance band `[100_000, 1_000_000)`.
    /// - [`RegistryError::AlreadyEnabled`] if the value already has an
    ///   entry; existing entries are never overwritten.
    pub fn enable(&mut self, maintenance: Maintenance) -> Result<Leverage> {
        if !maintenance.in_governance_band() {
            return Err(RegistryError::InvalidMaintenance(
                "maintenance outside the governance band",
            ));
        }
        if self.entries.contains_key(&maintenance) {
            return Err(RegistryError::AlreadyEnabled);
        }
        let Some(leverage) = Leverage::from_maintenance(maintenance) else {
            // Band membership implies non-zero maintenance.
            return Err(RegistryError::InvalidMaintenance("maintenance is zero"));
        };
        self.entries.insert(maintenance, leverage);
        Ok(leverage)
    }

    /// Iterates over the enabled `(maintenance, leverage)` entries in
    /// ascending maintenance order.
    pub fn tiers(&self) -> impl Iterator<Item = (Maintenance, Leverage)> + '_ {
        self.entries.iter().map(|(m, l)| (*m, *l))
    }

    /// Returns the number of enabled entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are enabled.
    ///
    /// Never true for a curve built by [`new`](Self::new).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LeverageCurve {
    fn default() -> Self {
        Self::new()
    }
}
