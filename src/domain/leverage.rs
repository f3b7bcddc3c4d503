//! Maximum leverage multiplier implied by a maintenance requirement.

use core::fmt;

use super::Maintenance;

/// Maximum leverage multiplier in fixed-point with scale 1e6
/// ([`SCALE`](Self::SCALE)): `6_000_000` means 6x.
///
/// A multiplier is always *derived* from its maintenance parameter, never
/// supplied by a caller:
///
/// ```text
/// leverage = SCALE + SCALE² / maintenance        (integer floor division)
/// ```
///
/// Deriving rather than storing caller input makes the leverage curve a
/// pure function of the risk parameter, so governance cannot register an
/// inconsistent risk/leverage pairing. A multiplier of zero is the
/// "disabled" sentinel in the curve and is not constructible through
/// derivation.
///
/// # Examples
///
/// ```
/// use leverpool::domain::{Leverage, Maintenance};
///
/// let lev = Leverage::from_maintenance(Maintenance::new(200_000))
///     .expect("non-zero maintenance");
/// assert_eq!(lev.get(), 6_000_000); // 20% maintenance -> 6x
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Leverage(u64);

impl Leverage {
    /// Fixed-point scale: `1_000_000` is 1x.
    pub const SCALE: u64 = 1_000_000;

    /// Creates a `Leverage` from a raw fixed-point value.
    ///
    /// Intended for tests and deserialization; curve entries always come
    /// from [`from_maintenance`](Self::from_maintenance).
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Derives the multiplier for a maintenance parameter.
    ///
    /// Returns `None` for zero maintenance, which has no defined leverage.
    #[must_use]
    pub const fn from_maintenance(maintenance: Maintenance) -> Option<Self> {
        let m = maintenance.get() as u64;
        if m == 0 {
            return None;
        }
        Some(Self(Self::SCALE + 1_000_000_000_000 / m))
    }

    /// Returns the underlying fixed-point value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` for the zero (disabled) multiplier.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Leverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}x", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
