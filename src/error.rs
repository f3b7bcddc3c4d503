//! Unified error types for the pool registry and accounting library.
//!
//! All fallible operations across the crate return [`RegistryError`] as
//! their error type, ensuring a consistent error handling experience for
//! consumers. Variants carry a `&'static str` context message where the
//! same variant can arise from more than one check.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RegistryError>;

/// Unified error enum for registry, curve, and accounting operations.
///
/// Every rejected mutating call leaves state exactly as it was before the
/// call; errors are surfaced immediately and never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the current registry owner.
    Unauthorized,

    /// A token address is unusable (e.g. a pair of identical addresses).
    InvalidToken(&'static str),

    /// Maintenance parameter outside the governance band, or not enabled
    /// for pool creation.
    InvalidMaintenance(&'static str),

    /// Maintenance parameter already has an active leverage entry; the
    /// curve is append-only and entries are never re-parameterized.
    AlreadyEnabled,

    /// A pool already exists for the canonical key.
    PoolActive,

    /// No oracle exists for the pair and fee tier.
    InvalidOracle(&'static str),

    /// The oracle's historical observation depth is below the configured
    /// minimum.
    InvalidObservationCardinality {
        /// Depth reported by the oracle.
        observed: u16,
        /// Minimum required by the registry configuration.
        minimum: u16,
    },

    /// Pool deployment failed in the deployer collaborator.
    DeployFailed(&'static str),

    /// Holder has no shares; there is nothing to report.
    NoPosition,

    /// Position queried against a pool that has not been initialized.
    PoolUninitialized,

    /// Upstream pool state violates an invariant (e.g. zero total share
    /// supply alongside outstanding balances).
    InvalidPoolState(&'static str),

    /// A square-root price is out of its representable range.
    InvalidPrice(&'static str),

    /// Arithmetic overflow.
    Overflow(&'static str),

    /// Arithmetic underflow.
    Underflow(&'static str),

    /// Division by zero.
    DivisionByZero,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "caller is not the registry owner"),
            Self::InvalidToken(msg) => write!(f, "invalid token: {msg}"),
            Self::InvalidMaintenance(msg) => write!(f, "invalid maintenance: {msg}"),
            Self::AlreadyEnabled => write!(f, "leverage already enabled for maintenance"),
            Self::PoolActive => write!(f, "pool already exists for key"),
            Self::InvalidOracle(msg) => write!(f, "invalid oracle: {msg}"),
            Self::InvalidObservationCardinality { observed, minimum } => write!(
                f,
                "oracle observation cardinality {observed} below minimum {minimum}"
            ),
            Self::DeployFailed(msg) => write!(f, "pool deployment failed: {msg}"),
            Self::NoPosition => write!(f, "holder has no share balance"),
            Self::PoolUninitialized => write!(f, "pool is not initialized"),
            Self::InvalidPoolState(msg) => write!(f, "invalid pool state: {msg}"),
            Self::InvalidPrice(msg) => write!(f, "invalid price: {msg}"),
            Self::Overflow(msg) => write!(f, "overflow: {msg}"),
            Self::Underflow(msg) => write!(f, "underflow: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RegistryError {}
