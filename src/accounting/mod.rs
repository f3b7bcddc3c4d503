//! Read-only valuation of passive LP positions.

mod accountant;

pub use accountant::{PositionAccountant, PositionValue};
