//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (decimal-normalized, analytics-ready)
//! - `wire.rs`: Raw structs matching contract return tuples and event logs
//! - `convert.rs`: Conversions from wire shapes, given the decimal exponents
//! - `state.rs`: App-owned state containers with update methods

pub mod market;
pub mod position;
pub mod price_history;
