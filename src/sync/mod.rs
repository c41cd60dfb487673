//! Client-side state reconciliation for board and calendar views.
//!
//! The view holds a flat, de-normalized task collection fetched from the
//! remote store; containers (board columns, calendar days) are projections
//! computed on every render, never separate mutable lists. Drag gestures
//! become optimistic single-field mutations: the local collection is
//! patched first, the write is persisted second, and a failed write is
//! recovered by discarding local state and re-fetching the authoritative
//! collection ("optimistic apply, pessimistic full-resync on failure").
//!
//! - Container mappings in [`containers`]
//! - View state and projection in [`view`]
//! - The drag coordinator in [`drag`]
//! - The remote store port in [`ports`], adapters in [`adapters`]

pub mod adapters;
pub mod containers;
pub mod drag;
pub mod ports;
pub mod view;

#[cfg(test)]
mod tests;
