//! Session context and session resolution for Corkboard.
//!
//! The original application relied on an ambient session provider; here the
//! session is an explicit context object acquired once at the request
//! boundary and passed read-only into services. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
