//! Board aggregate, desk service, and persistence port for Corkboard.
//!
//! Boards group tasks into ordered columns and carry the owner/member
//! access rule. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
