//! Task aggregate, catalog service, and persistence port for Corkboard.
//!
//! Tasks are the unit of work moved between board columns and calendar
//! days. The module follows hexagonal architecture:
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
