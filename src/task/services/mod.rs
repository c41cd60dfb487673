//! Orchestration services for the task module.

mod catalog;

pub use catalog::{TaskCatalogError, TaskCatalogResult, TaskCatalogService};
