//! Corkboard: Kanban-style task and board management engine.
//!
//! This crate provides the core functionality for managing task boards:
//! authentication-gated CRUD services over task and board aggregates, an
//! HTTP API exposing them, and the client-side view state plus drag
//! coordinator that keeps optimistic local mutations reconciled with the
//! authoritative store.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, HTTP)
//!
//! # Modules
//!
//! - [`auth`]: Explicit session context and session resolution
//! - [`task`]: Task aggregate, catalog service, and persistence port
//! - [`board`]: Board aggregate, desk service, and persistence port
//! - [`sync`]: Client-side container projection and drag reconciliation
//! - [`api`]: HTTP route handlers and error mapping

pub mod api;
pub mod auth;
pub mod board;
pub mod sync;
pub mod task;
