//! Adapter implementations for the remote task store port.

mod http;

pub use http::HttpRemoteTaskStore;
