//! Library crate entry point.
//! Exposes the service modules for integration tests.
//! Production binary uses src/main.rs.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod telemetry;

#[cfg(test)]
mod test_support;
