//! Shared HTTP plumbing for campusmap services.
//!
//! Response envelope, health probes, request middleware, timestamp serialization, tracing
//! setup and the environment-backed configuration trait.

pub mod config;
pub mod envelope;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
