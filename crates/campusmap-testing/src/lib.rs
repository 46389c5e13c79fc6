//! Test utilities for campusmap services.
//!
//! Provides an in-memory migrated database, a JSON fixture loader and a stub
//! NEIS directory server. Use from dev-dependencies only.

pub mod db;
pub mod fixture;
pub mod upstream;
