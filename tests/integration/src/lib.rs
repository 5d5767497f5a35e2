//! Integration test utilities for TuneHub
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the realtime gateway over a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
