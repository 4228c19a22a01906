//! Test fixtures for ride-planner.
//!
//! Canned directions-service payloads and Istanbul trip endpoints for
//! driving the planner without a network.

pub mod istanbul;

pub use istanbul::*;
