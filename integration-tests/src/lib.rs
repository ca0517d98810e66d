//! Shared scenarios for cross-crate tests.

pub mod scenarios;
