//! Core traits and numeric constraints for sluice gate discharge modeling.

pub mod constraint;
mod model;

pub use model::Model;
