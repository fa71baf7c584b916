//! Samplers

#[macro_use]
extern crate log;

mod independent;

// Re-export.
pub use independent::*;
