//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod common;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod paramset;
pub mod rng;
pub mod sampler;
