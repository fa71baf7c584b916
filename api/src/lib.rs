//! The API

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod registry;

// Re-export.
pub use registry::*;
