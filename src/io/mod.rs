//! Output helpers.

pub mod emit;

pub use emit::*;
