//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw feed shapes as they arrive over the wire (`FeedResponse`, `RawNeoObject`, ...)
//! - the flat output record (`NormalizedRecord`)

pub mod types;

pub use types::*;
