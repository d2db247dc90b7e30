//! Feed access.

pub mod neows;

pub use neows::NeoWsClient;
