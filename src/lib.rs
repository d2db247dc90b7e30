//! Daily near-Earth-object feed, flattened to JSON.
//!
//! Stages run strictly in order: [`config`] builds the request, [`data`]
//! fetches the day, [`mapper`] flattens each object and [`io`] writes the
//! result. All of them return [`error::AppError`]; only the `neo` binary turns
//! an error into an exit status.

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod mapper;
