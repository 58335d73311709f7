//! Library components of the ONS pipeline CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
