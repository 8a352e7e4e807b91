//! Error handling
//!
//! Defines error types and handling for the workbench.

pub mod types;

pub use types::*;
