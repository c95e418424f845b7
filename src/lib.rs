// Internal library for the unshard binary and its tests
// Not intended for external use as a library

pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod interpolate;
pub mod screen;

pub use error::RecoveryError;
