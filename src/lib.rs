// Internal library for testing purposes
// Not intended for external use as a library

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod document;
pub mod domain;
pub mod error;
pub mod interpolate;
#[cfg(feature = "cli")]
pub mod telemetry;

pub use commands::{Reconstruction, RecoverOptions, decode_value, recover_secret};
pub use error::{MalformedReason, RecoverError};
